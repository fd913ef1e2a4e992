pub mod pointer;
pub mod scroll;

pub use pointer::{wire_glow, wire_hover, wire_magnetic};
pub use scroll::wire_scroll;
