use crate::dom::{self, EventListener};
use folio_core::{scroll_progress, ScrollProgressSource};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Push the document's current scroll fraction into `source`.
///
/// Pages shorter than the viewport have nothing to scroll; the source keeps its
/// previous value then.
pub fn sample_scroll(window: &web::Window, source: &ScrollProgressSource) {
    if let Some((y, height, viewport_h)) = dom::scroll_metrics(window) {
        if let Some(p) = scroll_progress(y, height, viewport_h) {
            source.set(p);
        }
    }
}

/// Listen for scroll and resize on `window`. Both resample progress and mark
/// element layout as stale so the frame loop re-measures reveal targets.
pub fn wire_scroll(
    window: &web::Window,
    source: &ScrollProgressSource,
    layout_dirty: Rc<Cell<bool>>,
) -> [EventListener; 2] {
    sample_scroll(window, source);

    let make = |kind: &'static str| {
        let window_cb = window.clone();
        let source_cb = source.clone();
        let dirty = layout_dirty.clone();
        EventListener::new(window, kind, move |_ev| {
            sample_scroll(&window_cb, &source_cb);
            dirty.set(true);
        })
    };

    [make("scroll"), make("resize")]
}
