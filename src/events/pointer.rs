use crate::dom::{self, EventListener};
use folio_core::{HoverMotion, MagneticOffset, PointerGlowTracker};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::Event) -> Option<DVec2> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    Some(DVec2::new(ev.client_x() as f64, ev.client_y() as f64))
}

/// Track the pointer over `root` as percentages of its bounds.
pub fn wire_glow(root: &web::HtmlElement, glow: Rc<RefCell<PointerGlowTracker>>) -> EventListener {
    let root_el = root.clone();
    EventListener::new(root, "pointermove", move |ev| {
        let Some(client) = client_pos(&ev) else {
            return;
        };
        let rect = dom::rect_of(&root_el);
        // not laid out yet; keep the previous origin
        _ = glow.borrow_mut().on_pointer_move(client, rect);
    })
}

/// Pull `el` toward the pointer while hovered and release it on leave.
pub fn wire_magnetic(
    el: &web::Element,
    magnet: Rc<RefCell<MagneticOffset>>,
) -> [EventListener; 2] {
    let el_move = el.clone();
    let magnet_move = magnet.clone();
    let on_move = EventListener::new(el, "pointermove", move |ev| {
        let Some(client) = client_pos(&ev) else {
            return;
        };
        let rect = dom::rect_of(&el_move);
        _ = magnet_move.borrow_mut().on_pointer_move(client, rect);
    });

    let on_leave = EventListener::new(el, "pointerleave", move |_ev| {
        magnet.borrow_mut().on_pointer_leave();
    });

    [on_move, on_leave]
}

/// Drive `hover` between its resting and hovered pose.
pub fn wire_hover(el: &web::Element, hover: Rc<RefCell<HoverMotion>>) -> [EventListener; 2] {
    let hover_enter = hover.clone();
    let on_enter = EventListener::new(el, "pointerenter", move |_ev| {
        hover_enter.borrow_mut().on_pointer_enter();
    });
    let on_leave = EventListener::new(el, "pointerleave", move |_ev| {
        hover.borrow_mut().on_pointer_leave();
    });
    [on_enter, on_leave]
}
