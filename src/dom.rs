use folio_core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Elements matching `selector`, HTML and SVG alike.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Inline style write for HTML and SVG elements; other elements are skipped.
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    let style = if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        html.style()
    } else if let Some(svg) = el.dyn_ref::<web::SvgElement>() {
        svg.style()
    } else {
        return;
    };
    _ = style.set_property(property, value);
}

/// Attribute getter in the shape `folio_core` parsers expect.
pub fn attr_getter(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |name| el.get_attribute(name)
}

/// Inner viewport size in CSS px.
pub fn viewport_size(window: &web::Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// `(scroll_y, scroll_height, viewport_height)` for the document.
pub fn scroll_metrics(window: &web::Window) -> Option<(f64, f64, f64)> {
    let scroll_y = window.scroll_y().ok()?;
    let root = window.document()?.document_element()?;
    let (_, viewport_h) = viewport_size(window)?;
    Some((scroll_y, root.scroll_height() as f64, viewport_h))
}

/// A DOM event listener that is removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::error!("add {kind} listener error: {:?}", e);
        }
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, callback);
    }
}
