use crate::constants::{MAX_FRAME_DT_SEC, MIN_FRAME_DT_SEC};
use crate::dom;
use folio_core::{
    style, visible_fraction, Drift, HoverMotion, MagneticOffset, PathDrift, PointerGlowTracker,
    Reveal,
};
use folio_core::ScrollProgressMapper;
use instant::Instant;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct MagnetTarget {
    pub element: web::Element,
    pub offset: Rc<RefCell<MagneticOffset>>,
}

/// An entrance reveal, optionally with a hover lift sharing its transform.
pub struct RevealTarget {
    pub element: web::Element,
    pub reveal: Reveal,
    pub hover: Option<Rc<RefCell<HoverMotion>>>,
}

/// Hover motion on an element without an entrance reveal.
pub struct HoverTarget {
    pub element: web::Element,
    pub hover: Rc<RefCell<HoverMotion>>,
}

pub struct DriftTarget {
    pub element: web::Element,
    pub drift: Drift,
}

pub struct PathTarget {
    pub element: web::Element,
    pub path: PathDrift,
}

pub struct FrameContext {
    pub glow: Rc<RefCell<PointerGlowTracker>>,
    pub glow_layer: Option<web::HtmlElement>,

    pub progress: ScrollProgressMapper,
    pub progress_bar: Option<web::HtmlElement>,

    pub magnets: SmallVec<[MagnetTarget; 4]>,
    pub reveals: Vec<RevealTarget>,
    pub hovers: Vec<HoverTarget>,
    pub drifts: SmallVec<[DriftTarget; 4]>,
    pub paths: SmallVec<[PathTarget; 2]>,

    // set by scroll/resize listeners; reveal targets are re-measured when true
    pub layout_dirty: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant)
            .as_secs_f64()
            .clamp(MIN_FRAME_DT_SEC, MAX_FRAME_DT_SEC);
        self.last_instant = now;

        if let Some(pos) = self.glow.borrow_mut().take_changed() {
            if let Some(layer) = &self.glow_layer {
                dom::set_style(layer, "background-image", &style::glow_gradient(pos));
            }
        }

        if let Some(p) = self.progress.tick(dt) {
            if let Some(bar) = &self.progress_bar {
                dom::set_style(bar, "transform", &style::progress_transform(p));
            }
        }

        for m in &self.magnets {
            let mut offset = m.offset.borrow_mut();
            if offset.is_at_rest() && offset.offset() == offset.target() {
                continue;
            }
            let pull = offset.tick(dt);
            dom::set_style(
                &m.element,
                "transform",
                &style::magnetic_transform(pull, offset.scale()),
            );
        }

        self.update_reveals(dt);

        for h in &self.hovers {
            let mut hover = h.hover.borrow_mut();
            if hover.is_at_rest() {
                continue;
            }
            hover.tick(dt);
            drop(hover);
            paint_hover(h);
        }

        for d in &mut self.drifts {
            let f = d.drift.tick(dt);
            dom::set_style(&d.element, "transform", &style::drift_transform(f));
        }

        for p in &mut self.paths {
            let f = p.path.tick(dt);
            dom::set_style(&p.element, "stroke-dasharray", &style::dash_array(f));
            dom::set_style(&p.element, "stroke-dashoffset", &style::dash_offset(f));
        }
    }

    fn update_reveals(&mut self, dt: f64) {
        if self.layout_dirty.replace(false) {
            let viewport = web::window().as_ref().and_then(dom::viewport_size);
            if let Some((vw, vh)) = viewport {
                for r in self.reveals.iter_mut().filter(|r| r.reveal.wants_visibility()) {
                    let visible = visible_fraction(dom::rect_of(&r.element), vw, vh);
                    if r.reveal.observe(visible) {
                        paint_reveal(r);
                    }
                }
            }
        }
        for r in &mut self.reveals {
            let revealing = r.reveal.tick(dt);
            let hovering = match &r.hover {
                Some(h) => {
                    let mut h = h.borrow_mut();
                    let moving = !h.is_at_rest();
                    if moving {
                        h.tick(dt);
                    }
                    moving
                }
                None => false,
            };
            if revealing || hovering {
                paint_reveal(r);
            }
        }
    }
}

pub fn paint_reveal(r: &RevealTarget) {
    let mut f = r.reveal.sample();
    if let Some(h) = &r.hover {
        f = f.with_hover(h.borrow().frame());
    }
    dom::set_style(&r.element, "opacity", &style::opacity_value(f.opacity));
    dom::set_style(&r.element, "transform", &style::translate_transform(f.offset));
}

pub fn paint_hover(h: &HoverTarget) {
    let f = h.hover.borrow().frame();
    dom::set_style(&h.element, "opacity", &style::opacity_value(f.opacity));
    dom::set_style(&h.element, "transform", &style::translate_transform(f.offset));
}

/// `requestAnimationFrame` loop; dropping it cancels the pending frame and
/// releases the frame context.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let pending = Rc::new(Cell::new(None::<i32>));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    // The closure only holds a weak handle to itself; `FrameLoop` owns the strong one.
    let tick_weak = Rc::downgrade(&tick);
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(tick) = tick_weak.upgrade() {
            pending_tick.set(request_frame(&tick));
        }
    }) as Box<dyn FnMut()>));

    pending.set(request_frame(&tick));
    FrameLoop {
        running,
        pending,
        tick,
    }
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
