#![cfg(target_arch = "wasm32")]
use crate::constants::{
    DRIFT_PATH_SELECTOR, DRIFT_SELECTOR, GLOW_LAYER_ID, HOVER_ATTR, HOVER_SELECTOR,
    MAGNETIC_SELECTOR, MAGNETIC_STRENGTH_ATTR, MAGNETIC_STRENGTH_MAX, MAGNETIC_STRENGTH_MIN,
    POINTER_ROOT_SELECTOR, PROGRESS_BAR_ID, REVEAL_ATTR, REVEAL_SELECTOR,
};
use folio_core::attrs::parse_in_range;
use folio_core::constants::MAGNETIC_STRENGTH;
use folio_core::{
    Drift, HoverMotion, HoverSpec, MagneticOffset, PathDrift, PointerGlowTracker, Reveal,
    RevealSpec, ScrollProgressMapper, ScrollProgressSource, SpringConfig,
};
use instant::Instant;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;

/// Everything attached to the page. Dropping it removes every listener and
/// stops the frame loop.
struct Site {
    _listeners: Vec<dom::EventListener>,
    _frame_loop: frame::FrameLoop,
    _scroll: ScrollProgressSource,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match init() {
        Ok(site) => SITE.with(|s| *s.borrow_mut() = Some(site)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Detach the motion layer (e.g. before a client-side navigation replaces the page).
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|s| s.borrow_mut().take());
    if site.is_some() {
        drop(site);
        log::info!("folio-web detached");
    }
}

fn init() -> anyhow::Result<Site> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut listeners = Vec::new();

    // Cursor glow
    let glow = Rc::new(RefCell::new(PointerGlowTracker::new()));
    let glow_layer = dom::html_by_id(&document, GLOW_LAYER_ID);
    if glow_layer.is_none() {
        log::warn!("missing #{GLOW_LAYER_ID}; cursor glow disabled");
    }
    match document
        .query_selector(POINTER_ROOT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        Some(root) => listeners.push(events::wire_glow(&root, glow.clone())),
        None => log::warn!("missing {POINTER_ROOT_SELECTOR}; glow stays centred"),
    }

    // Scroll progress
    let scroll = ScrollProgressSource::new();
    let layout_dirty = Rc::new(Cell::new(true));
    listeners.extend(events::wire_scroll(&window, &scroll, layout_dirty.clone()));
    let progress = ScrollProgressMapper::attach_with(&scroll, SpringConfig::SCROLL_PROGRESS);
    let progress_bar = dom::html_by_id(&document, PROGRESS_BAR_ID);
    match &progress_bar {
        // the mapper idles until the next scroll, so paint where it starts
        Some(bar) => dom::set_style(
            bar,
            "transform",
            &folio_core::style::progress_transform(progress.value()),
        ),
        None => log::warn!("missing #{PROGRESS_BAR_ID}; progress bar disabled"),
    }

    // Magnetic buttons
    let mut magnets: SmallVec<[frame::MagnetTarget; 4]> = SmallVec::new();
    for el in dom::query_all(&document, MAGNETIC_SELECTOR) {
        let strength = magnetic_strength(&el);
        let offset = Rc::new(RefCell::new(MagneticOffset::new(
            SpringConfig::MAGNETIC,
            strength,
        )));
        listeners.extend(events::wire_magnetic(&el, offset.clone()));
        magnets.push(frame::MagnetTarget {
            element: el,
            offset,
        });
    }

    // Entrance reveals, painted hidden right away so nothing flashes before the first frame.
    // A hover lift on the same element shares its transform.
    let reveals: Vec<frame::RevealTarget> = dom::query_all(&document, REVEAL_SELECTOR)
        .into_iter()
        .map(|el| {
            let spec = RevealSpec::from_attrs(dom::attr_getter(&el)).unwrap_or_else(|e| {
                log::warn!("[reveal] {e}; using defaults");
                RevealSpec::default()
            });
            let hover = el
                .has_attribute(HOVER_ATTR)
                .then(|| wire_hover_motion(&el, &mut listeners));
            let target = frame::RevealTarget {
                element: el,
                reveal: Reveal::new(spec),
                hover,
            };
            frame::paint_reveal(&target);
            target
        })
        .collect();

    // Hover-only elements; magnets already own their transform
    let hovers: Vec<frame::HoverTarget> = dom::query_all(&document, HOVER_SELECTOR)
        .into_iter()
        .filter(|el| !el.has_attribute(REVEAL_ATTR))
        .filter(|el| {
            let magnetic = el.has_attribute(MAGNETIC_STRENGTH_ATTR);
            if magnetic {
                log::warn!("[hover] ignored on magnetic element");
            }
            !magnetic
        })
        .map(|el| {
            let hover = wire_hover_motion(&el, &mut listeners);
            let target = frame::HoverTarget { element: el, hover };
            frame::paint_hover(&target);
            target
        })
        .collect();

    // Backdrop drift
    let mut drifts: SmallVec<[frame::DriftTarget; 4]> = SmallVec::new();
    for el in dom::query_all(&document, DRIFT_SELECTOR) {
        match Drift::from_attrs(dom::attr_getter(&el)) {
            Ok(drift) if !drift.is_empty() => drifts.push(frame::DriftTarget { element: el, drift }),
            Ok(_) => log::warn!("[drift] element without keyframes ignored"),
            Err(e) => log::warn!("[drift] {e}; element ignored"),
        }
    }

    // Line-drawn signal paths
    let mut paths: SmallVec<[frame::PathTarget; 2]> = SmallVec::new();
    for el in dom::query_all(&document, DRIFT_PATH_SELECTOR) {
        match PathDrift::from_attrs(dom::attr_getter(&el)) {
            Ok(path) if !path.is_empty() => {
                // dash lengths are fractions of the path
                _ = el.set_attribute("pathLength", "1");
                paths.push(frame::PathTarget { element: el, path });
            }
            Ok(_) => log::warn!("[drift] path without keyframes ignored"),
            Err(e) => log::warn!("[drift] {e}; path ignored"),
        }
    }

    log::info!(
        "[init] magnets={} reveals={} hovers={} drifts={} paths={} listeners={}",
        magnets.len(),
        reveals.len(),
        hovers.len(),
        drifts.len(),
        paths.len(),
        listeners.len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        glow,
        glow_layer,
        progress,
        progress_bar,
        magnets,
        reveals,
        hovers,
        drifts,
        paths,
        layout_dirty,
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Site {
        _listeners: listeners,
        _frame_loop: frame_loop,
        _scroll: scroll,
    })
}

fn wire_hover_motion(
    el: &web::Element,
    listeners: &mut Vec<dom::EventListener>,
) -> Rc<RefCell<HoverMotion>> {
    let spec = HoverSpec::from_attrs(dom::attr_getter(el)).unwrap_or_else(|e| {
        log::warn!("[hover] {e}; element stays put");
        HoverSpec::default()
    });
    let hover = Rc::new(RefCell::new(HoverMotion::new(spec)));
    listeners.extend(events::wire_hover(el, hover.clone()));
    hover
}

fn magnetic_strength(el: &web::Element) -> f64 {
    match el.get_attribute(MAGNETIC_STRENGTH_ATTR) {
        Some(raw) if !raw.trim().is_empty() => parse_in_range(
            MAGNETIC_STRENGTH_ATTR,
            &raw,
            MAGNETIC_STRENGTH_MIN,
            MAGNETIC_STRENGTH_MAX,
        )
        .unwrap_or_else(|e| {
            log::warn!("[magnetic] {e}; using {MAGNETIC_STRENGTH}");
            MAGNETIC_STRENGTH
        }),
        _ => MAGNETIC_STRENGTH,
    }
}
