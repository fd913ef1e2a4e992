//! Scroll progress: a clamped `[0, 1]` source with listeners, and a spring-smoothed
//! mapper that follows it until torn down.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), matching the browser
//! main thread it runs on.

use crate::spring::{Spring, SpringConfig};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(f64)>;
type ListenerMap = RefCell<FnvHashMap<u64, Listener>>;

/// Vertical scroll position as a fraction of the scrollable distance.
///
/// Returns `None` when nothing can scroll (content no taller than the viewport,
/// or bogus metrics), so callers skip the update rather than divide by zero.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Option<f64> {
    let distance = scroll_height - viewport_height;
    if !(scroll_y.is_finite() && distance.is_finite()) || distance <= 0.0 {
        return None;
    }
    Some((scroll_y / distance).clamp(0.0, 1.0))
}

/// Global scroll-progress value that notifies subscribers on every change.
///
/// Cloning yields another handle to the same source.
#[derive(Clone, Default)]
pub struct ScrollProgressSource {
    inner: Rc<SourceInner>,
}

#[derive(Default)]
struct SourceInner {
    latest: Cell<f64>,
    next_id: Cell<u64>,
    listeners: ListenerMap,
    // subscriptions dropped while listeners were running
    dropped: RefCell<SmallVec<[u64; 2]>>,
}

impl SourceInner {
    fn remove_dropped(&self) {
        loop {
            let Some(id) = self.dropped.borrow_mut().pop() else {
                return;
            };
            let removed = self.listeners.borrow_mut().remove(&id);
            drop(removed);
        }
    }
}

impl ScrollProgressSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.inner.latest.get()
    }

    /// Store `raw` clamped to `[0, 1]` and notify listeners. NaN is ignored.
    ///
    /// A listener may drop any [`Subscription`] of this source, its own
    /// included; the dropped listener is not called again. Listeners must not
    /// call `set`, `subscribe` or `subscriber_count` on the same source.
    pub fn set(&self, raw: f64) {
        if raw.is_nan() {
            return;
        }
        let value = raw.clamp(0.0, 1.0);
        if value == self.inner.latest.get() {
            return;
        }
        self.inner.latest.set(value);
        {
            let mut listeners = self.inner.listeners.borrow_mut();
            for (id, listener) in listeners.iter_mut() {
                if self.inner.dropped.borrow().contains(id) {
                    continue;
                }
                listener(value);
            }
        }
        self.inner.remove_dropped();
    }

    /// Register `listener`; it stays registered until the returned guard drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .insert(id, Box::new(listener));
        Subscription {
            source: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Unsubscribes from a [`ScrollProgressSource`] on drop.
pub struct Subscription {
    source: Weak<SourceInner>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.source.upgrade() else {
            return;
        };
        // `set` holds the map while notifying; it removes the entry afterwards
        let removed = match inner.listeners.try_borrow_mut() {
            Ok(mut listeners) => listeners.remove(&self.id),
            Err(_) => {
                inner.dropped.borrow_mut().push(self.id);
                None
            }
        };
        // the listener may own further subscriptions; drop it with the map released
        drop(removed);
    }
}

/// Spring-smoothed follower of a [`ScrollProgressSource`].
pub struct ScrollProgressMapper {
    spring: Rc<RefCell<Spring>>,
    subscription: Option<Subscription>,
}

impl ScrollProgressMapper {
    pub fn attach(source: &ScrollProgressSource) -> Self {
        Self::attach_with(source, SpringConfig::SCROLL_PROGRESS)
    }

    /// Starts at the source's current value so a reload mid-page does not sweep
    /// the bar up from zero.
    pub fn attach_with(source: &ScrollProgressSource, config: SpringConfig) -> Self {
        let spring = Rc::new(RefCell::new(Spring::new(source.get(), config)));
        let weak = Rc::downgrade(&spring);
        let subscription = source.subscribe(move |latest| {
            if let Some(spring) = weak.upgrade() {
                spring.borrow_mut().set_target(latest);
            }
        });
        Self {
            spring,
            subscription: Some(subscription),
        }
    }

    /// Advance one frame. Returns `None` while idle (already settled on target).
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        let mut spring = self.spring.borrow_mut();
        if spring.is_at_rest() && spring.current() == spring.target() {
            return None;
        }
        Some(spring.tick(dt).clamp(0.0, 1.0))
    }

    /// Smoothed value clamped to `[0, 1]`.
    #[inline]
    pub fn value(&self) -> f64 {
        self.spring.borrow().current().clamp(0.0, 1.0)
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.spring.borrow().target()
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop following the source. The spring keeps its last state.
    pub fn teardown(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.unsubscribe();
            log::debug!("scroll progress mapper detached");
        }
    }
}
