//! One-shot entrance animations triggered when a section first scrolls
//! into view.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::functional::hook;
use yew::prelude::*;

use crate::config;

/// Latches on the first intersecting observation and never resets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Returns true only for the observation that trips the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Up,
    FromLeft,
    FromRight,
}

impl Entrance {
    fn class(self) -> &'static str {
        match self {
            Entrance::Up => "reveal-up",
            Entrance::FromLeft => "reveal-left",
            Entrance::FromRight => "reveal-right",
        }
    }
}

pub fn reveal_classes(entrance: Entrance, revealed: bool) -> Classes {
    classes!("reveal", entrance.class(), revealed.then_some("revealed"))
}

pub fn reveal_delay(seconds: f64) -> String {
    format!("transition-delay: {:.1}s;", seconds)
}

/// Delay for the `index`-th item of a list that starts at `base`.
pub fn stagger(base: f64, index: usize) -> String {
    reveal_delay(base + index as f64 * 0.1)
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach(target: &Element, on_reveal: impl Fn() + 'static) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::default();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.is_intersecting()) {
                        observer.disconnect();
                        on_reveal();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(RevealObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Attach the returned ref to a section's root; the flag turns true the
/// first time at least 10% of it is visible and stays true.
#[hook]
pub fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = match node.cast::<Element>() {
                    Some(target) => {
                        let setter = revealed.setter();
                        match RevealObserver::attach(&target, move || setter.set(true)) {
                            Ok(observer) => Some(observer),
                            Err(e) => {
                                warn!("IntersectionObserver unavailable, revealing now: {:?}", e);
                                revealed.set(true);
                                None
                            }
                        }
                    }
                    None => {
                        debug!("Reveal target not mounted, revealing now");
                        revealed.set(true);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }

    (node, *revealed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn ignores_non_intersecting() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.has_fired());
        assert!(latch.observe(true));
        assert!(latch.has_fired());
    }

    #[test]
    fn scroll_out_and_back_does_not_refire() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_fired());
    }

    #[quickcheck]
    fn fires_at_most_once(observations: Vec<bool>) -> bool {
        let mut latch = RevealLatch::default();
        let fired = observations.iter().filter(|&&seen| latch.observe(seen)).count();
        let expected = usize::from(observations.contains(&true));
        fired == expected && latch.has_fired() == (expected == 1)
    }

    #[test]
    fn delays_render_with_one_decimal() {
        assert_eq!(reveal_delay(0.8), "transition-delay: 0.8s;");
        assert_eq!(stagger(0.3, 2), "transition-delay: 0.5s;");
        assert_eq!(stagger(0.0, 0), "transition-delay: 0.0s;");
    }

    #[test]
    fn classes_track_state() {
        let hidden = reveal_classes(Entrance::FromLeft, false);
        assert!(hidden.contains("reveal"));
        assert!(hidden.contains("reveal-left"));
        assert!(!hidden.contains("revealed"));
        assert!(reveal_classes(Entrance::Up, true).contains("revealed"));
    }
}
