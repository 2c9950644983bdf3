use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::{js_message, SiteError};

/// Set-once visibility flag for a page section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlag {
    revealed: bool,
}

impl RevealFlag {
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds one visibility reading in. Returns true only on the reading that
    /// flips the flag; later readings, whatever their ratio, change nothing.
    pub fn observe(&mut self, visible_ratio: f64, threshold: f64) -> bool {
        if self.revealed || visible_ratio < threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Largest visible ratio among entries that are actually intersecting.
/// Entries leaving the viewport can still carry a stale ratio; they count
/// as zero.
pub fn max_visible_ratio(entries: impl IntoIterator<Item = (bool, f64)>) -> f64 {
    entries
        .into_iter()
        .filter(|(intersecting, _)| *intersecting)
        .map(|(_, ratio)| ratio)
        .fold(0.0_f64, f64::max)
}

/// Resolves an observer attach attempt. If the section cannot be watched it
/// is shown straight away rather than left in the hidden pose.
fn settle_attach<T>(flag: &mut RevealFlag, name: &str, attached: Result<T, SiteError>) -> Option<T> {
    match attached {
        Ok(observer) => Some(observer),
        Err(e) => {
            warn!("Cannot watch {}, showing it now: {}", name, e);
            flag.revealed = true;
            None
        }
    }
}

/// Which of the two poses an entry animation should sit in.
pub fn pose_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal visible"
    } else {
        "reveal"
    }
}

/// Inline style delaying the `index`th item of a section by `step_ms` each.
pub fn stagger(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", index as u32 * step_ms)
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live `IntersectionObserver` watching a single element. Dropping it
/// disconnects the observer and frees the JS callback.
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl SectionObserver {
    fn attach(
        target: &Element,
        threshold: f64,
        on_ratio: impl FnMut(f64, &IntersectionObserver) + 'static,
    ) -> Result<Self, SiteError> {
        let mut on_ratio = on_ratio;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let ratio = max_visible_ratio(
                entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.is_intersecting(), entry.intersection_ratio())),
            );
            on_ratio(ratio, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| SiteError::Observer(js_message(&e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches the element behind `node` and returns whether it has ever been at
/// least `threshold` visible. False until the observer reports in.
#[hook]
pub fn use_reveal(node: NodeRef, name: &'static str, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);
    let flag = use_mut_ref(RevealFlag::default);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = if flag.borrow().is_revealed() {
                    None
                } else {
                    let attached = node
                        .cast::<Element>()
                        .ok_or(SiteError::MissingSection(name))
                        .and_then(|target| {
                            let on_ratio = reveal_once(flag.clone(), revealed.clone(), name, threshold);
                            SectionObserver::attach(&target, threshold, on_ratio)
                        });
                    let observer = settle_attach(&mut flag.borrow_mut(), name, attached);
                    if flag.borrow().is_revealed() {
                        revealed.set(true);
                    }
                    observer
                };
                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}

fn reveal_once(
    flag: Rc<RefCell<RevealFlag>>,
    revealed: UseStateHandle<bool>,
    name: &'static str,
    threshold: f64,
) -> impl FnMut(f64, &IntersectionObserver) + 'static {
    move |ratio, observer| {
        if flag.borrow_mut().observe(ratio, threshold) {
            debug!("Section {} revealed at {:.2}", name, ratio);
            revealed.set(true);
            observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let flag = RevealFlag::default();
        assert!(!flag.is_revealed());
        assert_eq!(pose_class(flag.is_revealed()), "reveal");
    }

    #[test]
    fn below_threshold_keeps_hidden() {
        let mut flag = RevealFlag::default();
        assert!(!flag.observe(0.0, 0.3));
        assert!(!flag.observe(0.29, 0.3));
        assert!(!flag.is_revealed());
    }

    #[test]
    fn flips_once_at_threshold_and_never_reverts() {
        let mut flag = RevealFlag::default();
        assert!(flag.observe(0.3, 0.3));
        assert!(flag.is_revealed());

        assert!(!flag.observe(0.9, 0.3));
        assert!(!flag.observe(0.0, 0.3));
        assert!(flag.is_revealed());
        assert_eq!(pose_class(flag.is_revealed()), "reveal visible");
    }

    #[test]
    fn ratio_ignores_entries_that_are_not_intersecting() {
        assert_eq!(max_visible_ratio([(false, 0.8), (true, 0.4)]), 0.4);
        assert_eq!(max_visible_ratio([(false, 0.5)]), 0.0);
        assert_eq!(max_visible_ratio(Vec::new()), 0.0);
        assert_eq!(max_visible_ratio([(true, 0.1), (true, 0.35), (true, 0.2)]), 0.35);
    }

    #[test]
    fn failed_attach_falls_back_to_visible() {
        let mut flag = RevealFlag::default();
        let observer: Option<()> = settle_attach(&mut flag, "hero", Err(SiteError::MissingSection("hero")));
        assert!(observer.is_none());
        assert!(flag.is_revealed());
        assert_eq!(pose_class(flag.is_revealed()), "reveal visible");
    }

    #[test]
    fn attached_observer_leaves_section_hidden_until_seen() {
        let mut flag = RevealFlag::default();
        assert_eq!(settle_attach(&mut flag, "features", Ok(7)), Some(7));
        assert!(!flag.is_revealed());
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger(0, 200), "transition-delay: 0ms;");
        assert_eq!(stagger(3, 150), "transition-delay: 450ms;");
    }
}
