use std::collections::BTreeMap;
use std::rc::Rc;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a section that has to be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Observer thresholds. Sections taller than the viewport never reach a
/// ratio of 0.15, so the lower steps keep callbacks coming while they scroll
/// through. Neighbouring steps stay within a factor of 1/0.15 of each other.
pub const OBSERVER_STEPS: [f64; 9] = [0.0, 0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.15];

// Browsers report ratios at the crossing with float noise
const RATIO_SLACK: f64 = 1e-6;

pub const REVEAL_CLASS: &str = "reveal";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

/// How much of a section one observer entry reports as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exposure {
    /// Visible share of the section itself.
    pub ratio: f64,
    /// Visible height of the section over the viewport height.
    pub root_fraction: f64,
    pub intersecting: bool,
}

impl Exposure {
    /// At least 15% of the section is visible, or, for sections too tall for
    /// that, the section covers at least 15% of the viewport.
    pub fn reaches_threshold(&self) -> bool {
        self.intersecting
            && (self.ratio + RATIO_SLACK >= REVEAL_THRESHOLD
                || self.root_fraction + RATIO_SLACK >= REVEAL_THRESHOLD)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Mark the section shown and stop observing it.
    RevealAndUnobserve,
    KeepWatching,
}

pub fn entry_outcome(exposure: Exposure) -> EntryOutcome {
    if exposure.reaches_threshold() {
        EntryOutcome::RevealAndUnobserve
    } else {
        EntryOutcome::KeepWatching
    }
}

pub enum RevealAction {
    Track(Vec<String>),
    Intersected { id: String, exposure: Exposure },
    ShowAll,
}

/// One-shot visibility per section. Nothing moves a section back to hidden.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealSet {
    sections: BTreeMap<String, Visibility>,
}

impl RevealSet {
    pub fn is_shown(&self, id: &str) -> bool {
        self.visibility(id) == Some(Visibility::Shown)
    }

    pub fn visibility(&self, id: &str) -> Option<Visibility> {
        self.sections.get(id).copied()
    }

    fn apply(&mut self, action: RevealAction) {
        match action {
            RevealAction::Track(ids) => {
                for id in ids {
                    self.sections.entry(id).or_insert(Visibility::Hidden);
                }
            }
            RevealAction::Intersected { id, exposure } => {
                if exposure.reaches_threshold() {
                    self.sections.insert(id, Visibility::Shown);
                }
            }
            RevealAction::ShowAll => {
                for visibility in self.sections.values_mut() {
                    *visibility = Visibility::Shown;
                }
            }
        }
    }
}

impl Reducible for RevealSet {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn reveal_elements() -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(&format!(".{}", REVEAL_CLASS)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter(|el| !el.id().is_empty())
        .collect()
}

fn exposure_of(entry: &IntersectionObserverEntry) -> Exposure {
    let root_height = entry
        .root_bounds()
        .map(|bounds| bounds.height())
        .or_else(|| window().and_then(|w| w.inner_height().ok()).and_then(|h| h.as_f64()))
        .unwrap_or(0.0);
    let root_fraction = if root_height > 0.0 {
        entry.intersection_rect().height() / root_height
    } else {
        0.0
    };
    Exposure {
        ratio: entry.intersection_ratio(),
        root_fraction,
        intersecting: entry.is_intersecting(),
    }
}

fn has_intersection_observer() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Watches every `.reveal` element on the page and reports which ones have
/// been scrolled into view. Falls back to showing everything when the
/// browser has no `IntersectionObserver`.
#[hook]
pub fn use_reveal() -> UseReducerHandle<RevealSet> {
    let reveal = use_reducer_eq(RevealSet::default);

    {
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let elements = reveal_elements();
                dispatcher.dispatch(RevealAction::Track(
                    elements.iter().map(Element::id).collect(),
                ));

                let mut watch = None;
                if has_intersection_observer() {
                    let on_intersect = {
                        let dispatcher = dispatcher.clone();
                        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                        continue;
                                    };
                                    let exposure = exposure_of(&entry);
                                    if entry_outcome(exposure) == EntryOutcome::KeepWatching {
                                        continue;
                                    }
                                    let target = entry.target();
                                    dispatcher.dispatch(RevealAction::Intersected {
                                        id: target.id(),
                                        exposure,
                                    });
                                    observer.unobserve(&target);
                                }
                            },
                        )
                    };

                    let options = IntersectionObserverInit::new();
                    let steps: Array = OBSERVER_STEPS.iter().copied().map(JsValue::from_f64).collect();
                    options.set_threshold(&steps);
                    match IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            for el in &elements {
                                observer.observe(el);
                            }
                            watch = Some((observer, on_intersect));
                        }
                        Err(_) => dispatcher.dispatch(RevealAction::ShowAll),
                    }
                } else {
                    info!("IntersectionObserver unavailable, showing all sections");
                    dispatcher.dispatch(RevealAction::ShowAll);
                }

                move || {
                    if let Some((observer, _on_intersect)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    reveal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exposure(ratio: f64, root_fraction: f64, intersecting: bool) -> Exposure {
        Exposure {
            ratio,
            root_fraction,
            intersecting,
        }
    }

    fn set_with(ids: &[&str]) -> Rc<RevealSet> {
        Rc::new(RevealSet::default())
            .reduce(RevealAction::Track(ids.iter().map(|s| s.to_string()).collect()))
    }

    fn hit(set: Rc<RevealSet>, id: &str, exposure: Exposure) -> Rc<RevealSet> {
        set.reduce(RevealAction::Intersected {
            id: id.to_string(),
            exposure,
        })
    }

    /// Exposure of a section `sections_tall` viewports high when `ratio` of
    /// it is on screen.
    fn tall(ratio: f64, sections_tall: f64) -> Exposure {
        exposure(ratio, ratio * sections_tall, true)
    }

    #[test]
    fn tracked_sections_start_hidden() {
        let set = set_with(&["discog", "contact"]);
        assert_eq!(set.visibility("discog"), Some(Visibility::Hidden));
        assert!(!set.is_shown("contact"));
        assert_eq!(set.visibility("footer"), None);
    }

    #[test]
    fn reveals_at_threshold() {
        let set = set_with(&["discog", "photo"]);
        let set = hit(set, "discog", exposure(0.10, 0.05, true));
        assert!(!set.is_shown("discog"));
        let set = hit(set, "discog", exposure(0.1499, 0.08, true));
        assert!(!set.is_shown("discog"));
        let set = hit(set, "discog", exposure(0.15, 0.08, true));
        assert!(set.is_shown("discog"));
        assert!(!set.is_shown("photo"));
    }

    #[test]
    fn ratio_without_intersection_does_not_reveal() {
        let set = hit(set_with(&["writing"]), "writing", exposure(0.5, 0.5, false));
        assert!(!set.is_shown("writing"));
    }

    #[test]
    fn section_taller_than_the_viewport_still_reveals() {
        // 23 rows of covers on a 600px phone: the ratio tops out near 0.136
        let section_height = 23.0 * 186.0 + 120.0;
        let viewport = 600.0;
        let max_ratio = viewport / section_height;
        assert!(max_ratio < REVEAL_THRESHOLD);

        let set = hit(set_with(&["discog"]), "discog", exposure(max_ratio, 1.0, true));
        assert!(set.is_shown("discog"));
    }

    #[test]
    fn observer_steps_fire_for_any_tall_section() {
        // For a section n viewports tall, some step at or below its max ratio
        // (1/n) must already cover 15% of the viewport.
        for n in [1.0_f64, 2.0, 6.7, 7.35, 20.0, 78.0, 200.0, 500.0] {
            let max_ratio = (1.0 / n).min(1.0);
            let fires = OBSERVER_STEPS
                .iter()
                .filter(|&&step| step > 0.0 && step <= max_ratio)
                .any(|&step| tall(step, n).reaches_threshold());
            assert!(fires, "section {n} viewports tall never reveals");
        }
    }

    #[test]
    fn entry_below_threshold_keeps_watching() {
        assert_eq!(entry_outcome(exposure(0.05, 0.05, true)), EntryOutcome::KeepWatching);
    }

    #[test]
    fn entry_not_intersecting_keeps_watching() {
        assert_eq!(entry_outcome(exposure(0.0, 0.0, false)), EntryOutcome::KeepWatching);
        assert_eq!(entry_outcome(exposure(0.3, 0.3, false)), EntryOutcome::KeepWatching);
    }

    #[test]
    fn entry_of_tall_section_reveals_and_unobserves() {
        assert_eq!(entry_outcome(tall(0.05, 10.0)), EntryOutcome::RevealAndUnobserve);
        assert_eq!(entry_outcome(tall(0.01, 10.0)), EntryOutcome::KeepWatching);
    }

    #[test]
    fn entry_past_threshold_reveals_and_unobserves() {
        assert_eq!(entry_outcome(exposure(0.4, 0.2, true)), EntryOutcome::RevealAndUnobserve);
    }

    #[test]
    fn shown_never_reverts() {
        let set = hit(set_with(&["graphics"]), "graphics", exposure(0.9, 0.5, true));
        let set = hit(set, "graphics", exposure(0.0, 0.0, false));
        assert!(set.is_shown("graphics"));
        let set = set.reduce(RevealAction::Track(vec!["graphics".to_string()]));
        assert!(set.is_shown("graphics"));
    }

    #[test]
    fn show_all_reveals_everything_tracked() {
        let set = set_with(&["discog", "graphics", "footer"]).reduce(RevealAction::ShowAll);
        for id in ["discog", "graphics", "footer"] {
            assert!(set.is_shown(id));
        }
    }

    #[test]
    fn show_all_after_partial_reveal_keeps_everything_shown() {
        let set = hit(set_with(&["discog", "contact"]), "discog", exposure(0.5, 0.5, true));
        let set = set.reduce(RevealAction::ShowAll);
        let set = hit(set, "contact", exposure(0.0, 0.0, false));
        assert!(set.is_shown("discog"));
        assert!(set.is_shown("contact"));
    }

    #[test]
    fn unchanged_state_keeps_same_rc() {
        let set = set_with(&["discog"]);
        let same = hit(set.clone(), "discog", exposure(0.01, 0.01, true));
        assert!(Rc::ptr_eq(&set, &same));
    }
}
