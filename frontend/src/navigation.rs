use log::warn;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::Callback;

use crate::error::SiteError;

/// In-page jump targets. The id is what the section renders as its `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    HowItWorks,
    Features,
    Waitlist,
    Contact,
}

impl Anchor {
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::HowItWorks => "how-it-works",
            Anchor::Features => "features",
            Anchor::Waitlist => "waitlist",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smoothly scrolls the section behind `anchor` into view.
pub fn scroll_to(anchor: Anchor) -> Result<(), SiteError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(SiteError::NoWindow)?;
    let section = document
        .get_element_by_id(anchor.id())
        .ok_or(SiteError::MissingSection(anchor.id()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Click handler for buttons that jump to `anchor`.
pub fn scroll_on_click(anchor: Anchor) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = scroll_to(anchor) {
            warn!("Could not scroll to {}: {}", anchor.id(), err);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_point_at_section_ids() {
        assert_eq!(Anchor::HowItWorks.href(), "#how-it-works");
        assert_eq!(Anchor::Features.href(), "#features");
        assert_eq!(Anchor::Waitlist.href(), "#waitlist");
        assert_eq!(Anchor::Contact.href(), "#contact");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_section_is_reported() {
        match scroll_to(Anchor::Features) {
            Err(SiteError::MissingSection(id)) => assert_eq!(id, "features"),
            other => panic!("expected missing section, got {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    fn present_section_scrolls() {
        let document = window().and_then(|w| w.document()).expect("document");
        let section = document.create_element("section").expect("section");
        section.set_id(Anchor::Waitlist.id());
        document.body().expect("body").append_child(&section).expect("append");

        assert!(scroll_to(Anchor::Waitlist).is_ok());
        section.remove();
    }
}
