use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Fraction of the page scrolled so far, in `[0, 1]`. A page that fits in the
/// viewport counts as not scrolled at all.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn parallax_style(progress: f64) -> String {
    format!("transform: translateY({:.2}%);", progress * 100.0)
}

fn page_heights() -> Option<(f64, f64)> {
    let window = window()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some((document_height, viewport_height))
}

#[function_component(ParallaxBackground)]
pub fn parallax_background() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let progress = page_heights()
        .map(|(document_height, viewport_height)| scroll_progress(scroll_y, document_height, viewport_height))
        .unwrap_or(0.0);

    html! {
        <div class="parallax-background" style={parallax_style(progress)}>
            <div class="parallax-gradient"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_from_top_to_bottom() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_page_never_moves() {
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn style_translates_by_percent() {
        assert_eq!(parallax_style(0.25), "transform: translateY(25.00%);");
    }
}
