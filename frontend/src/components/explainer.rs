use yew::prelude::*;

use crate::components::section::SectionProps;
use crate::content::{ExplainerSlide, EXPLAINER_SLIDES};
use crate::navigation::{scroll_on_click, Anchor};
use crate::reveal::{pose_class, stagger};

const SLIDE_STAGGER_MS: u32 = 200;

fn render_slide(index: usize, slide: &ExplainerSlide, revealed: bool) -> Html {
    html! {
        <div class={classes!(pose_class(revealed), "panel", "explainer-slide")} style={stagger(index, SLIDE_STAGGER_MS)}>
            <div
                class="slide-icon"
                style={format!("color: {}; animation-delay: {}ms;", slide.icon.accent.hex(), index * 500)}
                aria-label={slide.icon.glyph.label()}
            >
                {slide.icon.glyph.symbol()}
            </div>
            <div class="slide-copy">
                <h3>{slide.title}</h3>
                <p>{slide.description}</p>
            </div>
        </div>
    }
}

#[function_component(Explainer)]
pub fn explainer(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section ref={props.node.clone()} class="section explainer">
            <style>
                {r#"
                    .explainer .explainer-content {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .explainer-slides {
                        display: flex;
                        flex-direction: column;
                        gap: 4rem;
                    }
                    .explainer-slide {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        padding: 2rem;
                    }
                    .slide-icon {
                        flex-shrink: 0;
                        font-size: 4rem;
                        animation: breathe 4s ease-in-out infinite;
                    }
                    @keyframes breathe {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.05); }
                    }
                    .slide-copy h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .slide-copy p {
                        font-size: 1.125rem;
                        color: #d1d5db;
                    }
                    .explainer-cta {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    @media (max-width: 768px) {
                        .explainer-slide {
                            flex-direction: column;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <div class="explainer-content">
                <div class={classes!(pose_class(revealed), "section-heading")}>
                    <h2>{"The Diagnostic Gap"}</h2>
                    <p>{"Understanding why early detection matters"}</p>
                </div>
                <div class="explainer-slides">
                    { for EXPLAINER_SLIDES.iter().enumerate().map(|(i, slide)| render_slide(i, slide, revealed)) }
                </div>
                <div class={classes!(pose_class(revealed), "explainer-cta")} style={stagger(EXPLAINER_SLIDES.len(), SLIDE_STAGGER_MS)}>
                    <button class="cta-primary" onclick={scroll_on_click(Anchor::Waitlist)}>
                        {"Reserve Your SynTest Kit"}
                    </button>
                </div>
            </div>
        </section>
    }
}
