use yew::prelude::*;

use crate::components::section::SectionProps;
use crate::config;
use crate::content::{FeatureCard, FEATURES};
use crate::layout::{CARD_LAYOUT, CARD_WIDTH, CONNECTOR_LAYOUT, STAGE_SIZE};
use crate::navigation::Anchor;
use crate::reveal::{pose_class, stagger};

const LINE_STAGGER_MS: u32 = 100;
const CARD_STAGGER_MS: u32 = 150;

fn render_connector(index: usize, feature: &FeatureCard, revealed: bool) -> Html {
    let start = CONNECTOR_LAYOUT.center;
    let end = CONNECTOR_LAYOUT.project(feature.angle);

    html! {
        <line
            class={classes!("connector", revealed.then_some("drawn"))}
            x1={format!("{:.2}", start.x)}
            y1={format!("{:.2}", start.y)}
            x2={format!("{:.2}", end.x)}
            y2={format!("{:.2}", end.y)}
            pathLength="1"
            stroke="url(#connector-gradient)"
            stroke-width="2"
            style={stagger(index, LINE_STAGGER_MS)}
        />
    }
}

/// Centres a card-wide box on the card circle at `angle`.
fn card_position(angle: f64) -> String {
    let at = CARD_LAYOUT.project(angle);
    format!("left: {:.2}px; top: {:.2}px; width: {}px;", at.x, at.y, CARD_WIDTH)
}

fn render_card(index: usize, feature: &FeatureCard, revealed: bool) -> Html {
    let position = card_position(feature.angle);

    html! {
        <div class="feature-anchor" style={position}>
            <div class={classes!(pose_class(revealed), "pop", "feature-card")} style={stagger(index, CARD_STAGGER_MS)}>
                <div class="feature-title-row">
                    <div
                        class="feature-icon"
                        style={format!("color: {}; animation-delay: {}ms;", feature.icon.accent.hex(), index * 400)}
                        aria-label={feature.icon.glyph.label()}
                    >
                        {feature.icon.glyph.symbol()}
                    </div>
                    <h3>{feature.title}</h3>
                </div>
                <p>{feature.description}</p>
            </div>
        </div>
    }
}

#[function_component(Features)]
pub fn features(props: &SectionProps) -> Html {
    let revealed = props.revealed;
    let view_box = format!("0 0 {} {}", STAGE_SIZE, STAGE_SIZE);
    let hub = CONNECTOR_LAYOUT.center;
    let hub_style = format!("left: {:.2}px; top: {:.2}px;", hub.x, hub.y);

    html! {
        <section id={Anchor::Features.id()} ref={props.node.clone()} class="section features">
            <style>
                {r#"
                    .features-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .feature-stage {
                        position: relative;
                        width: 900px;
                        height: 900px;
                        margin: 0 auto;
                    }
                    .feature-stage svg {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .connector {
                        opacity: 0.3;
                        stroke-dasharray: 1;
                        stroke-dashoffset: 1;
                        transition: stroke-dashoffset 1s ease-out;
                    }
                    .connector.drawn {
                        stroke-dashoffset: 0;
                    }
                    .feature-hub {
                        position: absolute;
                        width: 14rem;
                        height: 14rem;
                        transform: translate(-50%, -50%);
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to bottom right, #b996dd, #a2e8f4);
                        box-shadow: 0 0 80px rgba(185, 150, 221, 0.5), 0 0 160px rgba(162, 232, 244, 0.3);
                    }
                    .feature-hub img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .feature-anchor {
                        position: absolute;
                        transform: translate(-50%, -50%);
                    }
                    .feature-card {
                        padding: 1.5rem;
                        background: rgba(17, 24, 39, 0.9);
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        box-shadow: 0 0 30px rgba(185, 150, 221, 0.2);
                    }
                    .feature-card:hover {
                        background: rgba(31, 41, 55, 0.9);
                        box-shadow: 0 20px 40px rgba(185, 150, 221, 0.4);
                    }
                    .feature-title-row {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .feature-icon {
                        padding: 0.5rem;
                        font-size: 2rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(to bottom right, rgba(185, 150, 221, 0.2), rgba(162, 232, 244, 0.2));
                        animation: breathe 3s infinite;
                    }
                    .feature-card p {
                        font-size: 0.875rem;
                        color: #d1d5db;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="features-content">
                <div class={classes!(pose_class(revealed), "section-heading")}>
                    <h2>{"Why SynTest Is Different"}</h2>
                    <p>{"Revolutionary technology meets clinical precision"}</p>
                </div>
                <div class="feature-stage">
                    <svg viewBox={view_box}>
                        <defs>
                            <linearGradient id="connector-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                                <stop offset="0%" stop-color="#b996dd" />
                                <stop offset="100%" stop-color="#a2e8f4" />
                            </linearGradient>
                        </defs>
                        { for FEATURES.iter().enumerate().map(|(i, feature)| render_connector(i, feature, revealed)) }
                    </svg>
                    <div class="feature-hub" style={hub_style}>
                        <div class={classes!(pose_class(revealed), "pop")}>
                            <img src={config::LOGO_SRC} alt="SynTest Logo" />
                        </div>
                    </div>
                    { for FEATURES.iter().enumerate().map(|(i, feature)| render_card(i, feature, revealed)) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_placed_card_wide_on_the_circle() {
        assert_eq!(card_position(0.0), "left: 810.00px; top: 450.00px; width: 320px;");
        assert_eq!(card_position(180.0), "left: 90.00px; top: 450.00px; width: 320px;");
    }
}
