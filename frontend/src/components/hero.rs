use yew::prelude::*;

use crate::components::scene::HeroScene;
use crate::components::section::SectionProps;
use crate::navigation::{scroll_on_click, Anchor};
use crate::reveal::pose_class;

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    html! {
        <section ref={props.node.clone()} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 5rem;
                        overflow: hidden;
                    }
                    .hero-scene {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        justify-content: flex-end;
                        padding-right: 2rem;
                        pointer-events: none;
                    }
                    .hero-scene-frame {
                        width: 100%;
                        max-width: 42rem;
                        height: 100%;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        line-height: 1.15;
                    }
                    .hero-lead {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .hero-chevron {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #00BFFF;
                        font-size: 2rem;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, -25%); }
                        50% { transform: translate(-50%, 0); }
                    }
                    @media (max-width: 1024px) {
                        .hero-content {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <HeroScene />
            <div class="hero-content">
                <div class={pose_class(props.revealed)}>
                    <h1>
                        {"Early Parkinson's Detection "}
                        <span class="gradient-text">{"From a Drop of Saliva"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"SynTest Labs is revolutionizing Parkinson's diagnostics with a saliva test that uses nanoenzyme-enhanced colorimetric sensors and AI-powered app analysis to identify Parkinson's biomarkers, simply, safely, and non-invasively."}
                    </p>
                    <div class="hero-actions">
                        <button class="cta-primary" onclick={scroll_on_click(Anchor::Waitlist)}>
                            {"Join the Waitlist"}
                        </button>
                        <button class="cta-outline" onclick={scroll_on_click(Anchor::HowItWorks)}>
                            {"▶ See How It Works"}
                        </button>
                    </div>
                </div>
                // Right column stays empty so the scene shows through
                <div></div>
            </div>
            <div class="hero-chevron">{"⌄"}</div>
        </section>
    }
}
