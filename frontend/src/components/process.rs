use yew::prelude::*;

use crate::components::section::SectionProps;
use crate::content::{ProcessStep, PROCESS_STEPS};
use crate::navigation::Anchor;
use crate::reveal::{pose_class, stagger};

const STEP_STAGGER_MS: u32 = 200;

fn render_step(index: usize, step: &ProcessStep, revealed: bool) -> Html {
    let badge = step.icon;
    let badge_style = format!(
        "background: linear-gradient(to bottom right, {}, {}); animation-delay: {}ms;",
        badge.from.hex(),
        badge.to.hex(),
        index * 500
    );
    let is_last = index + 1 == PROCESS_STEPS.len();

    html! {
        <div class={classes!(pose_class(revealed), "from-left", "panel", "process-step")} style={stagger(index, STEP_STAGGER_MS)}>
            <div class="step-badge" style={badge_style}>{badge.number.to_string()}</div>
            <div class="step-label">{format!("STEP {}", step.ordinal)}</div>
            <h3>{step.title}</h3>
            <p>{step.description}</p>
            if !is_last {
                <div class="step-arrow">{"→"}</div>
            }
        </div>
    }
}

#[function_component(Process)]
pub fn process(props: &SectionProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={Anchor::HowItWorks.id()} ref={props.node.clone()} class="section process">
            <style>
                {r#"
                    .process-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .process-steps {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .process-step {
                        position: relative;
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .process-step:hover {
                        background: rgba(31, 41, 55, 0.5);
                        box-shadow: 0 20px 40px rgba(185, 150, 221, 0.2);
                    }
                    .step-badge {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        animation: glow 3s infinite;
                    }
                    @keyframes glow {
                        0%, 100% { box-shadow: 0 0 0 rgba(185, 150, 221, 0); }
                        50% { box-shadow: 0 0 15px rgba(185, 150, 221, 0.4); }
                    }
                    .step-label {
                        font-size: 0.875rem;
                        color: #00BFFF;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .process-step p {
                        color: #d1d5db;
                    }
                    .step-arrow {
                        position: absolute;
                        top: 50%;
                        right: -1.5rem;
                        transform: translateY(-50%);
                        color: #00BFFF;
                        font-size: 2rem;
                    }
                    @media (max-width: 1024px) {
                        .process-steps {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .step-arrow {
                            display: none;
                        }
                    }
                    @media (max-width: 768px) {
                        .process-steps {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="process-content">
                <div class={classes!(pose_class(revealed), "section-heading")}>
                    <h2>{"How SynTest Works"}</h2>
                    <p>{"Four simple steps to early detection"}</p>
                </div>
                <div class="process-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| render_step(i, step, revealed)) }
                </div>
            </div>
        </section>
    }
}
