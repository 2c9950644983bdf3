use yew::prelude::*;

/// Props shared by every observed section: where to attach the observer,
/// and whether it has fired yet.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub node: NodeRef,
    pub revealed: bool,
}

/// Styles used across sections: entry poses, gradients, buttons.
#[function_component(SharedStyles)]
pub fn shared_styles() -> Html {
    html! {
        <style>
            {r#"
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }
                html {
                    scroll-behavior: smooth;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(50px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .reveal.from-left {
                    transform: translateX(-50px);
                }
                .reveal.pop {
                    transform: scale(0.8);
                }
                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }
                .gradient-text {
                    background: linear-gradient(to right, #b996dd, #a2e8f4);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section {
                    position: relative;
                    padding: 5rem 0;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                }
                .panel {
                    background: rgba(17, 24, 39, 0.5);
                    border: 1px solid #374151;
                    border-radius: 1rem;
                    backdrop-filter: blur(4px);
                }
                .cta-primary, .cta-outline, .waitlist-submit {
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .cta-primary, .waitlist-submit {
                    border: none;
                    color: #fff;
                    background: linear-gradient(to right, #b996dd, #a2e8f4);
                }
                .cta-primary:hover, .waitlist-submit:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 30px rgba(185, 150, 221, 0.6);
                }
                .cta-outline {
                    background: transparent;
                    color: #00BFFF;
                    border: 2px solid #00BFFF;
                }
                .cta-outline:hover {
                    background: #00BFFF;
                    color: #111827;
                    box-shadow: 0 0 20px rgba(0, 191, 255, 0.4);
                }
                .parallax-background {
                    position: fixed;
                    inset: 0;
                    opacity: 0.1;
                    pointer-events: none;
                }
                .parallax-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, rgba(185, 150, 221, 0.2), transparent, rgba(162, 232, 244, 0.2));
                }
            "#}
        </style>
    }
}
