use yew::prelude::*;

use crate::components::waitlist_form::WaitlistForm;
use crate::config;
use crate::navigation::Anchor;

/// Closing pitch with the waitlist form.
#[function_component(FinalCallToAction)]
pub fn final_call_to_action() -> Html {
    html! {
        <section id={Anchor::Waitlist.id()} class="section final-cta">
            <style>
                {r#"
                    .final-cta-content {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        text-align: center;
                    }
                    .final-cta h2 {
                        font-size: 2.25rem;
                    }
                    .final-cta .pitch {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .waitlist-card {
                        max-width: 28rem;
                        margin: 0 auto;
                        padding: 2rem;
                    }
                    .waitlist-form label {
                        display: block;
                        text-align: left;
                        font-size: 0.875rem;
                        color: #d1d5db;
                        margin-bottom: 0.5rem;
                    }
                    .waitlist-form input {
                        box-sizing: border-box;
                        width: 100%;
                        padding: 0.75rem 1rem;
                        margin-bottom: 1.5rem;
                        background: #1f2937;
                        border: 1px solid #374151;
                        border-radius: 0.75rem;
                        color: #fff;
                    }
                    .waitlist-form input:focus {
                        outline: none;
                        border-color: transparent;
                        box-shadow: 0 0 0 2px #b996dd;
                    }
                    .waitlist-submit {
                        width: 100%;
                    }
                    .waitlist-confirmation {
                        animation: popIn 0.4s ease-out;
                    }
                    .waitlist-confirmation h3 {
                        font-size: 1.5rem;
                        color: #00BFFF;
                    }
                    .confirmation-icon {
                        font-size: 4rem;
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            <div class="final-cta-content">
                <h2>
                    {"Transforming Neurological Care "}
                    <span class="gradient-text">{"Starts With You"}</span>
                </h2>
                <p class="pitch">
                    {"Be among the first to use a revolutionary at-home Parkinson's test, empowering early detection through science you can trust."}
                </p>
                <div class="panel waitlist-card">
                    <WaitlistForm />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id={Anchor::Contact.id()} class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid #374151;
                        background: rgba(17, 24, 39, 0.5);
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem 2rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        color: #9ca3af;
                    }
                    .footer-grid h4 {
                        color: #fff;
                        font-size: 1.125rem;
                    }
                    .footer-grid a {
                        color: inherit;
                    }
                    .footer-grid a:hover {
                        color: #fff;
                    }
                    .legal {
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        <img src={config::LOGO_SRC} alt="SynTest Logo" />
                        <h3 class="brand-name">{config::BRAND_NAME}</h3>
                    </div>
                    <p>{"Revolutionizing Parkinson's diagnostics through nanotechnology and AI."}</p>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <p>
                        {"✉ "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </p>
                    <p>{format!("📍 {}", config::LOCATION)}</p>
                </div>
                <div>
                    <h4>{"Legal"}</h4>
                    <p class="legal">{"FDA-pending diagnostic test. Not yet available for commercial use."}</p>
                    <p class="legal">{"© 2025 SynTest Labs. All rights reserved."}</p>
                </div>
            </div>
        </footer>
    }
}
