use yew::prelude::*;

use crate::config;
use crate::navigation::Anchor;

#[function_component(Header)]
pub fn header() -> Html {
    let links = [
        (Anchor::HowItWorks, "How It Works"),
        (Anchor::Features, "Features"),
        (Anchor::Contact, "Contact"),
    ];

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(17, 24, 39, 0.8);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid #374151;
                    }
                    .site-header .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .brand img {
                        width: 40px;
                        height: 40px;
                        object-fit: contain;
                    }
                    .brand-name {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #b996dd, #a2e8f4);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .site-nav a {
                        color: #d1d5db;
                        margin-left: 2rem;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .site-nav a:hover {
                        color: #fff;
                    }
                    @media (max-width: 768px) {
                        .site-nav {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <div class="brand">
                    <img src={config::LOGO_SRC} alt="SynTest Logo" />
                    <h1 class="brand-name">{config::BRAND_NAME}</h1>
                </div>
                <nav class="site-nav">
                    { for links.iter().map(|(anchor, label)| html! {
                        <a href={anchor.href()}>{*label}</a>
                    }) }
                </nav>
            </div>
        </header>
    }
}
