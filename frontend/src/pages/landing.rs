use log::info;
use yew::prelude::*;

use crate::components::{
    background::ParallaxBackground,
    explainer::Explainer,
    features::Features,
    footer::{FinalCallToAction, Footer},
    header::Header,
    hero::Hero,
    process::Process,
    section::SharedStyles,
};
use crate::config;
use crate::reveal::use_reveal;

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let explainer_ref = use_node_ref();
    let process_ref = use_node_ref();
    let features_ref = use_node_ref();

    let hero_revealed = use_reveal(hero_ref.clone(), "hero", config::REVEAL_THRESHOLD);
    let explainer_revealed = use_reveal(explainer_ref.clone(), "explainer", config::REVEAL_THRESHOLD);
    let process_revealed = use_reveal(process_ref.clone(), "process", config::REVEAL_THRESHOLD);
    let features_revealed = use_reveal(features_ref.clone(), "features", config::REVEAL_THRESHOLD);

    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <SharedStyles />
            <ParallaxBackground />
            <Header />
            <Hero node={hero_ref} revealed={hero_revealed} />
            <Explainer node={explainer_ref} revealed={explainer_revealed} />
            <Process node={process_ref} revealed={process_revealed} />
            <Features node={features_ref} revealed={features_revealed} />
            <FinalCallToAction />
            <Footer />
        </div>
    }
}
