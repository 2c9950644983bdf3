use yew::prelude::*;

use crate::config;

/// The 3-D brain behind the hero copy. Rendering is entirely up to the
/// `spline-viewer` element loaded in index.html.
#[function_component(HeroScene)]
pub fn hero_scene() -> Html {
    html! {
        <div class="hero-scene">
            <div class="hero-scene-frame">
                <spline-viewer url={config::SCENE_URL} loading-anim-type="none"></spline-viewer>
            </div>
        </div>
    }
}
