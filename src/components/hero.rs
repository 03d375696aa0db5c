//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"PolydisVae"</h1>
            <p class="subtitle">
                "Give two MIDI files and get back one piece that mixes them: "
                "pitch and chord content is taken from the first file, the rhythm "
                "from the second."
            </p>
            <p class="citation">
                "Paper: Wang et al., Learning interpretable representation for "
                "controllable polyphonic music generation, ISMIR 2020."
            </p>
        </div>
    }
}
