//! Standalone audio file picker.
//!
//! The selection stays local to this component and is not part of the
//! generation form; the only feedback is an unsupported-type warning.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::MAX_AUDIO_FILE_SIZE;
use crate::validation::is_supported_audio_type;

#[component]
pub fn AudioFilePicker() -> impl IntoView {
    let (file, set_file) = create_signal(None::<File>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));

        if let Some(f) = &selected {
            log::debug!("audio file selected: {} ({})", f.name(), f.type_());
        }

        set_file.set(selected);
    };

    view! {
        <div class="audio-picker">
            <h6 class="audio-picker-title">"File selection"</h6>
            <input type="file" on:change=on_file_change/>
            <div class="hint">
                {format!(
                    "MP3, MP4 or WAV only, up to {} MB.",
                    MAX_AUDIO_FILE_SIZE / (1024 * 1024)
                )}
            </div>

            <Show
                when=move || {
                    file.get()
                        .map(|f| !is_supported_audio_type(&f.type_()))
                        .unwrap_or(false)
                }
                fallback=|| view! { }
            >
                <div class="type-warning">"This file type is not supported."</div>
            </Show>
        </div>
    }
}
