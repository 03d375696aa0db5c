//! Mix generation form.
//!
//! Two required MIDI inputs (pitch and rhythm reference) validated
//! client-side and submitted as multipart form data to the generation API.

use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::config::API_BASE_URL;
use crate::services::generate_mix;
use crate::types::{FieldErrors, FormValues, SubmitStatus};
use crate::validation::validate;

#[component]
pub fn UploadForm() -> impl IntoView {
    let (values, set_values) = create_signal(FormValues::<File>::default());
    let (errors, set_errors) = create_signal(FieldErrors::default());
    let (status, set_status) = create_signal(SubmitStatus::Idle);

    let on_pitch_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));

        log::debug!(
            "pitch reference selected: {:?}",
            selected.as_ref().map(|f| f.name())
        );

        set_values.update(|v| v.pitch_file = selected);
        set_errors.update(|e| e.pitch_file = None);
    };

    let on_rhythm_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));

        log::debug!(
            "rhythm reference selected: {:?}",
            selected.as_ref().map(|f| f.name())
        );

        set_values.update(|v| v.rhythm_file = selected);
        set_errors.update(|e| e.rhythm_file = None);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Drop re-entrant submits while a request is in flight.
        if status.get_untracked().is_submitting() {
            return;
        }

        let current = values.get_untracked();
        let field_errors = validate(&current);
        if !field_errors.is_empty() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_status.set(SubmitStatus::Submitting);

        spawn_local(async move {
            // validate() guarantees both files are present here.
            let (Some(pitch), Some(rhythm)) = (current.pitch_file, current.rhythm_file) else {
                set_status.set(SubmitStatus::Done);
                return;
            };

            match generate_mix(&pitch, &rhythm, API_BASE_URL).await {
                Ok(body) => log::info!("mix generated: {}", body),
                Err(e) => log::error!("mix generation failed: {}", e),
            }

            // Re-enable the submit control on both paths.
            set_status.set(SubmitStatus::Done);
        });
    };

    view! {
        <form novalidate=true on:submit=on_submit>
            <div class="form-group">
                <label for="pitchFile">"Pitch reference file (.mid)"</label>
                <input
                    id="pitchFile"
                    name="pitchFile"
                    type="file"
                    required=true
                    on:change=on_pitch_change
                />
                <Show
                    when=move || errors.get().pitch_file.is_some()
                    fallback=|| view! { }
                >
                    <div class="field-error">
                        {move || errors.get().pitch_file.unwrap_or_default()}
                    </div>
                </Show>
            </div>

            <div class="form-group">
                <label for="rhythmFile">"Rhythm reference file (.mid)"</label>
                <input
                    id="rhythmFile"
                    name="rhythmFile"
                    type="file"
                    required=true
                    on:change=on_rhythm_change
                />
                <Show
                    when=move || errors.get().rhythm_file.is_some()
                    fallback=|| view! { }
                >
                    <div class="field-error">
                        {move || errors.get().rhythm_file.unwrap_or_default()}
                    </div>
                </Show>
            </div>

            <button
                type="submit"
                class="submit-button"
                prop:disabled=move || status.get().is_submitting()
            >
                {move || if status.get().is_submitting() {
                    "Generating..."
                } else {
                    "Create song"
                }}
            </button>
        </form>
    }
}
