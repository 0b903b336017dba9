use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use dhwani_core::{session, ClientConfig, MediaAsset, Phase};

use crate::net::fetch::FetchTransport;
use crate::net::file::read_file_bytes;
use crate::state::AppState;

#[component]
pub fn TranslateButton() -> impl IntoView {
    let state = expect_context::<AppState>();
    let phase = state.phase;
    let audio_file = state.audio_file;
    let source_language = state.source_language;
    let target_language = state.target_language;

    let on_translate = move |_| {
        // Single flight: the button is disabled while translating, but the
        // guard holds even if the event fires anyway.
        if phase.get_untracked().is_in_flight() {
            return;
        }
        let Some(file) = audio_file.get_untracked() else {
            return;
        };
        let source = source_language.get_untracked();
        let target = target_language.get_untracked();

        phase.set(Phase::Translating);
        spawn_local(async move {
            let asset = MediaAsset {
                name: file.name(),
                media_type: file.type_(),
                byte_len: file.size() as u64,
            };
            let attempt = async move {
                let config = ClientConfig::new(option_env!("DHWANI_API_URL"))?;
                session::perform(&config, &FetchTransport, &asset, &source, &target, move || {
                    read_file_bytes(file)
                })
                .await
            };
            let next = match attempt.await {
                Ok(result) => Phase::Succeeded(result),
                Err(err) => {
                    let message = err.to_string();
                    log::error!("translation failed: {message}");
                    // Blocking notification; the input view stays up.
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                    Phase::Failed(message)
                }
            };
            phase.set(next);
        });
    };

    let is_translating = move || phase.get().is_in_flight();
    let can_translate = move || audio_file.with(|file| file.is_some()) && !is_translating();

    view! {
        <button
            class="w-full py-3 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed text-white rounded-lg font-medium text-base flex items-center justify-center gap-2"
            on:click=on_translate
            disabled=move || !can_translate()
        >
            {move || {
                if is_translating() {
                    Some(view! {
                        <span class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></span>
                    })
                } else {
                    None
                }
            }}
            {move || if is_translating() { "Translating..." } else { "Translate" }}
        </button>
    }
}
