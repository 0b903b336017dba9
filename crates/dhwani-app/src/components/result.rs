use leptos::prelude::*;

use dhwani_core::{Phase, TranslationResult};

use crate::state::AppState;

#[component]
pub fn ResultPanel(result: TranslationResult) -> impl IntoView {
    let state = expect_context::<AppState>();
    let phase = state.phase;
    let audio_file = state.audio_file;

    let translate_another = move |_| {
        audio_file.set(None);
        phase.set(Phase::Idle);
    };

    let audio_src = format!("data:audio/wav;base64,{}", result.target_audio);

    view! {
        <div class="w-full">
            <div class="w-full mb-8">
                <h3 class="block mb-2 text-gray-700">"Translated Audio"</h3>
                <audio controls class="w-full mb-4">
                    <source src=audio_src type="audio/wav"/>
                </audio>
            </div>

            <div class="w-full mb-4">
                <label class="block mb-2 text-gray-700">
                    "Original Transcription"
                </label>
                <div class="w-full p-4 bg-white border border-gray-200 rounded-lg">
                    {result.source_transcript}
                </div>
            </div>

            <div class="w-full mb-4">
                <label class="block mb-2 text-gray-700">
                    "Translated Text"
                </label>
                <div class="w-full p-4 bg-white border border-gray-200 rounded-lg">
                    {result.target_transcript}
                </div>
            </div>

            <div class="flex justify-end w-full mb-4">
                <button
                    class="text-sm italic text-right text-gray-600 transition-all hover:text-gray-800 hover:underline"
                    on:click=translate_another
                >
                    "Translate another voice >>"
                </button>
            </div>
        </div>
    }
}
