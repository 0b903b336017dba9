use leptos::ev;
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub fn UploadPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let audio_file = state.audio_file;

    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        audio_file.set(file);
    };

    view! {
        <div class="w-full mb-4">
            <label class="block mb-2 font-medium text-gray-700">
                "Upload Audio File"
            </label>
            <div class="flex flex-col items-center w-full gap-2 px-3 py-2 bg-white border border-gray-200 rounded-lg sm:flex-row">
                <input
                    type="file"
                    accept="audio/*"
                    on:change=on_change
                    class="hidden"
                    id="audio-upload"
                />
                <label
                    for="audio-upload"
                    class="w-full px-4 py-1 text-center text-gray-700 transition-colors bg-gray-100 rounded-full cursor-pointer sm:w-auto hover:bg-gray-200"
                >
                    "Choose file"
                </label>
                {move || {
                    audio_file.with(|file| {
                        file.as_ref().map(|file| {
                            view! {
                                <span class="text-sm text-gray-600 truncate">{file.name()}</span>
                            }
                        })
                    })
                }}
            </div>
        </div>
    }
}
