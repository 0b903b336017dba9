use leptos::ev;
use leptos::prelude::*;

use dhwani_core::languages::{SOURCE_LANGUAGES, TARGET_LANGUAGES};

use crate::state::AppState;

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let state = expect_context::<AppState>();
    let source_language = state.source_language;
    let target_language = state.target_language;

    let on_source_change = move |ev: ev::Event| {
        source_language.set(event_target_value(&ev));
    };

    let on_target_change = move |ev: ev::Event| {
        target_language.set(event_target_value(&ev));
    };

    view! {
        <div class="grid w-full grid-cols-1 gap-4 mb-4 sm:grid-cols-2">
            <div>
                <label class="block mb-2 font-medium text-gray-700">
                    "Source Language"
                </label>
                <select
                    class="w-full px-3 py-2 text-gray-700 bg-white border border-gray-200 rounded-lg"
                    on:change=on_source_change
                >
                    {SOURCE_LANGUAGES.iter().map(|(code, name)| {
                        let code = *code;
                        let name = *name;
                        view! {
                            <option value=code selected=move || source_language.get() == code>
                                {name}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            <div>
                <label class="block mb-2 font-medium text-gray-700">
                    "Target Language"
                </label>
                <select
                    class="w-full px-3 py-2 text-gray-700 bg-white border border-gray-200 rounded-lg"
                    on:change=on_target_change
                >
                    {TARGET_LANGUAGES.iter().map(|(code, name)| {
                        let code = *code;
                        let name = *name;
                        view! {
                            <option value=code selected=move || target_language.get() == code>
                                {name}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}
