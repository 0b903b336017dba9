use leptos::prelude::*;

use dhwani_core::Phase;

use crate::components::header::Header;
use crate::components::language_selector::LanguageSelector;
use crate::components::result::ResultPanel;
use crate::components::translate_button::TranslateButton;
use crate::components::upload::UploadPanel;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    let phase = state.phase;
    provide_context(state);

    view! {
        <div class="flex flex-col min-h-screen bg-gray-50">
            <Header/>

            <main class="flex flex-col items-center flex-1 w-full max-w-3xl gap-4 p-4 mx-auto sm:p-8">
                <h1 class="mt-4 mb-4 text-3xl font-semibold text-center text-black sm:mt-8 sm:mb-8 sm:text-4xl">
                    "Audio Translator"
                </h1>

                // The result view renders iff a translation result is held;
                // everything else (including a failed attempt) shows the
                // input-collection view.
                {move || match phase.get() {
                    Phase::Succeeded(result) => view! {
                        <ResultPanel result/>
                    }.into_any(),
                    _ => view! {
                        <div class="w-full">
                            <UploadPanel/>
                            <LanguageSelector/>
                            <TranslateButton/>
                        </div>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
