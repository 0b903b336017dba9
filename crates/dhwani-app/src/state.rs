use leptos::prelude::*;

use dhwani_core::languages;
use dhwani_core::Phase;

/// Reactive session state shared through context. The phase signal is the
/// sole authority for which view renders; the file signal holds the
/// browser handle until a new selection or a reset replaces it.
#[derive(Clone, Copy)]
pub struct AppState {
    pub phase: RwSignal<Phase>,
    pub audio_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub source_language: RwSignal<String>,
    pub target_language: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(Phase::Idle),
            audio_file: RwSignal::new_local(None),
            source_language: RwSignal::new(languages::default_source().to_string()),
            target_language: RwSignal::new(languages::default_target().to_string()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
