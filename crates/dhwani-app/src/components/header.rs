use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="border-b border-gray-200 bg-white/80 backdrop-blur-sm sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <a href="/" class="text-2xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                        "Dhwani"
                    </a>
                    <span class="text-xs text-gray-500 hidden sm:inline">
                        "Speech-to-Speech Translation"
                    </span>
                </div>
            </div>
        </header>
    }
}
