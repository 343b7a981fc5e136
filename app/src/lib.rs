use leptos::prelude::*;
use param_extractor::FormState;

mod components;
pub use components::*;

/// The whole extractor page.
///
/// Owns the [`FormState`] and hands it to the form and the result views.
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(FormState::new());

    view! {
        <div class="min-h-screen bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-3xl mx-auto">
                <header class="text-center mb-8">
                    <LinkIcon class="mx-auto h-12 w-12 text-blue-500"/>
                    <h1 class="mt-3 text-3xl font-bold text-gray-900">
                        "URL Parameter Extractor"
                    </h1>
                    <p class="mt-2 text-gray-600">
                        "Enter a URL to extract and analyze its query parameters"
                    </p>
                </header>

                <div class="bg-white shadow rounded-lg p-6">
                    <UrlForm state/>
                    <Show when=move || state.with(FormState::shows_params)>
                        <ParamsList state/>
                    </Show>
                    <Show when=move || state.with(FormState::shows_empty_notice)>
                        <EmptyNotice/>
                    </Show>
                </div>
            </div>
        </div>
    }
}
