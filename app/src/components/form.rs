use super::SearchIcon;
use leptos::prelude::*;
use param_extractor::FormState;

const PLACEHOLDER: &str = "https://example.com?param1=value1&param2=value2";

/// The URL entry form.
///
/// Every keystroke updates the input text; submitting runs the extraction
/// instead of navigating.
#[component]
pub fn UrlForm(state: RwSignal<FormState>) -> impl IntoView {
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        state.update(|state| state.set_input(value));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(FormState::submit);
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label for="url" class="block text-sm font-medium text-gray-700">
                    "URL"
                </label>
                <div class="mt-1 relative rounded-md shadow-sm">
                    <textarea
                        id="url"
                        placeholder=PLACEHOLDER
                        class="block w-full pr-10 border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500 sm:text-sm min-h-[80px] resize-y"
                        style="line-height: 1.5"
                        prop:value=move || state.with(|state| state.input().to_owned())
                        on:input=on_input
                    ></textarea>
                    <div class="absolute top-3 right-0 pr-3">
                        <SearchIcon class="h-5 w-5 text-gray-400"/>
                    </div>
                </div>
                <Show when=move || state.with(FormState::shows_error)>
                    <p class="mt-2 text-sm text-red-600">
                        {move || state.with(|state| state.error().to_owned())}
                    </p>
                </Show>
            </div>

            <button
                type="submit"
                class="w-full flex justify-center py-2 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
            >
                "Extract Parameters"
            </button>
        </form>
    }
}
