use leptos::prelude::*;
use param_extractor::FormState;

/// One row per extracted parameter, in the order they were found.
#[component]
pub fn ParamsList(state: RwSignal<FormState>) -> impl IntoView {
    view! {
        <div class="mt-8">
            <h2 class="text-lg font-medium text-gray-900 mb-4">"Parameters Found:"</h2>
            <div class="bg-gray-50 rounded-lg overflow-hidden">
                <dl class="divide-y divide-gray-200">
                    <For
                        each=move || state.with(|state| state.params().clone())
                        // a changed value for the same name must re-render its row
                        key=|param| param.clone()
                        children=move |(name, value): (String, String)| {
                            view! {
                                <div class="px-4 py-3 flex flex-col sm:flex-row">
                                    <dt class="text-sm font-medium text-gray-500 break-all sm:w-1/3">
                                        {name}
                                    </dt>
                                    <dd class="mt-1 text-sm text-gray-900 break-all sm:mt-0 sm:w-2/3">
                                        {value}
                                    </dd>
                                </div>
                            }
                        }
                    />
                </dl>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyNotice() -> impl IntoView {
    view! {
        <div class="mt-8 text-center text-gray-500">
            "No parameters found in the URL"
        </div>
    }
}
