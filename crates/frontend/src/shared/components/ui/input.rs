use leptos::prelude::*;

/// Text input with label.
///
/// The value is passed through as typed; numeric fields are parsed later by
/// the catalog query, not here.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Hint for mobile keyboards, e.g. "decimal"
    #[prop(optional, into)]
    inputmode: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="text"
                inputmode=move || inputmode.get().unwrap_or_default()
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
