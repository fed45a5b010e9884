use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка перед отправкой поискового запроса, мс
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Применённое значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск товаров...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    // Внешний сброс фильтра очищает и поле
    Effect::new(move |_| {
        let applied = value.get();
        if applied != input_value.get_untracked() {
            set_input_value.set(applied);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Замена таймера отменяет предыдущий
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class=move || {
                    if value.with(|v| v.trim().is_empty()) {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.with(String::is_empty)>
                <button class="search-input__clear" on:click=clear_filter title="Очистить">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
