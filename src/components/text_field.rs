//! Labeled text input with an inline error slot.
//!
//! DESIGN
//! ======
//! Both forms render every field through this component so local validation
//! messages and server field errors land in the same place.

use leptos::prelude::*;

/// A labeled input bound to `value`, showing `error` beneath when present.
#[component]
pub fn TextField(
    /// Visible field label.
    label: &'static str,
    /// Signal owning the input's text.
    value: RwSignal<String>,
    /// HTML input type.
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// Inline message rendered under the input.
    #[prop(optional)]
    error: Option<Memo<Option<String>>>,
    /// Invoked after each edit, before validation re-runs.
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let error_text = move || error.and_then(|memo| memo.get());

    view! {
        <label class="text-field">
            <span class="text-field__label">{label}</span>
            <input
                class="text-field__input"
                class:text-field__input--invalid=move || error_text().is_some()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(on_edit) = on_edit.as_ref() {
                        on_edit.run(());
                    }
                }
            />
            <Show when=move || error_text().is_some()>
                <p class="text-field__error">{move || error_text().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}
