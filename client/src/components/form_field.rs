//! Labelled input bound to a string signal, with its field message.

use leptos::prelude::*;

use crate::util::form_errors::{FormErrors, FormField};

#[component]
pub fn TextField(
    label: &'static str,
    field: FormField,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label">
                {label}
                <input
                    class="field__input"
                    type=input_type
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <FieldMessage errors=errors field=field/>
            {description.map(|text| view! { <p class="field__description">{text}</p> })}
        </div>
    }
}

/// The message for `field`, if any.
#[component]
pub fn FieldMessage(errors: RwSignal<FormErrors>, field: FormField) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.get(field).is_some())>
            <p class="field__error">{move || errors.with(|e| e.message(field).unwrap_or_default())}</p>
        </Show>
    }
}
