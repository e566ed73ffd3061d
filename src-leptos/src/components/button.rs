//! Button component with variants

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Link,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn--primary",
            ButtonVariant::Secondary => "btn--secondary",
            ButtonVariant::Danger => "btn--danger",
            ButtonVariant::Link => "btn--link",
        }
    }
}

#[component]
pub fn Button(
    /// Label
    #[prop(into)]
    text: String,
    #[prop(optional)]
    variant: ButtonVariant,
    /// Shows "Please wait..." and blocks clicks while true
    #[prop(optional, into)]
    busy: Signal<bool>,
    #[prop(optional, into)]
    class: String,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    let classes = format!("btn {} {}", variant.class(), class);

    view! {
        <button
            type="button"
            class=move || if busy.get() { format!("{classes} btn--busy") } else { classes.clone() }
            disabled=move || busy.get()
            on:click=move |_| on_click()
        >
            {move || if busy.get() { "Please wait...".to_string() } else { text.clone() }}
        </button>
    }
}
