//! Barcode lookup, bound to `?barcode=`

use crate::app::AppState;
use crate::components::ProductCard;
use crate::url_state::use_param_binding;
use grocer_types::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

#[component]
pub fn Barcode() -> impl IntoView {
    let api = expect_context::<AppState>().api;
    let code = RwSignal::new(String::new());
    // None until the first lookup
    let result = RwSignal::new(Option::<Result<Option<Product>, String>>::None);
    let busy = RwSignal::new(false);
    let latest = StoredValue::new(0u64);

    let lookup = move |value: String| {
        let value = value.trim().to_string();
        if value.is_empty() {
            result.set(None);
            return;
        }
        let Some(ticket) = latest.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            let outcome = api.lookup_barcode(&value).await.map_err(|e| e.user_message());
            // A newer lookup owns the result
            if latest.try_with_value(|n| *n) == Some(ticket) {
                result.try_set(Some(outcome));
                busy.try_set(false);
            }
        });
    };

    let hydrate_lookup = lookup.clone();
    let commit = use_param_binding("barcode", move |value| {
        code.set(value.clone());
        hydrate_lookup(value);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = code.get_untracked();
        commit(value.trim());
        lookup(value);
    };

    view! {
        <Title text="Scan" />
        <section class="page barcode-page">
            <form class="inline-form" on:submit=on_submit>
                <input
                    class="form-input"
                    inputmode="numeric"
                    placeholder="Barcode"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>"Look up"</button>
            </form>

            {move || match result.get() {
                None => view! { <p class="muted">"Scan or type a barcode to find a product."</p> }.into_any(),
                Some(Ok(Some(product))) => view! { <ProductCard product=product /> }.into_any(),
                Some(Ok(None)) => view! { <p class="muted">"No product found for this barcode."</p> }.into_any(),
                Some(Err(message)) => view! { <div class="alert alert--error">{message}</div> }.into_any(),
            }}
        </section>
    }
}
