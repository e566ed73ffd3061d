//! Order tracking, bound to `?orderId=`

use crate::app::AppState;
use crate::url_state::use_param_binding;
use grocer_types::OrderTracking;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

#[component]
pub fn TrackOrder() -> impl IntoView {
    let state = expect_context::<AppState>();
    let order_id = RwSignal::new(String::new());
    let tracking = RwSignal::new(Option::<OrderTracking>::None);
    let error = RwSignal::new(Option::<String>::None);
    let latest = StoredValue::new(0u64);

    let api = state.api.clone();
    let session = state.session;
    let fetch = move |id: String| {
        let id = id.trim().to_string();
        tracking.set(None);
        error.set(None);
        if id.is_empty() {
            return;
        }
        if !session.get_untracked().is_authenticated() {
            error.set(Some("Sign in to track your orders.".to_string()));
            return;
        }
        let Some(ticket) = latest.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let outcome = api.track_order(&id).await;
            if latest.try_with_value(|n| *n) != Some(ticket) {
                return;
            }
            match outcome {
                Ok(found) => {
                    tracking.try_set(Some(found));
                },
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                },
            }
        });
    };

    let hydrate_fetch = fetch.clone();
    let commit = use_param_binding("orderId", move |value| {
        order_id.set(value.clone());
        hydrate_fetch(value);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = order_id.get_untracked();
        commit(value.trim());
        fetch(value);
    };

    view! {
        <Title text="Track order" />
        <section class="page track-page">
            <form class="inline-form" on:submit=on_submit>
                <input
                    class="form-input"
                    placeholder="Order number"
                    prop:value=move || order_id.get()
                    on:input=move |ev| order_id.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Track"</button>
            </form>

            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || tracking.get().map(|found| {
                let last_update = found
                    .latest()
                    .and_then(|change| change.timestamp)
                    .map(|t| format!("Last update {}", t.format("%Y-%m-%d %H:%M")));
                let mut history = found.history.clone();
                history.sort_by_key(|change| change.timestamp);
                view! {
                    <div class="tracking-card">
                        <h2>{format!("Order {}", found.order_id)}</h2>
                        <p class="tracking-status">{found.status.clone()}</p>
                        {last_update.map(|text| view! { <p class="muted">{text}</p> })}
                        <ol class="tracking-history">
                            {history.into_iter().map(|change| {
                                let at = change
                                    .timestamp
                                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                                    .unwrap_or_default();
                                view! {
                                    <li>
                                        <span class="tracking-time">{at}</span>
                                        <span class="tracking-step">{change.status}</span>
                                        <span class="tracking-note">{change.note}</span>
                                    </li>
                                }
                            }).collect_view()}
                        </ol>
                    </div>
                }
            })}
        </section>
    }
}
