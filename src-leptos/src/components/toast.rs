use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<AppState>().toast;

    view! {
        <Show when=move || toast.get().is_some()>
            <div class="toast" role="status" on:click=move |_| toast.set(None)>
                {move || toast.get().map(|(_, message)| message).unwrap_or_default()}
            </div>
        </Show>
    }
}
