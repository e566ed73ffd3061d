//! Top bar: navigation, account label and cart/wishlist badges

use crate::app::AppState;
use crate::components::{Button, ButtonVariant};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

const VERSION: &str = env!("GIT_VERSION");

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();
    let navigate = use_navigate();

    let nav_items = [("Shop", "/products"), ("Scan", "/barcode"), ("Track order", "/track")];

    let badges = state.badges;
    let session = state.session;
    let auth = state.auth.clone();
    let on_logout = move || {
        auth.logout();
        navigate("/products", Default::default());
    };

    view! {
        <header class="site-header">
            <a href="/" class="logo">
                <span class="logo-text">"Grocer"</span>
                <span class="version">{format!("v{}", VERSION)}</span>
            </a>

            <nav class="site-nav">
                {nav_items.into_iter().map(|(label, path)| {
                    let current_path = location.pathname;
                    let is_active = move || current_path.get().starts_with(path);
                    view! {
                        <a href=path class=move || if is_active() { "nav-item active" } else { "nav-item" }>
                            {label}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class="site-account">
                <a href="/cart" class="badge-link">
                    "Cart"
                    <span class="badge">{move || badges.get().cart_items}</span>
                </a>
                <span class="badge-link" title="Wishlist">
                    "Wishlist"
                    <span class="badge">{move || badges.get().wishlist_items}</span>
                </span>
                <span class="user-label">{move || badges.get().user_label}</span>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| view! { <a href="/login" class="btn btn--primary">"Sign in"</a> }
                >
                    <Button text="Sign out" variant=ButtonVariant::Link on_click=on_logout.clone() />
                </Show>
            </div>
        </header>
    }
}
