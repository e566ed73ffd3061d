//! Catalog tile with add-to-cart and wishlist actions

use crate::app::AppState;
use crate::components::{Button, ButtonVariant};
use grocer_types::{normalize_image_url, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn page_scheme() -> String {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .unwrap_or_else(|| "https:".to_string())
}

fn format_price(product: &Product) -> String {
    match product.price {
        Some(price) if product.currency.is_empty() => format!("{price:.2}"),
        Some(price) => format!("{price:.2} {}", product.currency),
        None => "Price on request".to_string(),
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let state = expect_context::<AppState>();
    let image = normalize_image_url(&product.image_url, &page_scheme());
    let price = format_price(&product);
    let in_stock = product.in_stock();
    let location = product.location().map(|loc| loc.to_string());
    let busy = RwSignal::new(false);

    let product_id = product.id.clone();
    let cart_state = state.clone();
    let add_to_cart = move |_: leptos::ev::MouseEvent| {
        if !cart_state.session.get_untracked().is_authenticated() {
            cart_state.notify("Sign in to add items to your cart");
            return;
        }
        busy.set(true);
        let state = cart_state.clone();
        let product_id = product_id.clone();
        spawn_local(async move {
            match state.api.add_to_cart(&product_id, 1).await {
                Ok(_) => {
                    state.notify("Added to cart");
                    state.refresh_badges();
                },
                Err(e) => state.notify(e.user_message()),
            }
            busy.set(false);
        });
    };

    let product_id = product.id.clone();
    let add_to_wishlist = move || {
        if !state.session.get_untracked().is_authenticated() {
            state.notify("Sign in to use your wishlist");
            return;
        }
        let state = state.clone();
        let product_id = product_id.clone();
        spawn_local(async move {
            match state.api.add_to_wishlist(&product_id).await {
                Ok(_) => {
                    state.notify("Saved to wishlist");
                    state.refresh_badges();
                },
                Err(e) => state.notify(e.user_message()),
            }
        });
    };

    let image_view = (!image.is_empty()).then(|| {
        view! { <img class="product-image" src=image alt=product.name.clone() loading="lazy" /> }
    });

    view! {
        <article class="product-card">
            {image_view}
            <h3 class="product-name">{product.name.clone()}</h3>
            <p class="product-price">{price}</p>
            {location.map(|loc| view! { <p class="product-location">{loc}</p> })}
            <p class=if in_stock { "stock stock--in" } else { "stock stock--out" }>
                {if in_stock { "In stock" } else { "Out of stock" }}
            </p>
            <div class="product-actions">
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get() || !in_stock
                    on:click=add_to_cart
                >
                    "Add to cart"
                </button>
                <Button text="♡" variant=ButtonVariant::Secondary on_click=add_to_wishlist />
            </div>
        </article>
    }
}
