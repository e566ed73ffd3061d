//! Cart with quantity edits and checkout

use crate::app::AppState;
use crate::components::{Button, ButtonVariant};
use grocer_client::ClientError;
use grocer_types::{Cart as CartModel, CartItem, CreateOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use std::future::Future;

/// Reactive cart state plus the mutations the page offers.
#[derive(Clone)]
struct CartActions {
    state: AppState,
    cart: RwSignal<Option<CartModel>>,
    error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
    last_order: RwSignal<Option<String>>,
}

impl CartActions {
    fn new(state: AppState) -> Self {
        Self {
            state,
            cart: RwSignal::new(None),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            last_order: RwSignal::new(None),
        }
    }

    fn reload(&self) {
        if !self.state.session.get_untracked().is_authenticated() {
            self.cart.set(None);
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            match this.state.api.cart().await {
                Ok(cart) => {
                    this.cart.try_set(Some(cart));
                    this.error.try_set(None);
                },
                Err(e) => {
                    this.error.try_set(Some(e.user_message()));
                },
            }
        });
    }

    /// Runs one mutation, then reloads the cart and the header counts.
    fn run<T>(&self, call: impl Future<Output = Result<T, ClientError>> + 'static, done: &'static str) {
        if self.busy.get_untracked() {
            return;
        }
        self.busy.set(true);
        let this = self.clone();
        spawn_local(async move {
            match call.await {
                Ok(_) => this.state.notify(done),
                Err(e) => this.state.notify(e.user_message()),
            }
            this.busy.try_set(false);
            this.reload();
            this.state.refresh_badges();
        });
    }

    fn set_quantity(&self, product_id: String, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else {
            let api = self.state.api.clone();
            self.run(async move { api.update_cart_item(&product_id, quantity).await }, "Cart updated");
        }
    }

    fn remove(&self, product_id: String) {
        let api = self.state.api.clone();
        self.run(async move { api.remove_from_cart(&product_id).await }, "Removed from cart");
    }

    fn clear(&self) {
        let api = self.state.api.clone();
        self.run(async move { api.clear_cart().await }, "Cart cleared");
    }

    fn checkout(&self) {
        let Some(cart) = self.cart.get_untracked() else {
            return;
        };
        let order = CreateOrder::new(cart.orderable_lines());
        if order.items.is_empty() {
            self.state.notify("Nothing in stock to order");
            return;
        }
        let api = self.state.api.clone();
        let last_order = self.last_order;
        self.run(
            async move {
                let receipt = api.create_order(&order).await?;
                if let Err(e) = api.clear_cart().await {
                    log::warn!("Order {} placed but the cart was not cleared: {}", receipt.id, e);
                }
                last_order.try_set(Some(receipt.id.clone()));
                Ok(receipt)
            },
            "Order placed",
        );
    }
}

#[component]
fn CartRow(item: CartItem, actions: CartActions) -> impl IntoView {
    let id = item.product_id.clone();
    let quantity = item.quantity;
    let (dec, inc, del) = (actions.clone(), actions.clone(), actions);
    let (dec_id, inc_id, del_id) = (id.clone(), id.clone(), id);

    view! {
        <tr class=if item.in_stock { "" } else { "out-of-stock" }>
            <td>{item.name}</td>
            <td class="num">{format!("{:.2}", item.price)}</td>
            <td class="qty">
                <button class="btn btn--small" on:click=move |_| dec.set_quantity(dec_id.clone(), quantity.saturating_sub(1))>"-"</button>
                <span>{quantity}</span>
                <button class="btn btn--small" on:click=move |_| inc.set_quantity(inc_id.clone(), quantity.saturating_add(1))>"+"</button>
            </td>
            <td class="num">{format!("{:.2}", item.subtotal)}</td>
            <td>
                <button class="btn btn--link" on:click=move |_| del.remove(del_id.clone())>"Remove"</button>
            </td>
        </tr>
    }
}

#[component]
pub fn Cart() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.session;
    let actions = CartActions::new(state);

    // Reload on mount and whenever the session changes
    let loader = actions.clone();
    Effect::new(move |_| {
        session.track();
        loader.reload();
    });

    let (cart, error, busy, last_order) = (actions.cart, actions.error, actions.busy, actions.last_order);
    let rows_actions = actions.clone();
    let clear_actions = actions.clone();
    let checkout_actions = actions;

    view! {
        <Title text="Cart" />
        <section class="page cart-page">
            <Show when=move || session.get().is_authenticated() fallback=|| view! {
                <p class="muted">"Sign in to see your cart. " <a href="/login">"Sign in"</a></p>
            }>
                {move || last_order.get().map(|id| {
                    let href = format!("/track?orderId={id}");
                    view! {
                        <div class="alert alert--success">
                            {format!("Order {id} placed. ")}
                            <a href=href>"Track it"</a>
                        </div>
                    }
                })}
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                {
                    let rows_actions = rows_actions.clone();
                    let clear_actions = clear_actions.clone();
                    let checkout_actions = checkout_actions.clone();
                    move || match cart.get() {
                        None => view! { <p class="muted">"Loading cart..."</p> }.into_any(),
                        Some(model) if model.is_empty() => view! { <p class="muted">"Your cart is empty."</p> }.into_any(),
                        Some(model) => {
                            let rows = model
                                .items
                                .into_iter()
                                .map(|item| view! { <CartRow item=item actions=rows_actions.clone() /> })
                                .collect_view();
                            let clear_actions = clear_actions.clone();
                            let checkout_actions = checkout_actions.clone();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr><th>"Item"</th><th>"Price"</th><th>"Qty"</th><th>"Subtotal"</th><th></th></tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                                <div class="cart-summary">
                                    <span>{format!("{} items", model.total_items)}</span>
                                    <strong>{format!("Total {:.2}", model.total_price)}</strong>
                                </div>
                                <div class="cart-actions">
                                    <Button
                                        text="Clear cart"
                                        variant=ButtonVariant::Danger
                                        busy=busy
                                        on_click=move || clear_actions.clear()
                                    />
                                    <Button text="Place order" busy=busy on_click=move || checkout_actions.checkout() />
                                </div>
                            }
                            .into_any()
                        },
                    }
                }
            </Show>
        </section>
    }
}
