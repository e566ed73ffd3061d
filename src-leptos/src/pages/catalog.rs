//! Product catalog with URL-synchronized search and category filter

use crate::app::AppState;
use crate::components::ProductCard;
use crate::url_state::CatalogDriver;
use grocer_types::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

#[component]
pub fn Catalog() -> impl IntoView {
    let state = expect_context::<AppState>();
    let driver = CatalogDriver::mount(state.api.clone());
    let filter = driver.view();
    let categories = RwSignal::new(Vec::<Category>::new());

    let api = state.api.clone();
    spawn_local(async move {
        match api.list_categories().await {
            Ok(list) => {
                categories.try_set(list);
            },
            Err(e) => log::warn!("Failed to load categories: {}", e),
        }
    });

    let search_driver = driver.clone();
    let on_search = move |ev: leptos::ev::Event| search_driver.edit_search_text(event_target_value(&ev));
    let on_category = move |ev: leptos::ev::Event| driver.select_category(event_target_value(&ev));

    view! {
        <Title text="Shop" />
        <section class="page catalog-page">
            <div class="filter-bar">
                <input
                    type="search"
                    class="form-input"
                    placeholder="Search products"
                    prop:value=move || filter.get().committed.search_text
                    on:input=on_search
                />
                <select class="form-select" on:change=on_category>
                    <option value="" selected=move || filter.get().committed.category_id.is_empty()>
                        "All categories"
                    </option>
                    <For each=move || categories.get() key=|category| category.id.clone() let:category>
                        {
                            let id = category.id.clone();
                            let selected_id = id.clone();
                            view! {
                                <option value=id selected=move || filter.get().committed.category_id == selected_id>
                                    {category.name.clone()}
                                </option>
                            }
                        }
                    </For>
                </select>
            </div>

            {move || {
                let current = filter.get();
                if let Some(message) = current.error {
                    return view! { <div class="alert alert--error">{message}</div> }.into_any();
                }
                if current.results.is_empty() {
                    let text = if current.loading { "Loading..." } else { "No products match your search." };
                    return view! { <p class="muted">{text}</p> }.into_any();
                }
                view! {
                    <div class=if current.loading { "product-grid product-grid--stale" } else { "product-grid" }>
                        {current.results.into_iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}
