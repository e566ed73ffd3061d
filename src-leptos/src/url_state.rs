//! Router-backed drivers for the URL-synchronized state in `grocer-client`.
//!
//! The machines decide; this module only runs their effects with browser
//! primitives. URL writes go through `use_navigate` with `replace: true`.

use gloo_timers::callback::Timeout;
use grocer_client::filter::query::to_search;
use grocer_client::filter::{Effect as FilterEffect, FilterMachine, FilterView, ParamBinding};
use grocer_client::Api;
use grocer_types::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use std::rc::Rc;

/// `pathname` plus `?query`, or the bare path for an empty query.
pub fn with_query(pathname: &str, query: &str) -> String {
    format!("{}{}", pathname, to_search(query))
}

/// Replaces the current history entry's query string, keeping the path.
pub fn use_replace_query() -> Rc<dyn Fn(&str)> {
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    Rc::new(move |query: &str| {
        let target = with_query(&pathname.get_untracked(), query);
        navigate(&target, NavigateOptions { replace: true, ..Default::default() });
    })
}

/// Catalog filter bound to the current route.
#[derive(Clone)]
pub struct CatalogDriver {
    machine: StoredValue<FilterMachine<Product>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    view: RwSignal<FilterView<Product>>,
    api: Api,
    replace_query: Rc<dyn Fn(&str)>,
}

impl CatalogDriver {
    /// Must run inside the page component: it subscribes to the route's
    /// query string and registers the unmount hook.
    pub fn mount(api: Api) -> Self {
        let driver = Self {
            machine: StoredValue::new(FilterMachine::new()),
            timer: StoredValue::new_local(None),
            view: RwSignal::new(FilterView::default()),
            api,
            replace_query: use_replace_query(),
        };

        let search = use_location().search;
        let observer = driver.clone();
        Effect::new(move |_| {
            let query = search.get();
            observer.apply(|machine| machine.observe_url(&query));
        });

        let (machine, timer) = (driver.machine, driver.timer);
        on_cleanup(move || {
            machine.try_update_value(FilterMachine::unmount);
            timer.try_update_value(Option::take);
        });

        driver
    }

    pub fn view(&self) -> RwSignal<FilterView<Product>> {
        self.view
    }

    pub fn edit_search_text(&self, text: String) {
        self.apply(|machine| machine.edit_search_text(text));
    }

    pub fn select_category(&self, category_id: String) {
        self.apply(|machine| machine.select_category(category_id));
    }

    fn apply(&self, step: impl FnOnce(&mut FilterMachine<Product>) -> Vec<FilterEffect>) {
        self.apply_boxed(Box::new(step));
    }

    fn apply_boxed(&self, step: Box<dyn FnOnce(&mut FilterMachine<Product>) -> Vec<FilterEffect> + '_>) {
        let Some(effects) = self.machine.try_update_value(step) else {
            return;
        };
        for effect in effects {
            match effect {
                FilterEffect::ScheduleDebounce { token, delay } => {
                    let driver = self.clone();
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    let timer = Timeout::new(millis, move || {
                        driver.apply(|machine| machine.debounce_elapsed(token));
                    });
                    // Dropping the previous Timeout cancels it
                    self.timer.try_update_value(|slot| *slot = Some(timer));
                },
                FilterEffect::ReplaceUrl(query) => (self.replace_query)(&query),
                FilterEffect::Fetch { ticket, query } => {
                    let driver = self.clone();
                    spawn_local(async move {
                        let outcome = driver.api.list_products(&query).await.map_err(|e| e.user_message());
                        let applied = driver
                            .machine
                            .try_update_value(|machine| machine.fetch_finished(ticket, outcome))
                            .unwrap_or(false);
                        if applied {
                            driver.publish();
                        }
                    });
                },
            }
        }
        self.publish();
    }

    fn publish(&self) {
        if let Some(view) = self.machine.try_with_value(FilterMachine::view) {
            self.view.try_set(view);
        }
    }
}

/// Binds one query parameter to a widget.
///
/// `on_hydrate` receives the parameter's value on mount and after every
/// external navigation. The returned closure writes a new value into the
/// URL, skipping the write when nothing would change.
pub fn use_param_binding(key: &'static str, on_hydrate: impl Fn(String) + 'static) -> Rc<dyn Fn(&str)> {
    let binding = StoredValue::new(ParamBinding::new(key));
    let search = use_location().search;
    Effect::new(move |_| {
        let query = search.get();
        if let Some(value) = binding.try_update_value(|b| b.observe_url(&query)).flatten() {
            on_hydrate(value);
        }
    });

    let replace_query = use_replace_query();
    Rc::new(move |value: &str| {
        if let Some(query) = binding.try_update_value(|b| b.commit(value)).flatten() {
            replace_query(&query);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/products", "q=milk"), "/products?q=milk");
        assert_eq!(with_query("/products", ""), "/products");
    }
}
