//! Tokio driver for [`FilterMachine`].

use super::machine::{Effect, FilterMachine, FilterView, DEBOUNCE};
use super::query::FilterQuery;
use crate::api::Api;
use crate::error::ClientError;
use async_trait::async_trait;
use grocer_types::Product;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Where filtered results come from.
#[async_trait]
pub trait ResultSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    async fn fetch(&self, query: &FilterQuery) -> Result<Vec<Self::Item>, ClientError>;
}

#[async_trait]
impl ResultSource for Api {
    type Item = Product;

    async fn fetch(&self, query: &FilterQuery) -> Result<Vec<Product>, ClientError> {
        self.list_products(query).await
    }
}

/// The location bar.
pub trait Navigator: Send + Sync + 'static {
    /// Replaces the current history entry's query string (no leading `?`).
    fn replace_query(&self, query: &str);
}

struct Shared<S: ResultSource, N> {
    machine: Mutex<FilterMachine<S::Item>>,
    timer: Mutex<Option<JoinHandle<()>>>,
    source: S,
    navigator: N,
    view: watch::Sender<FilterView<S::Item>>,
}

/// Runs the catalog filter: one debounce task at a time, one task per
/// fetch, and a [`watch`] channel carrying what the view should render.
///
/// Fetches that become stale are left to finish; the machine drops their
/// results.
pub struct CatalogController<S: ResultSource, N: Navigator> {
    shared: Arc<Shared<S, N>>,
}

impl<S: ResultSource, N: Navigator> Clone for CatalogController<S, N> {
    fn clone(&self) -> Self {
        Self { shared: Arc::clone(&self.shared) }
    }
}

impl<S: ResultSource, N: Navigator> CatalogController<S, N> {
    pub fn new(source: S, navigator: N) -> Self {
        Self::with_debounce(source, navigator, DEBOUNCE)
    }

    pub fn with_debounce(source: S, navigator: N, delay: Duration) -> Self {
        let (view, _) = watch::channel(FilterView::default());
        Self {
            shared: Arc::new(Shared {
                machine: Mutex::new(FilterMachine::with_debounce(delay)),
                timer: Mutex::new(None),
                source,
                navigator,
                view,
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FilterView<S::Item>> {
        self.shared.view.subscribe()
    }

    pub fn view(&self) -> FilterView<S::Item> {
        self.shared.view.borrow().clone()
    }

    /// Call on mount and after every navigation.
    pub fn url_changed(&self, query: &str) {
        let effects = self.shared.machine.lock().observe_url(query);
        self.run(effects);
    }

    pub fn edit_search_text(&self, text: impl Into<String>) {
        let effects = self.shared.machine.lock().edit_search_text(text);
        self.run(effects);
    }

    pub fn select_category(&self, category_id: impl Into<String>) {
        let effects = self.shared.machine.lock().select_category(category_id);
        self.run(effects);
    }

    /// Stops the debounce timer; in-flight fetches finish unobserved.
    pub fn unmount(&self) {
        self.shared.machine.lock().unmount();
        if let Some(timer) = self.shared.timer.lock().take() {
            timer.abort();
        }
        self.publish();
    }

    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { token, delay } => {
                    let this = self.clone();
                    let timer = tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let effects = this.shared.machine.lock().debounce_elapsed(token);
                        this.run(effects);
                    });
                    if let Some(previous) = self.shared.timer.lock().replace(timer) {
                        previous.abort();
                    }
                },
                Effect::ReplaceUrl(query) => self.shared.navigator.replace_query(&query),
                Effect::Fetch { ticket, query } => {
                    let this = self.clone();
                    tokio::spawn(async move {
                        let outcome = this
                            .shared
                            .source
                            .fetch(&query)
                            .await
                            .map_err(|e| e.user_message());
                        let applied = this.shared.machine.lock().fetch_finished(ticket, outcome);
                        if applied {
                            this.publish();
                        }
                    });
                },
            }
        }
        self.publish();
    }

    fn publish(&self) {
        let view = self.shared.machine.lock().view();
        self.shared.view.send_replace(view);
    }
}

#[cfg(test)]
mod tests;
