//! URL-synchronized catalog filter.
//!
//! Three layers, leaves first:
//!
//! - [`query`]: the `{q, categoryId}` filter and its query-string form
//! - [`FilterMachine`]: pure state machine (committed → debounced/effective
//!   → URL) that returns [`Effect`]s instead of touching timers, the
//!   network, or the location bar
//! - `CatalogController`: runs those effects on tokio (native targets; the
//!   browser front-end drives the machine with its own timers)
//!
//! [`ParamBinding`] applies the same hydrate / last-written pattern to a
//! single query parameter.

#[cfg(not(target_arch = "wasm32"))]
mod controller;
mod machine;
mod param;
pub mod query;

#[cfg(not(target_arch = "wasm32"))]
pub use controller::{CatalogController, Navigator, ResultSource};
pub use machine::{DebounceToken, Effect, FetchTicket, FilterMachine, FilterView, DEBOUNCE};
pub use param::ParamBinding;
pub use query::FilterQuery;
