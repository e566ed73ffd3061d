//! Header badge counts.

use crate::api::Api;

pub const GUEST_LABEL: &str = "Guest";
pub const USER_LABEL: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badges {
    pub user_label: String,
    pub cart_items: u32,
    pub wishlist_items: u32,
}

impl Default for Badges {
    fn default() -> Self {
        Self { user_label: GUEST_LABEL.to_string(), cart_items: 0, wishlist_items: 0 }
    }
}

/// Fetches profile, cart and wishlist counts concurrently.
///
/// Anonymous sessions get the defaults without any request. Each failing
/// part falls back to its default and is only logged.
pub async fn refresh_badges(api: &Api) -> Badges {
    if !api.session().is_authenticated() {
        return Badges::default();
    }

    let (profile, cart, wishlist) = tokio::join!(api.profile(), api.cart(), api.wishlist());

    let user_label = match profile {
        Ok(profile) => [profile.full_name, profile.email]
            .into_iter()
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| USER_LABEL.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "profile badge refresh failed");
            USER_LABEL.to_string()
        },
    };
    let cart_items = cart.map(|cart| cart.total_items).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "cart badge refresh failed");
        0
    });
    let wishlist_items = wishlist.map(|w| w.items.len() as u32).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "wishlist badge refresh failed");
        0
    });

    Badges { user_label, cart_items, wishlist_items }
}
