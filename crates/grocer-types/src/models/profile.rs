//! Profile model.

use serde::{Deserialize, Serialize};

/// Response of `GET /profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub orders_count: u32,
}

impl Profile {
    /// Staff members see the back-office panel.
    pub fn is_staff(&self) -> bool {
        self.role.eq_ignore_ascii_case("staff")
    }
}
