//! The demo seller record.
//!
//! Vista has no accounts; the dashboard greets a single demo user whose
//! record lives in `localStorage` so edits survive a reload.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key holding the demo user record.
pub const DEMO_USER_KEY: &str = "vista_demo_user";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "Seller".to_owned()
}

impl DemoUser {
    /// The record seeded on first visit.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            id: "demo-seller".to_owned(),
            name: "Jordan Avery".to_owned(),
            email: "jordan@vista.demo".to_owned(),
            role: default_role(),
        }
    }
}

/// Current user as seen by the dashboard.
#[derive(Clone, Debug, Default)]
pub struct UserState {
    pub user: Option<DemoUser>,
    pub loaded: bool,
}

impl UserState {
    /// Resolve the user from storage, seeding and persisting the default
    /// record when nothing usable is stored.
    #[must_use]
    pub fn load() -> Self {
        Self::resolve(storage::load_json(DEMO_USER_KEY), |user| storage::save_json(DEMO_USER_KEY, user))
    }

    fn resolve(stored: Option<DemoUser>, persist: impl FnOnce(&DemoUser)) -> Self {
        let user = stored.unwrap_or_else(|| {
            let seeded = DemoUser::seed();
            persist(&seeded);
            seeded
        });
        Self { user: Some(user), loaded: true }
    }

    /// Id sent with staging requests.
    #[must_use]
    pub fn user_id(&self) -> String {
        self.user.as_ref().map_or_else(|| DemoUser::seed().id, |u| u.id.clone())
    }
}
