use crate::domain::user::User;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

/// In-memory user store keyed by normalized email. Accounts live for the
/// lifetime of the process; there is no persistence layer.
#[derive(Clone, Debug, Default)]
pub struct UserRepository {
    users: Arc<DashMap<String, User>>,
}

impl UserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new user. Returns `None` when the email is already taken.
    pub fn create(&self, email: &str, username: &str, password_hash: &str) -> Option<User> {
        match self.users.entry(normalize(email)) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    username: username.to_string(),
                    password_hash: password_hash.to_string(),
                    created_at: OffsetDateTime::now_utc(),
                };
                slot.insert(user.clone());
                Some(user)
            }
        }
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.get(&normalize(email)).map(|entry| entry.value().clone())
    }
}

fn normalize(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
