//! In-memory user directory
//!
//! Seeded from a JSON file holding an array of user records:
//!
//! ```json
//! [{"id": "1000000000", "email": "john@example.com", "name": "John Doe",
//!   "password": "$argon2id$v=19$m=19456,t=2,p=1$..."}]
//! ```

use async_trait::async_trait;
use hsa_domain::entities::UserRecord;
use hsa_domain::error::{Error, Result};
use hsa_domain::ports::UserDirectory;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Demo account used when no directory file is configured
///
/// The password is `Password123!`.
const DEMO_USER: (&str, &str, &str, &str) = (
    "1000000000",
    "john@example.com",
    "John Doe",
    "$argon2id$v=19$m=19456,t=2,p=1$Op394ZJ1DZ6r6/RZxOu2QA$ZA+dtxmyDg87OIlD3zrYxSfATm0v8QRTXrCnUmN1duI",
);

/// Read-only user directory keyed by email
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserDirectory {
    /// Directory holding only the built-in demo account
    pub fn demo() -> Self {
        let (id, email, name, hash) = DEMO_USER;
        let record = UserRecord {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash: hash.to_string(),
            role: None,
        };
        Self {
            users: HashMap::from([(record.email.clone(), record)]),
        }
    }

    /// Build from records, rejecting duplicate emails
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Result<Self> {
        let mut users = HashMap::new();
        for record in records {
            if let Some(previous) = users.insert(record.email.clone(), record) {
                return Err(Error::configuration(format!(
                    "Duplicate user email in directory: {}",
                    previous.email
                )));
            }
        }
        Ok(Self { users })
    }

    /// Load from a JSON file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::configuration_with_source(
                format!("Failed to read user directory {}", path.display()),
                e,
            )
        })?;

        let records: Vec<UserRecord> = serde_json::from_str(&content).map_err(|e| {
            Error::configuration_with_source(
                format!("Failed to parse user directory {}", path.display()),
                e,
            )
        })?;

        let directory = Self::from_records(records)?;
        info!(
            users = directory.len(),
            path = %path.display(),
            "User directory loaded"
        );
        Ok(directory)
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(self.users.get(email).cloned())
    }
}
