//! User Directory Port

use crate::entities::UserRecord;
use crate::error::Result;
use async_trait::async_trait;

/// User lookup by email
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// The user registered under `email`, if any
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>>;
}
