use async_trait::async_trait;

use crate::domain::DomainError;

/// Account and password handed to the web annotation interface.
#[derive(Clone)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account", &self.account)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Starts the external annotation UI and waits for it to exit.
#[async_trait]
pub trait InterfaceLauncher: Send + Sync {
    /// Returns the exit code of the launched process.
    async fn launch(&self, credentials: &Credentials) -> Result<i32, DomainError>;
}
