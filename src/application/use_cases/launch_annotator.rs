use std::sync::Arc;

use tracing::info;

use crate::application::{Credentials, InterfaceLauncher};
use crate::domain::DomainError;

/// Starts the web annotation interface. Both an account and a password are
/// required before anything is launched.
pub struct LaunchAnnotatorUseCase {
    launcher: Arc<dyn InterfaceLauncher>,
}

impl LaunchAnnotatorUseCase {
    pub fn new(launcher: Arc<dyn InterfaceLauncher>) -> Self {
        Self { launcher }
    }

    pub async fn execute(
        &self,
        account: Option<&str>,
        password: Option<&str>,
    ) -> Result<i32, DomainError> {
        let credentials = match (account, password) {
            (Some(account), Some(password)) if !account.is_empty() && !password.is_empty() => {
                Credentials {
                    account: account.to_string(),
                    password: password.to_string(),
                }
            }
            _ => {
                return Err(DomainError::missing_credentials(
                    "need to supply account and password to start interface",
                ))
            }
        };

        info!("Starting annotation interface as {}", credentials.account);
        self.launcher.launch(&credentials).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl InterfaceLauncher for RecordingLauncher {
        async fn launch(&self, credentials: &Credentials) -> Result<i32, DomainError> {
            self.launched
                .lock()
                .unwrap()
                .push(credentials.account.clone());
            Ok(3)
        }
    }

    #[tokio::test]
    async fn test_launch_with_credentials_returns_exit_code() {
        let launcher = Arc::new(RecordingLauncher::default());
        let use_case = LaunchAnnotatorUseCase::new(launcher.clone());

        let code = use_case.execute(Some("mhucka"), Some("secret")).await.expect("launch");

        assert_eq!(code, 3);
        assert_eq!(*launcher.launched.lock().unwrap(), vec!["mhucka".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_password_never_launches() {
        let launcher = Arc::new(RecordingLauncher::default());
        let use_case = LaunchAnnotatorUseCase::new(launcher.clone());

        let err = use_case.execute(Some("mhucka"), None).await.unwrap_err();
        assert!(err.is_missing_credentials());

        let err = use_case.execute(None, Some("secret")).await.unwrap_err();
        assert!(err.is_missing_credentials());

        let err = use_case.execute(Some(""), Some("secret")).await.unwrap_err();
        assert!(err.is_missing_credentials());

        assert!(launcher.launched.lock().unwrap().is_empty());
    }
}
