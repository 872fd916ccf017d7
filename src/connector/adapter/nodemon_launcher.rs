use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::application::{Credentials, InterfaceLauncher};
use crate::domain::DomainError;

/// Runs the Node.js annotation interface under `nodemon`, passing the
/// database credentials through `MONGO_USER` and `MONGO_PASSWORD`.
pub struct NodemonLauncher {
    program: String,
    args: Vec<String>,
}

impl NodemonLauncher {
    pub fn new() -> Self {
        Self::with_command("nodemon", ["--debug", "-e", "js,hbs"])
    }

    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for NodemonLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterfaceLauncher for NodemonLauncher {
    async fn launch(&self, credentials: &Credentials) -> Result<i32, DomainError> {
        debug!("Running {} {}", self.program, self.args.join(" "));

        let status = Command::new(&self.program)
            .args(&self.args)
            .env("MONGO_USER", &credentials.account)
            .env("MONGO_PASSWORD", &credentials.password)
            .status()
            .await?;

        // No exit code means the child was killed by a signal.
        let code = status.code().unwrap_or_else(|| {
            warn!("{} terminated by signal", self.program);
            1
        });
        Ok(code)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            account: "alice".to_string(),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn test_exit_code_and_environment_are_passed_through() {
        let launcher = NodemonLauncher::with_command(
            "sh",
            [
                "-c",
                r#"[ "$MONGO_USER" = alice ] && [ "$MONGO_PASSWORD" = pw ] && exit 7; exit 1"#,
            ],
        );

        assert_eq!(launcher.launch(&credentials()).await.expect("launch"), 7);
    }

    #[tokio::test]
    async fn test_missing_program_is_io_error() {
        let launcher = NodemonLauncher::with_command("definitely-not-a-real-program-xyz", Vec::<String>::new());

        let err = launcher.launch(&credentials()).await.unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }
}
