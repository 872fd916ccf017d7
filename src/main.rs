use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lcsh_annotator::{
    Cli, Commands, Container, ContainerConfig, LaunchAnnotatorUseCase, NodemonLauncher, Router,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if !cli.repos.is_empty() {
        debug!("Ignoring repository identifiers: {}", cli.repos.join(", "));
    }

    let commands = cli.commands();
    if commands.is_empty() {
        println!("Nothing to do. Run with --help to see the available options.");
        return Ok(());
    }

    // The web interface replaces any reporting; exit with its status.
    if let Some(Commands::Start { account, password }) = commands.first() {
        let use_case = LaunchAnnotatorUseCase::new(Arc::new(NodemonLauncher::new()));
        let code = use_case
            .execute(account.as_deref(), password.as_deref())
            .await?;
        println!("***");
        println!("Don't forget to manually kill off any remaining node processes");
        println!("***");
        std::process::exit(code);
    }

    let container = Container::new(ContainerConfig {
        data_dir: expand_tilde(&cli.data_dir),
        format: cli.format,
    })?;
    let router = Router::new(&container);

    for command in commands {
        let output = router.route(command).await?;
        println!("{}", output);
    }

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn expand_tilde_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/var/lib/annotator"), "/var/lib/annotator");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let res = Cli::try_parse_from(["lcsh-annotator", "--use-mongo"]);
        assert!(res.is_err(), "--use-mongo should not be a valid flag");
    }
}
