use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "lcsh-annotator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start the annotator web interface
    #[arg(short = 'a', long)]
    pub start: bool,

    /// Find repos annotated with the given LCSH term
    #[arg(short, long, value_name = "TERM")]
    pub find: Option<String>,

    /// List annotated repos
    #[arg(short = 'l', long)]
    pub list_repos: bool,

    /// List LCSH terms used
    #[arg(short = 't', long)]
    pub list_terms: bool,

    /// Print some annotation statistics
    #[arg(short = 's', long)]
    pub stats: bool,

    /// Database user login
    #[arg(short = 'u', long = "user", value_name = "ACCOUNT")]
    pub account: Option<String>,

    /// Database password
    #[arg(short, long)]
    pub password: Option<String>,

    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding github.duckdb and lcsh.duckdb
    #[arg(short, long, default_value = "~/.lcsh-annotator")]
    pub data_dir: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// One or more repository identifiers or names
    pub repos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    Start {
        account: Option<String>,
        password: Option<String>,
    },

    Report {
        list_repos: bool,
        list_terms: bool,
        stats: bool,
    },

    Find {
        term: String,
    },
}

impl Cli {
    /// The work requested on the command line, in execution order.
    /// `--start` excludes everything else.
    pub fn commands(&self) -> Vec<Commands> {
        if self.start {
            return vec![Commands::Start {
                account: self.account.clone(),
                password: self.password.clone(),
            }];
        }

        let mut commands = Vec::new();
        if self.list_repos || self.list_terms || self.stats {
            commands.push(Commands::Report {
                list_repos: self.list_repos,
                list_terms: self.list_terms,
                stats: self.stats,
            });
        }
        if let Some(term) = &self.find {
            commands.push(Commands::Find { term: term.clone() });
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_takes_precedence() {
        let cli = Cli::try_parse_from(["lcsh-annotator", "-a", "-s", "-u", "me", "-p", "pw"])
            .expect("parse");

        assert_eq!(
            cli.commands(),
            vec![Commands::Start {
                account: Some("me".to_string()),
                password: Some("pw".to_string()),
            }]
        );
    }

    #[test]
    fn report_flags_combine_and_find_runs_last() {
        let cli = Cli::try_parse_from(["lcsh-annotator", "-f", "sh123", "-l", "-t"]).expect("parse");

        assert_eq!(
            cli.commands(),
            vec![
                Commands::Report {
                    list_repos: true,
                    list_terms: true,
                    stats: false,
                },
                Commands::Find {
                    term: "sh123".to_string()
                },
            ]
        );
    }

    #[test]
    fn positional_repos_are_accepted() {
        let cli = Cli::try_parse_from(["lcsh-annotator", "-s", "38116321", "973792"]).expect("parse");

        assert_eq!(cli.repos, vec!["38116321".to_string(), "973792".to_string()]);
        assert_eq!(cli.commands().len(), 1);
    }

    #[test]
    fn no_flags_means_no_commands() {
        let cli = Cli::try_parse_from(["lcsh-annotator"]).expect("parse");
        assert!(cli.commands().is_empty());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn json_format_flag() {
        let cli = Cli::try_parse_from(["lcsh-annotator", "--format", "json", "-s"]).expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
