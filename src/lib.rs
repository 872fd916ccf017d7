pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    Credentials, InterfaceLauncher, LaunchAnnotatorUseCase, ListAnnotatedRepositoriesUseCase,
    Reporter, RepositoryStore, RepositoryView, SearchByTermUseCase, StatsView, TermView,
    VocabularyLookup, VocabularyStore,
};

pub use cli::{Cli, Commands, OutputFormat};

pub use connector::{
    Container, ContainerConfig, DuckdbRepositoryStore, DuckdbVocabularyStore,
    InMemoryRepositoryStore, InMemoryVocabularyStore, NodemonLauncher, Router,
};

pub use domain::{
    summarize, validate_term_id, AnnotatedRepository, AnnotationSummary, DomainError,
    VocabularyTerm,
};
