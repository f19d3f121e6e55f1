use clap::{Parser, Subcommand};

/// Track why each dependency in the manifest is needed
#[derive(Parser, Debug)]
#[command(name = "explainer")]
#[command(version)]
#[command(about = "Attach and report human-written justifications for declared dependencies", long_about = None)]
pub struct Cli {
    /// Path to the dependency manifest (defaults to ./package.json)
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Path to the justification store; implies the separate-file store
    #[arg(short, long)]
    pub store: Option<String>,

    /// Path to a configuration file (defaults to discovering ./explainer.config.toml)
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the justification report for every declared dependency
    List,
    /// Interactively record why one declared dependency is needed
    Add {
        /// Dependency name as declared in the manifest
        name: String,
    },
    /// Remove justifications for dependencies no longer declared
    Clean,
    /// Seed empty justifications for newly declared dependencies
    Update,
    // Anything else falls through to the usage screen
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
