use clap::CommandFactory;
use explainer::adapters::outbound::console::{ConsoleReportSink, StdinPrompt};
use explainer::adapters::outbound::filesystem::{
    EmbeddedManifestStore, FileSystemManifestReader, JsonFileStore,
};
use explainer::application::dto::{AddRequest, ManifestRequest};
use explainer::application::use_cases::{
    AddJustificationUseCase, CleanStoreUseCase, ListJustificationsUseCase, UpdateStoreUseCase,
};
use explainer::cli::{Cli, Command};
use explainer::config::{self, ExplainerConfig, StoreLocation};
use explainer::ports::outbound::JustificationStore;
use explainer::shared::error::{ExitCode, ExplainerError};
use explainer::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    // Resolve configuration: explicit --config path, or discovery in the
    // working directory, merged with CLI options over defaults.
    let file_config = match cli.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = ExplainerConfig::resolve(
        cli.manifest.as_deref(),
        cli.store.as_deref(),
        file_config,
    );

    // Choose the store adapter by configured location (Dependency Injection)
    match settings.store_location {
        StoreLocation::Separate => dispatch(
            cli,
            &settings,
            JsonFileStore::new(settings.store_path.clone()),
        ),
        StoreLocation::Manifest => dispatch(
            cli,
            &settings,
            EmbeddedManifestStore::new(settings.manifest_path.clone()),
        ),
    }
}

fn dispatch<ST: JustificationStore>(
    cli: &Cli,
    settings: &ExplainerConfig,
    store: ST,
) -> Result<ExitCode> {
    let manifest_reader = FileSystemManifestReader::new(settings.include_peer_dependencies);
    let report_sink = ConsoleReportSink::new();

    match &cli.command {
        Some(Command::List) => {
            let use_case = ListJustificationsUseCase::new(manifest_reader, store, report_sink);
            use_case.execute(&ManifestRequest::new(settings.manifest_path.clone()))?;
        }
        Some(Command::Add { name }) => {
            let use_case = AddJustificationUseCase::new(
                manifest_reader,
                store,
                report_sink,
                StdinPrompt::new(),
            );
            use_case.execute(&AddRequest::new(
                settings.manifest_path.clone(),
                name.clone(),
            ))?;
        }
        Some(Command::Clean) => {
            let use_case = CleanStoreUseCase::new(manifest_reader, store, report_sink);
            use_case.execute(&ManifestRequest::new(settings.manifest_path.clone()))?;
        }
        Some(Command::Update) => {
            let use_case = UpdateStoreUseCase::new(manifest_reader, store, report_sink);
            use_case.execute(&ManifestRequest::new(settings.manifest_path.clone()))?;
        }
        // Unknown or missing commands are not an error condition: show usage.
        Some(Command::Unknown(_)) | None => print_usage()?,
    }

    Ok(ExitCode::Success)
}

fn print_usage() -> Result<()> {
    Cli::command()
        .print_help()
        .map_err(|e| anyhow::anyhow!("Failed to print usage: {}", e))?;
    println!();
    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ExplainerError>() {
        Some(ExplainerError::UnknownDependency { .. }) => ExitCode::ValidationFailure,
        _ => ExitCode::ApplicationError,
    }
}
