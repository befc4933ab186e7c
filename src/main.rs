use clap::{CommandFactory, Parser};
use markdownsift::application::SiftService;
use markdownsift::cli::Cli;
use markdownsift::error::SiftError;
use markdownsift::infrastructure::{ConfigFile, RawSettings, Settings};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MARKDOWNSIFT_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            if e.is_usage_error() {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() {
    // Standard output carries the rendered snippets, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), SiftError> {
    let file_config = ConfigFile::discover(cli.config.as_deref())?;
    let raw = cli.raw_settings().or(RawSettings::from(file_config));
    let settings = Settings::resolve(raw)?;

    let service = SiftService::new(settings);
    let summary = service.execute()?;
    tracing::info!(
        "Wrote {} fragment(s) under {} tag(s) from {} note(s)",
        summary.fragments,
        summary.tags,
        summary.documents
    );
    Ok(())
}
