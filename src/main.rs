mod cli;
mod config;

use cli::Args;
use config::{ConfigFile, Settings};
use sbom_dashboard::adapters::outbound::console::StderrProgressReporter;
use sbom_dashboard::adapters::outbound::embedded::EmbeddedSnapshotSource;
use sbom_dashboard::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_dashboard::application::use_cases::BuildDashboardUseCase;
use sbom_dashboard::ports::outbound::ProgressReporter;
use sbom_dashboard::shared::error::ExitCode;
use sbom_dashboard::shared::Result;
use std::process;

fn main() {
    let reporter = StderrProgressReporter::new();

    match run(&reporter) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            reporter.report_error(&format!("\n❌ An error occurred:\n\n{}", e));

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(reporter: &StderrProgressReporter) -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let config = load_config(&args, reporter)?;
    let settings = Settings::resolve(args, config)?;

    // Create adapters (Dependency Injection)
    let snapshot_source = EmbeddedSnapshotSource::new();
    let use_case = BuildDashboardUseCase::new(snapshot_source, StderrProgressReporter::new());

    let response = use_case.execute(settings.request)?;

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let rendered = formatter.format(&response.read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&rendered)?;

    if settings.fail_on_vulnerable && response.has_vulnerable_components {
        reporter.report_warning("Vulnerable components present in the rendered view");
        return Ok(ExitCode::VulnerableView);
    }

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or the one discovered in the working directory
fn load_config(args: &Args, reporter: &StderrProgressReporter) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };

    let Some(config) = config else {
        return Ok(ConfigFile::default());
    };

    for warning in config::unknown_field_warnings(&config) {
        reporter.report_warning(&warning);
    }

    Ok(config)
}
