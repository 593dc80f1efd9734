mod cli;

use clap::Parser;
use cli::{Args, Invocation};
use fleet_views::adapters::outbound::console::StderrProgressReporter;
use fleet_views::adapters::outbound::filesystem::DatasetFileReader;
use fleet_views::adapters::outbound::seed::SeedDatasetReader;
use fleet_views::application::dto::ViewRequest;
use fleet_views::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use fleet_views::application::read_models::DashboardReadModel;
use fleet_views::application::use_cases::BuildViewUseCase;
use fleet_views::config::{discover_config, load_config_from_path, ConfigFile};
use fleet_views::ports::outbound::{DatasetReader, ProgressReporter};
use fleet_views::shared::error::ExitCode;
use fleet_views::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let Invocation {
        request,
        format,
        dataset,
        output,
        quiet,
    } = args.resolve(config.as_ref())?;

    let reporter = || {
        if quiet {
            StderrProgressReporter::quiet()
        } else {
            StderrProgressReporter::new()
        }
    };

    // Create adapters (Dependency Injection) and build the read model
    let read_model = match dataset {
        Some(path) => build_view(DatasetFileReader::new(path), reporter(), request)?,
        None => build_view(SeedDatasetReader::new(), reporter(), request)?,
    };

    let progress = reporter();
    progress.report(FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format);
    let rendered = formatter.format(&read_model)?;

    let presenter_type = match output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    let completion = match &presenter_type {
        PresenterType::File(path) => format!("✅ View written to: {}", path.display()),
        PresenterType::Stdout => format!("✅ {} rendered", read_model.title),
    };
    PresenterFactory::create(presenter_type).present(&rendered)?;
    progress.report_completion(&completion);

    Ok(())
}

fn build_view<DR: DatasetReader>(
    dataset_reader: DR,
    progress_reporter: StderrProgressReporter,
    request: ViewRequest,
) -> Result<DashboardReadModel> {
    let use_case = BuildViewUseCase::new(dataset_reader, progress_reporter);
    use_case.execute(request)
}

/// An explicit config path must exist; the working-directory file is optional.
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let current_dir = std::env::current_dir()?;
            discover_config(&current_dir)
        }
    }
}
