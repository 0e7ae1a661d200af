mod cli;
mod config;

use clap::Parser;
use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use helm_res::adapters::outbound::console::StderrProgressReporter;
use helm_res::adapters::outbound::filesystem::{FileSystemReader, PrerenderedManifestReader};
use helm_res::adapters::outbound::formatters::PassthroughFormatter;
use helm_res::adapters::outbound::helm::{HelmCliRenderer, DEFAULT_HELM_BIN};
use helm_res::application::dto::{OutputFormat, SummaryRequest};
use helm_res::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use helm_res::application::read_models::SummaryReadModelBuilder;
use helm_res::application::use_cases::SummarizeResourcesUseCase;
use helm_res::ports::outbound::{
    ChartRenderer, ReleaseOptions, DEFAULT_NAMESPACE, DEFAULT_RELEASE_NAME,
};
use helm_res::resource_summary::policies::{ErrorPolicy, StoragePolicy};
use helm_res::resource_summary::services::{AggregationOptions, Summary};
use helm_res::shared::error::{ExitCode, ResError};
use helm_res::shared::Result;
use helm_res::values::values_to_yaml;
use std::path::PathBuf;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
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
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Options after merging the config file under the command line
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    notes: bool,
    release: ReleaseOptions,
    lenient: bool,
    storage_policy: StoragePolicy,
    helm_bin: PathBuf,
    value_files: Vec<PathBuf>,
}

impl Settings {
    /// CLI values win; config values files are applied before `-f` files
    fn resolve(args: &Args, config: ConfigFile) -> Self {
        let format = args
            .format
            .or_else(|| config.output_format())
            .unwrap_or_default();
        let storage_policy = args
            .storage_policy
            .or_else(|| config.storage_policy())
            .unwrap_or_default();

        let mut value_files = config.values.unwrap_or_default();
        value_files.extend(args.values.iter().cloned());

        Self {
            format,
            notes: args.notes || config.notes.unwrap_or(false),
            release: ReleaseOptions::new(
                args.release
                    .clone()
                    .or(config.release)
                    .unwrap_or_else(|| DEFAULT_RELEASE_NAME.to_string()),
                args.namespace
                    .clone()
                    .or(config.namespace)
                    .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            ),
            lenient: args.lenient || config.lenient.unwrap_or(false),
            storage_policy,
            helm_bin: args
                .helm_bin
                .clone()
                .or(config.helm_bin)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HELM_BIN)),
            value_files,
        }
    }
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = &args.config {
        return load_config_from_path(path);
    }
    let cwd = std::env::current_dir()?;
    match discover_config(&cwd)? {
        Some(config) => {
            eprintln!(
                "📋 Auto-discovered config file: {}",
                cwd.join(CONFIG_FILENAME).display()
            );
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn run(args: Args) -> Result<()> {
    let settings = Settings::resolve(&args, load_config(&args)?);

    // Pick the renderer: helm, or manifests rendered ahead of time
    let (chart, renderer): (PathBuf, Box<dyn ChartRenderer>) = match (&args.rendered, &args.chart) {
        (Some(rendered), _) => (
            rendered.clone(),
            Box::new(PrerenderedManifestReader::new()) as Box<dyn ChartRenderer>,
        ),
        (None, Some(chart)) => (
            chart.clone(),
            Box::new(HelmCliRenderer::new(settings.helm_bin.clone())) as Box<dyn ChartRenderer>,
        ),
        (None, None) => {
            return Err(ResError::Validation {
                message: "a CHART or --rendered PATH is required".to_string(),
            }
            .into())
        }
    };

    // Create adapters (Dependency Injection)
    let values_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();
    let use_case = SummarizeResourcesUseCase::new(renderer, values_reader, progress_reporter);

    let options = AggregationOptions {
        include_notes: settings.notes,
        storage_policy: settings.storage_policy,
        error_policy: ErrorPolicy::from_lenient(settings.lenient),
        selected_paths: args.execute.iter().cloned().collect(),
    };
    let request = SummaryRequest::new(
        chart,
        settings.value_files.clone(),
        args.set_values.clone(),
        settings.release.clone(),
        options,
    );

    let response = use_case.execute(request)?;

    let mut output = String::new();
    if args.verbose {
        output.push_str("---\n# merged values\n");
        output.push_str(&values_to_yaml(&response.values)?);
    }

    match &response.summary {
        Summary::Rows(report) => {
            eprintln!("{}", FormatterFactory::progress_message(settings.format));
            let read_model = SummaryReadModelBuilder::build(report, &response.metadata);
            output.push_str(&FormatterFactory::create(settings.format).format(&read_model)?);
        }
        Summary::Passthrough(passthrough) => {
            output.push_str(&PassthroughFormatter::new().format(passthrough));
        }
    }

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.as_deref()));
    presenter.present(&output)?;

    Ok(())
}
