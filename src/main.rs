use dep_matrix::adapters::outbound::console::StderrProgressReporter;
use dep_matrix::adapters::outbound::filesystem::{
    FileSystemMatrixStore, FileSystemReader, StdoutPresenter,
};
use dep_matrix::adapters::outbound::formatters::MarkdownFormatter;
use dep_matrix::adapters::outbound::network::AssetReaderRouter;
use dep_matrix::application::dto::{UpdateMatrixRequest, VerifyMatrixRequest};
use dep_matrix::application::factories::PresenterFactory;
use dep_matrix::application::use_cases::{
    split_commit_messages, CollectUpdatesUseCase, FindVersionUseCase, RenderMatrixUseCase,
    UpdateMatrixUseCase, VerifyMatrixUseCase,
};
use dep_matrix::cli::{Args, Command, UpdateArgs};
use dep_matrix::config::{
    discover_config, load_config_from_path, ConfigFile, Settings,
    SettingsOverrides,
};
use dep_matrix::matrix_tracking::domain::DependencyUpdate;
use dep_matrix::matrix_tracking::services::DependencyMessageParser;
use dep_matrix::ports::outbound::{OutputPresenter, ProgressReporter};
use dep_matrix::shared::error::{ExitCode, MatrixError};
use dep_matrix::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();
    let reporter = if args.no_color {
        StderrProgressReporter::plain()
    } else {
        StderrProgressReporter::new()
    };

    let exit_code = match run(args, reporter) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let exit_code = ExitCode::for_error(&e);
            if exit_code == ExitCode::DriftDetected {
                reporter.report_error("\n❌ Dependency matrix drift detected:\n");
            } else {
                reporter.report_error("\n❌ An error occurred:\n");
            }
            reporter.report_error(&e.to_string());

            // Display error chain
            for cause in e.chain().skip(1) {
                reporter.report_error(&format!("\nCaused by: {}", cause));
            }
            eprintln!();
            exit_code
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args, reporter: StderrProgressReporter) -> Result<()> {
    let config = load_config(&args, &reporter)?;

    match args.command {
        Command::Parse { message, format } => {
            let output = match DependencyMessageParser::parse(&message)? {
                Some(parsed) => format.render(&parsed)?,
                None => "not a dependency update message\n".to_string(),
            };
            StdoutPresenter::new().present(&output)?;
        }

        Command::Update(update_args) => run_update(update_args, config.as_ref(), reporter)?,

        Command::Verify { dir } => {
            validate_repo_dir(&dir)?;
            let use_case = VerifyMatrixUseCase::new(FileSystemMatrixStore::new(), reporter);
            let response = use_case.execute(VerifyMatrixRequest::new(dir))?;
            if response.matrix_found {
                reporter.report_completion(&format!(
                    "✅ Dependency matrix is consistent ({} dependencies)",
                    response.checked
                ));
            }
        }

        Command::Render { dir, markdown_file } => {
            validate_repo_dir(&dir)?;
            let settings = Settings::resolve(
                config.as_ref(),
                &SettingsOverrides {
                    markdown_file,
                    ..Default::default()
                },
            );
            settings.validate()?;

            let use_case =
                RenderMatrixUseCase::new(FileSystemMatrixStore::new(), MarkdownFormatter::new());
            let rendered = use_case.execute(&dir, &settings.markdown_file)?;
            reporter.report_completion(&format!(
                "✅ Rendered {} dependencies to {}",
                rendered, settings.markdown_file
            ));
        }

        Command::Find {
            dir,
            host,
            owner,
            repo,
        } => {
            validate_repo_dir(&dir)?;
            let settings = Settings::resolve(config.as_ref(), &SettingsOverrides::default());
            settings.validate()?;
            let host = host.unwrap_or(settings.default_host);

            let version =
                FindVersionUseCase::new(FileSystemMatrixStore::new()).execute(&dir, &host, &owner, &repo)?;
            StdoutPresenter::new().present(&format!("{}\n", version))?;
        }

        Command::Collect {
            messages,
            output,
            default_host,
        } => {
            let settings = Settings::resolve(
                config.as_ref(),
                &SettingsOverrides {
                    default_host,
                    ..Default::default()
                },
            );
            settings.validate()?;
            let content = FileSystemReader::new().read_file(&messages, "commit messages file")?;
            let messages = split_commit_messages(&content);

            let use_case = CollectUpdatesUseCase::new(reporter, settings.default_host);
            let updates = use_case.execute(&messages)?;

            let yaml = serde_yaml_ng::to_string(&updates)?;
            PresenterFactory::create(output.into()).present(&yaml)?;
        }
    }

    Ok(())
}

fn run_update(args: UpdateArgs, config: Option<&ConfigFile>, reporter: StderrProgressReporter) -> Result<()> {
    validate_repo_dir(&args.dir)?;

    let settings = Settings::resolve(
        config,
        &SettingsOverrides {
            markdown_file: args.markdown_file.clone(),
            no_lock: args.no_lock,
            ..Default::default()
        },
    );
    settings.validate()?;

    let update = match &args.update_file {
        Some(path) => FileSystemReader::new().read_yaml::<DependencyUpdate>(path, "dependency update file")?,
        None => args
            .flag_update(&settings.default_host)
            .ok_or_else(|| MatrixError::Validation {
                message: "either --update-file or --owner, --repo and --to-version are required"
                    .to_string(),
            })?,
    };

    let request = UpdateMatrixRequest::new(args.dir.clone(), update)
        .with_upstream(args.upstream.clone())
        .with_enabled(settings.enabled)
        .with_markdown_file(settings.markdown_file)
        .with_lock(settings.lock);

    let use_case = UpdateMatrixUseCase::new(
        FileSystemMatrixStore::new(),
        MarkdownFormatter::new(),
        AssetReaderRouter::new()?,
        reporter,
    );
    let response = use_case.execute(request)?;

    if !response.applied {
        reporter.report(&format!(
            "ℹ️  Dependency matrix tracking is not enabled in {}, nothing recorded",
            args.dir.display()
        ));
    }
    Ok(())
}

/// Explicit `--config` wins; otherwise look next to the repository.
fn load_config(args: &Args, reporter: &StderrProgressReporter) -> Result<Option<ConfigFile>> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => {
            let dir = args.repo_dir().cloned().unwrap_or_else(|| PathBuf::from("."));
            if dir.is_dir() {
                discover_config(&dir)?
            } else {
                None
            }
        }
    };

    if let Some(ref config) = config {
        for warning in config.unknown_field_warnings() {
            reporter.report_error(&warning);
        }
    }
    Ok(config)
}

fn validate_repo_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(MatrixError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| MatrixError::InvalidRepositoryPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(MatrixError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Security: Repository path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(MatrixError::InvalidRepositoryPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
