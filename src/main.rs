use gemnasium_maven::adapters::outbound::console::StderrProgressReporter;
use gemnasium_maven::adapters::outbound::filesystem::{FileConfigStore, FileSystemReader};
use gemnasium_maven::adapters::outbound::network::GemnasiumClient;
use gemnasium_maven::application::dto::{CreateProjectRequest, DependencyRequest};
use gemnasium_maven::application::factories::{PresenterFactory, PresenterType};
use gemnasium_maven::application::use_cases::{
    CreateProjectUseCase, DumpDependenciesUseCase, LoadConfigUseCase, PingUseCase,
    SendDependenciesUseCase, ShowConfigUseCase, ShowProjectUseCase,
};
use gemnasium_maven::cli::{Args, Command};
use gemnasium_maven::config::ConfigValues;
use gemnasium_maven::ports::outbound::ProgressReporter;
use gemnasium_maven::shared::error::{ExitCode, GemnasiumError};
use gemnasium_maven::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // Parse errors exit with code 2 inside clap
    let args = Args::parse_args();
    let command_name = args.command.name();

    if let Err(e) = run(args) {
        let reporter = StderrProgressReporter::new();
        reporter.report_error(&format!("\n❌ {} failed:\n", command_name));
        reporter.report_error(&e.to_string());

        for cause in e.chain().skip(1) {
            reporter.report_error(&format!("\nCaused by: {}", cause));
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    let reporter = StderrProgressReporter::new();
    reporter.report("Gemnasium Maven Plugin");
    reporter.report("");

    let env = ConfigValues::from_env_vars(
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?))),
    );
    let config = LoadConfigUseCase::new(FileConfigStore::new(&project_path))
        .execute(&env, &args.config.to_config_values())?;

    let inventory_reader = match args.inventory {
        Some(path) => FileSystemReader::with_inventory_path(path),
        None => FileSystemReader::new(),
    };

    match args.command {
        Command::Ping => {
            let use_case = PingUseCase::new(GemnasiumClient::from_config(&config)?, reporter);
            use_case.execute()?;
        }
        Command::CreateProject {
            team_slug,
            project_name,
            project_description,
        } => {
            let use_case = CreateProjectUseCase::new(
                GemnasiumClient::from_config(&config)?,
                FileConfigStore::new(&project_path),
                reporter,
            );
            let request = CreateProjectRequest::new(team_slug, project_name, project_description);
            use_case.execute(&request, &config)?;
        }
        Command::SendDependencies => {
            let use_case = SendDependenciesUseCase::new(
                inventory_reader,
                GemnasiumClient::from_config(&config)?,
                reporter,
            );
            use_case.execute(&DependencyRequest::new(project_path), &config)?;
        }
        Command::DumpDependencies { stdout } => {
            let presenter_type = if stdout {
                PresenterType::Stdout
            } else {
                PresenterType::dependency_file(&project_path)
            };
            let use_case = DumpDependenciesUseCase::new(
                inventory_reader,
                PresenterFactory::create(presenter_type),
                reporter,
            );
            // A failed write is reported as a warning and does not fail the command
            use_case.execute(&DependencyRequest::new(project_path))?;
        }
        Command::ShowProject => {
            let use_case =
                ShowProjectUseCase::new(GemnasiumClient::from_config(&config)?, reporter);
            use_case.execute(&config)?;
        }
        Command::ShowConfig => {
            ShowConfigUseCase::new(reporter).execute(&config);
        }
    }

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GemnasiumError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(GemnasiumError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
