use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AssignmentService, AssistantService, Clock, NoteService, SettingsService,
};
use ui::platform::{DesktopFileOpener, FileOpenerRef, FilePickerRef, RfdFilePicker};
use ui::{App, UiApp, build_app_context};

const DATA_DIR_ENV: &str = "STUDYSYNC_DATA_DIR";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownSubcommand(String),
    EmptyDataDir,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownSubcommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::EmptyDataDir => write!(f, "--data-dir must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  studysync [ui] [--data-dir <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data-dir .   (notes.json, assignment_submissions.json, settings.json)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DATA_DIR_ENV}, RUST_LOG");
    eprintln!("  STUDYSYNC_AI_API_KEY, STUDYSYNC_AI_BASE_URL, STUDYSYNC_AI_MODEL");
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Launch(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    data_dir: PathBuf,
}

impl Args {
    /// Parse everything after the program name. `env_data_dir` is the value of
    /// `STUDYSYNC_DATA_DIR`, if set.
    fn parse(
        argv: impl IntoIterator<Item = String>,
        env_data_dir: Option<String>,
    ) -> Result<Invocation, ArgsError> {
        let mut args = argv.into_iter().peekable();
        match args.peek().map(String::as_str) {
            Some("ui") => {
                args.next();
            }
            Some(first) if !first.starts_with('-') => {
                return Err(ArgsError::UnknownSubcommand(first.to_string()));
            }
            _ => {}
        }

        let mut data_dir = env_data_dir
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    let value = require_value(&mut args, "--data-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyDataDir);
                    }
                    data_dir = PathBuf::from(value);
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Launch(Self { data_dir }))
    }
}

struct DesktopApp {
    services: AppServices,
    picker: FilePickerRef,
    opener: FileOpenerRef,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn notes(&self) -> Arc<NoteService> {
        self.services.notes()
    }

    fn assignments(&self) -> Arc<AssignmentService> {
        self.services.assignments()
    }

    fn settings(&self) -> Arc<SettingsService> {
        self.services.settings()
    }

    fn assistant(&self) -> Arc<AssistantService> {
        self.services.assistant()
    }

    fn file_picker(&self) -> FilePickerRef {
        Arc::clone(&self.picker)
    }

    fn file_opener(&self) -> FileOpenerRef {
        Arc::clone(&self.opener)
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv = std::env::args().skip(1);
    let invocation = Args::parse(argv, std::env::var(DATA_DIR_ENV).ok()).inspect_err(|_| {
        print_usage();
    })?;
    let args = match invocation {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Launch(args) => args,
    };

    let services = AppServices::open(&args.data_dir).await?;
    if !services.assistant().enabled() {
        log::info!("assistant disabled; set STUDYSYNC_AI_API_KEY to enable it");
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        picker: Arc::new(RfdFilePicker),
        opener: Arc::new(DesktopFileOpener),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("StudySync")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
