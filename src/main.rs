use clap::Parser;
use git_assistant::core::{
    config::AssistantConfig,
    error::{AssistantError, Result},
    print_error,
    runner::SystemRunner,
    session::Session,
};
use git_assistant::menu::{self, MenuState};
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-assistant")]
#[command(about = "An interactive menu for everyday git chores")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Working directory; skips the startup prompt
    directory: Option<String>,
}

fn start(cli: Cli) -> Result<()> {
    let config = AssistantConfig::load(cli.config.as_deref())?;
    let workdir = std::env::current_dir().map_err(AssistantError::WorkingDirectory)?;

    let mut session = Session::new(
        workdir,
        config,
        Box::new(SystemRunner),
        Box::new(BufReader::new(io::stdin())),
    );

    let initial = match cli.directory {
        Some(directory) => {
            session.set_working_directory(&directory)?;
            MenuState::Ready
        }
        None => MenuState::NoDirectorySelected,
    };

    menu::run(&mut session, initial)
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = start(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
