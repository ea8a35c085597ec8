//! The interactive read-eval loop.
//!
//! The loop moves from [`MenuState::NoDirectorySelected`] to
//! [`MenuState::Ready`] once a working directory is settled. While ready, the
//! offered actions come from a [`RepoContext`] recomputed on every iteration,
//! so rendering and dispatch always agree on what is available.

use crate::commands::{
    execute_action_history, execute_branches, execute_change_directory, execute_init,
    execute_insights, execute_log, execute_quick_commit, execute_smart_status, execute_sync,
};
use crate::core::{
    error::{AssistantError, Result},
    output::{print_error, print_header, print_info, print_option, print_prompt},
    session::Session,
};
use colored::*;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    NoDirectorySelected,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoContext {
    NotRepository,
    Repository,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Init,
    ChangeDirectory,
    QuickCommit,
    Branches,
    Log,
    Insights,
    SmartStatus,
    Sync,
    ActionHistory,
    Exit,
}

const NON_REPOSITORY_ENTRIES: &[(&str, MenuAction, &str)] = &[
    ("1", MenuAction::Init, "Initialize a git repository here"),
    ("2", MenuAction::ChangeDirectory, "Change directory"),
];

const REPOSITORY_ENTRIES: &[(&str, MenuAction, &str)] = &[
    ("1", MenuAction::QuickCommit, "Quick commit (predefined messages)"),
    ("2", MenuAction::Branches, "Branch management"),
    ("3", MenuAction::Log, "Interactive log"),
    ("4", MenuAction::Insights, "Project insights"),
    ("5", MenuAction::SmartStatus, "Smart status"),
    ("6", MenuAction::Sync, "Sync (stage all and commit)"),
    ("7", MenuAction::ActionHistory, "Action history"),
    ("8", MenuAction::ChangeDirectory, "Change directory"),
    ("9", MenuAction::Init, "Initialize git"),
];

impl RepoContext {
    pub fn detect(session: &Session) -> RepoContext {
        if session.git().is_repository() {
            RepoContext::Repository
        } else {
            RepoContext::NotRepository
        }
    }

    pub fn entries(&self) -> &'static [(&'static str, MenuAction, &'static str)] {
        match self {
            RepoContext::NotRepository => NON_REPOSITORY_ENTRIES,
            RepoContext::Repository => REPOSITORY_ENTRIES,
        }
    }

    pub fn parse(&self, choice: &str) -> Option<MenuAction> {
        if choice == "0" {
            return Some(MenuAction::Exit);
        }
        self.entries()
            .iter()
            .find(|(key, _, _)| *key == choice)
            .map(|(_, action, _)| *action)
    }
}

fn clear_screen(session: &Session) {
    if session.clear_screen() && std::io::stdout().is_terminal() {
        print!("\x1B[2J\x1B[1;1H");
    }
}

fn render_menu(session: &Session, context: RepoContext) {
    clear_screen(session);
    print_header("GIT ASSISTANT");
    println!("Directory: {}", session.workdir().display().to_string().cyan());

    match context {
        RepoContext::Repository => {
            let git = session.git();
            let stats = git.repo_stats();
            print!(
                "Branch: {} | {} commits",
                git.current_branch().green(),
                stats.commits
            );
            match git.has_changes() {
                Ok(true) => print!(" | {}", "Uncommitted changes".red()),
                Ok(false) => {}
                Err(e) => log::debug!("Status unavailable for header: {e}"),
            }
            println!();
        }
        RepoContext::NotRepository => println!("{}", "Not a git repository".red()),
    }

    println!();
    for (key, _, label) in context.entries() {
        println!("{}. {label}", key.bold());
    }
    print_option(0, "Quit");
    print_prompt("\nChoose an action: ");
}

fn dispatch(session: &mut Session, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::Init => execute_init(session),
        MenuAction::ChangeDirectory => execute_change_directory(session),
        MenuAction::QuickCommit => execute_quick_commit(session),
        MenuAction::Branches => execute_branches(session),
        MenuAction::Log => execute_log(session),
        MenuAction::Insights => execute_insights(session),
        MenuAction::SmartStatus => execute_smart_status(session),
        MenuAction::Sync => execute_sync(session),
        MenuAction::ActionHistory => execute_action_history(session),
        MenuAction::Exit => Ok(()),
    }
}

/// Ask for the working directory at startup.
///
/// Returns `false` when the user declines to continue after an invalid path.
fn select_directory(session: &mut Session) -> Result<bool> {
    print_header("WORKING DIRECTORY");
    println!("Current directory: {}", session.workdir().display().to_string().cyan());
    let path = session.prompt("Enter the working directory path (empty keeps current): ")?;
    if path.is_empty() {
        return Ok(true);
    }

    if let Err(e) = session.set_working_directory(&path) {
        print_error(&e.to_string());
        return session.confirm("Continue with the current directory?");
    }
    Ok(true)
}

fn farewell() {
    print_info("Goodbye!");
}

/// Run the menu until the user quits or input ends.
pub fn run(session: &mut Session, initial: MenuState) -> Result<()> {
    let mut state = initial;
    loop {
        state = match state {
            MenuState::NoDirectorySelected => match select_directory(session) {
                Ok(true) => MenuState::Ready,
                Ok(false) | Err(AssistantError::InputClosed) => {
                    farewell();
                    return Ok(());
                }
                Err(e) => return Err(e),
            },
            MenuState::Ready => {
                let context = RepoContext::detect(session);
                render_menu(session, context);

                let choice = match session.read_line() {
                    Ok(choice) => choice,
                    Err(AssistantError::InputClosed) => {
                        farewell();
                        return Ok(());
                    }
                    Err(e) => return Err(e),
                };

                match context.parse(&choice) {
                    Some(MenuAction::Exit) => {
                        farewell();
                        return Ok(());
                    }
                    Some(action) => {
                        log::debug!("Dispatching {action:?}");
                        match dispatch(session, action) {
                            Ok(()) => {}
                            Err(AssistantError::InputClosed) => {
                                farewell();
                                return Ok(());
                            }
                            Err(e) => print_error(&e.to_string()),
                        }
                    }
                    None => print_error("Invalid option!"),
                }

                print_info("\nPress Enter to continue...");
                if let Err(AssistantError::InputClosed) = session.read_line() {
                    farewell();
                    return Ok(());
                }
                MenuState::Ready
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::testing::scripted_session;
    use tempfile::TempDir;

    fn repo_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(".git")).unwrap();
        temp_dir
    }

    #[test]
    fn test_non_repository_menu_offers_only_init_and_cd() {
        let context = RepoContext::NotRepository;
        assert_eq!(context.parse("1"), Some(MenuAction::Init));
        assert_eq!(context.parse("2"), Some(MenuAction::ChangeDirectory));
        assert_eq!(context.parse("3"), None);
        assert_eq!(context.parse("0"), Some(MenuAction::Exit));
    }

    #[test]
    fn test_repository_menu_full_action_set() {
        let context = RepoContext::Repository;
        assert_eq!(context.parse("1"), Some(MenuAction::QuickCommit));
        assert_eq!(context.parse("5"), Some(MenuAction::SmartStatus));
        assert_eq!(context.parse("9"), Some(MenuAction::Init));
        assert_eq!(context.parse("10"), None);
        assert_eq!(context.parse(""), None);
        assert_eq!(context.entries().len(), 9);
    }

    #[test]
    fn test_detect_context() {
        let repo = repo_dir();
        let (session, _runner) = scripted_session(repo.path(), "");
        assert_eq!(RepoContext::detect(&session), RepoContext::Repository);

        let plain = TempDir::new().unwrap();
        let (session, _runner) = scripted_session(plain.path(), "");
        assert_eq!(RepoContext::detect(&session), RepoContext::NotRepository);
    }

    #[test]
    fn test_exit_runs_nothing() -> Result<()> {
        let repo = repo_dir();
        let (mut session, runner) = scripted_session(repo.path(), "0\n");
        run(&mut session, MenuState::Ready)?;
        assert!(!runner.was_called("init"));
        Ok(())
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() -> Result<()> {
        let plain = TempDir::new().unwrap();
        let (mut session, runner) = scripted_session(plain.path(), "7\n\n0\n");
        run(&mut session, MenuState::Ready)?;
        assert!(runner.calls().is_empty());
        Ok(())
    }

    #[test]
    fn test_init_from_non_repository_menu() -> Result<()> {
        let plain = TempDir::new().unwrap();
        let (mut session, runner) = scripted_session(plain.path(), "1\n\n0\n");
        run(&mut session, MenuState::Ready)?;
        assert!(runner.was_called("init"));
        assert_eq!(session.history().len(), 1);
        Ok(())
    }

    #[test]
    fn test_errors_do_not_end_loop() -> Result<()> {
        let repo = repo_dir();
        // Branch management with an empty feature name fails validation.
        let (mut session, runner) = scripted_session(repo.path(), "2\n1\n\n\n7\n\n0\n");
        run(&mut session, MenuState::Ready)?;
        assert!(!runner.called_with_prefix("checkout"));
        Ok(())
    }

    #[test]
    fn test_end_of_input_exits_cleanly() -> Result<()> {
        let plain = TempDir::new().unwrap();
        let (mut session, _runner) = scripted_session(plain.path(), "");
        run(&mut session, MenuState::Ready)?;
        Ok(())
    }

    #[test]
    fn test_startup_directory_selection() -> Result<()> {
        let target = repo_dir();
        let start = TempDir::new().unwrap();
        let input = format!("{}\n0\n", target.path().display());
        let (mut session, _runner) = scripted_session(start.path(), &input);

        run(&mut session, MenuState::NoDirectorySelected)?;
        assert_eq!(session.workdir(), target.path());
        Ok(())
    }

    #[test]
    fn test_startup_invalid_directory_declined_exits() -> Result<()> {
        let start = TempDir::new().unwrap();
        let missing = start.path().join("missing");
        let input = format!("{}\nn\n1\n", missing.display());
        let (mut session, runner) = scripted_session(start.path(), &input);

        run(&mut session, MenuState::NoDirectorySelected)?;
        assert!(runner.calls().is_empty());
        assert_eq!(session.workdir(), start.path());
        Ok(())
    }

    #[test]
    fn test_startup_invalid_directory_continue_keeps_current() -> Result<()> {
        let start = TempDir::new().unwrap();
        let missing = start.path().join("missing");
        let input = format!("{}\ny\n0\n", missing.display());
        let (mut session, _runner) = scripted_session(start.path(), &input);

        run(&mut session, MenuState::NoDirectorySelected)?;
        assert_eq!(session.workdir(), start.path());
        Ok(())
    }
}
