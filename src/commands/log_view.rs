use crate::core::{
    colors::colorize_diff,
    error::{AssistantError, Result},
    output::{print_header, print_info, print_option, print_section_header, print_success},
    session::Session,
};
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    Soft,
    Mixed,
    Hard,
}

impl ResetMode {
    /// Anything other than 1 or 3 selects a mixed reset.
    pub fn from_choice(choice: &str) -> ResetMode {
        match choice {
            "1" => ResetMode::Soft,
            "3" => ResetMode::Hard,
            _ => ResetMode::Mixed,
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            ResetMode::Soft => "--soft",
            ResetMode::Mixed => "--mixed",
            ResetMode::Hard => "--hard",
        }
    }
}

pub fn execute_log(session: &mut Session) -> Result<()> {
    print_header("INTERACTIVE LOG");

    let limit = format!("-{}", session.log_limit());
    let output = session
        .git()
        .run(&["log", "--oneline", &limit, "--graph", "--decorate"])?;

    let lines: Vec<&str> = output.trim().lines().collect();
    let separator = "─".repeat(80);
    println!();
    for (i, line) in lines.iter().enumerate() {
        println!("  {line}");
        if i + 1 < lines.len() {
            println!("  {}", separator.cyan());
        }
    }
    println!();

    print_section_header("Available actions");
    print_option(1, "Show commit details");
    print_option(2, "Reset to a commit");
    print_option(3, "Create branch from a commit");
    print_option(4, "Search history");

    match session.prompt("\nChoose (1-4): ")?.as_str() {
        "1" => show_commit_details(session),
        "2" => reset_to_commit(session),
        "3" => create_branch_from_commit(session),
        "4" => search_history(session),
        _ => Ok(()),
    }
}

/// Diff of a commit against its parent, or the bare patch of a root commit.
fn commit_diff(session: &Session, hash: &str) -> Result<String> {
    let git = session.git();
    let parent = format!("{hash}^");
    match git.run(&["diff", &parent, hash]) {
        Ok(diff) => Ok(diff),
        Err(e) => {
            log::debug!("No parent diff for {hash}, falling back to show: {e}");
            git.run(&["show", "--format=", hash])
                .map_err(|_| AssistantError::DiffUnavailable {
                    commit: hash.to_string(),
                })
        }
    }
}

pub fn show_commit_details(session: &mut Session) -> Result<()> {
    let hash = session.prompt_required("Commit hash: ", "Commit hash")?;

    let details = session.git().run(&[
        "show",
        "--stat",
        "--pretty=format:%h - %s%n%an <%ae>%n%ad%n",
        &hash,
    ])?;
    print_section_header("Commit details");
    println!("{details}");

    let diff = commit_diff(session, &hash)?;
    if diff.trim().is_empty() {
        print_info("No file changes in this commit");
        return Ok(());
    }

    println!();
    print_section_header("Full diff");
    for line in colorize_diff(&diff) {
        println!("{line}");
    }
    Ok(())
}

fn print_recent_log(session: &Session) -> Result<()> {
    print_section_header("Recent history");
    println!("{}", session.git().recent_log(10)?);
    Ok(())
}

pub fn reset_to_commit(session: &mut Session) -> Result<()> {
    print_recent_log(session)?;

    print_section_header("Reset modes");
    print_option(1, "SOFT  - keep changes staged");
    print_option(2, "MIXED - keep changes, unstaged");
    print_option(3, "HARD  - discard ALL changes");
    let mode = ResetMode::from_choice(&session.prompt("\nMode (1-3): ")?);

    let target = session.prompt_required("Commit hash (or HEAD~n): ", "Target revision")?;

    session.git().run(&["reset", mode.flag(), &target])?;
    print_success("Reset done");
    session.record(format!("Reset {} to {target}", mode.flag()));
    Ok(())
}

pub fn create_branch_from_commit(session: &mut Session) -> Result<()> {
    print_recent_log(session)?;

    let hash = session.prompt("\nCommit hash: ")?;
    let name = session.prompt("Branch name: ")?;
    if hash.is_empty() || name.is_empty() {
        return Err(AssistantError::missing_input("Commit hash and branch name"));
    }

    session.git().run(&["checkout", "-b", &name, &hash])?;
    print_success("Branch created and checked out");
    session.record(format!("Branch {name} from {hash}"));
    Ok(())
}

pub fn search_history(session: &mut Session) -> Result<()> {
    let query = session.prompt_required("Search (message/file): ", "Search term")?;

    let git = session.git();
    let by_message = git.output(&["log", "--oneline", &format!("--grep={query}"), "-i"])?;
    let by_path = git.output(&["log", "--oneline", "--", &format!("*{query}*")])?;

    let mut found = false;
    for (title, output) in [
        ("Commits with a matching message", by_message),
        ("Commits touching a matching file", by_path),
    ] {
        if !output.success {
            log::warn!("{title}: search failed: {}", output.text.trim());
            continue;
        }
        if !output.text.trim().is_empty() {
            found = true;
            print_section_header(title);
            println!("{}", output.text.trim_end());
        }
    }

    if !found {
        print_info("No results found");
    }
    Ok(())
}
