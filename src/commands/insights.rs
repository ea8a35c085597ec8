use crate::core::{
    error::Result,
    file_types::{analyze_file_types, TOP_FILE_TYPES},
    git_status::{analyze_changes, ChangeKind, StatusSummary},
    output::{print_header, print_info, print_section_header, print_success},
    session::Session,
};
use colored::*;

pub fn execute_insights(session: &mut Session) -> Result<()> {
    print_header("PROJECT INSIGHTS");
    let git = session.git();

    let stats = git.repo_stats();
    print_section_header("Statistics");
    println!("  • {} commits in total", stats.commits.to_string().green());
    println!("  • {} tracked files", stats.files.to_string().green());
    println!("  • {} branches\n", stats.branches.to_string().green());

    print_section_header("Branches");
    match git.branches_verbose() {
        Ok(branches) if !branches.is_empty() => {
            for (is_current, line) in branches {
                if is_current {
                    println!("  → {} {}", line.green(), "(current)".cyan());
                } else {
                    println!("  • {line}");
                }
            }
        }
        Ok(_) => println!("  No branches found"),
        Err(e) => {
            log::warn!("Branch listing failed: {e}");
            println!("  No branches found");
        }
    }
    println!();

    match git.tracked_files() {
        Ok(files) if !files.is_empty() => {
            let histogram = analyze_file_types(&files);
            print_section_header("File types");
            for (extension, count) in histogram.top(TOP_FILE_TYPES) {
                println!("  • {extension}: {count} files");
            }
            println!();
        }
        Ok(_) => {}
        Err(e) => log::warn!("File listing failed: {e}"),
    }

    match git.commits_since("1.week.ago") {
        Ok(recent) => println!(
            "Recent activity: {} commits this week",
            recent.to_string().green()
        ),
        Err(e) => log::debug!("Recent activity unavailable: {e}"),
    }

    if let Some(size) = git.pack_size() {
        println!("Repository size: {}", size.green());
    }
    Ok(())
}

fn print_summary(summary: &StatusSummary) {
    print_section_header("Detected changes");
    for kind in [
        ChangeKind::Added,
        ChangeKind::Modified,
        ChangeKind::Deleted,
        ChangeKind::Untracked,
    ] {
        let files = summary.files(kind);
        if !files.is_empty() {
            println!("  {} ({}): {}", kind.label(), files.len(), files.join(", "));
        }
    }

    let suggestions = summary.suggestions();
    if !suggestions.is_empty() {
        println!();
        print_section_header("Suggestions");
        for suggestion in suggestions {
            println!("  → {suggestion}");
        }
    }
}

pub fn execute_smart_status(session: &mut Session) -> Result<()> {
    print_header("SMART STATUS");
    let git = session.git();

    let branch = git.current_branch();
    let stats = git.repo_stats();
    let project = git
        .workdir()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| git.workdir().display().to_string());

    println!("Current branch: {}", branch.green());
    println!("Project: {project}");
    println!(
        "{} commits | {} files | {} branches\n",
        stats.commits, stats.files, stats.branches
    );

    let status = git.status()?;
    if status.trim().is_empty() {
        print_success("No changes, working tree clean");
        if let Some(last) = git.last_commit_summary() {
            print_info(&format!("Last commit: {last}"));
        }
        return Ok(());
    }

    print_summary(&analyze_changes(&status));
    Ok(())
}
