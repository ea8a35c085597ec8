use crate::core::{
    error::{AssistantError, Result},
    output::{print_error, print_header, print_info, print_option, print_section_header, print_success},
    session::Session,
};
use colored::*;

/// Build a branch name such as `feature/dark-mode` from free text.
pub fn branch_name(prefix: &str, description: &str) -> String {
    format!("{prefix}/{}", description.to_lowercase().replace(' ', "-"))
}

pub fn execute_branches(session: &mut Session) -> Result<()> {
    print_header("BRANCH MANAGEMENT");

    print_section_header("Existing branches");
    for (is_current, line) in session.git().branches_verbose()? {
        if is_current {
            println!("{}", format!("* {line}").green());
        } else {
            println!("  {line}");
        }
    }

    println!();
    print_section_header("Available actions");
    print_option(1, "Create feature branch");
    print_option(2, "Create bugfix branch");
    print_option(3, "Switch branch");
    print_option(4, "Delete a branch");
    print_option(5, "Merge a branch");

    match session.prompt("\nChoose (1-5): ")?.as_str() {
        "1" => create_prefixed_branch(session, "feature", "Feature name: ", "Feature branch"),
        "2" => create_prefixed_branch(session, "bugfix", "Bug description: ", "Bugfix branch"),
        "3" => switch_branch(session),
        "4" => delete_branch(session),
        "5" => merge_branch(session),
        _ => {
            print_error("Invalid choice");
            Ok(())
        }
    }
}

fn create_prefixed_branch(
    session: &mut Session,
    prefix: &str,
    prompt: &str,
    kind: &str,
) -> Result<()> {
    let description = session.prompt_required(prompt, "Branch description")?;
    let name = branch_name(prefix, &description);

    session.git().run(&["checkout", "-b", &name])?;
    print_success(&format!("Branch '{name}' created and checked out"));
    session.record(format!("{kind} created: {name}"));
    Ok(())
}

pub fn switch_branch(session: &mut Session) -> Result<()> {
    let name = session.prompt_required("Branch name: ", "Branch name")?;

    print_info(&format!("Switching to branch: {name}"));
    session.git().run(&["checkout", &name])?;
    print_success("Branch switched");
    session.record(format!("Switched to: {name}"));
    Ok(())
}

pub fn delete_branch(session: &mut Session) -> Result<()> {
    let name = session.prompt_required("Branch to delete: ", "Branch name")?;

    if name == session.git().current_branch() {
        print_error("Cannot delete the current branch");
        return Ok(());
    }

    if !session.confirm(&format!("Delete branch '{name}'?"))? {
        print_info("Deletion cancelled");
        return Ok(());
    }

    if let Err(e) = session.git().run(&["branch", "-d", &name]) {
        log::debug!("Safe delete of '{name}' failed: {e}");
        if !session.confirm("Branch is not fully merged. Force delete?")? {
            return Err(e);
        }
        session.git().run(&["branch", "-D", &name])?;
    }

    print_success(&format!("Branch '{name}' deleted"));
    session.record(format!("Branch deleted: {name}"));
    Ok(())
}

pub fn merge_branch(session: &mut Session) -> Result<()> {
    let current = session.git().current_branch();
    print_info(&format!("Merging into the current branch ({current})"));
    let name = session.prompt_required("Branch to merge: ", "Branch name")?;

    let output = session.git().output(&["merge", &name])?;
    if !output.success {
        print_error("Conflict detected! Resolve it manually, then commit.");
        return Err(AssistantError::merge_conflict(name, &output.text));
    }

    print_success(&format!("Branch '{name}' merged into '{current}'"));
    session.record(format!("Merge: {name} → {current}"));
    Ok(())
}
