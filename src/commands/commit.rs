use crate::core::{
    error::Result,
    output::{print_header, print_info, print_success},
    session::Session,
};
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateChoice {
    Template(usize),
    Custom,
}

/// Map the user's 1-based selection to a template.
///
/// `template_count + 1` selects a custom message; anything else that is not a
/// valid template number falls back to the first template.
pub fn select_template(choice: &str, template_count: usize) -> TemplateChoice {
    match choice.parse::<usize>() {
        Ok(n) if n == template_count + 1 => TemplateChoice::Custom,
        Ok(n) if (1..=template_count).contains(&n) => TemplateChoice::Template(n - 1),
        _ => {
            log::debug!("Selection '{choice}' is not a template, using the first one");
            TemplateChoice::Template(0)
        }
    }
}

pub fn auto_commit_message() -> String {
    format!(
        "Auto-commit: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

fn stage_all(session: &Session) -> Result<()> {
    print_info("Staging all changes...");
    session.git().run(&["add", "."])?;
    Ok(())
}

fn commit(session: &Session, message: &str) -> Result<()> {
    print_info(&format!("Committing with message: {message}"));
    session.git().run(&["commit", "-m", message])?;
    print_success("Commit created");
    Ok(())
}

pub fn execute_quick_commit(session: &mut Session) -> Result<()> {
    if !session.git().has_changes()? {
        print_info("Nothing to commit, working tree clean");
        return Ok(());
    }

    print_header("QUICK COMMIT");
    println!("Predefined messages:");
    let templates = session.quick_commits().to_vec();
    for (i, template) in templates.iter().enumerate() {
        println!("{}. {}", i + 1, template.green());
    }
    println!("{}. {}", templates.len() + 1, "Custom message".cyan());

    let choice = session.prompt(&format!("\nChoose (1-{}): ", templates.len() + 1))?;
    let message = match select_template(&choice, templates.len()) {
        TemplateChoice::Custom => {
            let custom = session.prompt("Your message: ")?;
            if custom.is_empty() {
                auto_commit_message()
            } else {
                custom
            }
        }
        TemplateChoice::Template(index) => templates[index].clone(),
    };

    stage_all(session)?;
    commit(session, &message)?;
    session.record(format!("Quick commit: {message}"));
    Ok(())
}

/// Stage everything and commit with a timestamped message.
pub fn execute_sync(session: &mut Session) -> Result<()> {
    print_header("SYNC");
    if !session.git().has_changes()? {
        print_info("No changes detected");
        return Ok(());
    }

    stage_all(session)?;
    commit(session, &auto_commit_message())?;
    print_success("Local sync complete");
    session.record("Automatic sync");
    Ok(())
}
