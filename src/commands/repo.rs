use crate::core::{
    error::Result,
    output::{print_header, print_info, print_success},
    session::Session,
};

pub fn execute_init(session: &mut Session) -> Result<()> {
    print_info("Initializing git repository...");
    session.git().run(&["init"])?;
    print_success("Git repository initialized");
    session.record("Repository initialized");
    Ok(())
}

pub fn execute_change_directory(session: &mut Session) -> Result<()> {
    let path = session.prompt("New directory: ")?;
    session.set_working_directory(&path)
}

/// List recorded actions, most recent first.
pub fn execute_action_history(session: &mut Session) -> Result<()> {
    let history = session.history();
    if history.is_empty() {
        print_info("No recent actions");
        return Ok(());
    }

    print_header("ACTION HISTORY");
    for (i, entry) in history.iter().rev().enumerate() {
        println!("{}. {entry}", i + 1);
    }
    Ok(())
}
