//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Categorical colors**: Red for errors, green for confirmations, cyan for
//!   prompts and section titles, bold for headers
//! - **Standardized prefixes**: `✕ Error:` and `✓` so failures and successes
//!   read the same in every executor

use colored::*;
use std::io::{self, Write};

/// Formats and prints an error message
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
pub fn print_error(message: &str) {
    println!("{} {}", "✕ Error:".red(), message);
}

/// Formats and prints a success message with a green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.green());
}

/// Prints an informational message without styling
pub fn print_info(message: &str) {
    println!("{message}");
}

/// Prints a bold banner such as `=== QUICK COMMIT ===`
pub fn print_header(title: &str) {
    println!("\n=== {} ===", title.bold());
}

/// Prints a cyan section title followed by a colon
///
/// # Format
/// ```text
/// <header>:
/// ```
pub fn print_section_header(header: &str) {
    println!("{}:", header.cyan());
}

/// Prints a numbered menu entry
pub fn print_option(number: usize, label: &str) {
    println!("{}. {}", number.to_string().bold(), label);
}

/// Prints a cyan prompt without a trailing newline and flushes stdout
pub fn print_prompt(prompt: &str) {
    print!("{}", prompt.cyan());
    if let Err(e) = io::stdout().flush() {
        log::warn!("Failed to flush prompt: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Operation completed");
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_info("Information message");
        print_header("QUICK COMMIT");
        print_section_header("Existing branches");
        print_option(1, "Create feature branch");
        print_prompt("Choose: ");
    }
}
