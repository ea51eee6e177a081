//! Terminal input: dialogs and line-by-line form entry

use std::io::{self, BufRead, Write};

use crate::domain::user::{FormField, UserForm};
use crate::infrastructure::user::Prompter;

/// Input that clears a field instead of keeping its current value
pub const CLEAR_FIELD: &str = "-";

/// Print `prompt` and read one line from stdin; `None` at end of input
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Whether an answer counts as yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Dialogs on stdin/stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, message: &str) -> bool {
        match read_line(&format!("{} [y/N] ", message)) {
            Ok(Some(answer)) => is_affirmative(&answer),
            _ => false,
        }
    }

    fn alert(&self, message: &str) {
        println!("{}", message);
    }
}

/// Apply one line of input to a field
///
/// Blank keeps the current value, `-` clears it, anything else replaces it
/// exactly as typed.
pub fn apply_input(form: &mut UserForm, field: FormField, input: &str) {
    match input.trim() {
        "" => {}
        CLEAR_FIELD => form.set(field, ""),
        _ => form.set(field, input),
    }
}

/// Prompt for every field in order; `false` if input ended early
pub fn fill_form(form: &mut UserForm) -> io::Result<bool> {
    println!("{} (blank keeps the value, '{}' clears it)", form.title(), CLEAR_FIELD);

    for field in FormField::ALL {
        let current = form.value(field).to_string();
        let marker = if field.is_required() { "*" } else { "" };

        let Some(input) = read_line(&format!("  {}{} [{}]: ", field, marker, current))? else {
            return Ok(false);
        };

        apply_input(form, field, &input);
    }

    Ok(true)
}
