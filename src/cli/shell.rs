//! Shell command - interactive session over one in-memory user list
//!
//! The list is fetched once when the shell starts. Creates and edits live
//! only as long as the session; deletes are sent to the remote service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{SubmitOutcome, UserForm, UserId};
use crate::domain::{Route, UserApi};
use crate::infrastructure::user::{DeleteOutcome, UserListService};

use super::open::render_route;
use super::prompt::{fill_form, is_affirmative, read_line, StdinPrompter};
use super::render::{render_form_errors, render_list};

const HELP: &str = "\
Commands:
  list              show the user table
  search [text]     filter by name; no text clears the filter
  add               create a local user
  edit <id>         edit a listed user
  delete <id>       delete a user on the server
  view <id>         show details for a listed user
  open <path>       open '/' or '/user/<id>'
  help              show this help
  quit              leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Add,
    Edit(UserId),
    Delete(UserId),
    View(UserId),
    Open(String),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line; blank lines parse to `None`
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return Ok(None);
        }

        // `typed` is everything after the single separator, untouched
        let (word, typed) = match line.split_once(char::is_whitespace) {
            Some((word, typed)) => (word, typed),
            None => (line.trim_end(), ""),
        };
        let rest = typed.trim();

        let id = || -> Result<UserId, String> {
            if rest.is_empty() {
                return Err(format!("Usage: {} <id>", word));
            }
            rest.parse().map_err(|e| format!("{}", e))
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "search" => Self::Search(typed.to_string()),
            "add" | "new" => Self::Add,
            "edit" => Self::Edit(id()?),
            "delete" | "rm" => Self::Delete(id()?),
            "view" | "show" => Self::View(id()?),
            "open" if !rest.is_empty() => Self::Open(rest.to_string()),
            "open" => return Err("Usage: open <path>".to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
        };

        Ok(Some(command))
    }
}

/// Run the interactive shell
pub async fn run<A: UserApi>(api: Arc<A>) -> anyhow::Result<()> {
    let mut service = UserListService::new(api.clone());
    service.mount().await;

    print!("{}", render_list(service.state()));
    println!("\nType 'help' for commands.");

    loop {
        let Some(line) = read_line("> ")? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        debug!(?command, "Shell command");

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::List => print!("{}", render_list(service.state())),
            ShellCommand::Search(term) => {
                service.search(term);
                print!("{}", render_list(service.state()));
            }
            ShellCommand::Add => {
                let form = service.create_form();
                edit_and_submit(&mut service, form)?;
            }
            ShellCommand::Edit(id) => match service.edit_form(id) {
                Some(form) => edit_and_submit(&mut service, form)?,
                None => println!("No listed user with id {}", id),
            },
            ShellCommand::Delete(id) => match service.delete(id, &StdinPrompter).await {
                DeleteOutcome::Deleted => print!("{}", render_list(service.state())),
                DeleteOutcome::Cancelled => println!("Cancelled"),
                DeleteOutcome::Failed => println!("Could not delete user {}", id),
            },
            ShellCommand::View(id) => {
                if service.state().find(id).is_none() {
                    println!("No listed user with id {}", id);
                } else if let Some(route) = service.open_details(id, &StdinPrompter) {
                    print!("{}", render_route(api.clone(), route).await);
                }
            }
            ShellCommand::Open(path) => match Route::parse(&path) {
                // The list route shows this session's list rather than refetching
                Some(Route::UserList) => print!("{}", render_list(service.state())),
                Some(route) => print!("{}", render_route(api.clone(), route).await),
                None => println!("Unknown route: {}", path),
            },
        }
    }

    Ok(())
}

/// Prompt for fields until the form validates or the user gives up
fn edit_and_submit<A: UserApi>(
    service: &mut UserListService<A>,
    mut form: UserForm,
) -> anyhow::Result<()> {
    loop {
        if !fill_form(&mut form)? {
            println!("Cancelled");
            return Ok(());
        }

        match form.submit() {
            Ok(submission) => {
                match service.submit(submission) {
                    SubmitOutcome::Created(id) => println!("Created local user {}", id),
                    SubmitOutcome::Updated(id) => println!("Updated user {}", id),
                    SubmitOutcome::Missing(id) => println!("User {} is no longer listed", id),
                }
                print!("{}", render_list(service.state()));
                return Ok(());
            }
            Err(errors) => {
                print!("{}", render_form_errors(&errors));
                let retry = read_line("Fix and try again? [y/N] ")?;
                if !retry.as_deref().is_some_and(is_affirmative) {
                    println!("Cancelled");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank() {
        assert_eq!(ShellCommand::parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("list"), Ok(Some(ShellCommand::List)));
        assert_eq!(ShellCommand::parse("ADD"), Ok(Some(ShellCommand::Add)));
        assert_eq!(ShellCommand::parse("quit"), Ok(Some(ShellCommand::Quit)));
        assert_eq!(
            ShellCommand::parse("edit 3"),
            Ok(Some(ShellCommand::Edit(UserId::new(3))))
        );
        assert_eq!(
            ShellCommand::parse("delete  4 "),
            Ok(Some(ShellCommand::Delete(UserId::new(4))))
        );
        assert_eq!(
            ShellCommand::parse("view 1"),
            Ok(Some(ShellCommand::View(UserId::new(1))))
        );
        assert_eq!(
            ShellCommand::parse("open /user/2"),
            Ok(Some(ShellCommand::Open("/user/2".to_string())))
        );
    }

    #[test]
    fn test_parse_search_keeps_inner_spaces() {
        assert_eq!(
            ShellCommand::parse("search leanne graham"),
            Ok(Some(ShellCommand::Search("leanne graham".to_string())))
        );
        assert_eq!(
            ShellCommand::parse("search"),
            Ok(Some(ShellCommand::Search(String::new())))
        );
    }

    #[test]
    fn test_parse_search_passes_text_as_typed() {
        assert_eq!(
            ShellCommand::parse("search  Graham "),
            Ok(Some(ShellCommand::Search(" Graham ".to_string())))
        );
        assert_eq!(
            ShellCommand::parse("search ann "),
            Ok(Some(ShellCommand::Search("ann ".to_string())))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ShellCommand::parse("edit"),
            Err("Usage: edit <id>".to_string())
        );
        assert!(ShellCommand::parse("delete abc").is_err());
        assert!(ShellCommand::parse("open").is_err());
        assert!(ShellCommand::parse("frobnicate").is_err());
    }
}
