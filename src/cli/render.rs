//! Plain-text rendering of the list, detail and form views

use std::fmt::Write;

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::domain::user::{FieldErrors, User, UserDetails, UserList};

pub const LIST_HEADING: &str = "USER MANAGEMENT SYSTEM";
pub const NO_USERS_ROW: &str = "No users found";

/// Table of the displayed users
pub fn render_list(list: &UserList) -> String {
    let rows = list.displayed();
    let mut out = String::new();

    let _ = writeln!(out, "{}", LIST_HEADING);
    if !list.search_term().is_empty() {
        let _ = writeln!(out, "Search: {:?}", list.search_term());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID"),
            Cell::new("Name"),
            Cell::new("Email"),
            Cell::new("Phone"),
        ]);

    if rows.is_empty() {
        table.add_row(vec![Cell::new(NO_USERS_ROW)]);
    }

    for user in &rows {
        table.add_row(vec![
            Cell::new(id_cell(user)),
            Cell::new(user.name()),
            Cell::new(user.email()),
            Cell::new(user.phone()),
        ]);
    }

    let _ = writeln!(out, "{}", table);

    if rows.iter().any(|u| u.is_local()) {
        let _ = writeln!(out, "* local record, details are shown inline");
    }

    out
}

fn id_cell(user: &User) -> String {
    if user.is_local() {
        format!("{}*", user.id())
    } else {
        user.id().to_string()
    }
}

/// Detail view for each lifecycle state
pub fn render_details(details: &UserDetails) -> String {
    match details.user() {
        Some(user) => render_user(user),
        None => match details {
            UserDetails::Loading => "Loading...\n".to_string(),
            UserDetails::Error(message) => format!("{}\n", message),
            _ => "No user found\n".to_string(),
        },
    }
}

fn render_user(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "User Details");
    let _ = writeln!(out, "Name: {}", user.name());
    let _ = writeln!(out, "Email: {}", user.email());
    let _ = writeln!(out, "Phone: {}", user.phone());
    let _ = writeln!(out, "Username: {}", user.username().unwrap_or_default());
    let _ = writeln!(out, "Website: {}", user.website().unwrap_or_default());
    let _ = writeln!(
        out,
        "Address: {}, {}",
        user.address().street,
        user.address().city
    );
    let _ = writeln!(
        out,
        "Company: {}",
        user.company().map(|c| c.name.as_str()).unwrap_or_default()
    );
    out
}

/// One line per failing field
pub fn render_form_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("  {}: {}\n", field, error))
        .collect()
}
