//! Detail view state for a single user

use super::entity::User;
use crate::domain::DomainError;

/// Message shown when the detail fetch fails
pub const DETAILS_FETCH_ERROR: &str = "Error fetching user details";

/// Lifecycle of a detail view
///
/// Starts in `Loading` and moves exactly once to one of the terminal states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserDetails {
    #[default]
    Loading,
    Error(String),
    NotFound,
    Loaded(User),
}

impl UserDetails {
    /// Terminal state for the outcome of a fetch
    pub fn from_fetch(result: Result<Option<User>, DomainError>) -> Self {
        match result {
            Ok(Some(user)) => Self::Loaded(user),
            Ok(None) => Self::NotFound,
            Err(_) => Self::Error(DETAILS_FETCH_ERROR.to_string()),
        }
    }

    /// Move from `Loading` to the terminal state for `result`
    ///
    /// Already-terminal views ignore later results.
    pub fn resolve(&mut self, result: Result<Option<User>, DomainError>) {
        if self.is_loading() {
            *self = Self::from_fetch(result);
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Loaded(user) => Some(user),
            _ => None,
        }
    }
}
