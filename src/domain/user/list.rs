//! In-memory user collection with a derived search view

use tracing::warn;

use super::entity::{User, UserId, UserSubmission};
use crate::domain::route::Route;

/// Result of applying a form submission to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new local record was appended under this id
    Created(UserId),
    /// The record with this id was replaced
    Updated(UserId),
    /// The submission named an id that is not in the collection
    Missing(UserId),
}

/// Where "view details" leads for a given record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLink {
    /// Local records have no server-side detail; disclose them inline
    Inline(String),
    Route(Route),
}

/// Canonical user collection plus the current search term
///
/// The displayed list is never stored; it is computed from the canonical
/// list and the term on every read.
#[derive(Debug, Clone, Default)]
pub struct UserList {
    users: Vec<User>,
    search_term: String,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection seeded from a fetch, keeping the first record per id
    pub fn with_users(users: Vec<User>) -> Self {
        let mut list = Self::new();
        list.replace_all(users);
        list
    }

    /// Replace the canonical list and clear the search term
    pub fn replace_all(&mut self, users: Vec<User>) {
        let mut unique: Vec<User> = Vec::with_capacity(users.len());

        for user in users {
            if unique.iter().any(|u| u.id() == user.id()) {
                warn!(id = %user.id(), "Dropping duplicate user id from fetched list");
                continue;
            }
            unique.push(user);
        }

        self.users = unique;
        self.search_term.clear();
    }

    /// Every record, regardless of the search term
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Records whose name contains the search term, case-insensitively
    pub fn displayed(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| u.name_contains(&self.search_term))
            .collect()
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    /// Remove a record by id; absent ids leave the collection untouched
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|u| u.id() == id)?;
        Some(self.users.remove(index))
    }

    /// Identifier for the next local record
    ///
    /// One past the largest id in the collection, so ids stay unique after
    /// deletions. When the largest id is `u64::MAX`, the smallest unused id
    /// is taken instead.
    pub fn next_local_id(&self) -> UserId {
        let Some(max) = self.users.iter().map(User::id).max() else {
            return UserId::new(1);
        };

        max.checked_next().unwrap_or_else(|| self.smallest_unused_id())
    }

    fn smallest_unused_id(&self) -> UserId {
        let mut taken: Vec<u64> = self.users.iter().map(|u| u.id().value()).collect();
        taken.sort_unstable();

        let mut candidate = 1;
        for id in taken {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }

        UserId::new(candidate)
    }

    /// Reconcile a form submission with the collection
    ///
    /// Edits replace the matching record in place and keep its local marker.
    /// Creates get a fresh id and are appended as local records.
    pub fn apply(&mut self, submission: UserSubmission) -> SubmitOutcome {
        match submission.id {
            Some(id) => match self.users.iter_mut().find(|u| u.id() == id) {
                Some(existing) => {
                    let local = existing.is_local();
                    *existing = User::from_submission(id, submission, local);
                    SubmitOutcome::Updated(id)
                }
                None => {
                    warn!(%id, "Submitted edit for a user that is no longer listed");
                    SubmitOutcome::Missing(id)
                }
            },
            None => {
                let id = self.next_local_id();
                self.users.push(User::from_submission(id, submission, true));
                SubmitOutcome::Created(id)
            }
        }
    }
}

/// Resolve the "view details" target for a record
pub fn link_for(user: &User) -> UserLink {
    if user.is_local() {
        let json = serde_json::to_string(user).unwrap_or_else(|_| user.name().to_string());
        UserLink::Inline(format!("Local User: {}", json))
    } else {
        UserLink::Route(Route::UserDetails(user.id()))
    }
}
