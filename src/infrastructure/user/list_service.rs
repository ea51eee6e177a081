//! User list service: fetch, search, delete and local create/edit

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::user::{
    link_for, SubmitOutcome, User, UserApi, UserForm, UserId, UserLink, UserList, UserSubmission,
};
use crate::domain::Route;

use super::prompter::Prompter;

/// Question asked before a remote delete
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

/// What happened to a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The confirmation was declined; no request was sent
    Cancelled,
    /// The remote delete succeeded and the record is gone locally
    Deleted,
    /// The remote delete failed; local state is unchanged
    Failed,
}

/// Drives the list view over a remote user source
///
/// Creates and edits stay local; only fetch and delete reach the server.
#[derive(Debug)]
pub struct UserListService<A: UserApi> {
    api: Arc<A>,
    state: UserList,
}

impl<A: UserApi> UserListService<A> {
    /// Create a service with an empty collection
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: UserList::new(),
        }
    }

    pub fn state(&self) -> &UserList {
        &self.state
    }

    /// Load the collection from the remote service
    ///
    /// Failures are logged and leave the collection as it was.
    pub async fn mount(&mut self) {
        match self.api.list_users().await {
            Ok(users) => {
                info!(count = users.len(), "Loaded users");
                self.state = UserList::with_users(users);
            }
            Err(e) => error!("Error fetching users: {}", e),
        }
    }

    /// Update the search term and return the matching records
    pub fn search(&mut self, term: impl Into<String>) -> Vec<&User> {
        self.state.set_search_term(term);
        self.state.displayed()
    }

    /// Confirm, delete remotely, then drop the record locally
    pub async fn delete(&mut self, id: UserId, prompter: &dyn Prompter) -> DeleteOutcome {
        if !prompter.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_user(id).await {
            Ok(()) => {
                self.state.remove(id);
                info!(%id, "Deleted user");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Error deleting user: {}", e);
                DeleteOutcome::Failed
            }
        }
    }

    /// Apply a validated form submission to the local collection
    pub fn submit(&mut self, submission: UserSubmission) -> SubmitOutcome {
        let outcome = self.state.apply(submission);
        info!(?outcome, "Applied user form");
        outcome
    }

    /// Blank form for a new record
    pub fn create_form(&self) -> UserForm {
        UserForm::create()
    }

    /// Form seeded from the listed record with this id
    pub fn edit_form(&self, id: UserId) -> Option<UserForm> {
        self.state.find(id).map(UserForm::edit)
    }

    /// Follow the "view details" link of a listed record
    ///
    /// Local records are shown inline through the prompter and yield no
    /// route; server records yield their detail route.
    pub fn open_details(&self, id: UserId, prompter: &dyn Prompter) -> Option<Route> {
        match link_for(self.state.find(id)?) {
            UserLink::Inline(text) => {
                prompter.alert(&text);
                None
            }
            UserLink::Route(route) => Some(route),
        }
    }
}
