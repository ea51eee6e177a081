//! Detail view loader

use std::sync::Arc;

use tracing::error;

use crate::domain::user::{UserApi, UserDetails, UserId};

/// Loads the detail view for one user id
#[derive(Debug)]
pub struct UserDetailsService<A: UserApi> {
    api: Arc<A>,
}

impl<A: UserApi> UserDetailsService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch once and return the terminal view state
    pub async fn load(&self, id: UserId) -> UserDetails {
        let mut details = UserDetails::Loading;
        let result = self.api.get_user(id).await;

        if let Err(e) = &result {
            error!(%id, "Error fetching user details: {}", e);
        }

        details.resolve(result);
        details
    }
}
