//! User domain
//!
//! This module provides the user record, the in-memory collection with its
//! search view, the create/edit form with validation, the detail view state,
//! and the trait for the remote user source.

mod details;
mod entity;
mod form;
mod list;
mod repository;
mod validation;

pub use details::{UserDetails, DETAILS_FETCH_ERROR};
pub use entity::{Address, Company, User, UserId, UserSubmission};
pub use form::{FieldErrors, FormMode, UserForm};
pub use list::{link_for, SubmitOutcome, UserLink, UserList};
pub use repository::UserApi;
pub use validation::{
    validate_company_name, validate_required, validate_website, FormField, UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserApi;
