//! Domain layer - Core business logic and entities

pub mod error;
pub mod route;
pub mod user;

pub use error::DomainError;
pub use route::Route;
pub use user::{User, UserApi, UserId};
