//! Domain types shared by the API client, the state store and the console.

pub mod draft;
pub mod status;
pub mod user;

pub use draft::{Draft, Field, FieldError, Touched};
pub use status::OperationStatus;
pub use user::{NewUser, User, UserId, UserRow};
