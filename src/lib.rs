//! User management console.
//!
//! A client for a user service that creates and deletes users asynchronously:
//! every mutation returns an operation id that is polled until it leaves
//! `Processing`, after which the user list is reloaded from the service.

pub mod api;
pub mod config;
pub mod console;
pub mod model;
pub mod observability;
pub mod resilience;
pub mod state;

pub use api::{HttpUsersApi, UsersApi};
pub use config::ConsoleConfig;
pub use console::UserConsole;
