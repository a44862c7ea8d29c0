//! Request payload models

pub mod user;

pub use user::{NewUser, UserChanges};
