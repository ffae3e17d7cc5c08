//! Domain types shared by the store and its collaborators.

pub mod observer;
pub mod transaction;
