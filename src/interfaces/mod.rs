//! Adapters between the store and the outside world: CSV input and output,
//! and observers that report store changes.

pub mod csv;
pub mod logging;
