//! Application layer holding the observable transaction model.
//!
//! `TransactionStore` is the single stateful component: controllers mutate it,
//! observers react to it.

pub mod store;
