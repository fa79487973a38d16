//! Background work for the dashboard pages.

pub mod mutation_runner;

pub use mutation_runner::{MutationResult, MutationRunner};
