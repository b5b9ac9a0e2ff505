// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod config;
pub(crate) mod signs;
pub(crate) mod diagnostics;

// algorithms
pub mod bisection;
pub mod newton;
pub mod rootwalk;
