//! Form schemas and submit-time validation

pub use crypton_forms::*;
