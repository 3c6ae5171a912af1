//! Integration tests for identity-validator.

mod policy;
mod prelude;
mod samples;
