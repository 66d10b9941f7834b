//! Integration tests for the ranking pipeline.

mod json_slate;
mod properties;
