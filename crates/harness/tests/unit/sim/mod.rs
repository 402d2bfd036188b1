//! Unit tests for the design harness and loader.


/// Event order of construction, reset, cycling, and teardown.
pub mod harness_sequencing;
