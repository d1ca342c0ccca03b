//! Config-file resolution tests
//!
//! Every test runs against a temporary home directory.

mod resolver;
