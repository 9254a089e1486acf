//! Utility functions

pub mod dom;
