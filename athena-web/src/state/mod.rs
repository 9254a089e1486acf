//! Reactive application state

pub mod wallet;
