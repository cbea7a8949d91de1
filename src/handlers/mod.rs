//! Command handlers for the reconkit CLI

pub mod tools;

pub use tools::{handle_install, handle_list, handle_status};
