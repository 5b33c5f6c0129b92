/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The search, pagination and overlay state machine (search.rs)

pub mod data;
pub mod search;
