//! Unit tests module organization

pub mod cli;
pub mod models;
