//! CLI commands for ucs

pub mod check;
pub mod demo;
pub mod dispatch;
pub mod records;
pub mod search;
