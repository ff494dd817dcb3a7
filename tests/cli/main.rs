//! Command-level CLI tests for ucs

mod config;
mod demo;
mod logging;
mod search;
mod support;
