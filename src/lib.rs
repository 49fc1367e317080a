//! Finds the contributors who keep committing across a repository's most
//! recent releases.

pub mod commands;
pub mod config;
pub mod domain;
pub mod presentation;
