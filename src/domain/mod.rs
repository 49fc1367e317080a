pub mod activity;
pub mod contributions;
pub mod git_cli;
pub mod history;
pub mod libgit;
pub mod releases;

#[cfg(test)]
pub(crate) mod testing;
