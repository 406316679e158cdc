//! mr-changelog - draft changelogs from GitLab merge requests
//!
//! Walks first-parent git history since the last release tag, collects the
//! merge requests referenced by `See merge request !N` trailers, fetches
//! their titles from the GitLab API in fixed-size pages, and renders one
//! changelog bullet per reference.

pub mod changelog;
pub mod config;
pub mod error;
pub mod history;
pub mod platform;
pub mod types;
