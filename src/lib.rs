//! # Roster
//!
//! `roster` is a small terminal client that runs a three-step pipeline for every
//! submitted email address:
//!
//! 1. **Validate:** the address must look like `local@domain.tld`. Invalid input
//!    stops the pipeline with an error status and no network traffic.
//! 2. **Fetch:** a single `GET` to the user list endpoint. Failures are reported
//!    with a generic status message and logged; nothing is retried.
//! 3. **Render:** every user becomes one row. Once rows are on screen the list
//!    can be re-sorted locally without another request.
//!
//! The terminal plays the role of a page: a status line, a list of rows and a
//! sort control. See [`roster::page::Page`] for the orchestration.

pub mod cli;
pub mod roster;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
