//! # Student Atlas (course management client)
//!
//! `student_atlas` talks to the university course-management REST backend on
//! behalf of admins and students. Page-level code (the `atlas` CLI here) issues
//! plain domain requests; authentication concerns live in two pieces:
//!
//! ## Session Store
//!
//! [`session::SessionStore`] is the single source of truth for "who is logged
//! in". It restores the persisted identity once at start, performs login and
//! logout, and exposes a synchronous `is_authenticated` signal. The profile and
//! the bearer token are always set and cleared together.
//!
//! ## Authorized Request Gateway
//!
//! [`api::Gateway`] owns the HTTP client and the base address. Every request is
//! stamped with the current bearer token read from durable storage. A `401`
//! from the backend tears the whole session down and navigates to `/login`,
//! regardless of which call triggered it. Other failures are returned to the
//! caller unchanged; nothing is retried.
//!
//! Tokens and passwords are carried as `SecretString` and must never be logged.

pub mod api;
pub mod cli;
pub mod config;
pub mod features;
pub mod guards;
pub mod portal;
pub mod session;
pub mod storage;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
