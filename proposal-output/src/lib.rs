//! # proposal-output
//!
//! Atomic writing and diffing of rendered proposals.
//!
//! Call [`atomic_write`] to write a rendered proposal to the path an
//! [`OutputTarget`] resolves to, or [`diff_proposal`] to compare a fresh
//! render with a previously written document.

pub mod diff;
pub mod error;
pub mod writer;

pub use diff::{diff_proposal, FileDiff};
pub use error::OutputError;
pub use writer::{atomic_write, default_file_name, OutputTarget, WriteResult};
