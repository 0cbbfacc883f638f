//! Proposal core library — context types, context loading, settings, errors.
//!
//! - [`types`] — [`ProposalContext`] and the [`CompanyName`] newtype
//! - [`loader`] — read a context from a YAML or JSON file
//! - [`settings`] — `~/.proposal/config.yaml`
//! - [`error`] — [`CoreError`]

pub mod error;
pub mod loader;
pub mod settings;
pub mod types;

pub use error::CoreError;
pub use loader::{load_context, parse_context, ContextFormat};
pub use settings::Settings;
pub use types::{CompanyName, ProposalContext, REQUIRED_FIELDS};
