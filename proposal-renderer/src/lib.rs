//! # proposal-renderer
//!
//! Tera-based engine that renders the client proposal document from a
//! [`ProposalContext`](proposal_core::ProposalContext).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use proposal_core::ProposalContext;
//! use proposal_renderer::Renderer;
//!
//! fn render(proposal: &ProposalContext) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(markdown) = renderer.render(proposal) {
//!             println!("{markdown}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{default_template_source, Renderer, TemplateEngine, PROPOSAL_TEMPLATE};
pub use error::RenderError;
