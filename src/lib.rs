// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Managed Records
//!
//! Paginated, color-filtered retrieval of records from an HTTP endpoint,
//! classified into open records and a count of closed primary-colored ones.
//!
//! ## Features
//!
//! - **Over-fetch pagination**: pages of ten, one extra record requested to
//!   detect whether a further page exists
//! - **Color filtering**: repeated `color[]` query parameters
//! - **Classification**: open records with a primary flag, closed primary count
//! - **Quiet failures**: [`Retriever::retrieve`] logs and returns `None`;
//!   [`Retriever::try_retrieve`] returns the typed error
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use managed_records::{RecordsConfig, RetrievalOptions, Retriever};
//!
//! #[tokio::main]
//! async fn main() -> managed_records::Result<()> {
//!     let retriever = Retriever::new(RecordsConfig::new("http://localhost:3000/records"))?;
//!
//!     let options = RetrievalOptions::new().page(2).colors(["red", "brown"]);
//!     if let Some(page) = retriever.retrieve(&options).await {
//!         println!("{:?} next={:?}", page.ids, page.next_page);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! RetrievalOptions
//!        │
//!        ▼
//! ┌──────────────┐   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ Query builder│──▶│ GET (one    │──▶│ Response gate│──▶│ Classifier   │
//! │ limit/offset │   │ attempt)    │   │ status/JSON  │   │ ids/open/... │
//! │ color[]      │   │             │   │              │   │ prev/next    │
//! └──────────────┘   └─────────────┘   └──────────────┘   └──────────────┘
//!   pagination          http              http               classify
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types: options, records, results
pub mod types;

/// Retriever configuration
pub mod config;

/// HTTP client and response gate
pub mod http;

/// Offset pagination and the query builder
pub mod pagination;

/// Page classification
pub mod classify;

/// Record source trait
pub mod source;

/// Retrieval orchestrator
pub mod retriever;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::classify;
pub use config::{load_config, load_config_from_str, RecordsConfig};
pub use error::{Error, Result};
pub use http::check_response;
pub use pagination::apply_options;
pub use retriever::Retriever;
pub use source::RecordSource;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
