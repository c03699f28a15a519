//! vergap - Version staleness advisory.
//!
//! vergap tells an installation how far it has fallen behind the latest
//! published release and picks an icon and tooltip message for that gap.
//!
//! # Modules
//!
//! - [`advisor`] - Version parsing, gap classification, and HTML rendering
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use vergap::advisor::{evaluate, Severity};
//!
//! let advisory = evaluate("disabled", "2.0.0", "2.3.0").unwrap();
//! assert_eq!(advisory.severity, Severity::ModerateLag);
//! assert_eq!(advisory.current_version, "2.0.0");
//!
//! // Any other plan level shows nothing
//! assert!(evaluate("enabled", "2.0.0", "2.3.0").is_none());
//! ```

pub mod advisor;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use advisor::{evaluate, Advisory, Severity, VersionGapAdvisor};
pub use error::{Result, VergapError};
