//! Version staleness advisory.
//!
//! Given the plan level, the installed version, and the latest published
//! version, the advisor decides how far behind the installation is and picks
//! an icon and tooltip message for it.
//!
//! - [`version`] - `MAJOR.MINOR.PATCH` parsing and gap scoring
//! - [`severity`] - Gap classification, icons, and messages
//! - [`evaluate`](mod@evaluate) - [`VersionGapAdvisor`] and its settings
//! - [`render`] - HTML fragment output
//!
//! # Example
//!
//! ```
//! use vergap::advisor::{evaluate, Severity};
//!
//! let advisory = evaluate("disabled", "1.0.0", "2.5.0").unwrap();
//! assert_eq!(advisory.severity, Severity::SevereLag);
//! assert_eq!(advisory.icon_path, "/css/images/icon_outdated.png");
//! ```

pub mod evaluate;
pub mod render;
pub mod severity;
pub mod version;

pub use evaluate::{
    evaluate, Advisory, AdvisorSettings, VersionGapAdvisor, DEFAULT_ICON_BASE_PATH,
    DEFAULT_TRIGGER_PLAN_LEVEL, DEFAULT_UPDATE_URL,
};
pub use render::render_html;
pub use severity::Severity;
pub use version::ParsedVersion;
