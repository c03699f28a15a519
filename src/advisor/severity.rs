//! Staleness classification.

use serde::{Deserialize, Serialize};

/// How far an installation has fallen behind the latest release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Running the latest version (or something newer).
    UpToDate,
    /// Up to two steps behind, or same major.minor with a different version string.
    MinorLag,
    /// Exactly three steps behind.
    ModerateLag,
    /// More than three steps behind.
    SevereLag,
}

impl Severity {
    /// Classify a score gap.
    ///
    /// `identical` is whether the raw current and latest strings are equal.
    /// A zero gap only counts as up to date when they are.
    pub fn classify(steps_behind: i128, identical: bool) -> Self {
        match steps_behind {
            d if d < 0 => Self::UpToDate,
            0 if identical => Self::UpToDate,
            0..=2 => Self::MinorLag,
            3 => Self::ModerateLag,
            _ => Self::SevereLag,
        }
    }

    /// Icon file name, relative to the icon base path.
    pub fn icon_file(&self) -> &'static str {
        match self {
            Self::UpToDate => "icon_uptodate.png",
            Self::MinorLag => "icon_update.png",
            Self::ModerateLag => "icon_update2.png",
            Self::SevereLag => "icon_outdated.png",
        }
    }

    /// Build the advisory message.
    ///
    /// `target` is what follows "upgrade to" (a link or the bare version) and
    /// `line_break` separates the two sentences of the lag messages.
    pub fn compose_message(&self, target: &str, line_break: &str) -> String {
        match self {
            Self::UpToDate => "You are running the latest version".to_string(),
            Self::MinorLag => format!("New version available: {}", target),
            Self::ModerateLag => format!(
                "This version will soon be obsolete.{}Please upgrade to {}",
                line_break, target
            ),
            Self::SevereLag => format!(
                "This version is no longer supported.{}Please upgrade to {}",
                line_break, target
            ),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::UpToDate => "up to date",
            Self::MinorLag => "update available",
            Self::ModerateLag => "obsolete soon",
            Self::SevereLag => "unsupported",
        };
        f.write_str(label)
    }
}
