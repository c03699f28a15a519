//! The version gap advisor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::severity::Severity;
use super::version::ParsedVersion;

/// Default prefix for icon paths.
pub const DEFAULT_ICON_BASE_PATH: &str = "/css/images/";

/// Default target of the "upgrade to" link.
pub const DEFAULT_UPDATE_URL: &str = "http://apt.sourcefabric.org/misc/";

/// Plan level that turns the advisory on.
pub const DEFAULT_TRIGGER_PLAN_LEVEL: &str = "disabled";

/// Fixed values the advisor stamps into every advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorSettings {
    /// Prefix joined to the icon file name.
    pub icon_base_path: String,
    /// Where the "upgrade to" link points.
    pub update_url: String,
    /// The advisory is only produced when the plan level equals this value.
    pub trigger_plan_level: String,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            icon_base_path: DEFAULT_ICON_BASE_PATH.to_string(),
            update_url: DEFAULT_UPDATE_URL.to_string(),
            trigger_plan_level: DEFAULT_TRIGGER_PLAN_LEVEL.to_string(),
        }
    }
}

/// A populated advisory. The empty advisory is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Staleness class this advisory was built from.
    pub severity: Severity,
    /// Icon base path joined with the severity's icon file.
    pub icon_path: String,
    /// Tooltip message; lag messages embed a link to the update repository.
    pub message: String,
    /// Same message as plain text, with the bare latest version instead of a link.
    pub summary: String,
    /// The current version string, exactly as supplied.
    pub current_version: String,
}

/// Computes how far an installation is behind and picks the matching advisory.
#[derive(Debug, Clone, Default)]
pub struct VersionGapAdvisor {
    settings: AdvisorSettings,
}

impl VersionGapAdvisor {
    /// Create an advisor with the given settings.
    pub fn new(settings: AdvisorSettings) -> Self {
        Self { settings }
    }

    /// Evaluate the advisory for an installation.
    ///
    /// Returns `None` unless `plan_level` equals the trigger plan level, and
    /// `None` when either version does not start with `MAJOR.MINOR.PATCH`.
    ///
    /// ```
    /// use vergap::advisor::{Severity, VersionGapAdvisor};
    ///
    /// let advisor = VersionGapAdvisor::default();
    /// let advisory = advisor.evaluate("disabled", "2.3.0", "2.5.0").unwrap();
    /// assert_eq!(advisory.severity, Severity::MinorLag);
    /// assert!(advisor.evaluate("enabled", "2.3.0", "2.5.0").is_none());
    /// ```
    pub fn evaluate(&self, plan_level: &str, current: &str, latest: &str) -> Option<Advisory> {
        if plan_level != self.settings.trigger_plan_level {
            debug!(plan_level, "Plan level does not enable the version advisory");
            return None;
        }

        let (Some(current_parsed), Some(latest_parsed)) =
            (ParsedVersion::parse(current), ParsedVersion::parse(latest))
        else {
            debug!(current, latest, "Version string not in MAJOR.MINOR.PATCH form");
            return None;
        };

        let steps_behind = current_parsed.steps_behind(&latest_parsed);
        let severity = Severity::classify(steps_behind, current == latest);
        debug!(current, latest, steps_behind, %severity, "Classified version gap");

        let link = format!("<a href='{}'>{}</a>", self.settings.update_url, latest);

        Some(Advisory {
            severity,
            icon_path: format!("{}{}", self.settings.icon_base_path, severity.icon_file()),
            message: severity.compose_message(&link, "<br/>"),
            summary: severity.compose_message(latest, " "),
            current_version: current.to_string(),
        })
    }
}

/// Evaluate with the default settings.
///
/// ```
/// use vergap::advisor::evaluate;
///
/// let advisory = evaluate("disabled", "2.5.1", "2.5.1").unwrap();
/// assert_eq!(advisory.icon_path, "/css/images/icon_uptodate.png");
/// ```
pub fn evaluate(plan_level: &str, current: &str, latest: &str) -> Option<Advisory> {
    VersionGapAdvisor::default().evaluate(plan_level, current, latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn severity_of(current: &str, latest: &str) -> Option<Severity> {
        evaluate("disabled", current, latest).map(|a| a.severity)
    }

    #[test]
    fn non_trigger_plan_level_is_empty() {
        assert_eq!(evaluate("enabled", "2.5.1", "2.5.1"), None);
        assert_eq!(evaluate("", "1.0.0", "2.5.0"), None);
        assert_eq!(evaluate("Disabled", "1.0.0", "2.5.0"), None);
    }

    #[test]
    fn identical_versions_are_up_to_date() {
        let advisory = evaluate("disabled", "2.5.1", "2.5.1").unwrap();
        assert_eq!(advisory.severity, Severity::UpToDate);
        assert_eq!(advisory.icon_path, "/css/images/icon_uptodate.png");
        assert_eq!(advisory.message, "You are running the latest version");
        assert_eq!(advisory.current_version, "2.5.1");
    }

    #[test]
    fn two_steps_behind_is_minor_lag() {
        let advisory = evaluate("disabled", "2.3.0", "2.5.0").unwrap();
        assert_eq!(advisory.severity, Severity::MinorLag);
        assert_eq!(advisory.icon_path, "/css/images/icon_update.png");
        assert_eq!(
            advisory.message,
            "New version available: <a href='http://apt.sourcefabric.org/misc/'>2.5.0</a>"
        );
        assert_eq!(advisory.summary, "New version available: 2.5.0");
    }

    #[test]
    fn three_steps_behind_is_moderate_lag() {
        let advisory = evaluate("disabled", "2.0.0", "2.3.0").unwrap();
        assert_eq!(advisory.severity, Severity::ModerateLag);
        assert_eq!(advisory.icon_path, "/css/images/icon_update2.png");
        assert_eq!(
            advisory.message,
            "This version will soon be obsolete.<br/>Please upgrade to \
             <a href='http://apt.sourcefabric.org/misc/'>2.3.0</a>"
        );
        assert_eq!(
            advisory.summary,
            "This version will soon be obsolete. Please upgrade to 2.3.0"
        );
    }

    #[test]
    fn many_steps_behind_is_severe_lag() {
        let advisory = evaluate("disabled", "1.0.0", "2.5.0").unwrap();
        assert_eq!(advisory.severity, Severity::SevereLag);
        assert_eq!(advisory.icon_path, "/css/images/icon_outdated.png");
        assert_eq!(
            advisory.summary,
            "This version is no longer supported. Please upgrade to 2.5.0"
        );
    }

    #[test]
    fn unparseable_versions_are_empty() {
        assert_eq!(evaluate("disabled", "bad-string", "2.5.0"), None);
        assert_eq!(evaluate("disabled", "2.5.0", "latest"), None);
        assert_eq!(evaluate("disabled", "2.5", "2.5.0"), None);
    }

    #[test]
    fn newer_than_latest_is_up_to_date() {
        assert_eq!(severity_of("3.0.0", "2.5.0"), Some(Severity::UpToDate));
    }

    #[test]
    fn same_score_with_different_strings_is_minor_lag() {
        assert_eq!(severity_of("2.5.0", "2.5.0-rc"), Some(Severity::MinorLag));
        assert_eq!(severity_of("2.5.0", "2.5.3"), Some(Severity::MinorLag));
    }

    #[test]
    fn minor_of_ten_or_more_breaks_ordering() {
        // 2.10 scores the same as 3.0
        assert_eq!(severity_of("2.10.0", "3.0.0"), Some(Severity::MinorLag));
        // 2.10 looks newer than 2.9 only by one step
        assert_eq!(severity_of("2.9.0", "2.10.0"), Some(Severity::MinorLag));
        // 2.10 -> 2.13 scores 30 -> 33
        assert_eq!(severity_of("2.10.0", "2.13.0"), Some(Severity::ModerateLag));
    }

    #[test]
    fn current_version_is_echoed_raw() {
        let advisory = evaluate("disabled", "2.5.1-custom build", "2.5.1").unwrap();
        assert_eq!(advisory.current_version, "2.5.1-custom build");
    }

    #[test]
    fn oversized_versions_still_classify() {
        assert_eq!(
            severity_of("99999999999999999999.0.0", "2.5.0"),
            Some(Severity::UpToDate)
        );
        assert_eq!(
            severity_of("1.0.0", "18446744073709551616.0.0"),
            Some(Severity::SevereLag)
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let advisor = VersionGapAdvisor::default();
        let first = advisor.evaluate("disabled", "2.3.0", "2.5.0");
        let second = advisor.evaluate("disabled", "2.3.0", "2.5.0");
        assert_eq!(first, second);
    }

    #[test]
    fn custom_settings_flow_into_advisory() {
        let advisor = VersionGapAdvisor::new(AdvisorSettings {
            icon_base_path: "/static/".to_string(),
            update_url: "https://example.com/releases".to_string(),
            trigger_plan_level: "trial".to_string(),
        });

        assert!(advisor.evaluate("disabled", "1.0.0", "2.0.0").is_none());

        let advisory = advisor.evaluate("trial", "1.0.0", "2.0.0").unwrap();
        assert_eq!(advisory.icon_path, "/static/icon_outdated.png");
        assert!(advisory
            .message
            .contains("<a href='https://example.com/releases'>2.0.0</a>"));
    }

    #[test]
    fn settings_default_values() {
        let settings = AdvisorSettings::default();
        assert_eq!(settings.icon_base_path, DEFAULT_ICON_BASE_PATH);
        assert_eq!(settings.update_url, DEFAULT_UPDATE_URL);
        assert_eq!(settings.trigger_plan_level, "disabled");
    }

    #[test]
    fn advisory_serializes_all_fields() {
        let advisory = evaluate("disabled", "2.3.0", "2.5.0").unwrap();
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["severity"], "minor_lag");
        assert_eq!(json["icon_path"], "/css/images/icon_update.png");
        assert_eq!(json["current_version"], "2.3.0");
    }
}
