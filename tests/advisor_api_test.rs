//! Integration tests for the advisor public API.

use vergap::advisor::{
    evaluate, render_html, AdvisorSettings, ParsedVersion, Severity, VersionGapAdvisor,
};

#[test]
fn non_disabled_plan_is_empty() {
    assert!(evaluate("enabled", "2.5.1", "2.5.1").is_none());
}

#[test]
fn disabled_plan_same_version_is_up_to_date() {
    let advisory = evaluate("disabled", "2.5.1", "2.5.1").unwrap();
    assert_eq!(advisory.severity, Severity::UpToDate);
    assert!(advisory.icon_path.ends_with("icon_uptodate.png"));
}

#[test]
fn gap_of_two_is_minor_lag() {
    let advisory = evaluate("disabled", "2.3.0", "2.5.0").unwrap();
    assert!(advisory.icon_path.ends_with("icon_update.png"));
}

#[test]
fn gap_of_three_is_moderate_lag() {
    let advisory = evaluate("disabled", "2.0.0", "2.3.0").unwrap();
    assert!(advisory.icon_path.ends_with("icon_update2.png"));
}

#[test]
fn gap_of_fifteen_is_severe_lag() {
    let advisory = evaluate("disabled", "1.0.0", "2.5.0").unwrap();
    assert!(advisory.icon_path.ends_with("icon_outdated.png"));
}

#[test]
fn bad_version_is_empty() {
    assert!(evaluate("disabled", "bad-string", "2.5.0").is_none());
}

#[test]
fn prerelease_suffix_is_not_identical() {
    let advisory = evaluate("disabled", "2.5.0", "2.5.0-rc").unwrap();
    assert_eq!(advisory.severity, Severity::MinorLag);
    assert_eq!(advisory.summary, "New version available: 2.5.0-rc");
}

#[test]
fn repeated_calls_agree() {
    let inputs = [
        ("disabled", "2.5.1", "2.5.1"),
        ("disabled", "1.0.0", "2.5.0"),
        ("enabled", "1.0.0", "2.5.0"),
        ("disabled", "x", "y"),
    ];
    for (plan, current, latest) in inputs {
        assert_eq!(
            evaluate(plan, current, latest),
            evaluate(plan, current, latest)
        );
    }
}

#[test]
fn advisor_is_shareable_across_threads() {
    let advisor = std::sync::Arc::new(VersionGapAdvisor::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let advisor = advisor.clone();
            std::thread::spawn(move || advisor.evaluate("disabled", "2.0.0", "2.3.0"))
        })
        .collect();

    for handle in handles {
        let advisory = handle.join().unwrap().unwrap();
        assert_eq!(advisory.severity, Severity::ModerateLag);
    }
}

#[test]
fn custom_settings_change_paths_and_gate() {
    let advisor = VersionGapAdvisor::new(AdvisorSettings {
        icon_base_path: "/assets/".into(),
        update_url: "https://downloads.example.org/".into(),
        trigger_plan_level: "community".into(),
    });

    assert!(advisor.evaluate("disabled", "1.0.0", "1.0.0").is_none());

    let html = render_html(advisor.evaluate("community", "1.0.0", "1.4.0").as_ref());
    assert!(html.contains("url(/assets/icon_outdated.png)"));
    assert!(html.contains("<a href='https://downloads.example.org/'>1.4.0</a>"));
}

#[test]
fn parsed_version_public_api() {
    let v = ParsedVersion::parse("3.1.4").unwrap();
    assert_eq!(v.score(), 31);
    assert_eq!(v.steps_behind(&ParsedVersion::parse("3.4.0").unwrap()), 3);
}
