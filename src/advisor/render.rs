//! HTML fragment for embedding an advisory into a page.
//!
//! The fragment is three `div`s: a hidden tooltip message, the hidden current
//! version, and a visible icon. Content is inserted as-is; the message already
//! carries its own markup.

use super::evaluate::Advisory;

/// Render an advisory as an HTML fragment. The empty advisory renders as `""`.
///
/// ```
/// use vergap::advisor::{evaluate, render_html};
///
/// assert_eq!(render_html(evaluate("enabled", "1.0.0", "1.0.0").as_ref()), "");
///
/// let html = render_html(evaluate("disabled", "1.0.0", "1.0.0").as_ref());
/// assert!(html.contains("id='version_icon'"));
/// ```
pub fn render_html(advisory: Option<&Advisory>) -> String {
    let Some(advisory) = advisory else {
        return String::new();
    };

    format!(
        "<div id='version_message' style='display:none'>{}</div>\
         <div id='version_current' style='display:none'>{}</div>\
         <div id='version_icon' style='background-image: url({});'></div>",
        advisory.message, advisory.current_version, advisory.icon_path
    )
}
