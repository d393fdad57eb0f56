//! Output Rendering
//!
//! Text for clone summaries, warnings and failures.

use crate::domain::services::CloneSummary;
use crate::util::pluralise;

/// Icons for output rendering
pub(crate) struct Icons {
    pub check: &'static str,
    pub cross: &'static str,
    pub warning: &'static str,
    pub expand: &'static str,
    pub separator: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub radio_on: &'static str,
    pub radio_off: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warning: "⚠",
            expand: "▼",
            separator: "─",
            checked: "☑",
            unchecked: "☐",
            radio_on: "●",
            radio_off: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warning: "[WARN]",
            expand: "[v]",
            separator: "-",
            checked: "[x]",
            unchecked: "[ ]",
            radio_on: "(*)",
            radio_off: "( )",
        }
    }

    pub fn select(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// One-line count breakdown plus a skipped-node line when anything was left out
pub fn render_summary(title: &str, summary: &CloneSummary, unicode: bool) -> String {
    let icons = Icons::select(unicode);
    let mut out = format!(
        "{} Mirrored '{}': {}, {}, {}, {}\n",
        icons.check,
        title,
        pluralise(summary.actions, "action", "actions"),
        pluralise(summary.menus, "submenu", "submenus"),
        pluralise(summary.separators, "separator", "separators"),
        pluralise(summary.groups, "group", "groups"),
    );

    if summary.skipped > 0 {
        out.push_str(&format!(
            "{} Skipped {}\n",
            icons.warning,
            pluralise(summary.skipped, "unsupported node", "unsupported nodes")
        ));
    }

    out
}

pub fn render_warning(message: &str, unicode: bool) -> String {
    format!("{} {}\n", Icons::select(unicode).warning, message)
}

pub fn render_error(message: &str, unicode: bool) -> String {
    format!("{} {}\n", Icons::select(unicode).cross, message)
}
