use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the application title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Scenario and refresh information in `[ scenario | every Ns ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Active engine scenario name (e.g. "clean", "face-loss").
    pub scenario: &'a str,
    /// Polling interval in seconds.
    pub refresh_rate: u32,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(scenario: &'a str, refresh_rate: u32, theme: &'a Theme) -> Self {
        Self {
            scenario,
            refresh_rate,
            theme,
        }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            // Title line.
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(" LIVE VITALS MONITOR ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            // Separator line.
            Line::from(Span::styled(separator, self.theme.separator)),
            // Scenario / refresh info line.
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.scenario.to_lowercase(), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("every {}s", self.refresh_rate), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            // Empty line.
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
