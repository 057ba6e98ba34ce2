//! Live session view for the vitals TUI.
//!
//! Renders the measuring screen (value tiles, classification banner, elapsed
//! timer, informational banners) and the stopped screen. Line building is
//! separated from frame rendering so the layout is unit-testable.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use vitals_core::formatting::format_elapsed;
use vitals_runtime::{SessionSnapshot, SessionState};

use crate::components::banners;
use crate::components::header::Header;
use crate::themes::Theme;

// ── Row builders ──────────────────────────────────────────────────────────────

/// Build one value tile row: `<emoji> <label>: <value> <unit>`.
fn value_row<'a>(
    emoji: &'a str,
    label: &'a str,
    value: &'a str,
    unit: &'a str,
    theme: &'a Theme,
) -> Line<'a> {
    let mut spans = vec![
        Span::raw(emoji),
        Span::raw(" "),
        Span::styled(format!("{label}: "), theme.label),
        Span::styled(value, theme.value),
    ];
    if !unit.is_empty() {
        spans.push(Span::styled(format!(" {unit}"), theme.dim));
    }
    Line::from(spans)
}

// ── Main render ───────────────────────────────────────────────────────────────

/// Render the session screen for the given snapshot into `area`.
pub fn render_session_view(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    scenario: &str,
    refresh_rate: u32,
    theme: &Theme,
) {
    let lines = match snapshot.state {
        SessionState::Measuring => build_measuring_lines(snapshot, scenario, refresh_rate, theme),
        SessionState::Stopped => build_stopped_lines(snapshot, scenario, refresh_rate, theme),
    };
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Build the measuring screen (extracted for testability).
pub fn build_measuring_lines<'a>(
    snapshot: &'a SessionSnapshot,
    scenario: &'a str,
    refresh_rate: u32,
    theme: &'a Theme,
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line<'a>> = Vec::with_capacity(16);

    lines.extend(Header::new(scenario, refresh_rate, theme).to_lines());

    // Value tiles.
    lines.push(value_row(
        "❤️",
        "Heart Rate",
        &snapshot.slots.heart_rate,
        "bpm",
        theme,
    ));
    lines.push(value_row("💓", "HRV", &snapshot.slots.hrv, "ms", theme));
    lines.push(value_row("😰", "Stress", &snapshot.slots.stress, "", theme));
    lines.push(Line::from(""));

    // Classification banner.
    lines.push(banners::classification_line(
        snapshot.slots.classification,
        theme,
    ));
    lines.push(Line::from(""));

    // Elapsed-timer banner.
    lines.push(Line::from(vec![
        Span::styled("⏱ ", theme.label),
        Span::styled(format_elapsed(snapshot.elapsed_secs), theme.banner_timer),
    ]));
    lines.push(Line::from(""));

    // Informational banners, then the standing disclaimer.
    lines.extend(banners::banner_lines(snapshot.banners, theme));
    lines.push(Line::from(""));
    lines.push(banners::notice_line(theme));
    lines.push(Line::from(Span::styled(
        "Press 'x' to stop, 'q' to quit",
        theme.dim,
    )));

    lines
}

/// Build the stopped screen (extracted for testability).
pub fn build_stopped_lines<'a>(
    snapshot: &'a SessionSnapshot,
    scenario: &'a str,
    refresh_rate: u32,
    theme: &'a Theme,
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line<'a>> = Vec::with_capacity(8);

    lines.extend(Header::new(scenario, refresh_rate, theme).to_lines());

    lines.push(Line::from(Span::styled("Monitoring stopped.", theme.text)));
    lines.push(Line::from(""));

    // A rejected start is the one blocking, user-facing error.
    if let Some(ref message) = snapshot.error {
        lines.push(Line::from(Span::styled(
            format!(" Validation failed: {message} "),
            theme.banner_error,
        )));
        lines.push(Line::from(Span::styled(
            "Check your credential and connectivity, then start again.",
            theme.dim,
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press 's' to start, 'q' to quit",
        theme.dim,
    )));

    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_core::classify::StressLevel;
    use vitals_core::display::ReadingSlots;
    use vitals_runtime::Banners;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn measuring_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            state: SessionState::Measuring,
            elapsed_secs: 3661,
            slots: ReadingSlots {
                heart_rate: "72.4".to_string(),
                hrv: "55".to_string(),
                stress: "1.87".to_string(),
                classification: StressLevel::Mild,
            },
            banners: Banners {
                searching: false,
                please_wait: false,
                noisy: true,
            },
            started_at: None,
            error: None,
        }
    }

    fn stopped_snapshot(error: Option<&str>) -> SessionSnapshot {
        SessionSnapshot {
            state: SessionState::Stopped,
            elapsed_secs: 0,
            slots: ReadingSlots::default(),
            banners: Banners::default(),
            started_at: None,
            error: error.map(|s| s.to_string()),
        }
    }

    // ── Measuring screen ──────────────────────────────────────────────────

    #[test]
    fn test_measuring_screen_shows_values_and_units() {
        let theme = Theme::dark();
        let text = text_of(&build_measuring_lines(
            &measuring_snapshot(),
            "clean",
            1,
            &theme,
        ));
        assert!(text.contains("Heart Rate: 72.4 bpm"), "got:\n{text}");
        assert!(text.contains("HRV: 55 ms"), "got:\n{text}");
        assert!(text.contains("Stress: 1.87"), "got:\n{text}");
    }

    #[test]
    fn test_measuring_screen_formats_elapsed_timer() {
        let theme = Theme::dark();
        let text = text_of(&build_measuring_lines(
            &measuring_snapshot(),
            "clean",
            1,
            &theme,
        ));
        assert!(text.contains("01:01:01"), "got:\n{text}");
    }

    #[test]
    fn test_measuring_screen_shows_classification_label() {
        let theme = Theme::dark();
        let text = text_of(&build_measuring_lines(
            &measuring_snapshot(),
            "clean",
            1,
            &theme,
        ));
        assert!(text.contains("Mild"), "got:\n{text}");
    }

    #[test]
    fn test_measuring_screen_shows_active_banners_only() {
        let theme = Theme::dark();
        let text = text_of(&build_measuring_lines(
            &measuring_snapshot(),
            "clean",
            1,
            &theme,
        ));
        assert!(text.contains(banners::NOISY_TEXT));
        assert!(!text.contains(banners::WAIT_TEXT));
        assert!(!text.contains(banners::SEARCHING_TEXT));
    }

    #[test]
    fn test_measuring_screen_carries_disclaimer() {
        let theme = Theme::dark();
        let text = text_of(&build_measuring_lines(
            &measuring_snapshot(),
            "clean",
            1,
            &theme,
        ));
        assert!(text.contains(banners::NOTICE_TEXT));
    }

    // ── Stopped screen ────────────────────────────────────────────────────

    #[test]
    fn test_stopped_screen_without_error() {
        let theme = Theme::dark();
        let text = text_of(&build_stopped_lines(
            &stopped_snapshot(None),
            "clean",
            1,
            &theme,
        ));
        assert!(text.contains("Monitoring stopped."));
        assert!(text.contains("Press 's' to start"));
        assert!(!text.contains("Validation failed"));
    }

    #[test]
    fn test_stopped_screen_with_validation_error() {
        let theme = Theme::dark();
        let text = text_of(&build_stopped_lines(
            &stopped_snapshot(Some("credential rejected")),
            "clean",
            1,
            &theme,
        ));
        assert!(
            text.contains("Validation failed: credential rejected"),
            "got:\n{text}"
        );
    }

    #[test]
    fn test_placeholder_values_render_on_fresh_session() {
        let theme = Theme::dark();
        let mut snap = measuring_snapshot();
        snap.slots = ReadingSlots::default();
        snap.elapsed_secs = 0;
        let text = text_of(&build_measuring_lines(&snap, "clean", 1, &theme));
        assert!(text.contains("Heart Rate: --- bpm"), "got:\n{text}");
        assert!(text.contains("00:00:00"));
    }
}
