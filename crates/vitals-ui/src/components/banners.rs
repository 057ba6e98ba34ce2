use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use vitals_core::classify::StressLevel;
use vitals_runtime::Banners;

use crate::themes::Theme;

// ── Banner text ───────────────────────────────────────────────────────────────

pub const SEARCHING_TEXT: &str = "👤 Searching for a face…";
pub const WAIT_TEXT: &str = "⏳ Please wait: collecting frames";
pub const NOISY_TEXT: &str = "⚠ Values before the first full minute may be noisy";
pub const NOTICE_TEXT: &str = "Not a medical device. Readings are for wellness purposes only.";

/// Width of the filled classification banner in display columns.
pub const CLASSIFICATION_WIDTH: usize = 24;

// ── Informational banners ─────────────────────────────────────────────────────

/// Build the informational banner lines for the current banner flags.
///
/// Ordering is fixed: searching first, then the warm-up banner, then the
/// noisy-data warning.
pub fn banner_lines<'a>(banners: Banners, theme: &'a Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if banners.searching {
        lines.push(Line::from(Span::styled(
            SEARCHING_TEXT,
            theme.banner_searching,
        )));
    }
    if banners.please_wait {
        lines.push(Line::from(Span::styled(WAIT_TEXT, theme.banner_wait)));
    }
    if banners.noisy {
        lines.push(Line::from(Span::styled(NOISY_TEXT, theme.banner_noisy)));
    }
    lines
}

/// The always-on wellness disclaimer shown while measuring.
pub fn notice_line(theme: &Theme) -> Line<'_> {
    Line::from(Span::styled(NOTICE_TEXT, theme.banner_notice))
}

// ── Classification banner ─────────────────────────────────────────────────────

/// Build the filled classification banner line.
///
/// The label is centred inside a [`CLASSIFICATION_WIDTH`]-column block whose
/// background colour carries the classification; `Undetermined` renders the
/// placeholder on the neutral background.
pub fn classification_line(level: StressLevel, theme: &Theme) -> Line<'static> {
    let style = theme.classification_style(level);
    Line::from(Span::styled(
        center(level.label(), CLASSIFICATION_WIDTH),
        style,
    ))
}

/// Centre `text` in a field of `width` display columns.
///
/// Uses display width, not byte or char counts, so labels stay centred even
/// if they ever carry wide glyphs. Text wider than the field is returned
/// unchanged.
fn center(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    let pad = width - text_width;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
