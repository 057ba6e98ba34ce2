use ratatui::style::{Color, Modifier, Style};

use vitals_core::classify::StressLevel;

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    background_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

/// Classify a `COLORFGBG` value; the env read stays in [`detect_background`]
/// so this part is testable without touching process state.
fn background_from_colorfgbg(value: Option<&str>) -> BackgroundType {
    if let Some(val) = value {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the vitals-ui
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Banners ──────────────────────────────────────────────────────────────
    /// "Searching for a face" banner.
    pub banner_searching: Style,
    /// "Please wait" warm-up banner.
    pub banner_wait: Style,
    /// "Values may be noisy" banner.
    pub banner_noisy: Style,
    /// Blocking validation-error banner.
    pub banner_error: Style,
    /// Wellness disclaimer footer.
    pub banner_notice: Style,
    /// Elapsed-timer banner.
    pub banner_timer: Style,

    // ── Stress classification ────────────────────────────────────────────────
    pub stress_normal: Style,
    pub stress_mild: Style,
    pub stress_high: Style,
    pub stress_very_high: Style,
    pub stress_undetermined: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            banner_searching: Style::default().fg(Color::Yellow),
            banner_wait: Style::default().fg(Color::Cyan),
            banner_noisy: Style::default().fg(Color::Yellow),
            banner_error: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            banner_notice: Style::default().fg(Color::DarkGray),
            banner_timer: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            stress_normal: classification(Color::Rgb(12, 128, 42)),
            stress_mild: classification(Color::Blue),
            stress_high: classification(Color::Rgb(255, 165, 0)),
            stress_very_high: classification(Color::Red),
            stress_undetermined: classification(Color::Black),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Magenta),
            error: Style::default().fg(Color::Red),

            banner_searching: Style::default().fg(Color::Magenta),
            banner_wait: Style::default().fg(Color::Blue),
            banner_noisy: Style::default().fg(Color::Magenta),
            banner_error: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            banner_notice: Style::default().fg(Color::Gray),
            banner_timer: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            stress_normal: classification(Color::Rgb(12, 128, 42)),
            stress_mild: classification(Color::Blue),
            stress_high: classification(Color::Rgb(255, 165, 0)),
            stress_very_high: classification(Color::Red),
            stress_undetermined: classification(Color::Black),
        }
    }

    /// Resolve a theme from its CLI name; `"auto"` and unknown names fall
    /// back to the detected terminal background.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }

    // ── Lookups ──────────────────────────────────────────────────────────────

    /// The classification banner style for a stress level.
    pub fn classification_style(&self, level: StressLevel) -> Style {
        match level {
            StressLevel::Normal => self.stress_normal,
            StressLevel::Mild => self.stress_mild,
            StressLevel::High => self.stress_high,
            StressLevel::VeryHigh => self.stress_very_high,
            StressLevel::Undetermined => self.stress_undetermined,
        }
    }
}

/// Classification banners use a filled background with bold white text.
fn classification(bg: Color) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
