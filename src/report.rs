//! Terminal rendering of the pollen report.
//!
//! Every function returns the text to print instead of printing it. Styling is
//! dropped automatically when stdout isn't a terminal.

use crate::types::record::PollenRecord;
use crate::types::severity::Severity;
use chrono::NaiveDateTime;
use console::{measure_text_width, pad_str, Alignment, Style};
use std::error::Error;

pub const PLACE: &str = "Leiden";
pub const COUNTRY: &str = "Netherlands";

const NAME_WIDTH: usize = 20;
/// Badge text is centred in this many columns, plus one column of padding per side.
const BADGE_WIDTH: usize = 4;

/// Styles for each part of the report, using the 16 ANSI colours.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub title: Style,
    pub rule: Style,
    pub low_badge: Style,
    pub moderate_badge: Style,
    pub high_badge: Style,
    pub error: Style,
    pub warning: Style,
}

impl Default for ReportStyle {
    fn default() -> Self {
        let badge = Style::new().black().bold();
        Self {
            title: Style::new().green().bright().bold(),
            rule: Style::new().white(),
            low_badge: badge.clone().on_green().on_bright(),
            moderate_badge: badge.clone().on_yellow().on_bright(),
            high_badge: badge.on_red().on_bright(),
            error: Style::new().red().bright().bold(),
            warning: Style::new().yellow().bright().bold(),
        }
    }
}

impl ReportStyle {
    /// Same layout with all colours removed, regardless of the terminal.
    pub fn plain() -> Self {
        let plain = Style::new().force_styling(false);
        Self {
            title: plain.clone(),
            rule: plain.clone(),
            low_badge: plain.clone(),
            moderate_badge: plain.clone(),
            high_badge: plain.clone(),
            error: plain.clone(),
            warning: plain,
        }
    }
}

pub fn render_title(style: &ReportStyle) -> String {
    style
        .title
        .apply_to(format!(" 🌿 Pollen Levels - {} ", PLACE))
        .to_string()
}

/// Location and timestamp, underlined with a rule and followed by a blank line.
pub fn render_header(style: &ReportStyle, now: NaiveDateTime) -> String {
    let lines = [
        format!("📍 {}, {}", PLACE, COUNTRY),
        format!("🕐 {}", now.format("%Y-%m-%d %H:%M")),
    ];
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or_default();
    let rule = style.rule.apply_to("─".repeat(width));
    format!("{}\n{}\n\n{}\n", lines[0], lines[1], rule)
}

/// Coloured badge for known severities, the raw status otherwise.
pub fn render_badge(style: &ReportStyle, record: &PollenRecord) -> String {
    let Some(severity) = record.severity() else {
        return record.status.clone();
    };
    let badge_style = match severity {
        Severity::Low => &style.low_badge,
        Severity::Moderate => &style.moderate_badge,
        Severity::High => &style.high_badge,
    };
    let label = pad_str(severity.badge_label(), BADGE_WIDTH, Alignment::Center, None);
    badge_style.apply_to(format!(" {} ", label)).to_string()
}

pub fn render_record(style: &ReportStyle, record: &PollenRecord) -> String {
    format!(
        " {} {:<width$}{} ",
        record.kind().emoji(),
        record.name,
        render_badge(style, record),
        width = NAME_WIDTH
    )
}

pub fn render_error(style: &ReportStyle, error: &dyn Error) -> String {
    style.error.apply_to(format!("❌ Error: {}", error)).to_string()
}

pub fn render_no_data(style: &ReportStyle) -> String {
    style.warning.apply_to("⚠️  No pollen data found").to_string()
}
