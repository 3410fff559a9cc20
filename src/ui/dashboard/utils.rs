//! Dashboard utility functions
//!
//! Formatting and color helpers shared by the dashboard components

use crate::data::{CampaignStatus, Role};
use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::Refresh => Color::LightBlue,
        Source::Table => Color::White,
        Source::Export => Color::Green,
        Source::Chart => Color::LightRed,
        Source::App => Color::Gray,
    }
}

pub fn status_color(status: CampaignStatus) -> Color {
    match status {
        CampaignStatus::Active => Color::Green,
        CampaignStatus::Paused => Color::Yellow,
        CampaignStatus::Draft => Color::Gray,
    }
}

pub fn role_color(role: Role) -> Color {
    match role {
        Role::Admin => Color::LightBlue,
        Role::Manager => Color::LightMagenta,
        Role::User => Color::LightGreen,
    }
}

/// ROI above 200% is strong, above 100% acceptable, anything else weak.
pub fn roi_color(roi: f64) -> Color {
    if roi > 200.0 {
        Color::Green
    } else if roi > 100.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Parse `#rrggbb` into an RGB color, falling back to gray.
pub fn hex_color(hex: &str) -> Color {
    let parse = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    match (hex.strip_prefix('#').map(str::len), parse(1..3), parse(3..5), parse(5..7)) {
        (Some(6), Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

/// Group digits in thousands: `12450` -> `12,450`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole-dollar amount with thousands separators: `3200.0` -> `$3,200`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, format_thousands(rounded.abs() as u64))
}

/// Optional percentage with two decimals, or `n/a`.
pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v))
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fall back to the raw timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(987), "987");
        assert_eq!(format_thousands(1234), "1,234");
        assert_eq!(format_thousands(28_900), "28,900");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(3200.0), "$3,200");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1500.4), "-$1,500");
    }

    #[test]
    fn test_roi_thresholds() {
        assert_eq!(roi_color(312.8), Color::Green);
        assert_eq!(roi_color(200.0), Color::Yellow);
        assert_eq!(roi_color(100.0), Color::Red);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#3b82f6"), Color::Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(hex_color("3b82f6"), Color::Gray);
        assert_eq!(hex_color("#zzzzzz"), Color::Gray);
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-06-30 14:05:09"), "06-30 14:05");
        assert_eq!(format_compact_timestamp("garbled"), "garbled");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(2.5)), "2.50%");
        assert_eq!(format_percent(None), "n/a");
    }
}
