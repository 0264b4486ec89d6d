//! Display formatting for sizes, dates and enum labels.

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Format a size given in kilobytes, e.g. `1536.0` -> `"1.5 MB"`.
pub fn format_kilobytes(kb: f64) -> String {
    if !kb.is_finite() || kb <= 0.0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let mut value = kb;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Short human date, e.g. `Jan 5, 2023`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Insert spaces before interior capitals: `TextualInversion` -> `Textual Inversion`.
///
/// Runs of capitals stay together, so `LORA` is unchanged.
pub fn split_uppercase(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() && chars[i - 1].is_lowercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_kilobytes(0.0), "0 KB");
        assert_eq!(format_kilobytes(512.0), "512 KB");
        assert_eq!(format_kilobytes(1536.0), "1.5 MB");
        assert_eq!(format_kilobytes(2_097_152.0), "2 GB");
        assert_eq!(format_kilobytes(2_181_038.08), "2.08 GB");
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2023, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(&at), "Jan 5, 2023");
    }

    #[test]
    fn test_split_uppercase() {
        assert_eq!(split_uppercase("TextualInversion"), "Textual Inversion");
        assert_eq!(split_uppercase("AestheticGradient"), "Aesthetic Gradient");
        assert_eq!(split_uppercase("Checkpoint"), "Checkpoint");
        assert_eq!(split_uppercase("LORA"), "LORA");
    }
}
