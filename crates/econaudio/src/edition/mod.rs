use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use colored::Colorize;

pub mod get;
pub mod list;
pub mod recent;

// Re-export domain types from core
pub use econaudio_core::edition::{edition_title, EditionRecord};

/// Parse a `YYYY-MM-DD` command-line date
///
/// Only four-digit years are accepted.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate(input.to_string());

    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    if !(1..=9999).contains(&date.year()) {
        return Err(invalid().into());
    }

    Ok(date)
}

/// Convert one or more edition records to pretty JSON
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Render a single edition as colored text
pub fn format_edition_text(record: &EditionRecord) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("{} (Issue {})", record.title.to_uppercase(), record.issue)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "\n    {}: {} | {}: {:?}\n",
        "Date".green(),
        record.date.format("%Y-%m-%d").to_string().bright_white(),
        "Era".green(),
        record.era
    ));

    match &record.download_url {
        Some(url) => result.push_str(&format!(
            "    {}: {}\n",
            "Download".green(),
            url.cyan().underline()
        )),
        None => result.push_str(&format!(
            "    {}: {}\n",
            "Download".green(),
            "not available".yellow()
        )),
    }

    match &record.audio_url {
        Some(url) => result.push_str(&format!(
            "    {}: {}\n",
            "Audio".green(),
            url.cyan().underline()
        )),
        None => result.push_str(&format!(
            "    {}: {}\n",
            "Audio".green(),
            "not available".bright_black()
        )),
    }

    result.push_str(&format!(
        "    {}: {}\n",
        "Contents".green(),
        record.cover.content_url.cyan()
    ));

    if !record.cover.images.is_empty() {
        result.push_str(&format!("    {}:\n", "Covers".green()));
        for image in &record.cover.images {
            result.push_str(&format!("      {}\n", image.bright_black()));
        }
    }

    result.push('\n');
    result
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use econaudio_core::cover::CoverImages;
    use econaudio_core::era::Era;

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub fn create_test_record(day: &str, issue: u32) -> EditionRecord {
        EditionRecord {
            date: date(day),
            issue,
            title: edition_title(date(day)),
            era: Era::Modern2015,
            cover: CoverImages {
                images: vec![format!("https://img.example.com/{day}_DE_US.jpg")],
                content_url: format!("https://www.economist.com/printedition/{day}"),
            },
            audio_url: None,
            download_url: Some(format!("https://economist.com/mobile-assets/{issue}-audio.zip")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("2021-01-03").unwrap(), date("2021-01-03"));
        assert_eq!(parse_date(" 2021-01-03 ").unwrap(), date("2021-01-03"));
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date("03/01/2021").unwrap_err();
        assert!(err.to_string().contains("Invalid date '03/01/2021'"));
        assert!(parse_date("2021-02-30").is_err());
    }

    #[test]
    fn test_parse_date_out_of_range_year() {
        let err = parse_date("-262143-01-01").unwrap_err();
        assert!(err.to_string().contains("Invalid date '-262143-01-01'"));
        assert!(parse_date("12345-01-01").is_err());
        assert!(parse_date("0000-12-31").is_err());
        assert_eq!(parse_date("0001-01-01").unwrap(), date("0001-01-01"));
    }

    #[test]
    fn test_format_json_record() {
        let record = create_test_record("2021-01-02", 9226);
        let json = format_json(&record).unwrap();

        assert!(json.contains("\"date\": \"2021-01-02\""));
        assert!(json.contains("\"issue\": 9226"));
        assert!(json.contains("\"era\": \"Modern2015\""));
        assert!(json.contains("\"audio_url\": null"));
    }

    #[test]
    fn test_format_json_structure() {
        let records = vec![
            create_test_record("2021-01-02", 9226),
            create_test_record("2021-01-09", 9227),
        ];
        let json = format_json(&records).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert!(parsed[0].get("cover").unwrap().get("images").is_some());
    }

    #[test]
    fn test_format_edition_text_basic() {
        let record = create_test_record("2021-01-02", 9226);
        let formatted = format_edition_text(&record);

        assert!(formatted.contains("WEEKLY EDITION 2021-01-02 (Issue 9226)"));
        assert!(formatted.contains("Modern2015"));
        assert!(formatted.contains("https://economist.com/mobile-assets/9226-audio.zip"));
        assert!(formatted.contains("https://www.economist.com/printedition/2021-01-02"));
        assert!(formatted.contains("Covers"));
    }

    #[test]
    fn test_format_edition_text_missing_urls() {
        let mut record = create_test_record("2021-01-02", 9226);
        record.download_url = None;
        record.cover.images.clear();
        let formatted = format_edition_text(&record);

        assert!(formatted.contains("not available"));
        assert!(!formatted.contains("Covers"));
    }
}
