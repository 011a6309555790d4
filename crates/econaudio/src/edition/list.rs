use crate::prelude::{eprintln, println, *};
use chrono::NaiveDate;
use colored::Colorize;
use econaudio_core::edition::list_year;

use super::{format_json, EditionRecord};
use crate::lookup::HttpLookup;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Four-digit publication year
    #[arg(value_name = "YEAR")]
    pub year: i32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Listing editions for {}...", options.year);
    }

    let lookup = HttpLookup::from_global(&global)?;
    let records = list_editions_data(options.year, &lookup).await?;

    if options.json {
        println!("{}", format_json(&records)?);
    } else {
        println!("{}", format_list_header(options.year, records.len()));
        format_list_table(&records).printstd();
    }

    Ok(())
}

/// Fetches every edition of a year, oldest first
pub async fn list_editions_data<L>(year: i32, lookup: &L) -> Result<Vec<EditionRecord>>
where
    L: econaudio_core::lookup::EditionLookup + ?Sized,
{
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return Err(Error::InvalidYear(year).into());
    }

    let records = list_year(year, lookup).await.map_err(Error::from)?;

    if records.is_empty() {
        return Err(Error::NoEditions(year.to_string()).into());
    }

    Ok(records)
}

fn format_list_header(year: i32, count: usize) -> String {
    format!(
        "\n{}\n",
        format!("WEEKLY EDITIONS {year} ({count} found)")
            .bright_cyan()
            .bold()
    )
}

/// Build the date / issue / download table
fn format_list_table(records: &[EditionRecord]) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["Date", "Issue", "Download"]);

    for record in records {
        let download = record
            .download_url
            .clone()
            .unwrap_or_else(|| "not available".to_string());
        table.add_row(prettytable::row![
            record.date.format("%Y-%m-%d"),
            record.issue,
            download
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edition::fixtures::{create_test_record, date};
    use async_trait::async_trait;
    use econaudio_core::lookup::{EditionLookup, LookupError, LookupKey, RemoteEdition};

    struct EmptyIndex;

    #[async_trait]
    impl EditionLookup for EmptyIndex {
        async fn fetch_year_list(
            &self,
            _key: &LookupKey,
        ) -> Result<Vec<RemoteEdition>, LookupError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_list_editions_data_legacy_year() {
        let records = list_editions_data(2013, &EmptyIndex).await.unwrap();

        assert_eq!(records.first().unwrap().date, date("2013-01-05"));
        assert!(records.windows(2).all(|w| w[0].date < w[1].date));
        assert!(records.iter().all(|r| r.audio_url.is_some()));
    }

    #[tokio::test]
    async fn test_list_editions_data_empty_modern_year() {
        let err = list_editions_data(2030, &EmptyIndex).await.unwrap_err();
        assert!(err.to_string().contains("No editions found for 2030"));
    }

    #[tokio::test]
    async fn test_list_editions_data_invalid_year() {
        let err = list_editions_data(i32::MAX, &EmptyIndex).await.unwrap_err();
        assert!(err.to_string().contains("Invalid year"));
    }

    #[test]
    fn test_format_list_header() {
        let header = format_list_header(2021, 50);
        assert!(header.contains("WEEKLY EDITIONS 2021 (50 found)"));
    }

    #[test]
    fn test_format_list_table_rows() {
        let mut missing = create_test_record("2021-01-09", 9227);
        missing.download_url = None;
        let records = vec![create_test_record("2021-01-02", 9226), missing];

        let rendered = format_list_table(&records).to_string();

        assert!(rendered.contains("Date"));
        assert!(rendered.contains("2021-01-02"));
        assert!(rendered.contains("9226"));
        assert!(rendered.contains("https://economist.com/mobile-assets/9226-audio.zip"));
        assert!(rendered.contains("not available"));
        assert_eq!(format_list_table(&records).len(), 3);
    }
}
