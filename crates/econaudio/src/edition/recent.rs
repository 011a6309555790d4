use crate::prelude::{eprintln, println, *};
use chrono::{Datelike, Utc};
use econaudio_core::edition::recent_editions;

use super::{format_edition_text, format_json, EditionRecord};
use crate::lookup::HttpLookup;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RecentOptions {
    /// Number of recent editions to show
    #[arg(short = 'n', long, env = "ECONAUDIO_RECENT", default_value = "1")]
    pub count: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: RecentOptions, global: crate::Global) -> Result<()> {
    let year = Utc::now().year();
    if global.verbose {
        eprintln!(
            "Fetching the {} most recent edition(s) from the {} index...",
            options.count, year
        );
    }

    let lookup = HttpLookup::from_global(&global)?;
    let records = recent_editions_data(year, options.count, &lookup).await?;

    if options.json {
        println!("{}", format_json(&records)?);
    } else {
        for record in &records {
            print!("{}", format_edition_text(record));
        }
    }

    Ok(())
}

/// Fetches the newest `count` editions listed for `year`, newest first
pub async fn recent_editions_data<L>(
    year: i32,
    count: usize,
    lookup: &L,
) -> Result<Vec<EditionRecord>>
where
    L: econaudio_core::lookup::EditionLookup + ?Sized,
{
    if count == 0 {
        return Err(eyre!("--count must be at least 1"));
    }

    let records = recent_editions(year, count, lookup)
        .await
        .map_err(Error::from)?;

    if records.is_empty() {
        return Err(Error::NoEditions(format!("the {year} index")).into());
    }

    Ok(records)
}
