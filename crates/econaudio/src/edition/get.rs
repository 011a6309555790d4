use crate::prelude::{eprintln, println, *};
use econaudio_core::edition::edition_for_with;
use econaudio_core::era::ArchiveRouting;

use super::{format_edition_text, format_json, parse_date, EditionRecord};
use crate::lookup::HttpLookup;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// Any date in the edition's week (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Address post-2015 editions on the legacy audio CDN instead of the remote index
    #[arg(long)]
    pub legacy_cdn: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GetOptions {
    fn routing(&self) -> ArchiveRouting {
        if self.legacy_cdn {
            ArchiveRouting::LegacyCdn
        } else {
            ArchiveRouting::Current
        }
    }
}

pub async fn run(options: GetOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Edition index: {}", global.index_url);
    }

    let lookup = HttpLookup::from_global(&global)?;
    let record = get_edition_data(&options, &lookup).await?;

    if options.json {
        println!("{}", format_json(&record)?);
    } else {
        print!("{}", format_edition_text(&record));
    }

    Ok(())
}

/// Resolves the edition covering the requested date
pub async fn get_edition_data<L>(options: &GetOptions, lookup: &L) -> Result<EditionRecord>
where
    L: econaudio_core::lookup::EditionLookup + ?Sized,
{
    let date = parse_date(&options.date)?;
    let record = edition_for_with(date, lookup, options.routing())
        .await
        .map_err(Error::from)?;

    if record.download_url.is_none() {
        tracing::info!(date = %record.date, "edition resolved without a download url");
    }

    Ok(record)
}
