//! Edition records and bulk listings
//!
//! Assembles the calendar, issue, era and cover modules into the
//! [`EditionRecord`] shape handed to callers, for a single date or for a
//! whole year.

use chrono::{Datelike, NaiveDate};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::calendar::{legacy_week_dates, normalize};
use crate::cover::{images_for, CoverImages};
use crate::era::{
    cutover_date, modern_download_url, resolve_urls_with, ArchiveRouting, Era, UrlResolution,
};
use crate::issue::issue_number;
use crate::lookup::{EditionLookup, LookupError, LookupKey, RemoteEdition};

/// Last year enumerated week by week instead of through the remote index.
pub const LAST_LEGACY_YEAR: i32 = 2015;

/// Everything known about one weekly edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionRecord {
    pub date: NaiveDate,
    pub issue: u32,
    pub title: String,
    pub era: Era,
    pub cover: CoverImages,
    /// Streaming audio, absent after the cutover and for unavailable weeks
    pub audio_url: Option<String>,
    /// Zipped edition, absent when nothing was published or indexed
    pub download_url: Option<String>,
}

/// Display title for an edition.
pub fn edition_title(date: NaiveDate) -> String {
    format!("Weekly Edition {}", date.format("%Y-%m-%d"))
}

fn build_record(date: NaiveDate, era: Era, resolution: &UrlResolution) -> EditionRecord {
    let urls = resolution.urls();
    EditionRecord {
        date,
        issue: issue_number(date),
        title: edition_title(date),
        era,
        cover: images_for(date),
        audio_url: urls.and_then(|urls| urls.audio.clone()),
        download_url: urls.map(|urls| urls.download.clone()),
    }
}

/// Resolve the edition covering any date.
pub async fn edition_for<L>(date: NaiveDate, lookup: &L) -> Result<EditionRecord, LookupError>
where
    L: EditionLookup + ?Sized,
{
    edition_for_with(date, lookup, ArchiveRouting::Current).await
}

/// [`edition_for`] with an explicit [`ArchiveRouting`].
pub async fn edition_for_with<L>(
    date: NaiveDate,
    lookup: &L,
    routing: ArchiveRouting,
) -> Result<EditionRecord, LookupError>
where
    L: EditionLookup + ?Sized,
{
    let canonical = normalize(date);
    debug!(input = %date, %canonical, "normalized edition date");

    let resolution = resolve_urls_with(canonical, lookup, routing).await?;
    Ok(build_record(canonical, Era::routed(canonical, routing), &resolution))
}

/// Map an index entry into an edition record.
///
/// Returns `None` when the entry's `issueDate` has no readable date.
pub fn record_from_remote(remote: &RemoteEdition) -> Option<EditionRecord> {
    let Some(date) = remote.date() else {
        warn!(issue_date = %remote.issue_date, "skipping index entry without a readable date");
        return None;
    };

    Some(EditionRecord {
        date,
        issue: issue_number(date),
        title: edition_title(date),
        era: Era::Modern2015,
        cover: images_for(date),
        audio_url: None,
        download_url: Some(modern_download_url(&remote.teg_id)),
    })
}

/// Every edition of a year, ascending by date.
///
/// Years after 2015 come straight from the remote index. Earlier years are
/// enumerated week by week; blackout weeks are skipped and a week that
/// fails to resolve is logged and left out without affecting the others.
pub async fn list_year<L>(year: i32, lookup: &L) -> Result<Vec<EditionRecord>, LookupError>
where
    L: EditionLookup + ?Sized,
{
    let mut records = if year > LAST_LEGACY_YEAR {
        let remote = lookup.fetch_year_list(&LookupKey::for_year(year)).await?;
        remote.iter().filter_map(record_from_remote).collect()
    } else {
        list_legacy_year(year, lookup).await
    };

    records.sort_by_key(|record: &EditionRecord| record.date);
    Ok(records)
}

async fn list_legacy_year<L>(year: i32, lookup: &L) -> Vec<EditionRecord>
where
    L: EditionLookup + ?Sized,
{
    let dates = legacy_week_dates(year);
    let resolutions = join_all(
        dates
            .iter()
            .map(|date| resolve_urls_with(*date, lookup, ArchiveRouting::Current)),
    )
    .await;

    dates
        .into_iter()
        .zip(resolutions)
        .filter_map(|(date, resolution)| match resolution {
            Ok(UrlResolution::Blackout) => None,
            Ok(resolution @ UrlResolution::Found(_)) => {
                Some(build_record(date, Era::for_date(date), &resolution))
            }
            Ok(UrlResolution::NoMatch) => {
                debug!(%date, "no edition indexed for week");
                None
            }
            Err(err) => {
                warn!(%date, error = %err, "failed to resolve week; skipping");
                None
            }
        })
        .collect()
}

/// The `count` most recent editions listed in `year`'s index, newest first.
///
/// When `year` lists fewer than `count` editions the previous year's index
/// is consulted too. A failure there is logged and the shorter list kept.
/// An unavailable `year` index (a new year not yet published) falls back to
/// the previous year entirely; the error surfaces only if that fails too.
pub async fn recent_editions<L>(
    year: i32,
    count: usize,
    lookup: &L,
) -> Result<Vec<EditionRecord>, LookupError>
where
    L: EditionLookup + ?Sized,
{
    let previous = year - 1;
    let can_extend = previous > cutover_year();

    let mut records = match list_year(year, lookup).await {
        Ok(records) => records,
        Err(err) if can_extend => {
            warn!(year, error = %err, "index unavailable; falling back to previous year");
            let mut older = list_year(previous, lookup).await?;
            older.sort_by(|a, b| b.date.cmp(&a.date));
            older.truncate(count);
            return Ok(older);
        }
        Err(err) => return Err(err),
    };

    if records.len() < count && can_extend {
        match list_year(previous, lookup).await {
            Ok(older) => records.extend(older),
            Err(err) => warn!(year = previous, error = %err, "could not extend recent list"),
        }
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records.truncate(count);
    Ok(records)
}

fn cutover_year() -> i32 {
    cutover_date().year()
}
