//! Era routing and audio/download URL construction
//!
//! The archive has been served from three generations of URL layout. The
//! era is decided once per date and then matched exhaustively when building
//! URLs:
//!
//! | Era              | Applies to                         | Layout                                   |
//! |------------------|------------------------------------|------------------------------------------|
//! | `Legacy2012`     | issues up to 8796                  | date-only file name                      |
//! | `LegacyBoundary` | issue 9136                         | `Full_edition` audio, `Full_Edition` zip |
//! | `Legacy2019`     | remaining issues up to the cutover | `Full_edition` for both                  |
//! | `Modern2015`     | dates after 2015-12-01             | token from the remote index              |

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{is_blackout, utc_date};
use crate::issue::issue_number;
use crate::lookup::{EditionLookup, LookupError, LookupKey};
use crate::template::fill;

/// Audio archive CDN root for the legacy eras.
pub const LEGACY_CDN_URL: &str = "https://audiocdn.economist.com/sites/default/files/AudioArchive/";

/// `{0}` year, `{1}` compact date, `{2}` extension.
const LEGACY_2012_FILE: &str = "{0}/{1}/{1}_TheEconomist_Full_Edition.{2}";

/// `{0}` year, `{1}` compact date, `{2}` issue, `{3}` extension.
const FULL_EDITION_UPPER_FILE: &str = "{0}/{1}/Issue_{2}_{1}_The_Economist_Full_Edition.{3}";

/// `{0}` year, `{1}` compact date, `{2}` issue, `{3}` extension.
const FULL_EDITION_LOWER_FILE: &str = "{0}/{1}/Issue_{2}_{1}_The_Economist_Full_edition.{3}";

/// `{0}` remote token.
pub const MODERN_DOWNLOAD_URL: &str = "https://economist.com/mobile-assets/{0}-audio.zip";

/// First issue served with an issue number in its file name.
pub const FIRST_NUMBERED_ISSUE: u32 = 8797;

/// The single issue whose download uses the capitalized `Full_Edition` name.
pub const BOUNDARY_ISSUE: u32 = 9136;

/// Last date served from the legacy CDN. Later dates use the remote index.
pub fn cutover_date() -> NaiveDate {
    utc_date(2015, 12, 1)
}

/// Which archive generations a resolution may route to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveRouting {
    /// Dates after the cutover go to the remote index
    #[default]
    Current,
    /// Every date is addressed on the legacy CDN, as it was before the CDN
    /// stopped serving post-2015 files
    LegacyCdn,
}

/// URL-generation strategy for a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Era {
    Legacy2012,
    LegacyBoundary,
    Legacy2019,
    Modern2015,
}

impl Era {
    /// Era of an edition date.
    pub fn for_date(date: NaiveDate) -> Self {
        Era::routed(date, ArchiveRouting::Current)
    }

    /// Era of an edition date under an explicit routing.
    pub fn routed(date: NaiveDate, routing: ArchiveRouting) -> Self {
        match routing {
            ArchiveRouting::Current if date > cutover_date() => Era::Modern2015,
            ArchiveRouting::Current | ArchiveRouting::LegacyCdn => {
                Era::for_issue(issue_number(date))
            }
        }
    }

    /// Era of a pre-cutover issue number.
    pub fn for_issue(issue: u32) -> Self {
        if issue == BOUNDARY_ISSUE {
            Era::LegacyBoundary
        } else if issue >= FIRST_NUMBERED_ISSUE {
            Era::Legacy2019
        } else {
            Era::Legacy2012
        }
    }
}

/// Kind of archive file a URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Zipped full edition
    Download,
    /// Single-file streaming audio
    Stream,
}

impl FileKind {
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Download => "zip",
            FileKind::Stream => "m4a",
        }
    }
}

/// Resolved archive URLs for one edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionUrls {
    pub era: Era,
    /// Streaming audio; not offered after the cutover
    pub audio: Option<String>,
    pub download: String,
}

/// Outcome of resolving a date's URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlResolution {
    Found(EditionUrls),
    /// Dec 25-30: nothing was ever published for this week
    Blackout,
    /// The remote index has no edition for this date
    NoMatch,
}

impl UrlResolution {
    pub fn urls(&self) -> Option<&EditionUrls> {
        match self {
            UrlResolution::Found(urls) => Some(urls),
            UrlResolution::Blackout | UrlResolution::NoMatch => None,
        }
    }
}

/// Compact `YYYYMMDD` form used in file names.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Legacy CDN URL for a date, issue and file kind in one of the legacy eras.
///
/// Returns `None` for [`Era::Modern2015`], whose URLs need a remote token.
pub fn legacy_url(era: Era, date: NaiveDate, issue: u32, kind: FileKind) -> Option<String> {
    let year = date.year().to_string();
    let compact = compact_date(date);
    let issue = issue.to_string();
    let ext = kind.extension();

    let file = match (era, kind) {
        (Era::Legacy2012, _) => fill(LEGACY_2012_FILE, &[year.as_str(), compact.as_str(), ext]),
        (Era::LegacyBoundary, FileKind::Download) => {
            fill(FULL_EDITION_UPPER_FILE, &[year.as_str(), compact.as_str(), issue.as_str(), ext])
        }
        (Era::LegacyBoundary, FileKind::Stream) | (Era::Legacy2019, _) => {
            fill(FULL_EDITION_LOWER_FILE, &[year.as_str(), compact.as_str(), issue.as_str(), ext])
        }
        (Era::Modern2015, _) => return None,
    };

    Some(format!("{LEGACY_CDN_URL}{file}"))
}

/// Download URL for a token from the remote index.
pub fn modern_download_url(token: &str) -> String {
    fill(MODERN_DOWNLOAD_URL, &[token])
}

/// Resolve the audio and download URLs for an edition date.
///
/// Blackout weeks resolve to [`UrlResolution::Blackout`] without touching
/// the lookup. Only dates after the cutover consult `lookup`.
pub async fn resolve_urls<L>(date: NaiveDate, lookup: &L) -> Result<UrlResolution, LookupError>
where
    L: EditionLookup + ?Sized,
{
    resolve_urls_with(date, lookup, ArchiveRouting::Current).await
}

/// [`resolve_urls`] with an explicit [`ArchiveRouting`].
pub async fn resolve_urls_with<L>(
    date: NaiveDate,
    lookup: &L,
    routing: ArchiveRouting,
) -> Result<UrlResolution, LookupError>
where
    L: EditionLookup + ?Sized,
{
    if is_blackout(date) {
        return Ok(UrlResolution::Blackout);
    }

    let era = Era::routed(date, routing);
    debug!(%date, ?era, ?routing, "resolving edition urls");

    match era {
        Era::Modern2015 => {
            let key = LookupKey::for_year(date.year());
            Ok(match lookup.fetch_by_date(&key, date).await? {
                Some(token) => UrlResolution::Found(EditionUrls {
                    era,
                    audio: None,
                    download: modern_download_url(&token),
                }),
                None => UrlResolution::NoMatch,
            })
        }
        Era::Legacy2012 | Era::LegacyBoundary | Era::Legacy2019 => {
            let issue = issue_number(date);
            // legacy_url only declines the modern era, handled above.
            let (Some(audio), Some(download)) = (
                legacy_url(era, date, issue, FileKind::Stream),
                legacy_url(era, date, issue, FileKind::Download),
            ) else {
                return Ok(UrlResolution::NoMatch);
            };
            Ok(UrlResolution::Found(EditionUrls {
                era,
                audio: Some(audio),
                download,
            }))
        }
    }
}
