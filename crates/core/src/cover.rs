//! Cover image candidates
//!
//! Cover art moved between several URL layouts over the years. Each
//! generation is an entry of [`COVER_IMAGE_ERAS`]; the entry in effect for a
//! date provides the template and the per-region file suffixes to try.
//! Produced URLs are candidates only: some regions were never published and
//! callers are expected to hide images that fail to load.

use chrono::NaiveDate;
use serde::Serialize;

use crate::era::compact_date;
use crate::template::fill;

/// Printed-edition contents page (`{0}` = ISO date).
pub const CONTENT_PAGE_URL: &str = "https://www.economist.com/printedition/{0}";

/// One generation of cover image layout
#[derive(Debug, Clone, Copy)]
pub struct CoverImageEra {
    /// First day (year, month, day) the layout applies to
    pub effective: (i32, u32, u32),
    /// `{0}` compact date, `{1}` region suffix
    pub template: &'static str,
    pub suffixes: &'static [&'static str],
}

impl CoverImageEra {
    pub fn effective_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.effective;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Cover image layouts, ascending by effective date.
pub const COVER_IMAGE_ERAS: &[CoverImageEra] = &[
    CoverImageEra {
        effective: (2000, 1, 1),
        template: "https://www.economist.com/img/b/400/526/90/sites/default/files/{0}issuecov{1}.jpg",
        suffixes: &["US400", "UK400"],
    },
    CoverImageEra {
        effective: (2010, 9, 5),
        template: "https://www.economist.com/img/b/400/526/90/sites/default/files/{0}_{1}.jpg",
        suffixes: &["cna400", "cuk400", "cuk400hires", "cna400hires", "CNA400"],
    },
    CoverImageEra {
        effective: (2012, 9, 16),
        template: "https://www.economist.com/img/b/400/526/90/sites/default/files/print-covers/{0}_{1}.jpg",
        suffixes: &[
            "cna1280",
            "cuk1280",
            "de_us",
            "de_uk",
            "cna400",
            "cuk400",
            "cna400hires",
            "cna1248",
            "cna1280_0",
        ],
    },
    CoverImageEra {
        effective: (2022, 5, 15),
        template: "https://www.economist.com/img/b/400/526/90/media-assets/image/{0}_{1}.jpg",
        suffixes: &["DE_US", "DE_EU"],
    },
];

/// Cover image candidates and the contents page for one edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverImages {
    pub images: Vec<String>,
    pub content_url: String,
}

/// The cover layout in effect on `date`: the last entry whose effective date is on or before it.
pub fn cover_era_for(date: NaiveDate) -> Option<&'static CoverImageEra> {
    COVER_IMAGE_ERAS
        .iter()
        .take_while(|era| era.effective_date().is_some_and(|effective| effective <= date))
        .last()
}

/// Cover image URLs, one per region suffix, plus the contents page link.
///
/// Dates before the first known layout get no images.
pub fn images_for(date: NaiveDate) -> CoverImages {
    let compact = compact_date(date);
    let images = cover_era_for(date)
        .map(|era| {
            era.suffixes
                .iter()
                .map(|&suffix| fill(era.template, &[compact.as_str(), suffix]))
                .collect()
        })
        .unwrap_or_default();

    CoverImages {
        images,
        content_url: fill(
            CONTENT_PAGE_URL,
            &[date.format("%Y-%m-%d").to_string().as_str()],
        ),
    }
}
