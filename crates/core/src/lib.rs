//! Core library for econaudio
//!
//! This crate implements the **Functional Core** of the econaudio application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`econaudio_core`** (this crate): calendar arithmetic, issue numbering,
//!   era routing and URL construction
//! - **`econaudio`**: HTTP transport, CLI and output formatting (the Imperative Shell)
//!
//! Everything here is deterministic. The one place that waits on the outside
//! world is the [`lookup::EditionLookup`] trait, which the shell implements
//! over HTTP and the tests implement with fixture data.
//!
//! # Module Organization
//!
//! - [`calendar`]: any date to its canonical weekly edition date
//! - [`issue`]: canonical date to sequential issue number
//! - [`era`]: which archive generation serves a date, and its URLs
//! - [`cover`]: cover image candidates per layout generation
//! - [`lookup`]: the year-scoped remote index and its payload
//! - [`edition`]: assembled edition records, yearly listings, recent editions
//! - [`template`]: positional `{0}` URL template substitution
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use econaudio_core::{calendar::normalize, issue::issue_number};
//!
//! let sunday = NaiveDate::from_ymd_opt(2021, 1, 3).unwrap();
//! let edition = normalize(sunday);
//!
//! assert_eq!(edition, NaiveDate::from_ymd_opt(2021, 1, 2).unwrap());
//! assert_eq!(issue_number(edition), 9226);
//! ```

pub mod calendar;
pub mod cover;
pub mod edition;
pub mod era;
pub mod issue;
pub mod lookup;
pub mod template;
