#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid year {0}: outside the supported calendar range")]
    InvalidYear(i32),

    #[error("No editions found for {0}")]
    NoEditions(String),

    #[error("Edition lookup failed: {0}")]
    Lookup(#[from] econaudio_core::lookup::LookupError),
}
