use thiserror::Error;

/// A date string that could not be read in the expected layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{input}': {reason}")]
pub struct DateParseError {
    pub input: String,
    pub reason: String,
}

impl DateParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Failures of a single Gregorian to Hijri conversion
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Hijri conversion of {date} returned status {status}")]
    Status { date: String, status: u16 },
    #[error("Hijri conversion request failed: {0}")]
    Transport(String),
    #[error("Hijri conversion response could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    InvalidDate(#[from] DateParseError),
}

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("Holiday provider returned status {0}")]
    UpstreamStatus(u16),
    #[error("{0}")]
    Transport(String),
    #[error("Holiday provider response could not be decoded: {0}")]
    Decode(String),
    #[error("No holidays found for {country} in {year}")]
    NotFound { country: String, year: i32 },
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    InvalidDate(#[from] DateParseError),
}

pub type HolidayResult<T> = Result<T, HolidayError>;
