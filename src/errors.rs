use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccrualError {
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("invalid month number: {month}")]
    InvalidMonth {
        month: u32,
    },
}

pub type Result<T> = std::result::Result<T, AccrualError>;
