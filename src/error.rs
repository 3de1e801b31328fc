use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The symbol {symbol} is outside of an alphabet of size {size}")]
    InvalidSymbol { symbol: u8, size: usize },
    #[error("The character '{0}' is not a lowercase ascii letter")]
    InvalidChar(char),
    #[error("The word '{0}' contains characters outside of a-z")]
    InvalidWord(String),
    #[error("The prefix length {0} is larger than 32 bits")]
    InvalidPrefixLength(u32),
    #[error("'{0}' is not a valid IPv4 prefix")]
    InvalidPrefix(String),
    #[error("'{0}' is not a valid IPv4 address")]
    InvalidAddress(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(feature = "load")]
    #[error(transparent)]
    Csv(Box<csv::Error>),
    #[error("Line {line}: {source}")]
    Record { line: u64, source: Box<Error> },
}

#[cfg(feature = "load")]
impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::Csv(Box::new(value))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
