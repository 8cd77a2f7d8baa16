use std::fmt;
use std::fmt::Formatter;

#[derive(Debug)]
pub enum WaveError {
    MissingData(String),
    HourNotFound(String),
    Document(String),
    Io(String),
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WaveError::MissingData(e)  => write!(f, "WaveError::MissingData: {}", e),
            WaveError::HourNotFound(e) => write!(f, "WaveError::HourNotFound: no entry for hour {}", e),
            WaveError::Document(e)     => write!(f, "WaveError::Document: {}", e),
            WaveError::Io(e)           => write!(f, "WaveError::Io: {}", e),
        }
    }
}
impl From<serde_json::Error> for WaveError {
    fn from(e: serde_json::Error) -> WaveError {
        WaveError::Document(e.to_string())
    }
}
impl From<std::io::Error> for WaveError {
    fn from(e: std::io::Error) -> WaveError {
        WaveError::Io(e.to_string())
    }
}
