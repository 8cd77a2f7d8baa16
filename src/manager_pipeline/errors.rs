use std::fmt;
use std::fmt::Formatter;

#[derive(Debug)]
pub enum PipelineError {
    InvalidDate(String),
    Script(String),
    Other(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PipelineError::InvalidDate(e) => write!(f, "PipelineError::InvalidDate: {}", e),
            PipelineError::Script(e)      => write!(f, "PipelineError::Script: {}", e),
            PipelineError::Other(e)       => write!(f, "PipelineError::Other: {}", e),
        }
    }
}
impl From<std::io::Error> for PipelineError {
    fn from(e: std::io::Error) -> PipelineError {
        PipelineError::Other(e.to_string())
    }
}
