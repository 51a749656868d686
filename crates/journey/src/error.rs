#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyError {
    /// No records to tour; the host shows an empty state instead of a globe.
    EmptyInput,
}

impl std::fmt::Display for JourneyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JourneyError::EmptyInput => write!(f, "journey has no locations"),
        }
    }
}

impl std::error::Error for JourneyError {}
