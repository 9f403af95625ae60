//! Status of asynchronous server-side jobs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status reported for builds, pre-translations and string uploads.
///
/// The crate only mirrors what the server reports; it never moves a job
/// between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
    /// Accepted, not started
    Created,
    /// Running
    InProgress,
    /// Cancelled by a user
    Canceled,
    /// Ended with an error
    Failed,
    /// Completed successfully
    Finished,
    /// A status this crate does not know about
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Parse a raw status string
    pub fn parse(status: &str) -> Self {
        match status {
            "created" => Self::Created,
            "inProgress" => Self::InProgress,
            "canceled" => Self::Canceled,
            "failed" => Self::Failed,
            "finished" => Self::Finished,
            _ => Self::Unknown,
        }
    }

    /// Whether the job will not change any more
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled | Self::Failed | Self::Finished)
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::InProgress => "inProgress",
            Self::Canceled => "canceled",
            Self::Failed => "failed",
            Self::Finished => "finished",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("created", JobStatus::Created, false)]
    #[test_case("inProgress", JobStatus::InProgress, false)]
    #[test_case("canceled", JobStatus::Canceled, true)]
    #[test_case("failed", JobStatus::Failed, true)]
    #[test_case("finished", JobStatus::Finished, true)]
    #[test_case("queued", JobStatus::Unknown, false)]
    fn test_parse(raw: &str, expected: JobStatus, terminal: bool) {
        let status = JobStatus::parse(raw);
        assert_eq!(status, expected);
        assert_eq!(status.is_terminal(), terminal);
    }

    #[test]
    fn test_deserialize_unknown() {
        let status: JobStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, JobStatus::Unknown);
        let status: JobStatus = serde_json::from_str("\"inProgress\"").unwrap();
        assert_eq!(status, JobStatus::InProgress);
    }
}
