//! Response body of `GET /health`.

use serde::Serialize;

/// Overall service status plus the result of each dependency probe.
///
/// `status` is `"healthy"` when every check passed, `"degraded"` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// The service depends on the SQLite database only.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of one probe: `"ok"` or `"error"`, with an optional detail.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_constructors() {
        assert!(CheckStatus::ok("Connected").is_ok());
        assert!(!CheckStatus::error("Database error").is_ok());
    }

    #[test]
    fn test_check_status_serialization() {
        let json = serde_json::to_value(CheckStatus::ok("Connected")).unwrap();

        assert_eq!(json["status"], "ok");
        assert_eq!(json["message"], "Connected");
    }
}
