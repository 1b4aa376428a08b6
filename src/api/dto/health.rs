//! Response body of `GET /health`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

/// Overall status plus one probe per backing dependency.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: Probe,
}

impl HealthChecks {
    pub fn status(&self) -> ServiceStatus {
        match self.database.status {
            ProbeStatus::Ok => ServiceStatus::Healthy,
            ProbeStatus::Error => ServiceStatus::Degraded,
        }
    }
}

/// Result of probing one dependency.
#[derive(Debug, Serialize)]
pub struct Probe {
    pub status: ProbeStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_probe_degrades_service() {
        let checks = HealthChecks {
            database: Probe {
                status: ProbeStatus::Error,
                message: Some("Database unavailable".to_string()),
            },
        };

        assert_eq!(checks.status(), ServiceStatus::Degraded);
    }

    #[test]
    fn test_serialized_shape() {
        let checks = HealthChecks {
            database: Probe {
                status: ProbeStatus::Ok,
                message: None,
            },
        };
        let response = HealthResponse {
            status: checks.status(),
            version: "1.0.0",
            checks,
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "status": "healthy",
                "version": "1.0.0",
                "checks": { "database": { "status": "ok" } }
            })
        );
    }
}
