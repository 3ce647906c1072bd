#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::types::HealthReport;

/// Backend status as last reported by `/health/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendHealth {
    /// Database reachable. `table_exists` is false until migrations have run;
    /// `database` is the backend's own word on the connection, if it sent one.
    Ready { table_exists: bool, database: Option<String> },
    /// Backend answered but reported a problem.
    Degraded { error: String },
    /// No usable answer.
    Unreachable,
}

impl BackendHealth {
    pub fn from_report(report: &HealthReport) -> Self {
        if report.status == "ok" {
            Self::Ready {
                table_exists: report.table_exists.unwrap_or(false),
                database: report.database.clone().filter(|db| !db.is_empty()),
            }
        } else {
            let error = report
                .error
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| format!("status {}", report.status));
            Self::Degraded { error }
        }
    }

    /// Footer text.
    pub fn label(&self) -> String {
        match self {
            Self::Ready { table_exists, database } => {
                let connection = database.as_deref().unwrap_or("connected");
                if *table_exists {
                    format!("Backend: {connection}")
                } else {
                    format!("Backend: {connection} (names table missing)")
                }
            }
            Self::Degraded { error } => format!("Backend: error ({error})"),
            Self::Unreachable => "Backend: unreachable".to_owned(),
        }
    }

    /// BEM modifier for the status dot.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Self::Ready { table_exists: true, .. } => "ok",
            Self::Ready { table_exists: false, .. } | Self::Degraded { .. } => "degraded",
            Self::Unreachable => "down",
        }
    }
}
