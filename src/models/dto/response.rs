use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

impl ServiceInfo {
    pub fn current() -> Self {
        ServiceInfo {
            message: "AI-Powered E-Learning Generator API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "active".to_string(),
        }
    }
}

/// Counters exposed by the stats endpoint. Process-lifetime only.
#[derive(Debug, Clone, Serialize)]
pub struct UsageStatsDto {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub cache_hits: u64,
    pub cache_size: usize,
    pub started_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_reports_crate_version() {
        let info = ServiceInfo::current();

        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.status, "active");
    }
}
