//! Job execution log records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One execution record of a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobLog {
    pub id: i64,
    pub job_id: String,
    /// `true` when the run succeeded.
    pub status: bool,
    pub message: String,
    /// Run time in milliseconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub output: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// Filters for the log listing. Unset filters are left out of the query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    /// Substring match on the job id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            job_id: None,
            status: None,
            start_time: None,
            end_time: None,
            page: 1,
            limit: 10,
        }
    }
}

/// A page of log records together with the total match count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogPage {
    pub count: u64,
    #[serde(default)]
    pub logs: Vec<JobLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_page_deserialize() {
        let json = r#"{
            "count": 1,
            "logs": [{
                "id": 7,
                "job_id": "nightly",
                "status": false,
                "message": "boom",
                "duration": 12.0,
                "output": null,
                "timestamp": "2024-08-15T12:00:00.123456"
            }]
        }"#;
        let page: LogPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.logs[0].job_id, "nightly");
        assert!(!page.logs[0].status);
        assert_eq!(page.logs[0].duration, Some(12.0));
        assert!(page.logs[0].output.is_none());
    }

    #[test]
    fn test_log_query_default() {
        let query = LogQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("job_id").is_none());
        assert_eq!(json["page"], 1);
    }
}
