pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_reports_healthy() {
        let h = types::Health::healthy();
        assert_eq!(h.status, "healthy");
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v, serde_json::json!({"status": "healthy"}));
    }

    #[test]
    fn error_body_uses_error_field() {
        let body = types::ErrorBody::new("Singer not found");
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["error"], "Singer not found");
    }

    #[test]
    fn default_filter_keeps_request_detail() {
        use tracing_subscriber::{filter::LevelFilter, EnvFilter};
        let filter = EnvFilter::try_new(utils::logging::DEFAULT_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
