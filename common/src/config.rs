use std::time::Duration;

/// Tunables of the dashboard controller.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix of every API path.
    pub api_base: String,
    /// Quiet period before a search keystroke triggers a fetch.
    pub search_debounce: Duration,
    /// Rows per page of the populated table.
    pub page_length: usize,
    /// How long a notification stays up unless dismissed.
    pub notification_ttl: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            search_debounce: Duration::from_millis(300),
            page_length: 25,
            notification_ttl: Duration::from_secs(5),
        }
    }
}
