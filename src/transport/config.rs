// Transport Configuration
// Headers and retry/backoff settings for posting sealed requests

use std::time::Duration;

use super::response::TransportError;

/// Desktop browser UA the web client sends
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_REFERER: &str = "https://music.163.com/";

/// Configuration for the HTTP collaborator
#[derive(Clone, Debug)]
pub struct TransportConfig {
    pub base_delay: Duration,
    pub max_attempts: u32,
    pub user_agent: String,
    pub referer: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_secs(2),
            max_attempts: 3,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

impl TransportConfig {
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Headers for a weapi POST
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("User-Agent", self.user_agent.clone()),
            ("Referer", self.referer.clone()),
            ("Content-Type", "application/x-www-form-urlencoded".to_string()),
        ]
    }

    /// Wait before retry number `attempt` (0-based): `base_delay * 2^attempt`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Only throttling is retried, and only while attempts remain
    pub fn should_retry(&self, attempt: u32, err: &TransportError) -> bool {
        matches!(err, TransportError::RateLimited { .. }) && attempt.saturating_add(1) < self.max_attempts
    }
}
