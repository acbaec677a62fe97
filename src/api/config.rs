use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct ApiConfig {
    /// Every request is abandoned after this long; an elapsed timeout is
    /// reported as a store fault.
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let seconds = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(10);

        Self {
            request_timeout: Duration::from_secs(seconds),
        }
    }
}
