use std::{env, time::Duration};

// Runtime constants for the panel binary (not booking behavior).

pub fn ticket_service_url() -> String {
    env::var("TICKET_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("TICKET_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}
