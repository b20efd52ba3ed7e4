// Shared primitives for one-time stub ticket-service bootstrapping across
// integration tests.
use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header::ACCEPT},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use std::sync::{
    Arc, OnceLock,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;

// Global base URL used by all tests after the stub publishes its bound address.
static SERVICE_URL: OnceLock<String> = OnceLock::new();
// One-time guard that ensures the stub bootstrap path runs only once.
static SERVICE_READY: OnceLock<()> = OnceLock::new();
// Counter baked into rendered fragments so a refreshed view is
// distinguishable from the one it replaces.
static RENDER_SERIAL: AtomicU64 = AtomicU64::new(0);

// Ensure the stub ticket service is running and return the shared base URL.
pub fn ensure_service() -> &'static str {
    SERVICE_READY.get_or_init(|| {
        // Local one-time slot where the service thread publishes its URL.
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // An OS thread so the stub outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("stub runtime");
            runtime.block_on(async move {
                // An ephemeral port avoids collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral stub port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}"));
                axum::serve(listener, stub_app())
                    .await
                    .expect("stub service failed");
            });
        });
        wait_for_service(published_url);
    });

    SERVICE_URL
        .get()
        .expect("service url should be initialized")
        .as_str()
}

// Wait for URL publication and for the stub socket to accept connections.
fn wait_for_service(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVICE_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("stub service did not become ready in time");
}

// Minimal stand-in for the remote ticket service. The event id encodes which
// judgement each endpoint returns, so one shared stub serves every scenario.
fn stub_app() -> Router {
    Router::new()
        .route("/events", get(events))
        .route("/events/{id}", get(event_page))
        .route("/events/{id}/tickets", post(reserve_ticket))
}

async fn reserve_ticket(Path(id): Path<String>, headers: HeaderMap) -> StatusCode {
    // The real service identifies the requester by this header; a missing one
    // is a client bug the stub should surface loudly.
    if !headers.contains_key("participant") {
        return StatusCode::BAD_REQUEST;
    }
    if id.starts_with("soldout") {
        StatusCode::CONFLICT
    } else if id.starts_with("broken") {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::ACCEPTED
    }
}

async fn event_page(Path(id): Path<String>) -> Response {
    if id.starts_with("gone") {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(format!("<html><body>{}</body></html>", event_markup(&id))).into_response()
}

async fn events(headers: HeaderMap) -> Response {
    let wants_json = headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"));

    if wants_json {
        Json(serde_json::json!({
            "events": [
                {
                    "id": "42",
                    "title": "Rustlab",
                    "description": "The international conference on Rust",
                    "poster": "https://tickets.test/posters/rustlab.png",
                    "date": "2026-10-01T09:00:00Z",
                    "availableTickets": 5
                },
                {
                    "id": "soldout-7",
                    "title": "Fosdem",
                    "description": "Free and open source developers meeting",
                    "poster": "https://tickets.test/posters/fosdem.png",
                    "date": "2027-01-30T09:00:00Z",
                    "availableTickets": 0
                }
            ]
        }))
        .into_response()
    } else {
        Html(format!(
            "<html><body><section id=\"events\">{}{}</section></body></html>",
            event_markup("42"),
            event_markup("soldout-7")
        ))
        .into_response()
    }
}

fn event_markup(id: &str) -> String {
    let serial = RENDER_SERIAL.fetch_add(1, Ordering::Relaxed);
    format!(
        "<div id=\"event-{id}\"><h2>Event {id}</h2><p>render {serial}</p>\
         <button id=\"book-{id}\" class=\"button\">Book</button></div>"
    )
}
