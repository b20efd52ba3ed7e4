use booking_panel::domain::EventCatalog;
use booking_panel::frameworks::config;
use booking_panel::{
    BookTicket, EventId, HtmlFragments, PagePanel, RefreshEvent, TicketServiceClient,
};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

#[tokio::main]
async fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let Some(event_id) = std::env::args().nth(1) else {
        tracing::error!("usage: booking_panel <event-id>");
        return;
    };
    let event = EventId::new(event_id);

    let base_url = config::ticket_service_url();
    let client = match TicketServiceClient::new(base_url.clone(), config::request_timeout()) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "failed to build the http client");
            return;
        }
    };
    tracing::debug!(%base_url, "ticket service client configured");

    // Seed the panel from the server-rendered events page.
    let panel = match client.events_page().await {
        Ok(html) => PagePanel::from_events_page(&html),
        Err(error) => {
            tracing::error!(%error, "failed to fetch the events page");
            return;
        }
    };

    let desk = BookTicket::new(
        client.clone(),
        RefreshEvent {
            fragments: HtmlFragments {
                catalog: client.clone(),
            },
            panel: panel.clone(),
        },
        panel.clone(),
    );

    let resolution = desk.execute(&event).await;

    for notice in panel.take_notices() {
        println!("{notice}");
    }
    tracing::info!(%event, ?resolution, "booking action settled");
}
