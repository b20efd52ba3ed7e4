use crate::domain::{
    BookingOutcome, EventCatalog, EventId, EventSummary, ParticipantId, ServiceFault, TicketOrders,
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

// The client defined here is a reqwest client for the remote ticket service.

// Header carrying the anonymous requester identity on reserve requests.
const PARTICIPANT_HEADER: &str = "participant";

// Listing envelope the events endpoint wraps its entries in.
#[derive(Debug, Deserialize)]
struct EventsListing {
    events: Vec<EventSummary>,
}

// Thin wrapper around reqwest for ticket service calls.
#[derive(Clone)]
pub struct TicketServiceClient {
    http: Client,
    base_url: String,
}

impl TicketServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    // Fetches a rendered document, requesting an HTML representation explicitly.
    async fn html_page(&self, url: String) -> Result<String, ServiceFault> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "text/html")
            .send()
            .await
            .map_err(|error| ServiceFault::Transport(error.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ServiceFault::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        response
            .text()
            .await
            .map_err(|error| ServiceFault::Transport(error.to_string()))
    }
}

#[async_trait]
impl TicketOrders for TicketServiceClient {
    async fn book(
        &self,
        event: &EventId,
        participant: ParticipantId,
    ) -> Result<BookingOutcome, ServiceFault> {
        let url = format!("{}/events/{}/tickets", self.base_url, event);
        let response = self
            .http
            .post(url)
            .header(PARTICIPANT_HEADER, participant.to_string())
            .send()
            .await
            .map_err(|error| ServiceFault::Transport(error.to_string()))?;

        // Accepted and conflict are the two statuses the service judges a
        // reservation with; anything else is a fault for the caller to log.
        match response.status() {
            StatusCode::ACCEPTED => Ok(BookingOutcome::Booked),
            StatusCode::CONFLICT => Ok(BookingOutcome::SoldOut),
            status => Err(ServiceFault::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}

#[async_trait]
impl EventCatalog for TicketServiceClient {
    async fn event_page(&self, event: &EventId) -> Result<String, ServiceFault> {
        self.html_page(format!("{}/events/{}", self.base_url, event))
            .await
    }

    async fn events_page(&self) -> Result<String, ServiceFault> {
        self.html_page(format!("{}/events", self.base_url)).await
    }

    async fn upcoming_events(&self) -> Result<Vec<EventSummary>, ServiceFault> {
        let url = format!("{}/events", self.base_url);
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| ServiceFault::Transport(error.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ServiceFault::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        let listing = response
            .json::<EventsListing>()
            .await
            .map_err(|error| ServiceFault::Transport(error.to_string()))?;
        Ok(listing.events)
    }
}
