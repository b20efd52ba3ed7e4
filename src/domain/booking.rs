use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a bookable event, exactly as the ticket service
/// renders it inside `event-{id}` element ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anonymous requester identity, minted fresh for every booking attempt and
/// discarded once the attempt settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    /// Mints a random identity. Collisions are not guarded against.
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Business outcome of a reservation attempt the service agreed to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked,
    SoldOut,
}

/// User-facing alert raised by the booking workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    TicketBooked,
    EventSoldOut,
    BookingFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Notice::TicketBooked => "Ticket successfully booked",
            Notice::EventSoldOut => "Unable to book a sold out event",
            Notice::BookingFailed => "Unable to book the ticket!",
        };
        f.write_str(message)
    }
}

/// Server-rendered markup for one event, replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_markup(self) -> String {
        self.0
    }
}

// The serialization within this layer is a dependency leak, but it's a pragmatic approach.
/// One entry of the upcoming-events listing as the service serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub poster: String,
    pub date: String,
    #[serde(rename = "availableTickets")]
    pub available_tickets: i64,
}
