use crate::domain::booking::{
    BookingOutcome, EventId, EventSummary, Fragment, Notice, ParticipantId,
};
use crate::domain::errors::{FragmentFault, ServiceFault};
use async_trait::async_trait;

// The workflows depend on these traits, not the concrete client or page
// implementations. Dependencies point inwards to the domain layer.

/// Port for reserving tickets against the ticket service.
#[async_trait]
pub trait TicketOrders: Send + Sync {
    /// Attempts to reserve one ticket for the event on behalf of the
    /// participant. Sold-out is an outcome, not an error.
    async fn book(
        &self,
        event: &EventId,
        participant: ParticipantId,
    ) -> Result<BookingOutcome, ServiceFault>;
}

/// Port for the service's rendered and listed views of events.
#[async_trait]
pub trait EventCatalog: Send + Sync {
    /// Fetches the rendered document for a single event.
    async fn event_page(&self, event: &EventId) -> Result<String, ServiceFault>;

    /// Fetches the full rendered upcoming-events page.
    async fn events_page(&self) -> Result<String, ServiceFault>;

    /// Fetches the upcoming-events listing.
    async fn upcoming_events(&self) -> Result<Vec<EventSummary>, ServiceFault>;
}

/// Port for obtaining the current rendered fragment of one event.
#[async_trait]
pub trait EventFragments: Send + Sync {
    async fn fragment(&self, event: &EventId) -> Result<Fragment, FragmentFault>;
}

/// Port for the page region the booking workflow mutates.
pub trait EventPanel: Send + Sync {
    /// Marks the event's booking control as busy.
    fn begin_loading(&self, event: &EventId);

    /// Clears the busy marker. Always paired with [`EventPanel::begin_loading`].
    fn end_loading(&self, event: &EventId);

    /// Raises a user-facing alert.
    fn notify(&self, notice: Notice);

    /// Replaces the event's markup wholesale.
    fn replace(&self, event: &EventId, fragment: Fragment);
}
