// Booking action workflow: reserve, report, refresh, settle.

use crate::domain::{
    BookingOutcome, EventFragments, EventId, EventPanel, Notice, ParticipantId, TicketOrders,
};
use crate::use_cases::refresh_event::RefreshEvent;
use std::collections::HashSet;
use tokio::sync::Mutex;

/// How a booking action settled, after every fault was absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingResolution {
    Booked,
    SoldOut,
    Failed,
    /// A previous action for the same event was still in flight.
    AlreadyInFlight,
}

/// Booking action handler with injected dependencies.
///
/// One instance serves a whole panel; the in-flight set keeps repeated
/// triggers on the same event from overlapping.
pub struct BookTicket<O, F, V> {
    orders: O,
    refresh: RefreshEvent<F, V>,
    panel: V,
    // Events with an action currently in flight; at most one per event.
    inflight: Mutex<HashSet<EventId>>,
}

impl<O, F, V> BookTicket<O, F, V>
where
    O: TicketOrders,
    F: EventFragments,
    V: EventPanel,
{
    pub fn new(orders: O, refresh: RefreshEvent<F, V>, panel: V) -> Self {
        Self {
            orders,
            refresh,
            panel,
            inflight: Mutex::new(HashSet::new()),
        }
    }

    /// Attempts to book one ticket for the event and leaves the panel in a
    /// consistent state whatever happens.
    ///
    /// Faults never escape: they settle as [`BookingResolution::Failed`] with
    /// a diagnostic log entry and a generic user notice. The loading marker is
    /// cleared unconditionally once both the reservation and the refresh have
    /// settled.
    pub async fn execute(&self, event: &EventId) -> BookingResolution {
        if !self.begin(event).await {
            tracing::debug!(%event, "booking already in flight, ignoring trigger");
            return BookingResolution::AlreadyInFlight;
        }

        self.panel.begin_loading(event);

        let participant = ParticipantId::mint();
        let resolution = match self.orders.book(event, participant).await {
            Ok(BookingOutcome::Booked) => {
                self.panel.notify(Notice::TicketBooked);
                BookingResolution::Booked
            }
            Ok(BookingOutcome::SoldOut) => {
                self.panel.notify(Notice::EventSoldOut);
                BookingResolution::SoldOut
            }
            Err(fault) => {
                tracing::error!(%event, error = %fault, "unable to book the ticket");
                self.panel.notify(Notice::BookingFailed);
                BookingResolution::Failed
            }
        };

        // The stale view is refreshed even after a failed attempt.
        if let Err(error) = self.refresh.execute(event).await {
            tracing::warn!(%event, %error, "event view refresh failed");
        }

        self.panel.end_loading(event);
        self.settle(event).await;
        resolution
    }

    // Claims the in-flight slot for the event; false when already taken.
    async fn begin(&self, event: &EventId) -> bool {
        self.inflight.lock().await.insert(event.clone())
    }

    async fn settle(&self, event: &EventId) {
        self.inflight.lock().await.remove(event);
    }
}
