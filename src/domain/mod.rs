mod booking;
mod errors;
mod ports;

// Re-export the domain boundary types and ports.
pub use booking::{BookingOutcome, EventId, EventSummary, Fragment, Notice, ParticipantId};
pub use errors::{FragmentFault, ServiceFault};
pub use ports::{EventCatalog, EventFragments, EventPanel, TicketOrders};
