// Use cases layer: application workflows for the booking panel.

pub mod book_ticket;
pub mod refresh_event;

pub use book_ticket::{BookTicket, BookingResolution};
pub use refresh_event::RefreshEvent;
