pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{BookingOutcome, EventId, Fragment, Notice, ParticipantId};
pub use interface_adapters::clients::TicketServiceClient;
pub use interface_adapters::fragments::HtmlFragments;
pub use interface_adapters::panel::PagePanel;
pub use use_cases::{BookTicket, BookingResolution, RefreshEvent};
