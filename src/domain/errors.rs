use crate::domain::booking::EventId;
use std::fmt;

/// Failures talking to the ticket service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFault {
    /// The request never produced a status (connect failure, timeout, or an
    /// unreadable body).
    Transport(String),
    /// The service answered with a status the workflow does not expect.
    UnexpectedStatus { status: u16 },
}

impl fmt::Display for ServiceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceFault::Transport(detail) => {
                write!(f, "ticket service transport error: {detail}")
            }
            ServiceFault::UnexpectedStatus { status } => {
                write!(f, "the server returned {status}")
            }
        }
    }
}

impl std::error::Error for ServiceFault {}

/// Failures producing a fresh rendered fragment for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentFault {
    Service(ServiceFault),
    /// The fetched document carries no element for the event.
    Missing(EventId),
    /// The event id does not form a usable fragment selector.
    Selector(EventId),
}

impl fmt::Display for FragmentFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentFault::Service(fault) => write!(f, "unable to fetch event: {fault}"),
            FragmentFault::Missing(event) => {
                write!(f, "event {event} not present in the fetched document")
            }
            FragmentFault::Selector(event) => {
                write!(f, "event id {event} is not addressable as a fragment")
            }
        }
    }
}

impl std::error::Error for FragmentFault {}

impl From<ServiceFault> for FragmentFault {
    fn from(fault: ServiceFault) -> Self {
        FragmentFault::Service(fault)
    }
}
