use crate::domain::{EventId, EventPanel, Fragment, Notice};
use crate::interface_adapters::fragments;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct PanelState {
    markup: HashMap<EventId, String>,
    loading: HashSet<EventId>,
    notices: Vec<Notice>,
}

/// In-memory model of the page region listing bookable events.
///
/// Cloning hands out another handle to the same shared state, so the
/// workflows and their embedder observe a single panel.
#[derive(Clone, Default)]
pub struct PagePanel {
    state: Arc<Mutex<PanelState>>,
}

impl PagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a panel from a rendered events page, one entry per `event-*`
    /// element found in the document.
    pub fn from_events_page(html: &str) -> Self {
        let panel = Self::new();
        {
            let mut state = panel.state();
            for (event, fragment) in fragments::page_fragments(html) {
                state.markup.insert(event, fragment.into_markup());
            }
        }
        panel
    }

    /// Current markup for an event, if the panel knows the event.
    pub fn markup(&self, event: &EventId) -> Option<String> {
        self.state().markup.get(event).cloned()
    }

    /// True while a booking action for the event is underway.
    pub fn is_loading(&self, event: &EventId) -> bool {
        self.state().loading.contains(event)
    }

    /// Events currently represented on the panel.
    pub fn events(&self) -> Vec<EventId> {
        let mut events: Vec<_> = self.state().markup.keys().cloned().collect();
        events.sort();
        events
    }

    /// Drains the pending user notices in arrival order.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state().notices)
    }

    // A poisoned lock still holds coherent panel state; keep serving it.
    fn state(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventPanel for PagePanel {
    fn begin_loading(&self, event: &EventId) {
        self.state().loading.insert(event.clone());
    }

    fn end_loading(&self, event: &EventId) {
        self.state().loading.remove(event);
    }

    fn notify(&self, notice: Notice) {
        self.state().notices.push(notice);
    }

    fn replace(&self, event: &EventId, fragment: Fragment) {
        // Unknown events are inserted; the server decides what exists.
        self.state().markup.insert(event.clone(), fragment.into_markup());
    }
}
