// Refreshes an event's on-page view from the server's rendered document.

use crate::domain::{EventFragments, EventId, EventPanel, FragmentFault};

/// Fragment refresh workflow with injected dependencies.
pub struct RefreshEvent<F, V> {
    pub fragments: F,
    pub panel: V,
}

impl<F, V> RefreshEvent<F, V>
where
    F: EventFragments,
    V: EventPanel,
{
    /// Replaces the panel's markup for the event with a freshly fetched
    /// fragment, wholesale.
    ///
    /// Failures propagate to the caller; the panel is not touched on failure.
    pub async fn execute(&self, event: &EventId) -> Result<(), FragmentFault> {
        let fragment = self.fragments.fragment(event).await?;
        self.panel.replace(event, fragment);
        Ok(())
    }
}
