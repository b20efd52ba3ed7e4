// Fragment extraction over server-rendered documents.

use crate::domain::{EventCatalog, EventFragments, EventId, Fragment, FragmentFault};
use async_trait::async_trait;
use scraper::{Html, Selector};

/// Extracts the `event-{id}` sub-element from a standalone rendered document.
pub fn event_fragment(html: &str, event: &EventId) -> Result<Fragment, FragmentFault> {
    let selector = Selector::parse(&format!("#event-{event}"))
        .map_err(|_| FragmentFault::Selector(event.clone()))?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .map(|element| Fragment::new(element.html()))
        .ok_or_else(|| FragmentFault::Missing(event.clone()))
}

/// Enumerates every event fragment in a rendered events page.
pub fn page_fragments(html: &str) -> Vec<(EventId, Fragment)> {
    let Ok(selector) = Selector::parse("[id^='event-']") else {
        return Vec::new();
    };
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .filter_map(|element| {
            let id = element.value().id()?.strip_prefix("event-")?;
            Some((EventId::new(id), Fragment::new(element.html())))
        })
        .collect()
}

/// [`EventFragments`] backed by the catalog's rendered documents.
pub struct HtmlFragments<C> {
    pub catalog: C,
}

#[async_trait]
impl<C> EventFragments for HtmlFragments<C>
where
    C: EventCatalog,
{
    async fn fragment(&self, event: &EventId) -> Result<Fragment, FragmentFault> {
        let html = self.catalog.event_page(event).await?;
        // Parsing stays on this side of the await: the parsed document is not
        // Send and must never cross a suspension point.
        event_fragment(&html, event)
    }
}
