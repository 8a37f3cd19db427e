//! Web driver trait abstraction
//!
//! The browser-driving layer lives outside this workspace; flows only depend
//! on this interface. Tests script it with fakes.

use std::time::Duration;

use crate::WebResult;

/// Opaque handle to a located page element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub u64);

/// Minimal page-driving capability consumed by the flows
pub trait WebDriver: Send {
    /// Navigate the session's page to `url` and wait for the DOM to load
    fn navigate(&mut self, url: &str) -> WebResult<()>;

    /// Locate a single element by CSS selector
    fn find(&mut self, selector: &str) -> WebResult<ElementHandle>;

    /// Replace the element's value with `text`
    fn fill(&mut self, element: ElementHandle, text: &str) -> WebResult<()>;

    fn click(&mut self, element: ElementHandle) -> WebResult<()>;

    /// Wait until the element is visible
    fn wait_visible(&mut self, element: ElementHandle, timeout: Duration) -> WebResult<()>;

    /// Inner text of the element
    fn read_text(&mut self, element: ElementHandle) -> WebResult<String>;
}
