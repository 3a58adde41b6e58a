//! Render targets: where section renderers write their output.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use askama::Template;

use super::region::Region;
use super::templates::EscapedText;

/// A document with named regions that renderers fill.
///
/// Implementations must tolerate concurrent writes from independent renderers;
/// each renderer only ever touches the regions it owns.
pub trait RenderTarget: Send + Sync {
    /// Replaces the region with plain text. The text is escaped.
    fn set_text(&self, region: Region, text: &str);

    /// Replaces the region with trusted markup produced by a fragment template.
    fn set_html(&self, region: Region, markup: String);
}

/// In-memory page whose regions are later spliced into the page template.
#[derive(Debug, Default)]
pub struct PageDocument {
    regions: Mutex<HashMap<Region, String>>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup of a region, `None` if nothing was written yet.
    pub fn region_html(&self, region: Region) -> Option<String> {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&region)
            .cloned()
    }

    /// Number of regions written so far.
    pub fn written_regions(&self) -> usize {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn write(&self, region: Region, markup: String) {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(region, markup);
    }
}

impl RenderTarget for PageDocument {
    fn set_text(&self, region: Region, text: &str) {
        match (EscapedText { text }).render() {
            Ok(markup) => self.write(region, markup),
            Err(e) => tracing::error!(region = %region, error = %e, "Failed to escape region text"),
        }
    }

    fn set_html(&self, region: Region, markup: String) {
        self.write(region, markup);
    }
}
