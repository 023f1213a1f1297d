use crate::core::page::Container;
use crate::core::section::Section;

/// Runs page sections against their containers. This is the error boundary:
/// any fetch or parse failure is logged and turned into the section's static
/// error message, and never propagates to the rest of the page.
#[derive(Debug, Default)]
pub struct SiteEngine;

impl SiteEngine {
    pub fn new() -> Self {
        Self
    }

    pub async fn render_section<S: Section>(
        &self,
        section: &S,
        container: Option<&mut Container>,
    ) {
        // Pages without the section's container skip it entirely
        let Some(container) = container else {
            tracing::debug!("Container #{} not present, skipping", section.container_id());
            return;
        };

        tracing::info!("Loading {}", section.resource_path());

        match section.fetch().await {
            Ok(doc) => {
                let fragments = section.render(doc);
                tracing::info!(
                    "Rendered {} fragments into #{}",
                    fragments.len(),
                    section.container_id()
                );
                container.assign(fragments);
            }
            Err(e) => {
                tracing::error!("Error loading {}: {}", section.resource_path(), e);
                container.fail(section.error_message());
            }
        }
    }
}
