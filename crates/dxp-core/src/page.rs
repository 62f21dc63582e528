//! Export page lifecycle events
//!
//! The display page reports when it was closed or submitted. Interested
//! parties register an [`ExportPageObserver`] instead of listening on a
//! shared event emitter.

use crate::error::{ExportError, Result};
use crate::export::ExportDocument;
use crate::types::Markup;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

// Event names reported to the host
pub const EVENT_EXPORT_PAGE_CLOSED: &str = "export-page-closed";
pub const EVENT_SUBMITTED: &str = "submitted";

/// Payload of a submit event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitData {
    pub title: Markup,
    pub submitted_at: DateTime<Utc>,
}

/// Events raised by an export page
#[derive(Debug, Clone, PartialEq)]
pub enum ExportPageEvent {
    Closed,
    Submitted(SubmitData),
}

impl ExportPageEvent {
    /// Event name as reported to the host
    pub fn name(&self) -> &'static str {
        match self {
            ExportPageEvent::Closed => EVENT_EXPORT_PAGE_CLOSED,
            ExportPageEvent::Submitted(_) => EVENT_SUBMITTED,
        }
    }
}

/// Receives export page events
pub trait ExportPageObserver {
    fn notify(&self, event: &ExportPageEvent);
}

impl<F> ExportPageObserver for F
where
    F: Fn(&ExportPageEvent),
{
    fn notify(&self, event: &ExportPageEvent) {
        self(event)
    }
}

/// Observer that records events through `tracing`
pub struct LoggingObserver;

impl ExportPageObserver for LoggingObserver {
    fn notify(&self, event: &ExportPageEvent) {
        match event {
            ExportPageEvent::Closed => info!(event = event.name(), "Export page closed"),
            ExportPageEvent::Submitted(data) => info!(
                event = event.name(),
                title = %data.title,
                submitted_at = %data.submitted_at.to_rfc3339(),
                "Export submitted"
            ),
        }
    }
}

/// An export document being displayed
pub struct ExportPage {
    document: ExportDocument,
    observers: Vec<Box<dyn ExportPageObserver>>,
}

impl ExportPage {
    /// Create a page for a built document
    pub fn new(document: ExportDocument) -> Self {
        Self {
            document,
            observers: Vec::new(),
        }
    }

    /// The document shown on this page
    pub fn document(&self) -> &ExportDocument {
        &self.document
    }

    /// Register an observer; observers are notified in registration order
    pub fn subscribe(&mut self, observer: Box<dyn ExportPageObserver>) {
        self.observers.push(observer);
    }

    /// Close the page
    pub fn close(&self) {
        self.emit(&ExportPageEvent::Closed);
    }

    /// Submit the export
    pub fn submit(&self) -> Result<SubmitData> {
        if !self.document.submit_enabled {
            return Err(ExportError::SubmitDisabled);
        }

        let data = SubmitData {
            title: self.document.title.clone(),
            submitted_at: Utc::now(),
        };
        self.emit(&ExportPageEvent::Submitted(data.clone()));
        Ok(data)
    }

    fn emit(&self, event: &ExportPageEvent) {
        debug!(
            event = event.name(),
            observers = self.observers.len(),
            "Dispatching export page event"
        );
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
