//! Helpers for building server-driven datastar SSE responses.

use std::convert::Infallible;

use async_stream::stream;
use axum::response::{
    IntoResponse, Response,
    sse::{Event, Sse},
};
use datastar::prelude::{ElementPatchMode, PatchElements, PatchSignals};

/// Ordered list of datastar events sent back for one panel interaction.
pub struct StreamBuilder {
    events: Vec<Event>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Replace (or otherwise patch) the element matched by `selector` with `html`.
    pub fn push_patch(
        &mut self,
        html: String,
        selector: &str,
        mode: ElementPatchMode,
    ) -> &mut Self {
        let event = PatchElements::new(html)
            .selector(selector)
            .mode(mode)
            .write_as_axum_sse_event();
        self.events.push(event);
        self
    }

    /// Merge a JSON object into the page's signals.
    pub fn push_signals(&mut self, payload: &str) -> &mut Self {
        let event = PatchSignals::new(payload).write_as_axum_sse_event();
        self.events.push(event);
        self
    }

    pub fn into_response(self) -> Response {
        let stream = stream! {
            for event in self.events {
                yield Ok::<Event, Infallible>(event);
            }
        };
        Sse::new(stream).into_response()
    }
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}
