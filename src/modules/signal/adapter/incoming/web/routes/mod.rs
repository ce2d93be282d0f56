mod queue_selection;
mod stream_selection;
mod take_pending_selection;

pub use queue_selection::{
    queue_selection_handler,
    __path_queue_selection_handler,
    QueueSelectionRequest,
    QueueSelectionResponse,
};
pub use stream_selection::{stream_selection_handler, __path_stream_selection_handler};
pub use take_pending_selection::{
    take_pending_selection_handler,
    __path_take_pending_selection_handler,
    PendingSelectionResponse,
};

use actix_web::HttpResponse;
use serde::Deserialize;

use crate::{
    shared::api::ApiResponse,
    signal::application::domain::entities::{SignalChannel, VisitorId},
};

#[derive(Debug, Deserialize)]
pub struct SignalPath {
    pub visitor_id: String,
    pub channel: String,
}

impl SignalPath {
    /// Validates both path segments, answering 400 on the first bad one.
    pub fn parse(&self) -> Result<(VisitorId, SignalChannel), HttpResponse> {
        let visitor = VisitorId::parse(&self.visitor_id)
            .map_err(|e| ApiResponse::bad_request("INVALID_VISITOR_ID", &e.to_string()))?;

        let channel = self
            .channel
            .parse::<SignalChannel>()
            .map_err(|e| ApiResponse::bad_request("UNKNOWN_CHANNEL", &e.to_string()))?;

        Ok((visitor, channel))
    }
}
