use actix_web::{get, http::header, web, HttpResponse, Responder};
use futures::{stream, StreamExt};

use super::SignalPath;
use crate::{signal::application::domain::entities::SignalChannel, AppState};

/// Formats one server-sent event carrying a selection value.
fn sse_event(channel: SignalChannel, value: &str) -> web::Bytes {
    let data = serde_json::json!({ "value": value });
    web::Bytes::from(format!(
        "event: {}\ndata: {}\n\n",
        channel.event_name(),
        data
    ))
}

/// Live selection stream (text/event-stream).
///
/// Each delivered value is consumed from the slot, so a value received here
/// will not show up again on the pending endpoint. The stream ends when the
/// client disconnects.
#[utoipa::path(
    get,
    path = "/api/visitors/{visitor_id}/signals/{channel}/stream",
    tag = "Signals",
    params(
        ("visitor_id" = String, Path, description = "Browser-generated visitor id"),
        ("channel" = String, Path, description = "works-tech-filter | works-category | about-section")
    ),
    responses(
        (status = 200, description = "Server-sent event stream", content_type = "text/event-stream"),
        (status = 400, description = "Invalid visitor id or channel")
    )
)]
#[get("/api/visitors/{visitor_id}/signals/{channel}/stream")]
pub async fn stream_selection_handler(
    path: web::Path<SignalPath>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (visitor, channel) = match path.parse() {
        Ok(parsed) => parsed,
        Err(resp) => return resp,
    };

    let subscription = data.signal.subscribe.subscribe(visitor, channel);

    // Comment line so proxies flush headers right away.
    let opened = stream::once(async {
        Ok::<_, actix_web::Error>(web::Bytes::from_static(b": connected\n\n"))
    });
    let events = stream::unfold(subscription, |mut subscription| async move {
        let value = subscription.next().await?;
        let event = sse_event(subscription.channel(), &value);
        Some((Ok::<_, actix_web::Error>(event), subscription))
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(opened.chain(events))
}
