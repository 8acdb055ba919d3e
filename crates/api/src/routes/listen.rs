use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use kaylari_core::events::types::ContentEvent;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::state::AppState;

/// Server-sent change notifications.
pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/listen", get(listen))
}

/// Stream a `welcome` event, then one event per content change.
/// Listeners that fall behind skip the events they missed.
async fn listen(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let changes = BroadcastStream::new(state.event_bus().subscribe()).filter_map(|r| r.ok());
    let stream = tokio_stream::once(ContentEvent::Welcome)
        .chain(changes)
        .map(|event| Ok(to_sse(&event)));

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn to_sse(event: &ContentEvent) -> Event {
    let name = match event {
        ContentEvent::Welcome => "welcome",
        ContentEvent::Changed(_) => "changed",
    };
    Event::default()
        .event(name)
        .json_data(event)
        .unwrap_or_else(|e| Event::default().comment(format!("unencodable event: {e}")))
}
