use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};

use crate::handlers::models::decode_frame;
use crate::state::handle::ArenaHandle;

/// App state for websocket handlers
#[derive(Clone)]
pub struct AppState {
    pub arena: ArenaHandle,
}

/// Thin websocket handler: upgrade and hand the socket to the frame loop
pub async fn ws_state(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

/// One inbound frame in, one snapshot out, until the client goes away
async fn handle_socket(mut socket: WebSocket, app_state: AppState) {
    log::info!("Client connected");

    while let Some(msg) = socket.recv().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                log::debug!("read: {}", e);
                break;
            }
        };

        let (text, binary) = match msg {
            Message::Text(text) => (text, false),
            Message::Binary(bytes) => match String::from_utf8(bytes) {
                Ok(text) => (text, true),
                Err(e) => {
                    log::warn!("Binary frame is not utf-8: {}", e);
                    continue;
                }
            },
            Message::Close(_) => break,
            // pings are answered by axum
            Message::Ping(_) | Message::Pong(_) => continue,
        };

        let Some(reply) = process_frame(&app_state.arena, &text).await else {
            if app_state.arena.is_closed() {
                log::error!("Arena loop is gone, closing connection");
                break;
            }
            continue;
        };

        if let Err(e) = socket.send(reply_message(reply, binary)).await {
            log::debug!("write: {}", e);
            break;
        }
    }

    log::info!("Client disconnected");
}

/// Answer in the framing the client used
fn reply_message(reply: String, binary: bool) -> Message {
    if binary {
        Message::Binary(reply.into_bytes())
    } else {
        Message::Text(reply)
    }
}

/// Decode a frame, apply it, and return the snapshot to send back.
/// Undecodable frames get no reply; unknown kinds get the current snapshot.
pub async fn process_frame(arena: &ArenaHandle, text: &str) -> Option<String> {
    let inbound = match decode_frame(text) {
        Ok(inbound) => inbound,
        Err(e) => {
            log::warn!("Dropping undecodable frame: {}", e);
            return None;
        }
    };

    let result = match inbound.into_event() {
        Some(event) => arena.apply(event).await,
        None => arena.snapshot().await,
    };

    match result {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}
