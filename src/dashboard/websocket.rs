//! WebSocket handler for real-time dashboard updates

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::{broadcast::error::RecvError, mpsc};

use crate::api::AppState;
use crate::dashboard::types::{ClientMessage, DashboardMessage};
use crate::history::DelegationLogEntry;

/// Handles WebSocket upgrade requests for dashboard real-time updates
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handles an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before taking the snapshot: an append racing the connect may
    // show up twice (clients dedupe by id) but is never lost.
    let mut rx = state.ws_broadcast.subscribe();

    let initial = DashboardMessage::InitialData {
        delegations: state
            .history
            .recent(state.config.delegation.dashboard_initial_entries),
    };
    if send_message(&mut sender, &initial).await.is_err() {
        return;
    }

    let (pong_tx, mut pong_rx) = mpsc::channel::<DashboardMessage>(8);

    // Forward broadcast updates and pong replies to the client
    let mut send_task = tokio::spawn(async move {
        loop {
            let msg = tokio::select! {
                update = rx.recv() => match update {
                    Ok(msg) => msg,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Dashboard client lagging, skipped updates");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                },
                reply = pong_rx.recv() => match reply {
                    Some(msg) => msg,
                    None => break,
                },
            };

            if send_message(&mut sender, &msg).await.is_err() {
                break;
            }
        }
    });

    // Handle incoming messages (ping, close)
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(ClientMessage::Ping) => {
                        if pong_tx.send(DashboardMessage::Pong).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Ignoring unrecognized dashboard message");
                    }
                },
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &DashboardMessage,
) -> Result<(), ()> {
    let json = match serde_json::to_string(msg) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize dashboard message: {}", e);
            return Ok(());
        }
    };
    sender.send(Message::Text(json)).await.map_err(|_| ())
}

/// Create a new-delegation update message
pub fn create_new_delegation_update(entry: DelegationLogEntry) -> DashboardMessage {
    DashboardMessage::NewDelegation { data: entry }
}
