//! Live delegation dashboard feed
//!
//! Dashboard clients connect to `/ws/dashboard` and receive:
//! - a snapshot of the most recent delegations on connect
//! - one `new_delegation` update per log append
//! - a `pong` reply to every `ping`

pub mod types;
pub mod websocket;

pub use types::{ClientMessage, DashboardMessage};
pub use websocket::{create_new_delegation_update, websocket_handler};
