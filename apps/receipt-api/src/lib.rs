//! # Receipt API
//!
//! HTTP server that scores receipts and serves the stored points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Receipt API                                    │
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │    Json<Receipt> ──► score_receipt ──► ScoreRecord::new ──► store.put  │
//! │                                                         └──► { id }     │
//! │                                                                         │
//! │  GET /receipts/:id/points                                              │
//! │    id ──► store.get ──► { points }  |  404 { error }                   │
//! │                                                                         │
//! │  GET /health                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 8080)
//! - `LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{create_app, run_server};
pub use state::AppState;
