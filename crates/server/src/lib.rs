//! zipfold Server - HTTP REST API for postal range reduction
//!
//! This crate provides an HTTP server that exposes the zipfold reduction
//! pipeline via a REST API. It supports:
//!
//! - **Range Reduction**: Collapse overlapping code ranges into the minimal
//!   covering set, with input via query string, path segment, or JSON body
//! - **Health**: Liveness and readiness probes
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Structured error responses with error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /api/v1/ranges?ranges=A,B|C,D` - Reduce ranges from a query parameter
//! - `GET /api/v1/ranges/{ranges}` - Reduce ranges from a path segment
//! - `POST /api/v1/ranges` - Reduce ranges from a JSON body
//!
//! All three reduction endpoints return the same shape: a JSON array of
//! `[low, high]` string pairs, sorted and non-overlapping.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
