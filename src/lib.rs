//! # Scenario Shortener
//!
//! A short-link service for financial calculator scenarios built with Axum
//! and Redis.
//!
//! A client posts the calculator's input parameters (and optional comparison
//! scenarios); the service encodes them as a URL query string, stores it under
//! a random 6-character code and answers with `<origin>/s/<code>`. Visiting
//! that link redirects back to the calculator with its state restored.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entries, parameter sets and the store trait
//! - **Application Layer** ([`application`]) - Short link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Storage
//!
//! Redis is the durable tier with a 7-day expiry. When it is not configured or
//! a command fails, entries go to a process-local map that lives until restart.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
