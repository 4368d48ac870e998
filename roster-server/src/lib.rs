//! # Roster Server
//!
//! A small user-management CRUD web application: list, add, edit, and
//! delete user records, each optionally carrying an uploaded picture.
//!
//! The server is built on Axum and uses:
//! - SQLite (via sqlx) for persistent storage
//! - A flat upload directory for user pictures
//! - Server-side one-shot flash messages keyed by a session cookie

pub mod errors;
pub mod infra;
pub mod routes;
pub mod users;
pub mod views;

pub use infra::app_state::AppState;
