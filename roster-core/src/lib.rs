//! # Roster Core
//!
//! Core library for the Roster user-management service, providing the
//! domain types, the persistence port and its SQLite implementation, and
//! the filesystem store for uploaded pictures.
//!
//! ## Overview
//!
//! - **User records**: the [`User`] entity plus its create/update payloads
//! - **Record store**: the [`UsersRepository`] port and the sqlx-backed
//!   [`SqliteUsersRepository`]
//! - **File store**: [`FileStore`], a flat upload directory with
//!   collision-resistant stored names and best-effort deletion
//!
//! ## Architecture
//!
//! The crate is organized into:
//!
//! - [`domain`]: entities and validation
//! - [`database`]: repository port and SQLite implementation
//! - [`files`]: uploaded-file storage
//!
//! The record store and file store are deliberately independent: handlers
//! sequence their calls without any cross-store transaction, so an
//! orphaned file or a dangling `image` reference is an accepted state.

pub mod database;
pub mod domain;
pub mod error;
pub mod files;

pub use database::{SqliteUsersRepository, UsersRepository};
pub use domain::users::{User, UserChanges, UserDraft};
pub use error::{Result, RosterError};
pub use files::FileStore;

/// Embedded schema migrations, applied at startup and by `sqlx::test`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
