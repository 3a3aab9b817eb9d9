//! Shareable audio clips.
//!
//! A clip pairs an optional title with the key of an uploaded recording. It
//! is created once and then resolved by id through its short link.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/create` | No | Create a clip, returns the short link |
//! | GET | `/c/{id}` | No | Clip page (`?player=true` for the embed player) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::{ClipService, ClipServiceSettings, PgClipRepository};
