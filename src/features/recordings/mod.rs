//! Recording capture and upload.
//!
//! Serves the recorder page and stores the recorded audio in the public
//! bucket under a generated key.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/` | No | Recorder page |
//! | POST | `/api/recordings` | No | Upload a recording (multipart `file`) |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::RecordingService;
