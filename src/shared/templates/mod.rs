//! HTML page templates.
//!
//! Built-in templates live in `templates/pages/` and are compiled into the
//! binary; `PAGE_TEMPLATE_DIR` may point at a directory of overrides.

pub mod engine;

pub use engine::{PageRenderer, TemplateError};
