//! Page template engine using Jinja2 syntax.
//!
//! The built-in templates are compiled into the binary. A directory of
//! `*.jinja` files can override any of them by name: `clip.html.jinja`
//! replaces `clip.html`.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use minijinja::Environment;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "base.html",
        include_str!("../../../templates/pages/base.html.jinja"),
    ),
    (
        "recorder.html",
        include_str!("../../../templates/pages/recorder.html.jinja"),
    ),
    (
        "clip.html",
        include_str!("../../../templates/pages/clip.html.jinja"),
    ),
    (
        "player.html",
        include_str!("../../../templates/pages/player.html.jinja"),
    ),
    (
        "social_meta.html",
        include_str!("../../../templates/pages/social_meta.html.jinja"),
    ),
    (
        "not_found.html",
        include_str!("../../../templates/pages/not_found.html.jinja"),
    ),
    (
        "error.html",
        include_str!("../../../templates/pages/error.html.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to load template '{0}': {1}")]
    LoadError(String, String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Renders the HTML pages served by the application
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Build the renderer from the built-in templates plus optional overrides
    pub fn new(override_dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        for (name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| TemplateError::LoadError(name.to_string(), e.to_string()))?;
        }

        if let Some(dir) = override_dir {
            if dir.is_dir() {
                load_templates_recursive(&mut env, dir, dir)?;
            } else {
                tracing::warn!(
                    "Page template directory '{}' does not exist, using built-in templates",
                    dir.display()
                );
            }
        }

        Ok(Self { env })
    }

    /// Render a template with a serializable context
    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

        template
            .render(ctx)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }

    /// Render a template into an HTML response with the given status.
    ///
    /// A template failure is logged and answered with a bare 500.
    pub fn respond<S: Serialize>(&self, status: StatusCode, template_name: &str, ctx: S) -> Response {
        match self.render(template_name, ctx) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render page '{}': {}", template_name, e);
                let mut response =
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                );
                response
            }
        }
    }

    /// List all available templates
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .env
            .templates()
            .map(|(name, _)| name.to_string())
            .collect();
        names.sort();
        names
    }
}

/// Recursively load all .jinja templates from a directory
fn load_templates_recursive(
    env: &mut Environment<'static>,
    base_path: &Path,
    current_path: &Path,
) -> Result<(), TemplateError> {
    let entries = std::fs::read_dir(current_path).map_err(|e| {
        TemplateError::LoadError(current_path.display().to_string(), e.to_string())
    })?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            load_templates_recursive(env, base_path, &path)?;
            continue;
        }
        if !path.extension().is_some_and(|ext| ext == "jinja") {
            continue;
        }

        let Ok(relative) = path.strip_prefix(base_path) else {
            continue;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");
        let template_name = relative
            .strip_suffix(".jinja")
            .unwrap_or(&relative)
            .to_string();

        let content = std::fs::read_to_string(&path)
            .map_err(|e| TemplateError::LoadError(template_name.clone(), e.to_string()))?;

        // Templates live for the whole process, leaking keeps the environment 'static
        let static_name: &'static str = Box::leak(template_name.clone().into_boxed_str());
        let static_content: &'static str = Box::leak(content.into_boxed_str());
        env.add_template(static_name, static_content)
            .map_err(|e| TemplateError::LoadError(template_name.clone(), e.to_string()))?;
        tracing::debug!("Loaded page template override: {}", template_name);
    }

    Ok(())
}
