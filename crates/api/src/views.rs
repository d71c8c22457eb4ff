//! Server-rendered HTML for the article resource.
//!
//! Templates live in `crates/api/templates/` and are compiled into the
//! binary, so the server does not depend on its working directory.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{AppError, AppResult};
use crate::resource::{article_path, Notice, Page, Reply, ARTICLES_PATH};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("error.html", include_str!("../templates/error.html")),
    (
        "articles/index.html",
        include_str!("../templates/articles/index.html"),
    ),
    (
        "articles/show.html",
        include_str!("../templates/articles/show.html"),
    ),
    (
        "articles/new.html",
        include_str!("../templates/articles/new.html"),
    ),
    (
        "articles/edit.html",
        include_str!("../templates/articles/edit.html"),
    ),
    (
        "articles/_form.html",
        include_str!("../templates/articles/_form.html"),
    ),
];

/// Compiled templates plus the mapping from [`Reply`] to HTTP response.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile all templates. Fails if any template does not parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Render an operation result: the reply on success, an error page
    /// otherwise.
    pub fn respond(&self, result: AppResult<Reply>) -> Response {
        match result {
            Ok(reply) => self.render_reply(reply),
            Err(err) => self.render_error(err),
        }
    }

    pub fn render_reply(&self, reply: Reply) -> Response {
        match reply {
            Reply::Redirect(redirect) => {
                (redirect.status, [(header::LOCATION, redirect.target())]).into_response()
            }
            Reply::Page {
                status,
                page,
                notice,
            } => {
                let mut context = Context::new();
                context.insert("notice", &notice.map(Notice::message));

                let template = match &page {
                    Page::Index(articles) => {
                        context.insert("articles", articles);
                        "articles/index.html"
                    }
                    Page::Show(article) => {
                        context.insert("article", article);
                        "articles/show.html"
                    }
                    Page::New(form) => {
                        insert_form(&mut context, form, ARTICLES_PATH.to_string(), "");
                        "articles/new.html"
                    }
                    Page::Edit(form) => {
                        let action = form.id.map(article_path).unwrap_or_default();
                        insert_form(&mut context, form, action, "patch");
                        "articles/edit.html"
                    }
                };

                match self.tera.render(template, &context) {
                    Ok(html) => (status, Html(html)).into_response(),
                    Err(err) => self.render_error(AppError::InternalError(format!(
                        "failed to render {template}: {err}"
                    ))),
                }
            }
        }
    }

    /// An HTML error page with the status [`AppError::classify`] assigns.
    pub fn render_error(&self, err: AppError) -> Response {
        let (status, code, message) = err.classify();

        let mut context = Context::new();
        context.insert("status", &status.as_u16());
        context.insert("code", code);
        context.insert("message", &message);

        match self.tera.render("error.html", &context) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(render_err) => {
                tracing::error!(error = %render_err, "Failed to render error page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

fn insert_form<T: Serialize>(context: &mut Context, form: &T, action: String, method: &str) {
    context.insert("form", form);
    context.insert("action", &action);
    context.insert("method", method);
}
