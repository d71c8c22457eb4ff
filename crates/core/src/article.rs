//! Article field rules.
//!
//! The stores run [`validate_article`] before every insert and mutate, so a
//! record that reaches the database always satisfies these rules.

use crate::error::{CoreError, FieldErrors};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Article";

/// Maximum title length in characters (matches the `VARCHAR(255)` column).
pub const TITLE_MAX_LENGTH: usize = 255;

pub const MSG_BLANK: &str = "no puede estar en blanco";

/// PostgreSQL text columns cannot store NUL.
pub const MSG_NUL: &str = "contiene caracteres no válidos";

/// Human-readable attribute name used in full error messages.
pub fn human_attribute_name(field: &str) -> &str {
    match field {
        "title" => "Título",
        "body" => "Contenido",
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check every field rule and collect all failures.
///
/// - `title` must not be blank and must be at most [`TITLE_MAX_LENGTH`] chars.
/// - `body` must not be blank.
/// - Neither may contain a NUL character.
pub fn validate_article(title: &str, body: &str) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();

    if is_blank(title) {
        errors.add("title", MSG_BLANK);
    }
    if title.chars().count() > TITLE_MAX_LENGTH {
        errors.add(
            "title",
            format!("es demasiado largo ({TITLE_MAX_LENGTH} caracteres máximo)"),
        );
    }

    if title.contains('\0') {
        errors.add("title", MSG_NUL);
    }

    if is_blank(body) {
        errors.add("body", MSG_BLANK);
    }
    if body.contains('\0') {
        errors.add("body", MSG_NUL);
    }

    errors.into_result()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
