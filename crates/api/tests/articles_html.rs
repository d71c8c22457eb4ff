//! HTTP-level tests for the server-rendered `/articles` pages.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, backed by the in-memory store.

mod common;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use common::{body_text, location, TestApp};
use gazette_core::error::CoreError;
use gazette_db::store::{ArticleStore, StoreError};

const VALID_BODY: &str = "Un cuerpo de artículo suficientemente largo.";

async fn create_article(app: &TestApp, title: &str, body: &str) -> String {
    let response = app
        .form(
            Method::POST,
            "/articles",
            &[("article[title]", title), ("article[body]", body)],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    location(&response)
}

// ---------------------------------------------------------------------------
// list / new / show / edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_redirects_to_index() {
    let app = TestApp::new();
    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/articles");
}

#[tokio::test]
async fn index_lists_every_created_article() {
    let app = TestApp::new();
    for title in ["Primero", "Segundo", "Tercero"] {
        create_article(&app, title, VALID_BODY).await;
    }

    let response = app.get("/articles").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    for (id, title) in [(1, "Primero"), (2, "Segundo"), (3, "Tercero")] {
        assert!(html.contains(&format!("id=\"article_{id}\"")));
        assert!(html.contains(title));
    }
    assert_eq!(app.store.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn empty_index_says_so() {
    let app = TestApp::new();
    let html = body_text(app.get("/articles").await).await;
    assert!(html.contains("No hay artículos todavía."));
}

#[tokio::test]
async fn only_known_notice_keys_are_rendered() {
    let app = TestApp::new();

    let forged = "Su cuenta fue suspendida. Llame al 555-0100";
    let html = body_text(
        app.get("/articles?notice=Su%20cuenta%20fue%20suspendida.%20Llame%20al%20555-0100")
            .await,
    )
    .await;
    assert!(!html.contains(forged));
    assert!(!html.contains(r#"class="notice""#));

    let html = body_text(app.get("/articles?notice=deleted").await).await;
    assert!(html.contains("Artículo eliminado con éxito."));
}

#[tokio::test]
async fn new_form_is_blank() {
    let app = TestApp::new();
    let response = app.get("/articles/new").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"name="article[title]" value="""#));
    assert!(html.contains(r#"action="&#x2F;articles""#));
    assert!(!html.contains(r#"name="_method""#));
    assert!(!html.contains("error_explanation"));
}

#[tokio::test]
async fn show_renders_the_article() {
    let app = TestApp::new();
    create_article(&app, "Hola mundo", VALID_BODY).await;

    let response = app.get("/articles/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Hola mundo</h1>"));
    assert!(html.contains(VALID_BODY));
}

#[tokio::test]
async fn show_unknown_article_is_404() {
    let app = TestApp::new();
    let response = app.get("/articles/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Article with id 999 not found"));
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = TestApp::new();
    let response = app.get("/articles/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edit_form_is_prefilled_and_patches() {
    let app = TestApp::new();
    create_article(&app, "Original", VALID_BODY).await;

    let response = app.get("/articles/1/edit").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"value="Original""#));
    assert!(html.contains(r#"name="_method" value="patch""#));
    assert!(html.contains(r#"action="&#x2F;articles&#x2F;1""#));
}

#[tokio::test]
async fn edit_unknown_article_is_404() {
    let app = TestApp::new();
    let response = app.get("/articles/5/edit").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_content_is_escaped() {
    let app = TestApp::new();
    create_article(&app, "<script>alert(1)</script>", VALID_BODY).await;

    let html = body_text(app.get("/articles/1").await).await;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_redirects_to_show_with_notice() {
    let app = TestApp::new();
    let target = create_article(&app, "A", VALID_BODY).await;
    assert_eq!(target, "/articles/1?notice=created");

    let response = app.get(&target).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Artículo creado con éxito."));

    let stored = app.store.get_by_id(1).await.unwrap();
    assert_eq!(stored.title, "A");
    assert_eq!(stored.body, VALID_BODY);
}

#[tokio::test]
async fn invalid_create_rerenders_form_with_422() {
    let app = TestApp::new();
    let response = app
        .form(
            Method::POST,
            "/articles",
            &[("article[title]", ""), ("article[body]", "B")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Título no puede estar en blanco"));
    assert!(!html.contains("Contenido no puede"));
    assert!(html.contains(">B</textarea>"));
    assert!(app.store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn nul_character_in_body_is_422_not_500() {
    let app = TestApp::new();
    let response = app
        .form(
            Method::POST,
            "/articles",
            &[("article[title]", "A"), ("article[body]", "antes\0después")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Contenido contiene caracteres no válidos"));
    assert!(app.store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_missing_field_is_422() {
    let app = TestApp::new();
    let response = app
        .form(Method::POST, "/articles", &[("article[title]", "Solo título")])
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_without_article_params_is_400() {
    let app = TestApp::new();
    let response = app
        .form(Method::POST, "/articles", &[("title", "A"), ("body", VALID_BODY)])
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("param is missing or the value is empty: article"));
}

#[tokio::test]
async fn create_ignores_unpermitted_fields() {
    let app = TestApp::new();
    let response = app
        .form(
            Method::POST,
            "/articles",
            &[
                ("article[title]", "A"),
                ("article[body]", VALID_BODY),
                ("article[id]", "99"),
                ("article[created_at]", "1999-01-01T00:00:00Z"),
                ("id", "42"),
                ("commit", "Guardar"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let articles = app.store.list_all().await.unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, 1);
    assert_ne!(articles[0].created_at.to_rfc3339(), "1999-01-01T00:00:00+00:00");
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_updates_title_and_keeps_body() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app
        .form(Method::PATCH, "/articles/1", &[("article[title]", "X")])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);
    assert_eq!(target, "/articles/1?notice=updated");

    let html = body_text(app.get(&target).await).await;
    assert!(html.contains("Artículo actualizado con éxito."));

    let stored = app.store.get_by_id(1).await.unwrap();
    assert_eq!(stored.title, "X");
    assert_eq!(stored.body, VALID_BODY);
}

#[tokio::test]
async fn put_also_updates() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app
        .form(
            Method::PUT,
            "/articles/1",
            &[("article[title]", "B"), ("article[body]", "Otro cuerpo largo")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = app.store.get_by_id(1).await.unwrap();
    assert_eq!(stored.title, "B");
    assert_eq!(stored.body, "Otro cuerpo largo");
}

#[tokio::test]
async fn invalid_update_is_422_and_leaves_record_unchanged() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app
        .form(Method::PATCH, "/articles/1", &[("article[body]", "")])
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains("Contenido no puede estar en blanco"));
    // The stored title is shown alongside the rejected body.
    assert!(html.contains(r#"value="A""#));

    let stored = app.store.get_by_id(1).await.unwrap();
    assert_eq!(stored.body, VALID_BODY);
}

#[tokio::test]
async fn update_unknown_article_is_404() {
    let app = TestApp::new();
    let response = app
        .form(Method::PATCH, "/articles/8", &[("article[title]", "X")])
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_ignores_unpermitted_fields() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app
        .form(
            Method::PATCH,
            "/articles/1",
            &[("article[title]", "X"), ("article[id]", "77")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert_matches!(
        app.store.get_by_id(77).await,
        Err(StoreError::Core(CoreError::NotFound { .. }))
    );
    assert_eq!(app.store.get_by_id(1).await.unwrap().title, "X");
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_redirects_to_index_with_notice() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app.delete("/articles/1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);
    assert_eq!(target, "/articles?notice=deleted");

    let html = body_text(app.get(&target).await).await;
    assert!(html.contains("Artículo eliminado con éxito."));

    assert_eq!(app.get("/articles/1").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_article_is_404() {
    let app = TestApp::new();
    assert_eq!(app.delete("/articles/3").await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// _method override
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_with_method_delete_deletes() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app
        .form(Method::POST, "/articles/1", &[("_method", "delete")])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(app.store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn post_with_method_patch_updates() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app
        .form(
            Method::POST,
            "/articles/1",
            &[("_method", "PATCH"), ("article[title]", "X")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.store.get_by_id(1).await.unwrap().title, "X");
}

#[tokio::test]
async fn post_with_unknown_method_is_405() {
    let app = TestApp::new();
    create_article(&app, "A", VALID_BODY).await;

    let response = app
        .form(Method::POST, "/articles/1", &[("_method", "launch")])
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(app.store.list_all().await.unwrap().len(), 1);
}
