use std::{fs, net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use shared::domain::{ContactSubmission, Page};
use site::{render_page, ExternalLinks, Flash, RenderContext};
use storage::ContactStore;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info, warn};

mod assets;
mod config;

use config::{external_links, load_settings, Settings};

const MAX_FORM_BYTES: usize = 32 * 1024;

struct AppState {
    store: ContactStore,
    links: ExternalLinks,
    stylesheet: Option<String>,
    assets_dir: PathBuf,
    resume_path: PathBuf,
    resume_download_name: String,
}

impl AppState {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            store: ContactStore::new(&settings.contacts_path),
            links: external_links(settings),
            stylesheet: assets::load_stylesheet(std::path::Path::new(
                &settings.stylesheet_path,
            )),
            assets_dir: PathBuf::from(&settings.assets_dir),
            resume_path: PathBuf::from(&settings.resume_path),
            resume_download_name: settings.resume_download_name.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = AppState::from_settings(&settings);
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "portfolio site listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/p/:page", get(page))
        .route("/contact", post(submit_contact))
        .route("/resume", get(resume))
        .route("/assets/:name", get(asset))
        .route("/healthz", get(healthz))
        .layer(RequestBodyLimitLayer::new(MAX_FORM_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Render one page against the current on-disk state of the optional
/// assets, so dropping in a stylesheet or image takes effect without a
/// restart.
fn render(state: &AppState, page: Page, flash: Option<Flash>) -> Html<String> {
    let images = assets::image_inventory(&state.assets_dir);
    let resume_filename = state
        .resume_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume.pdf");
    let ctx = RenderContext {
        stylesheet: state.stylesheet.as_deref(),
        images: &images,
        resume_available: state.resume_path.is_file(),
        resume_filename,
        links: &state.links,
        flash,
    };
    Html(render_page(page, &ctx))
}

async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    render(&state, Page::Home, None)
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    flash: Option<String>,
}

async fn page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let Some(page) = Page::from_slug(&slug) else {
        warn!(%slug, "request for unknown page");
        return (
            StatusCode::NOT_FOUND,
            Html("<h1>Page not found</h1>".to_string()),
        )
            .into_response();
    };

    // The flash only ever accompanies the post-submit redirect back to
    // the contact page; ignore it anywhere else.
    let flash = if page == Page::Contact {
        query.flash.as_deref().and_then(Flash::from_query)
    } else {
        None
    };
    render(&state, page, flash).into_response()
}

#[derive(Debug, Deserialize)]
struct ContactForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Redirect {
    let submission = match ContactSubmission::new(form.email, form.subject, form.message) {
        Ok(submission) => submission,
        Err(error) => {
            warn!(%error, "rejected contact submission");
            return contact_redirect(Flash::Invalid);
        }
    };

    match state.store.append(&submission) {
        Ok(()) => contact_redirect(Flash::Sent),
        Err(error) => {
            error!(%error, "failed to save contact submission");
            contact_redirect(Flash::Failed)
        }
    }
}

fn contact_redirect(flash: Flash) -> Redirect {
    Redirect::to(&format!("/p/contact?flash={}", flash.query_value()))
}

async fn resume(State(state): State<Arc<AppState>>) -> Response {
    match fs::read(&state.resume_path) {
        Ok(bytes) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/pdf"),
            );
            let disposition = format!(
                "attachment; filename=\"{}\"",
                state.resume_download_name
            );
            if let Ok(value) = HeaderValue::from_str(&disposition) {
                headers.insert(header::CONTENT_DISPOSITION, value);
            }
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(error) => {
            warn!(%error, "resume requested but not available");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn asset(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> Response {
    if !assets::is_safe_asset_name(&name) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match fs::read(state.assets_dir.join(&name)) {
        Ok(bytes) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(assets::content_type_for(&name)),
            );
            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body, body::Body, http::Request};
    use tower::ServiceExt;

    fn test_app(dir: &std::path::Path) -> (Router, PathBuf) {
        let contacts_path = dir.join("contacts.csv");
        let settings = Settings {
            contacts_path: contacts_path.to_string_lossy().into_owned(),
            assets_dir: dir.join("assets").to_string_lossy().into_owned(),
            stylesheet_path: dir.join("style.css").to_string_lossy().into_owned(),
            resume_path: dir.join("resume.pdf").to_string_lossy().into_owned(),
            ..Settings::default()
        };
        let app = build_router(Arc::new(AppState::from_settings(&settings)));
        (app, contacts_path)
    }

    fn contact_post(body: &str) -> Request<Body> {
        Request::post("/contact")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .expect("location header")
            .to_str()
            .expect("utf-8 location")
    }

    #[tokio::test]
    async fn every_page_renders_with_all_optional_assets_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, _) = test_app(dir.path());

        for page in Page::ALL {
            let request = Request::get(page.path())
                .body(Body::empty())
                .expect("request");
            let response = app.clone().oneshot(request).await.expect("response");
            assert_eq!(response.status(), StatusCode::OK, "{page:?}");

            let bytes = body::to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("body");
            let html = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
            assert!(html.contains(page.title()), "{page:?}");
        }
    }

    #[tokio::test]
    async fn unknown_page_is_a_logged_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, _) = test_app(dir.path());

        let request = Request::get("/p/blog").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, _) = test_app(dir.path());

        let request = Request::get("/healthz").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(bytes.as_ref(), b"ok");
    }

    #[tokio::test]
    async fn valid_submission_is_appended_with_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, contacts_path) = test_app(dir.path());

        let response = app
            .clone()
            .oneshot(contact_post("email=a%40b.com&subject=Hi&message=Hello"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/p/contact?flash=sent");

        let contents = fs::read_to_string(&contacts_path).expect("store file");
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("timestamp,email,subject,message"));
        let row = lines.next().expect("data row");
        assert!(row.contains("a@b.com"));
        assert!(row.contains("Hi"));
        assert!(row.contains("Hello"));
        assert_eq!(lines.next(), None);
    }

    #[tokio::test]
    async fn second_submission_appends_without_second_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, contacts_path) = test_app(dir.path());

        for message in ["first", "second"] {
            let response = app
                .clone()
                .oneshot(contact_post(&format!(
                    "email=a%40b.com&subject=&message={message}"
                )))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }

        let contents = fs::read_to_string(&contacts_path).expect("store file");
        let header_count = contents
            .lines()
            .filter(|line| *line == "timestamp,email,subject,message")
            .count();
        assert_eq!(header_count, 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_without_a_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, contacts_path) = test_app(dir.path());

        for body in [
            "email=&subject=&message=Hello",
            "email=foo.com&subject=&message=Hello",
            "email=foo%40bar&subject=&message=Hello",
        ] {
            let response = app
                .clone()
                .oneshot(contact_post(body))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&response), "/p/contact?flash=invalid");
        }

        assert!(!contacts_path.exists());
    }

    #[tokio::test]
    async fn empty_message_is_rejected_despite_valid_email() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, contacts_path) = test_app(dir.path());

        let response = app
            .oneshot(contact_post("email=a%40b.com&subject=Hi&message="))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/p/contact?flash=invalid");
        assert!(!contacts_path.exists());
    }

    #[tokio::test]
    async fn contact_page_renders_the_flash_from_the_redirect() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, _) = test_app(dir.path());

        let request = Request::get("/p/contact?flash=sent")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let html = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
        assert!(html.contains("Your message was saved"));
    }

    #[tokio::test]
    async fn asset_requests_cannot_escape_the_assets_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, _) = test_app(dir.path());

        let request = Request::get("/assets/..%2Fcontacts.csv")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn present_asset_is_served_with_content_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("assets")).expect("assets dir");
        fs::write(dir.path().join("assets").join("me.png"), b"not-a-real-png")
            .expect("asset file");
        let (app, _) = test_app(dir.path());

        let request = Request::get("/assets/me.png")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).expect("header"),
            "image/png"
        );
    }

    #[tokio::test]
    async fn missing_asset_and_resume_are_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (app, _) = test_app(dir.path());

        let request = Request::get("/assets/me.png")
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = Request::get("/resume").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn present_resume_downloads_as_attachment() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("resume.pdf"), b"%PDF-1.4").expect("resume file");
        let (app, _) = test_app(dir.path());

        let request = Request::get("/resume").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("disposition")
            .to_str()
            .expect("utf-8 header");
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("Aliyah-Regacho-Resume.pdf"));
    }
}
