use crate::domain::normalize_domain;
use crate::error::Error;
use crate::web::page_error::PageError;
use crate::web::pages::{DomainNotFoundPage, DomainPage, HomePage};
use crate::web::server::AppState;
use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    let timeout = state.config.request_timeout;
    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/", get(home).post(lookup))
        .route("/domain/:domain", get(domain_report))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok": "healthy"}))
}

#[allow(clippy::unused_async)]
async fn home(State(state): State<AppState>) -> Result<Response, PageError> {
    render(&HomePage::new(&state.config), StatusCode::OK)
}

#[derive(Deserialize)]
struct LookupForm {
    domain: String,
}

#[allow(clippy::unused_async)]
async fn lookup(Form(form): Form<LookupForm>) -> Redirect {
    let domain = normalize_domain(&form.domain);
    Redirect::to(&format!("/domain/{domain}"))
}

async fn domain_report(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Response, PageError> {
    let started = Instant::now();
    let domain = normalize_domain(&domain);
    let report = state.backend.domain_report(&domain).await?;
    let elapsed_secs = started.elapsed().as_secs_f64();

    if report.domain_does_not_exist() {
        tracing::debug!("\"{domain}\" does not exist");
        return render(
            &DomainNotFoundPage::new(&state.config, &domain, elapsed_secs),
            StatusCode::NOT_FOUND,
        );
    }

    tracing::info!("rendering report for \"{domain}\" ({elapsed_secs:.3}s)");
    render(
        &DomainPage::new(&state.config, &domain, &report, elapsed_secs),
        StatusCode::OK,
    )
}

fn render<T: Template>(page: &T, status: StatusCode) -> Result<Response, PageError> {
    let html = page.render().map_err(Error::from)?;
    Ok((status, Html(html)).into_response())
}
