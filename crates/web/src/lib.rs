//! # Folio Web
//!
//! HTTP surface of the portfolio.
//!
//! Handles:
//! - HTML pages (home, detail, not-found) rendered by `folio-site`
//! - section routes redirecting to their home page anchor
//! - the JSON content API with OpenAPI/Swagger documentation
//! - static assets from the configured assets directory
//!
//! Uses `api-shared` for the JSON wire types.

#![warn(rust_2018_idioms)]

use api_shared::{ContentRes, ContentSummaryRes, HealthRes, HealthService, ListContentRes, NotFoundRes};
use axum::{
    extract::{Path as AxumPath, Query, Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use folio_core::{ContentKind, FolioResult, Resolution, Section};
use folio_site::{Page, PageStatus, Site};
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across request handlers.
///
/// The site (configuration, registry and profile) is built once at startup and only read
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    site: Arc<Site>,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        Self {
            site: Arc::new(site),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_content, get_content),
    components(schemas(
        HealthRes,
        ListContentRes,
        ContentSummaryRes,
        ContentRes,
        api_shared::NarrativeFieldRes,
        NotFoundRes
    ))
)]
pub struct ApiDoc;

/// Build the full router: pages, section redirects, JSON API, docs and assets.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(home))
        .route("/works/:id", get(work_detail))
        .route("/projects/:id", get(project_detail))
        .route("/health", get(health))
        .route("/api/content", get(list_content))
        .route("/api/content/:id", get(get_content));

    for section in Section::ALL.into_iter().filter(|s| *s != Section::Home) {
        let target = section.href();
        app = app.route(
            &section.route(),
            get(move || {
                let target = target.clone();
                async move { Redirect::to(&target) }
            }),
        );
    }

    app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Response {
    page_response(state.site.render_home().map(|html| Page {
        status: PageStatus::Ok,
        html,
    }))
}

async fn work_detail(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    req: Request,
) -> Response {
    detail(state, ContentKind::Work, id, req).await
}

async fn project_detail(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    req: Request,
) -> Response {
    detail(state, ContentKind::Project, id, req).await
}

/// Render a detail page. A dotted segment under a detail prefix (`/works/osep1.png`) is
/// tried as an asset first; if no such file exists the id goes through the resolver.
async fn detail(state: AppState, kind: ContentKind, id: String, req: Request) -> Response {
    if id.contains('.') {
        if let Some(res) = serve_asset(&state, req).await {
            return res;
        }
    }
    page_response(state.site.render_detail(kind, &id))
}

async fn fallback(State(state): State<AppState>, req: Request) -> Response {
    let path = req.uri().path().to_owned();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if last_segment.contains('.') {
        if let Some(res) = serve_asset(&state, req).await {
            return res;
        }
    }
    page_response(state.site.render_route(&path))
}

/// Serve a file from the assets directory. `None` when there is no such file.
async fn serve_asset(state: &AppState, req: Request) -> Option<Response> {
    let assets = ServeDir::new(state.site.config().assets_dir());
    let res = match assets.oneshot(req).await {
        Ok(res) => res,
        Err(never) => match never {},
    };
    if res.status() == StatusCode::NOT_FOUND {
        tracing::debug!("no asset found, rendering page instead");
        return None;
    }
    Some(res.into_response())
}

fn page_response(page: FolioResult<Page>) -> Response {
    match page {
        Ok(Page {
            status: PageStatus::Ok,
            html,
        }) => Html(html).into_response(),
        Ok(Page {
            status: PageStatus::NotFound,
            html,
        }) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Render page error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Reports the service as alive along with the number of registry records.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health(state.site.registry().len()))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    kind: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/content",
    params(
        ("kind" = Option<String>, Query, description = "Only list `work` or `project` records")
    ),
    responses(
        (status = 200, description = "Registry records in authoring order", body = ListContentRes),
        (status = 400, description = "Unknown kind")
    )
)]
/// List registry records
///
/// # Errors
/// Returns `400 Bad Request` if `kind` is neither `work` nor `project`.
#[axum::debug_handler]
async fn list_content(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListContentRes>, (StatusCode, &'static str)> {
    let kind = match params.kind.as_deref().map(str::parse::<ContentKind>).transpose() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::warn!("Invalid kind filter: {}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid kind"));
        }
    };

    let records = state
        .site
        .registry()
        .records()
        .iter()
        .filter(|record| kind.map_or(true, |k| record.kind == k))
        .map(ContentSummaryRes::from)
        .collect();
    Ok(Json(ListContentRes { records }))
}

#[utoipa::path(
    get,
    path = "/api/content/{id}",
    params(
        ("id" = String, Path, description = "Exact content id; no case folding or trimming")
    ),
    responses(
        (status = 200, description = "Content record", body = ContentRes),
        (status = 404, description = "No record with this id", body = NotFoundRes)
    )
)]
/// Resolve a content id
///
/// A missing id is an ordinary outcome: the body names the entry point to go back to.
#[axum::debug_handler]
async fn get_content(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ContentRes>, (StatusCode, Json<NotFoundRes>)> {
    match state.site.registry().resolve(&id) {
        Resolution::Found(record) => Ok(Json(ContentRes::from(record))),
        Resolution::NotFound => Err((StatusCode::NOT_FOUND, Json(NotFoundRes::for_id(&id)))),
    }
}
