//! Pages API endpoint.
//!
//! Resolves a page within a namespace and returns JSON with metadata,
//! breadcrumbs, pagination links, table of contents, and HTML content.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use dagdocs_routes::{BreadcrumbItem, FlattenedPage, OutlineEntry, SEPARATOR, join_segments};
use dagdocs_site::PageView;
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::parse_namespace;
use crate::state::AppState;

/// Response for GET /api/{namespace}/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// Breadcrumb navigation items.
    breadcrumbs: Vec<LinkResponse>,
    /// Previous page in reading order.
    previous: Option<LinkResponse>,
    /// Next page in reading order.
    next: Option<LinkResponse>,
    /// Table of contents entries.
    toc: Vec<TocResponse>,
    /// Rendered HTML content.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
struct PageMeta {
    /// Page title (from frontmatter).
    title: String,
    /// URL path.
    path: String,
    /// Page description (from frontmatter).
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Title and path pair for breadcrumbs and pagination.
#[derive(Serialize)]
struct LinkResponse {
    /// Display title.
    title: String,
    /// Link target path.
    path: String,
}

impl From<BreadcrumbItem> for LinkResponse {
    fn from(item: BreadcrumbItem) -> Self {
        Self {
            title: item.title,
            path: item.path,
        }
    }
}

impl From<FlattenedPage> for LinkResponse {
    fn from(page: FlattenedPage) -> Self {
        Self {
            title: page.title,
            path: page.path,
        }
    }
}

/// Table of contents entry for serialization.
#[derive(Serialize)]
struct TocResponse {
    /// Heading level (2-4).
    level: u8,
    /// Heading text.
    title: String,
    /// Anchor ID.
    id: String,
}

impl From<OutlineEntry> for TocResponse {
    fn from(entry: OutlineEntry) -> Self {
        Self {
            level: entry.level,
            title: entry.text,
            id: entry.anchor,
        }
    }
}

impl From<PageView> for PageResponse {
    fn from(view: PageView) -> Self {
        let context = view.context;
        Self {
            meta: PageMeta {
                title: view.frontmatter.title,
                path: context.path,
                description: view.frontmatter.description,
            },
            breadcrumbs: context
                .breadcrumbs
                .into_iter()
                .map(LinkResponse::from)
                .collect(),
            previous: context.previous.map(LinkResponse::from),
            next: context.next.map(LinkResponse::from),
            toc: context.outline.into_iter().map(TocResponse::from).collect(),
            content: view.html,
        }
    }
}

/// Handle GET /api/{namespace}/pages/ (namespace index page).
pub(crate) async fn get_root_page(
    Path(namespace): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl(&namespace, "", &state, &headers)
}

/// Handle GET /api/{namespace}/pages/{path}.
pub(crate) async fn get_page(
    Path((namespace, path)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServerError> {
    get_page_impl(&namespace, &slug_path(&path), &state, &headers)
}

/// Route path for the catch-all slug, one segment per URL component.
fn slug_path(slug: &str) -> String {
    let segments: Vec<&str> = slug.split(SEPARATOR).collect();
    join_segments(&segments)
}

/// Shared implementation for page lookup.
fn get_page_impl(
    namespace: &str,
    path: &str,
    state: &AppState,
    headers: &HeaderMap,
) -> Result<axum::response::Response, ServerError> {
    let namespace = parse_namespace(namespace)?;
    let view = state.site.page(namespace, path)?;
    let response = PageResponse::from(view);

    // Compute ETag
    let etag = compute_etag(&state.version, &response.meta.path, &response.content);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version, path and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars). Navigation links are
/// derived from the static route trees, so version and path cover them.
fn compute_etag(version: &str, path: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{path}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
