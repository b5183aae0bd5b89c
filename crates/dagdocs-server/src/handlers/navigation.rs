//! Navigation API endpoints.
//!
//! Return the sidebar tree and the flattened page order of a namespace.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use dagdocs_routes::{FlattenedPage, NavItem};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::parse_namespace;
use crate::state::AppState;

/// Response for GET /api/{namespace}/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation tree items.
    items: Vec<NavItem>,
}

/// Response for GET /api/{namespace}/pages.
#[derive(Serialize)]
pub(crate) struct PageListResponse {
    /// Pages in pagination order.
    pages: Vec<FlattenedPage>,
}

/// Handle GET /api/{namespace}/navigation.
pub(crate) async fn get_navigation(
    Path(namespace): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let namespace = parse_namespace(&namespace)?;
    let items = state.site.menu(namespace);
    Ok(Json(NavigationResponse { items }))
}

/// Handle GET /api/{namespace}/pages.
pub(crate) async fn get_page_list(
    Path(namespace): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageListResponse>, ServerError> {
    let namespace = parse_namespace(&namespace)?;
    let pages = state.site.pages(namespace);
    Ok(Json(PageListResponse { pages }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_response_serialization() {
        let response = NavigationResponse {
            items: vec![NavItem {
                title: "Getting Started".to_owned(),
                path: "/docs/getting-started".to_owned(),
                navigable: false,
                children: vec![],
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["title"], "Getting Started");
        assert_eq!(json["items"][0]["path"], "/docs/getting-started");
        assert_eq!(json["items"][0]["navigable"], false);
    }
}
