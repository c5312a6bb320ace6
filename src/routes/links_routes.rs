use axum::{routing::post, Router};

use crate::{controllers::links_controller::LinksController, AppState};

pub struct LinksRoutes;

impl LinksRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/", post(LinksController::get_links))
            .route("/entries", post(LinksController::get_visible_entries))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{app, AppState};

    fn router() -> Router {
        app(AppState::demo(Default::default()))
    }

    async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_links_endpoint() {
        let (status, body) = post_json(
            "/api/links",
            json!({
                "route": "app_search_params",
                "parameters": { "type": "foo" },
                "total": 210,
                "per_page": 10,
                "sort": { "name": "DESC", "id": "asc" },
                "page": 11
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let links = body.as_array().unwrap();
        assert_eq!(links.len(), 15);
        assert_eq!(links[0]["role"], "previous");
        assert_eq!(
            links[0]["destination"],
            "/object/foo/search?page=10&pp=10&sort=name%3Adesc%2Cid%3Aasc"
        );
        assert_eq!(links[2]["role"], "ellipsis");
        assert_eq!(links[7]["active"], true);
        assert_eq!(links[7]["label"], "11");
    }

    #[tokio::test]
    async fn test_links_endpoint_rejects_non_integers() {
        for total in [json!(1.1), json!(null), json!(false), json!("1.0")] {
            let (status, body) =
                post_json("/api/links", json!({ "route": "app_search", "total": total })).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "INVALID_PARAMS");
        }

        for per_page in [json!(1.1), json!(null), json!(false), json!("1.0")] {
            let (status, body) = post_json(
                "/api/links",
                json!({ "route": "app_search", "total": 20, "per_page": per_page }),
            )
            .await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "INVALID_PARAMS");
            assert_eq!(body["details"].as_str().map(|d| d.contains("per_page")), Some(true));
        }

        let (status, _) = post_json(
            "/api/links",
            json!({ "route": "app_search", "total": 20, "page": "2" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_links_endpoint_requires_route_and_total() {
        let (status, body) = post_json("/api/links", json!({ "total": 90 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "NOT_INITIALIZED");
    }

    #[tokio::test]
    async fn test_links_endpoint_unknown_route() {
        let (status, body) =
            post_json("/api/links", json!({ "route": "app_missing", "total": 90 })).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "RESOURCE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_entries_endpoint() {
        let (status, body) = post_json(
            "/api/links/entries",
            json!({ "route": "app_search", "total": 500, "per_page": 10, "page": 3 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "first": 21, "last": 30, "total": 500 }));
    }
}
