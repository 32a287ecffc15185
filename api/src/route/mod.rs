use axum::Router;
use registry::AppRegistry;

pub mod customer;
pub mod health;
pub mod reservation;
pub mod room;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(customer::build_customer_routers())
        .merge(room::build_room_routers())
        .merge(reservation::build_reservation_routers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::database::{connect_database_with, sync_schema, ConnectionPool};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use shared::config::DatabaseConfig;
    use tower::ServiceExt;

    async fn pool() -> ConnectionPool {
        let db = connect_database_with(&DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        })
        .unwrap();
        sync_schema(&db).await.unwrap();
        db
    }

    async fn app() -> Router {
        routes().with_state(AppRegistry::new(pool().await))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        };
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn create(app: &Router, uri: &str, body: Value) -> Value {
        let (status, json) = send(app, Method::POST, uri, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json
    }

    #[tokio::test]
    async fn health_endpoints_respond() {
        let app = app().await;
        assert_eq!(send(&app, Method::GET, "/health", None).await.0, StatusCode::OK);
        assert_eq!(send(&app, Method::GET, "/health/db", None).await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn customer_lifecycle() {
        let app = app().await;

        let created = create(
            &app,
            "/customers",
            json!({ "name": "Alice", "email": "alice@example.com", "phone": "555-0100" }),
        )
        .await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["name"], "Alice");

        let (status, found) = send(&app, Method::GET, &format!("/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found, created);

        let (status, body) = send(
            &app,
            Method::POST,
            "/customers",
            Some(json!({ "name": "Copy", "email": "alice@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "failed to create customer");

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/customers/{id}"),
            Some(json!({ "phone": "555-0199" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["phone"], "555-0199");
        assert_eq!(updated["email"], "alice@example.com");

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/customers/{id}"),
            Some(json!({ "phone": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["phone"], Value::Null);
        assert_eq!(updated["name"], "Alice");

        let (status, list) = send(&app, Method::GET, "/customers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, Method::DELETE, &format!("/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].is_string());

        let (status, body) = send(&app, Method::GET, &format!("/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let app = app().await;
        for resource in ["customers", "rooms", "reservations"] {
            let uri = format!("/{resource}/9999");
            assert_eq!(send(&app, Method::GET, &uri, None).await.0, StatusCode::NOT_FOUND);
            assert_eq!(
                send(&app, Method::PUT, &uri, Some(json!({}))).await.0,
                StatusCode::NOT_FOUND
            );
            assert_eq!(send(&app, Method::DELETE, &uri, None).await.0, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn invalid_customer_is_rejected() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/customers",
            Some(json!({ "name": "", "email": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn available_rooms_are_filtered() {
        let app = app().await;
        let free = create(
            &app,
            "/rooms",
            json!({ "number": "101", "type": "single", "price": "80.00", "status": "available" }),
        )
        .await;
        create(
            &app,
            "/rooms",
            json!({ "number": "102", "type": "double", "price": "120.00", "status": "occupied" }),
        )
        .await;

        let (status, rooms) = send(&app, Method::GET, "/rooms/available", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rooms, json!([free]));

        let (status, body) = send(
            &app,
            Method::POST,
            "/rooms",
            Some(json!({ "number": "103", "type": "suite", "price": "200", "status": "cleaning" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn rejected_requests_answer_with_json_errors() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/customers/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(&app, Method::DELETE, "/rooms/1.5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(
            &app,
            Method::POST,
            "/reservations",
            Some(json!({ "customerId": 1, "roomId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());

        let req = Request::builder()
            .method(Method::POST)
            .uri("/customers")
            .body(Body::from(json!({ "name": "Alice", "email": "a@example.com" }).to_string()))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn reservations_by_customer_and_dates() {
        let app = app().await;
        let alice = create(&app, "/customers", json!({ "name": "Alice", "email": "a@example.com" })).await;
        let bob = create(&app, "/customers", json!({ "name": "Bob", "email": "b@example.com" })).await;
        let room = create(&app, "/rooms", json!({ "number": "101", "type": "single", "price": "80" })).await;
        assert_eq!(room["status"], "available");

        let contained = create(
            &app,
            "/reservations",
            json!({
                "customerId": alice["id"],
                "roomId": room["id"],
                "checkIn": "2024-01-05",
                "checkOut": "2024-01-10"
            }),
        )
        .await;
        assert_eq!(contained["status"], "confirmed");
        create(
            &app,
            "/reservations",
            json!({
                "customerId": bob["id"],
                "roomId": room["id"],
                "checkIn": "2023-12-20T00:00:00Z",
                "checkOut": "2024-01-10T00:00:00Z"
            }),
        )
        .await;

        let uri = format!("/reservations/customer/{}", alice["id"]);
        let (status, list) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([contained.clone()]));

        let (status, list) = send(&app, Method::GET, "/reservations/customer/42", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([]));

        let (status, list) = send(
            &app,
            Method::GET,
            "/reservations/between-dates?start=2024-01-01&end=2024-01-31",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([contained]));
    }

    #[tokio::test]
    async fn reservation_for_unknown_customer_fails() {
        let app = app().await;
        let room = create(&app, "/rooms", json!({ "number": "101", "type": "single", "price": "80" })).await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/reservations",
            Some(json!({ "customerId": 77, "roomId": room["id"], "checkIn": "2024-01-05" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "failed to create reservation");
    }

    #[tokio::test]
    async fn date_window_is_checked_before_the_store() {
        // a closed pool turns any store access into a 500
        let db = pool().await;
        db.close().await;
        let app = routes().with_state(AppRegistry::new(db));

        for uri in [
            "/reservations/between-dates",
            "/reservations/between-dates?start=2024-01-01",
            "/reservations/between-dates?end=2024-01-31",
        ] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].is_string());
        }

        let (status, _) = send(
            &app,
            Method::GET,
            "/reservations/between-dates?start=2024-01-01&end=2024-01-31",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
