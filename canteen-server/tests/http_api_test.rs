//! End-to-end HTTP tests through the full router and middleware stack

mod common;

use canteen_server::auth::Role;
use common::{get, order_count, post_json, spawn_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_checkout_then_sold_out() {
    let app = spawn_app().await;
    app.seed(&[("Samosa", 30.0, 5)]).await;

    let cart = json!({"items": [{"name": "Samosa", "quantity": 3}], "totalAmount": 90});

    let (status, body) = app.send_json(post_json("/api/checkout", cart.clone(), None)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order created successfully!");
    assert!(body["orderId"].as_i64().is_some());
    assert_eq!(app.stock_of("Samosa").await, 2);

    let (status, body) = app.send_json(post_json("/api/checkout", cart, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Sorry, Samosa is sold out or not enough in stock!"
    );
    assert_eq!(body["details"]["item"], "Samosa");
    assert_eq!(app.stock_of("Samosa").await, 2);
    assert_eq!(order_count(app.pool()).await, 1);
}

#[tokio::test]
async fn test_checkout_rejects_invalid_carts() {
    let app = spawn_app().await;
    app.seed(&[("Samosa", 30.0, 5)]).await;

    let (status, _) = app
        .send_json(post_json("/api/checkout", json!({"items": [], "totalAmount": 0}), None))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send_json(post_json(
            "/api/checkout",
            json!({"items": [{"name": "Samosa", "quantity": 0}], "totalAmount": 0}),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .send_json(post_json(
            "/api/checkout",
            json!({"items": [{"name": "Samosa", "quantity": 1}], "totalAmount": 1}),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["expected"], 30.0);

    assert_eq!(app.stock_of("Samosa").await, 5);
    assert_eq!(order_count(app.pool()).await, 0);
}

#[tokio::test]
async fn test_scan_redeems_once() {
    let app = spawn_app().await;
    app.seed(&[("Chai", 10.0, 10)]).await;
    let staff = app.token(Role::Staff);

    let (_, body) = app
        .send_json(post_json(
            "/api/checkout",
            json!({"items": [{"name": "Chai", "quantity": 2}], "totalAmount": 20}),
            None,
        ))
        .await;
    let order_id = body["orderId"].as_i64().unwrap();

    let (status, body) = app
        .send_json(post_json(
            "/api/orders/scan",
            json!({"orderId": order_id}),
            Some(&staff),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order Redeemed Successfully!");
    assert_eq!(body["order"]["status"], "REDEEMED");
    assert_eq!(body["order"]["items"][0]["name"], "Chai");
    assert_eq!(body["order"]["items"][0]["quantity"], 2);

    // QR payloads arrive as text too
    let (status, body) = app
        .send_json(post_json(
            "/api/orders/scan",
            json!({"orderId": order_id.to_string()}),
            Some(&staff),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "This order has already been redeemed.");
}

#[tokio::test]
async fn test_scan_unknown_order() {
    let app = spawn_app().await;
    let manager = app.token(Role::Manager);

    let (status, body) = app
        .send_json(post_json(
            "/api/orders/scan",
            json!({"orderId": 424242}),
            Some(&manager),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid QR Code. Order not found.");

    let (status, _) = app
        .send_json(post_json(
            "/api/orders/scan",
            json!({"orderId": "garbage"}),
            Some(&manager),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_gate() {
    let app = spawn_app().await;
    let staff = app.token(Role::Staff);

    // Missing token
    let (status, body) = app
        .send_json(post_json("/api/orders/scan", json!({"orderId": 1}), None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Please authenticate.");

    // Garbage token
    let (status, body) = app
        .send_json(post_json(
            "/api/orders/scan",
            json!({"orderId": 1}),
            Some("not.a.jwt"),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Please authenticate.");

    // Staff may not pull the report
    let (status, body) = app
        .send_json(get("/api/admin/reports/daily", Some(&staff)))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Please authenticate.");

    // Public routes need no token
    let (status, _) = app.send_json(get("/api/menu", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.send_json(get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_daily_report_csv() {
    let app = spawn_app().await;
    app.seed(&[("Samosa", 30.0, 10), ("Chai", 10.0, 10)]).await;
    let manager = app.token(Role::Manager);

    let (status, _) = app
        .send_json(post_json(
            "/api/checkout",
            json!({
                "items": [{"name": "Samosa", "quantity": 2}, {"name": "Chai", "quantity": 1}],
                "totalAmount": 70
            }),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Today in UTC, the configured business timezone
    let (status, headers, body) = app
        .send(get("/api/admin/reports/daily", Some(&manager)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[http::header::CONTENT_TYPE], "text/csv; charset=utf-8");
    let disposition = headers[http::header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"daily-report-"));

    let csv = String::from_utf8(body).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "orderId,status,date,time,itemName,quantity,price,itemTotal"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains(",PAID,"));
    assert!(lines[1].ends_with(",Samosa,2,30.00,60.00"));
    assert!(lines[2].ends_with(",Chai,1,10.00,10.00"));
}

#[tokio::test]
async fn test_daily_report_empty_and_bad_date() {
    let app = spawn_app().await;
    let manager = app.token(Role::Manager);

    let (status, body) = app
        .send_json(get("/api/admin/reports/daily?date=2020-01-01", Some(&manager)))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No orders found for 2020-01-01");

    let (status, _) = app
        .send_json(get("/api/admin/reports/daily?date=yesterday", Some(&manager)))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_menu_listing() {
    let app = spawn_app().await;
    app.seed(&[("Samosa", 30.0, 5), ("Chai", 10.0, 0)]).await;

    let (status, body) = app.send_json(get("/api/menu", None)).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    let chai = items.iter().find(|i| i["name"] == "Chai").unwrap();
    assert_eq!(chai["quantity"], 0);
    assert_eq!(chai["price"], 10.0);
}

#[tokio::test]
async fn test_malformed_bodies_are_validation_errors() {
    let app = spawn_app().await;
    app.seed(&[("Samosa", 30.0, 5)]).await;
    let staff = app.token(Role::Staff);

    let cases = [
        (
            "/api/checkout",
            json!({"items": [{"name": "Samosa", "quantity": 1}]}),
            None,
        ),
        (
            "/api/checkout",
            json!({"items": [{"name": "Samosa", "quantity": 1.5}], "totalAmount": 45}),
            None,
        ),
        (
            "/api/checkout",
            json!({"items": [{"name": "Samosa"}], "totalAmount": 30}),
            None,
        ),
        ("/api/orders/scan", json!({}), Some(staff.as_str())),
    ];

    for (uri, body, token) in cases {
        let (status, response) = app.send_json(post_json(uri, body.clone(), token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body}");
        assert_eq!(response["code"], 2, "{uri} {body}");
        assert!(response["message"].is_string());
    }

    assert_eq!(app.stock_of("Samosa").await, 5);
    assert_eq!(order_count(app.pool()).await, 0);
}

#[tokio::test]
async fn test_unknown_api_path_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = app.send_json(get("/api/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send_json(post_json("/api/orders/unknown", json!({}), None))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Known protected routes still demand a token
    let (status, _) = app
        .send_json(post_json("/api/orders/scan", json!({"orderId": 1}), None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
