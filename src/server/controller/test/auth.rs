use super::*;

fn marine_body() -> Value {
    json!({ "name": "Kuzan", "rank": "Admiral" })
}

/// Tests an admin endpoint without an Authorization header.
///
/// Expected: 401 and nothing stored
#[tokio::test]
async fn missing_header_is_unauthorized() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), post_json("/api/marines", None, marine_body())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let (_, marines) = send(app(db), get("/api/marines")).await;
    assert_eq!(marines, json!([]));
}

/// Tests an admin endpoint with a header that is not a bearer token.
///
/// Expected: 401
#[tokio::test]
async fn malformed_header_is_unauthorized() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/marines")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Token test-admin-token")
        .body(Body::from(marine_body().to_string()))
        .unwrap();

    let (status, _) = send(app(db), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests an admin endpoint with a well-formed but wrong token.
///
/// Expected: 403
#[tokio::test]
async fn wrong_token_is_forbidden() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        post_json("/api/marines", Some("wrong-token"), marine_body()),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Forbidden" }));
}

/// Tests authorization is checked before the body is parsed.
///
/// Expected: 401 for an unauthenticated request with an unparsable body
#[tokio::test]
async fn auth_checked_before_body() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/crews")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _) = send(app(db), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests creating a marine with the admin token, then listing it.
///
/// Expected: 201 with a 24 character id that appears in the list
#[tokio::test]
async fn admin_creates_marine() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        app(db),
        post_json("/api/marines", Some(ADMIN_TOKEN), marine_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);

    let (status, marines) = send(app(db), get("/api/marines")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(marines[0]["id"], id.as_str());
    assert_eq!(marines[0]["name"], "Kuzan");
    assert!(marines[0].get("_id").is_none());
}

/// Tests a blank required field is rejected.
///
/// Expected: 422
#[tokio::test]
async fn blank_rank_is_unprocessable() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(
        app(db),
        post_json(
            "/api/marines",
            Some(ADMIN_TOKEN),
            json!({ "name": "Kuzan", "rank": "  " }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
