use super::*;

/// Tests a crew with no members is returned with an empty members array.
///
/// Expected: 200 with "members": [] and the crew's encoded id
#[tokio::test]
async fn crew_without_members_has_empty_array() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::create_crew(db).await.unwrap();

    let (status, body) = send(app(db), get(&format!("/api/crews/{}", crew.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], crew.id.as_str());
    assert_eq!(body["name"], crew.name.as_str());
    assert_eq!(body["members"], json!([]));
}

/// Tests members are embedded with their own encoded ids.
///
/// Expected: 200 with both members, each carrying "id" and the crew's "crew_id"
#[tokio::test]
async fn crew_embeds_members() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (crew, members) = factory::helpers::create_crew_with_members(db, &[100, 200])
        .await
        .unwrap();

    let (status, body) = send(app(db), get(&format!("/api/crews/{}", crew.id))).await;

    assert_eq!(status, StatusCode::OK);
    let embedded = body["members"].as_array().unwrap();
    assert_eq!(embedded.len(), 2);
    for member in &members {
        assert!(embedded
            .iter()
            .any(|m| m["id"] == member.id.as_str() && m["crew_id"] == crew.id.as_str()));
    }
}

/// Tests a malformed crew id.
///
/// Expected: 400 with {"error": "Invalid crew id"}
#[tokio::test]
async fn malformed_crew_id_is_bad_request() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), get("/api/crews/not-an-id")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid crew id" }));
}

/// Tests an unknown crew id.
///
/// Expected: 404 with {"error": "Crew not found"}
#[tokio::test]
async fn unknown_crew_is_not_found() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), get("/api/crews/507f1f77bcf86cd799439011")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Crew not found" }));
}

/// Tests list filters are exact and literal.
///
/// Expected: only the "East Blue" crew for sea=East Blue; nothing for a wildcard
#[tokio::test]
async fn list_filters_are_exact() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let east_blue = factory::crew::CrewFactory::new(db)
        .sea("East Blue")
        .crew_of_month(true)
        .build()
        .await
        .unwrap();
    factory::crew::CrewFactory::new(db)
        .sea("East Blue Annex")
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db), get("/api/crews?sea=East%20Blue")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], east_blue.id.as_str());

    let (_, body) = send(app(db), get("/api/crews?sea=East%25")).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(app(db), get("/api/crews?crew_of_month=true")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(app(db), get("/api/crews?sea=&crew_of_month=")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

/// Tests creating a crew with an unknown sea.
///
/// Expected: 422
#[tokio::test]
async fn unknown_sea_is_unprocessable() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(
        app(db),
        post_json(
            "/api/crews",
            Some(ADMIN_TOKEN),
            json!({ "name": "Foxy Pirates", "sea": "Calm Belt" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests whitespace in the sea filter is matched literally, not trimmed.
///
/// Expected: " East Blue" only finds the crew stored with the leading space; a lone
/// space is a real filter that matches nothing
#[tokio::test]
async fn sea_filter_keeps_whitespace() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let exact = factory::crew::CrewFactory::new(db)
        .sea("East Blue")
        .build()
        .await
        .unwrap();
    let padded = factory::crew::CrewFactory::new(db)
        .sea(" East Blue")
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(db), get("/api/crews?sea=%20East%20Blue")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], padded.id.as_str());

    let (_, body) = send(app(db), get("/api/crews?sea=East%20Blue")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], exact.id.as_str());

    let (status, body) = send(app(db), get("/api/crews?sea=%20")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Tests crew_of_month accepts the usual boolean spellings.
///
/// Expected: "True", "1" and "yes" all select the crew of the month
#[tokio::test]
async fn crew_of_month_accepts_lenient_flags() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let featured = factory::crew::CrewFactory::new(db)
        .crew_of_month(true)
        .build()
        .await
        .unwrap();
    factory::crew::create_crew(db).await.unwrap();

    for flag in ["True", "1", "yes"] {
        let (status, body) =
            send(app(db), get(&format!("/api/crews?crew_of_month={}", flag))).await;
        assert_eq!(status, StatusCode::OK, "{}", flag);
        assert_eq!(body.as_array().unwrap().len(), 1, "{}", flag);
        assert_eq!(body[0]["id"], featured.id.as_str());
    }
}

/// Tests an unparsable query value.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn malformed_query_is_json_bad_request() {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(app(db), get("/api/crews?crew_of_month=maybe")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Tests an unreachable store is reported as unavailable rather than a generic failure.
///
/// Expected: 503 with {"error": "Storage unavailable"}
#[tokio::test]
async fn closed_store_is_service_unavailable() {
    let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
    let router = app(&db);
    db.close().await.unwrap();

    let (status, body) = send(router, get("/api/crews")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "Storage unavailable" }));
}
