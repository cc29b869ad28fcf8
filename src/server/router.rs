use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{admin, crew, event, leaderboard, marine, member, root},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Grandline - One Piece Fanverse API"),
    paths(
        root::root,
        root::test_database,
        marine::create_marine,
        marine::list_marines,
        crew::create_crew,
        crew::list_crews,
        crew::get_crew,
        member::create_member,
        member::list_members,
        event::create_event,
        event::list_events,
        event::get_event,
        leaderboard::get_leaderboard,
        admin::seed,
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "root", description = "Service status"),
        (name = "marine", description = "Marine officers"),
        (name = "crew", description = "Pirate crews"),
        (name = "member", description = "Pirate crew members"),
        (name = "event", description = "Fan site events"),
        (name = "leaderboard", description = "Bounty leaderboard"),
        (name = "admin", description = "Administration"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by admin endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/test", get(root::test_database))
        .route("/api/openapi.json", get(openapi_json))
        .route(
            "/api/marines",
            get(marine::list_marines).post(marine::create_marine),
        )
        .route("/api/crews", get(crew::list_crews).post(crew::create_crew))
        .route("/api/crews/{id}", get(crew::get_crew))
        .route(
            "/api/members",
            get(member::list_members).post(member::create_member),
        )
        .route("/api/events", get(event::list_events).post(event::create_event))
        .route("/api/events/{id}", get(event::get_event))
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        .route("/api/admin/seed", post(admin::seed))
}

/// Builds the complete application with shared state, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
