use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infrastructure::config::Config;
use crate::{
    controllers::{
        admin::AdminController, auth::AuthController, food::FoodController, health,
        user::UserController,
    },
    domain::{auth::AuthService, food::FoodService, user::UserService},
    infrastructure::{
        auth::{auth_middleware, request_id_middleware},
        repositories::{FoodRepository, UserRepository},
    },
};

/// Assemble the application router: wire repositories into services,
/// services into controllers, and controllers into routes. Shared between
/// the binary and the e2e test harness.
pub fn build_router(
    config: Arc<Config>,
    user_repo: Arc<UserRepository>,
    food_repo: Arc<FoodRepository>,
) -> Router {
    // Services
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        config.jwt_secret.clone(),
        config.jwt_expiration_hours,
        config.bcrypt_cost,
    ));
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let food_service = Arc::new(FoodService::new(food_repo.clone()));

    // Controllers
    let auth_controller = Arc::new(AuthController::new(auth_service));
    let user_controller = Arc::new(UserController::new(user_service));
    let food_controller = Arc::new(FoodController::new(food_service));
    let admin_controller = Arc::new(AdminController::new(user_repo.clone(), food_repo.clone()));

    // Auth routes (public - no auth required)
    let auth_routes = Router::new()
        .route("/sign_up", post(AuthController::sign_up))
        .route("/sign_in", post(AuthController::sign_in))
        .with_state(auth_controller);

    // User routes (require authentication)
    let user_routes = Router::new()
        .route("/me", get(UserController::get_me))
        .with_state(user_controller)
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            auth_middleware,
        ));

    // Food routes (require authentication)
    let food_routes = Router::new()
        .route(
            "/foods",
            get(FoodController::list_foods).post(FoodController::create_food),
        )
        .route("/foods/:foodId", get(FoodController::get_food))
        .with_state(food_controller)
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            auth_middleware,
        ));

    let mut app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(auth_routes)
        .merge(user_routes)
        .merge(food_routes);

    // The in-process fixture reset replaces the external database drop the
    // original test suite shelled out to; never exposed in production
    if config.is_development() {
        let admin_routes = Router::new()
            .route("/admin/reset", post(AdminController::reset))
            .with_state(admin_controller);
        app = app.merge(admin_routes);
    }

    app.layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    user_repo: Arc<UserRepository>,
    food_repo: Arc<FoodRepository>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), user_repo, food_repo);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
