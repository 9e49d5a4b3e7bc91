use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::seasons::handlers::list_seasons,
        features::seasons::handlers::get_season,
        features::predictions::handlers::submit_prediction,
        features::predictions::handlers::list_member_predictions,
        features::leaderboard::handlers::get_season_leaderboard,
        features::history::handlers::get_member_history,
    ),
    components(
        schemas(
            storage::dto::season::SeasonResponse,
            storage::dto::season::SeasonDetailResponse,
            storage::dto::season::ScheduleInfo,
            storage::dto::prediction::SubmitPredictionRequest,
            storage::dto::prediction::PredictionResponse,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::MemberInfo,
            storage::dto::leaderboard::PositionChange,
            storage::dto::history::UserHistoryResponse,
            storage::dto::history::PredictionOutcome,
            storage::dto::history::OutcomeKind,
            storage::dto::history::WeeklyScore,
            storage::dto::common::PaginationMeta,
            storage::models::Season,
            storage::models::Schedule,
            storage::models::Driver,
            storage::models::Member,
            storage::models::Prediction,
            storage::models::RaceResult,
            storage::scoring::Split,
        )
    ),
    tags(
        (name = "seasons", description = "Season and race week endpoints"),
        (name = "predictions", description = "Prediction submission endpoints"),
        (name = "leaderboard", description = "Scored season leaderboard endpoints"),
        (name = "history", description = "Per-member scoring history endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Grid Predictions API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest(
            "/api/seasons",
            features::seasons::routes::routes()
                .merge(features::leaderboard::routes::routes())
                .merge(features::history::routes::routes()),
        )
        .nest("/api/predictions", features::predictions::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
