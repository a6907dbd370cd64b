use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod extract;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{InMemoryDeveloperRepository, PgDeveloperRepository};
use application::DeveloperService;
use config::{AppConfig, StorageBackend};
use devhub::DeveloperRepository;

/// Application service over whichever repository the config selects
pub type AppDeveloperService = DeveloperService<dyn DeveloperRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub developer_service: Arc<AppDeveloperService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Devhub API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState, config: &AppConfig) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::developer::router())
        .layer(TraceLayer::new_for_http());

    let router = if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Devhub API initializing...");

    let config = AppConfig::from_secrets(&secrets).context("Invalid Devhub configuration")?;
    tracing::info!(
        "Storage: {} | migrations: {} | permissive CORS: {}",
        config.storage,
        config.run_migrations,
        config.cors_permissive
    );

    let repo: Arc<dyn DeveloperRepository> = match config.storage {
        StorageBackend::Postgres => {
            if config.run_migrations {
                sqlx::migrate!()
                    .run(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Database migrations completed");
            }
            Arc::new(PgDeveloperRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("In-memory storage selected - data is lost on restart");
            Arc::new(InMemoryDeveloperRepository::new())
        }
    };

    let state = AppState {
        developer_service: Arc::new(DeveloperService::new(repo)),
    };

    let router = build_router(state, &config);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Devhub API ready");

    Ok(router.into())
}
