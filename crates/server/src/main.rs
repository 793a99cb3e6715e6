use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use shared::{
    domain::Message,
    error::{ApiError, ErrorCode},
};
use storage::{DynamoStore, MessageStore, StoreError};
use tracing::{error, info};
use uuid::Uuid;

mod config;
mod form;
mod text;
mod view;

use config::load_settings;
use form::{validate_message, MessageForm};
use text::TextGenerator;
use view::{render_home, FormState};

#[derive(Clone)]
struct AppState {
    store: Arc<dyn MessageStore>,
    text_gen: TextGenerator,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    info!(
        region = %settings.region,
        table = %settings.table_name,
        "connecting to dynamodb"
    );
    let store = DynamoStore::connect(&settings.region, &settings.table_name).await;

    let state = AppState {
        store: Arc::new(store),
        text_gen: TextGenerator::from_entropy(),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    // The literal /healthz route must come before the :uuid capture.
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(home_page).post(post_message))
        .route("/:uuid", get(get_message).post(create_message))
        .with_state(state)
}

/// Liveness probe; never touches the store.
async fn healthz() -> &'static str {
    "OK"
}

async fn home_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, Json<ApiError>)> {
    info!("home_page");
    let items = state.store.scan_all().await.map_err(store_failure)?;
    let page = render_home(&items, &FormState::Empty).map_err(render_failure)?;
    Ok(Html(page))
}

async fn post_message(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MessageForm>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    info!("post_message");
    match validate_message(&form) {
        Ok(text) => {
            let message = Message::new(Uuid::new_v4().to_string(), text);
            state.store.put(&message).await.map_err(store_failure)?;
            Ok(Redirect::to("/").into_response())
        }
        Err(field_error) => {
            // Matches the original flow: the listing is not refetched here.
            let page = render_home(
                &[],
                &FormState::Invalid {
                    error: field_error.to_string(),
                },
            )
            .map_err(render_failure)?;
            Ok(Html(page).into_response())
        }
    }
}

/// Upsert: any submitted body is ignored and the text is generated
/// server-side.
async fn create_message(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> Result<Json<Message>, (StatusCode, Json<ApiError>)> {
    info!(%uuid, "create_message");
    let message = Message::new(uuid, state.text_gen.generate());
    state.store.put(&message).await.map_err(store_failure)?;
    Ok(Json(message))
}

async fn get_message(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> Result<Json<Message>, (StatusCode, Json<ApiError>)> {
    info!(%uuid, "get_message");
    let message = state
        .store
        .get(&uuid)
        .await
        .map_err(store_failure)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(ErrorCode::NotFound, "message not found")),
            )
        })?;
    Ok(Json(message))
}

fn store_failure(err: StoreError) -> (StatusCode, Json<ApiError>) {
    error!(%err, "store request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(ErrorCode::Internal, "storage unavailable")),
    )
}

fn render_failure(err: tera::Error) -> (StatusCode, Json<ApiError>) {
    error!(%err, "template rendering failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(ErrorCode::Internal, "rendering failed")),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
