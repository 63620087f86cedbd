use crate::core::waitlist::WaitlistService;
use crate::core::Acknowledgement;
use crate::utils::error::{Result, WaitlistError};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::future::{Future, IntoFuture};
use std::path::PathBuf;
use std::pin::Pin;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const WAITLIST_PATH: &str = "/api/waitlist";

type ServerFuture = Pin<Box<dyn Future<Output = std::result::Result<(), std::io::Error>> + Send>>;

#[derive(Clone)]
pub struct AppState {
    pub waitlist: WaitlistService,
}

impl AppState {
    pub fn new(waitlist: WaitlistService) -> Self {
        Self { waitlist }
    }
}

/// Optional static site served next to the API.
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    pub static_dir: Option<PathBuf>,
    pub cors: bool,
}

impl IntoResponse for WaitlistError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.error_body())).into_response()
    }
}

pub async fn submit_waitlist(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<Acknowledgement>, WaitlistError> {
    let ack = state.waitlist.handle(&body).await?;
    Ok(Json(ack))
}

pub fn app_router(app_state: AppState, site: &SiteOptions) -> Router {
    let mut router = Router::new()
        .route(WAITLIST_PATH, post(submit_waitlist))
        .with_state(app_state);

    // Unknown paths get index.html so client-side routes resolve.
    if let Some(dir) = &site.static_dir {
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    if site.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

pub struct Application {
    http_future: ServerFuture,
    // exposed so tests can reach an ephemeral port
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str, site: &SiteOptions) -> Result<Self> {
        let router = app_router(app_state, site);

        let listener = TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;
        let http_future = axum::serve(listener, router.into_make_service()).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", local_addr),
        })
    }

    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        tracing::info!("Server running at {}", self.address);
        self.http_future.await
    }
}
