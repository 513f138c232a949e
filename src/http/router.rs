use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::interface::ParkingStore;
use crate::{health, http, parking};
use axum::routing::get;
use axum::Router;

pub fn new<PS>(args: &Args, app_context: AppContext<PS>) -> Router
where
    PS: ParkingStore + Clone + Send + Sync + 'static,
{
    let cors_policy = http::init(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck::<PS>));

    Router::new()
        .route(
            "/current-location",
            get(parking::handlers::current_location::<PS>)
                .put(parking::handlers::save_location::<PS>),
        )
        .nest("/health", health_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(http::middleware::tracing))
}
