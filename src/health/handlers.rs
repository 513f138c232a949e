use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use crate::storage::interface::ParkingStore;
use axum::extract::State;
use axum::response::Json;

/// Probes the store with a read so the check reflects whether the database
/// is actually reachable.
pub async fn healthcheck<PS>(State(app_context): State<AppContext<PS>>) -> Json<HealthCheckResponse>
where
    PS: ParkingStore + Clone + Send + Sync + 'static,
{
    let storage_reachable = match app_context.parking.current().await {
        Ok(_) => true,
        Err(error) => {
            tracing::error!(
                operation = "healthcheck",
                error = %error,
                "The parking database is unreachable."
            );
            false
        }
    };
    Json(HealthCheckResponse {
        error: !storage_reachable,
    })
}
