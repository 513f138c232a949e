use crate::app_context::AppContext;
use crate::parking::models::Coordinates;
use crate::parking::requests::SaveLocationRequest;
use crate::parking::responses::{CurrentLocationResponse, ErrorResponse, LocationSavedResponse};
use crate::storage::interface::{ParkingStore, StorageError};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

pub async fn current_location<PS>(State(app_context): State<AppContext<PS>>) -> Response
where
    PS: ParkingStore + Clone + Send + Sync + 'static,
{
    match app_context.parking.current().await {
        Ok(record) => {
            (StatusCode::OK, Json(CurrentLocationResponse { data: record })).into_response()
        }
        Err(error) => {
            tracing::error!(
                operation = "current_location",
                error = %error,
                "Failed to read the current parking location."
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: String::from("Failed to read the current parking location."),
                }),
            )
                .into_response()
        }
    }
}

pub async fn save_location<PS>(
    State(app_context): State<AppContext<PS>>,
    body: Result<Json<SaveLocationRequest>, JsonRejection>,
) -> Response
where
    PS: ParkingStore + Clone + Send + Sync + 'static,
{
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(
                operation = "save_location",
                error = %rejection,
                "Rejected a malformed request body."
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };
    let coordinates = match Coordinates::new(request.latitude, request.longitude) {
        Ok(coordinates) => coordinates,
        Err(error) => {
            tracing::warn!(
                operation = "save_location",
                latitude = request.latitude,
                longitude = request.longitude,
                error = %error,
                "Rejected out-of-range coordinates."
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response();
        }
    };
    match app_context.parking.replace(coordinates).await {
        Ok(record) => {
            tracing::info!(
                operation = "save_location",
                record_id = record.id,
                latitude = record.latitude,
                longitude = record.longitude,
                "Saved a new parking location."
            );
            (StatusCode::CREATED, Json(LocationSavedResponse { data: record })).into_response()
        }
        Err(StorageError::InvalidCoordinates(error)) => {
            // The store re-checks what the handler already validated, so this
            // arm is a backstop for callers that bypass the HTTP layer.
            tracing::warn!(
                operation = "save_location",
                latitude = request.latitude,
                longitude = request.longitude,
                error = %error,
                "The store rejected the coordinates."
            );
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(
                operation = "save_location",
                latitude = request.latitude,
                longitude = request.longitude,
                error = %error,
                "Failed to save the parking location."
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: String::from("Failed to save the parking location."),
                }),
            )
                .into_response()
        }
    }
}
