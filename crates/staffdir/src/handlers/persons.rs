use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use staffdir_core::person::person_repr;
use staffdir_core::usecase::GetPersonParams;

use crate::{handlers::AppError, state::AppState};

/// Get a single person by reference (GET /persons/{reference}).
///
/// A missing person maps to 404 with a fixed error body. Any other store
/// failure is not specially recognized and surfaces through [`AppError`].
pub async fn get_person(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Response, AppError> {
    let params = GetPersonParams::new(reference.as_str());

    match state.get_person.execute(params).await {
        Ok(person) => Ok((StatusCode::OK, Json(person_repr(&person))).into_response()),
        Err(err) if err.is_not_found() => {
            tracing::debug!(%reference, "Person lookup missed both stores");
            Ok((
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "Person does not exist!"})),
            )
                .into_response())
        }
        Err(err) => Err(err.into()),
    }
}
