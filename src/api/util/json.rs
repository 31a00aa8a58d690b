use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;

/// Map a domain result into a bare JSON body, or the `{ "error": .. }` shape.
pub fn to_json<T, E>(result: Result<T, E>) -> Result<Json<T>, AppError>
where
    T: Serialize,
    E: Into<AppError>,
{
    result.map(Json).map_err(|err| {
        let err = err.into();
        warn!("Request failed ({}): {}", err.status_code(), err);
        err
    })
}
