use axum::extract::rejection::FormRejection;
use axum::Form;

use crate::errors::AppError;

/// Unwrap a form extractor, turning axum's plain-text rejection into the
/// JSON error shape.
pub fn parse_form<T>(form: Result<Form<T>, FormRejection>) -> Result<T, AppError> {
    form.map(|Form(inner)| inner)
        .map_err(|rejection| AppError::BodyParsingError(rejection.body_text()))
}
