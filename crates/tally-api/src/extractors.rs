//! # JSON Extraction
//!
//! Maps body deserialization failures to [`AppError::BadRequest`], so a
//! payload that cannot even be decoded as a receipt shape is reported
//! distinctly from one that decodes but fails the validation rules.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to
/// [`AppError::BadRequest`].
///
/// Handlers take the fallible extractor and unwrap it here:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(value)| value)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
