//! Prediction endpoint: multipart image upload to prediction JSON.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Error;
use crate::inference::{predict, PredictionResult};
use crate::server::advisory;
use crate::server::state::SharedState;

#[derive(Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    /// Static treatment tip, when the disease name matches an advisory entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

/// POST /predict - Run the classifier on an uploaded leaf image
///
/// Expects a multipart form with the image bytes in a field named `image`.
pub async fn predict_image(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let mut image_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Malformed multipart request: {e}"),
        )
    })? {
        if field.name() == Some("image") {
            let bytes = field.bytes().await.map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read image field: {e}"),
                )
            })?;
            image_bytes = Some(bytes.to_vec());
            break;
        }
    }

    let image_bytes = match image_bytes {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "Please upload an image first (multipart field 'image')".to_string(),
            ))
        }
    };

    let prediction = predict(&state.classifier, &image_bytes).map_err(|e| {
        warn!("Prediction failed: {e}");
        (status_for(&e), e.to_string())
    })?;

    info!(
        label = %prediction.label,
        confidence = prediction.confidence_percent,
        "Prediction complete"
    );

    let advisory = advisory::advisory_for(&prediction.disease_name).map(|tip| tip.to_string());

    Ok(Json(PredictResponse {
        prediction,
        advisory,
    }))
}

/// Each error kind maps to its own status code; messages stay distinct and
/// there is never a silent fallback prediction.
fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::ModelUnavailable(_) | Error::ModelLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
        Error::Shape(_) | Error::Inference(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_distinct_per_kind() {
        assert_eq!(
            status_for(&Error::Decode("bad".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&Error::ModelUnavailable("missing".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&Error::Shape("dims".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&Error::Inference("run".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
