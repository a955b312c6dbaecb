//! Prediction over a loaded classifier handle.
//!
//! `predict` is the only entry point: it refuses an unavailable handle
//! before any decoding work, runs the preprocessing chain, performs one
//! forward pass, and maps the winning score index back to the class table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classes;
use crate::error::{Error, Result};
use crate::inference::preprocess;
use crate::model::ClassifierHandle;
use crate::NUM_CLASSES;

/// Result of a single prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Plant component of the winning label (e.g., "Potato")
    pub plant_name: String,

    /// Disease component of the winning label (e.g., "Barly blight")
    pub disease_name: String,

    /// Confidence for the winning class, scaled to 0..=100
    pub confidence_percent: f32,

    /// Winning index into the class table
    pub class_index: usize,

    /// Full compound label (e.g., "Potato-Barly blight")
    pub label: String,
}

/// Run the classifier on raw uploaded image bytes.
pub fn predict(handle: &ClassifierHandle, raw: &[u8]) -> Result<PredictionResult> {
    // Refuse before touching the image: an unavailable model must never be
    // reported as a decode problem.
    let classifier = match handle {
        ClassifierHandle::Ready(classifier) => classifier,
        ClassifierHandle::Unavailable(message) => {
            return Err(Error::ModelUnavailable(message.clone()))
        }
    };

    let input = preprocess::image_to_tensor(raw)?;
    let scores = classifier.forward(&input)?;

    if scores.len() != NUM_CLASSES {
        return Err(Error::Shape(format!(
            "classifier returned {} scores, expected {}",
            scores.len(),
            NUM_CLASSES
        )));
    }

    let (winner, score) = argmax(&scores);
    debug!(?scores, winner, "forward pass complete");

    let label = classes::class_name(winner)
        .ok_or_else(|| Error::Shape(format!("class index {winner} out of range")))?;
    let (plant_name, disease_name) = classes::split_label(label)
        .ok_or_else(|| Error::Shape(format!("label '{label}' has no separator")))?;

    Ok(PredictionResult {
        plant_name: plant_name.to_string(),
        disease_name: disease_name.to_string(),
        confidence_percent: score * 100.0,
        class_index: winner,
        label: label.to_string(),
    })
}

/// Index and value of the largest score. Exact ties resolve to the lowest
/// index, so the comparison is strictly-greater.
fn argmax(scores: &[f32]) -> (usize, f32) {
    let mut winner = 0;
    let mut best = scores[0];
    for (index, &score) in scores.iter().enumerate().skip(1) {
        if score > best {
            winner = index;
            best = score;
        }
    }
    (winner, best)
}
