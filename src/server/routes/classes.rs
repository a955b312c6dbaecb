//! Class table endpoint

use axum::Json;
use serde::Serialize;

use crate::classes::{self, CLASS_NAMES};

#[derive(Serialize)]
pub struct ClassInfo {
    pub index: usize,
    pub label: String,
    pub plant: String,
    pub disease: String,
}

/// GET /classes - The fixed class table, in artifact output order
pub async fn list_classes() -> Json<Vec<ClassInfo>> {
    let entries = CLASS_NAMES
        .iter()
        .enumerate()
        .map(|(index, &label)| {
            let (plant, disease) = classes::split_label(label).unwrap_or((label, ""));
            ClassInfo {
                index,
                label: label.to_string(),
                plant: plant.to_string(),
                disease: disease.to_string(),
            }
        })
        .collect();

    Json(entries)
}
