//! Fixed class label table for the classifier artifact.
//!
//! The table is defined once at process start and never modified. Index `i`
//! of the classifier's score vector corresponds to `CLASS_NAMES[i]`; a
//! mismatch here silently mislabels every prediction, so the ordering is
//! pinned by tests.

/// Total number of classes the artifact predicts
pub const NUM_CLASSES: usize = 3;

/// Class names in artifact output order (case-sensitive).
/// Format: "Plant-Disease". Spelling matches the artifact's label set
/// exactly, including "Barly blight".
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "Tomato-Bacterial_spot", // 0
    "Potato-Barly blight",   // 1
    "Corn-Common_rust",      // 2
];

/// Get the class name for a given label index
pub fn class_name(label: usize) -> Option<&'static str> {
    CLASS_NAMES.get(label).copied()
}

/// Get the label index for a given class name
pub fn class_index(name: &str) -> Option<usize> {
    CLASS_NAMES.iter().position(|&n| n == name)
}

/// Split a compound label into its plant and disease components.
/// Splits on the first `-` only; disease names may contain spaces.
pub fn split_label(label: &str) -> Option<(&str, &str)> {
    label.split_once('-')
}

/// Get the plant name from a class (e.g., "Potato" from "Potato-Barly blight")
pub fn plant_name(label: usize) -> Option<&'static str> {
    class_name(label).and_then(|name| split_label(name).map(|(plant, _)| plant))
}

/// Get the disease name from a class (e.g., "Barly blight")
pub fn disease_name(label: usize) -> Option<&'static str> {
    class_name(label).and_then(|name| split_label(name).map(|(_, disease)| disease))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(0), Some("Tomato-Bacterial_spot"));
        assert_eq!(class_name(2), Some("Corn-Common_rust"));
        assert_eq!(class_name(3), None);
    }

    #[test]
    fn test_class_index() {
        assert_eq!(class_index("Potato-Barly blight"), Some(1));
        assert_eq!(class_index("Unknown-class"), None);
    }

    #[test]
    fn test_plant_and_disease_names() {
        assert_eq!(plant_name(0), Some("Tomato"));
        assert_eq!(disease_name(0), Some("Bacterial_spot"));
        assert_eq!(plant_name(1), Some("Potato"));
        assert_eq!(disease_name(1), Some("Barly blight"));
        assert_eq!(plant_name(2), Some("Corn"));
        assert_eq!(disease_name(2), Some("Common_rust"));
    }

    #[test]
    fn test_label_round_trip() {
        // plant + "-" + disease must reproduce the label exactly for every class
        for label in CLASS_NAMES {
            let (plant, disease) = split_label(label).expect("label has a separator");
            assert_eq!(format!("{}-{}", plant, disease), label);
        }
    }

    #[test]
    fn test_table_size_matches_num_classes() {
        assert_eq!(CLASS_NAMES.len(), NUM_CLASSES);
    }
}
