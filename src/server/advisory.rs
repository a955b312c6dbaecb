//! Static treatment advisories keyed on disease-name substrings.

/// Ordered lookup table; the first matching substring wins. "Barly blight"
/// must hit the "blight" entry, so order matters.
const ADVISORIES: [(&str, &str); 3] = [
    (
        "Bacterial_spot",
        "Remove infected leaves and apply copper-based fungicides. \
         Ensure proper plant spacing for air circulation.",
    ),
    (
        "blight",
        "Apply fungicides containing chlorothalonil or mancozeb. \
         Remove and destroy infected plant debris.",
    ),
    (
        "rust",
        "Apply fungicides and ensure proper plant nutrition. \
         Remove infected plant parts.",
    ),
];

/// Treatment tip for a disease name, if any entry's substring matches.
pub fn advisory_for(disease_name: &str) -> Option<&'static str> {
    ADVISORIES
        .iter()
        .find(|(needle, _)| disease_name.contains(needle))
        .map(|&(_, tip)| tip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_known_disease_has_a_tip() {
        assert!(advisory_for("Bacterial_spot").unwrap().contains("copper-based"));
        assert!(advisory_for("Barly blight").unwrap().contains("chlorothalonil"));
        assert!(advisory_for("Common_rust").unwrap().contains("plant nutrition"));
    }

    #[test]
    fn test_unknown_disease_has_no_tip() {
        assert_eq!(advisory_for("healthy"), None);
        assert_eq!(advisory_for(""), None);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        // A name matching two entries resolves to the earlier one
        let tip = advisory_for("Bacterial_spot blight").unwrap();
        assert!(tip.contains("copper-based"));
    }
}
