use std::borrow::Cow;

/// The fixed term table: medical keyword mapped to a plain-language
/// explanation. Scanned in definition order with first-match-wins
/// semantics, so an earlier short term shadows a later longer one when
/// both appear in the same text. Table order is significant.
const TERMS: &[(&str, &str)] = &[
    (
        "diabetes",
        "Diabetes is a condition where your body has trouble using sugar for energy, leading to high blood sugar levels.",
    ),
    (
        "hypertension",
        "Hypertension means high blood pressure. It's like your heart is working too hard to pump blood through your body.",
    ),
    (
        "cholesterol",
        "Cholesterol is a fatty substance in your blood. Your body needs some, but too much can clog arteries.",
    ),
    (
        "metformin",
        "Metformin helps your body use insulin better to lower blood sugar in type 2 diabetes.",
    ),
    (
        "lisinopril",
        "Lisinopril relaxes blood vessels to help lower blood pressure and make it easier for your heart to pump blood.",
    ),
    (
        "myocardial infarction",
        "A heart attack happens when blood flow to part of the heart is blocked, damaging heart muscle.",
    ),
];

/// Confidence label attached to every explanation.
pub const CONFIDENCE: &str = "high";

/// Identifier of the knowledge source backing the lookup. No inference
/// backend is called on this path.
pub const MODEL: &str = "medical-knowledge-base";

/// Find the explanation for the first table term contained in `text`,
/// case-insensitively.
pub fn lookup(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    TERMS
        .iter()
        .find(|(term, _)| lower.contains(term))
        .map(|(_, explanation)| *explanation)
}

/// Explain `text`, falling back to a generic message that echoes the
/// original input when no term matches.
pub fn explain(text: &str) -> Cow<'static, str> {
    match lookup(text) {
        Some(explanation) => Cow::Borrowed(explanation),
        None => Cow::Owned(format!(
            "'{text}' appears to be medical terminology. In simple terms, this \
             relates to health conditions that should be discussed with your \
             healthcare provider."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("DIABETES"), lookup("diabetes"));
        assert!(lookup("DIABETES").is_some());
    }

    #[test]
    fn matches_term_inside_a_sentence() {
        let explanation = lookup("Metformin helps control blood sugar").unwrap();
        assert!(explanation.starts_with("Metformin helps your body use insulin"));
    }

    #[test]
    fn first_table_term_wins_when_several_match() {
        // "diabetes" precedes "cholesterol" in the table
        let explanation = lookup("diabetes and cholesterol").unwrap();
        assert!(explanation.starts_with("Diabetes is a condition"));
    }

    #[test]
    fn fallback_echoes_the_input_verbatim() {
        let input = "idiopathic thrombocytopenia";
        let explanation = explain(input);
        assert!(explanation.contains(input));
    }

    #[test]
    fn matched_term_does_not_fall_back() {
        let explanation = explain("hypertension");
        assert!(explanation.starts_with("Hypertension means high blood pressure"));
    }
}
