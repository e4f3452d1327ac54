//! Weather description translator
//!
//! Maps the provider's fixed English weather phrases to concise display
//! labels. Unmapped input passes through unchanged. No error conditions.

use std::collections::HashMap;

/// Fixed-table description translator
///
/// The table is injected at construction; [`DescriptionTranslator::default`]
/// carries the provider's ten common descriptions.
#[derive(Debug, Clone)]
pub struct DescriptionTranslator {
    table: HashMap<String, String>,
}

impl DescriptionTranslator {
    /// Create a translator with a custom lookup table
    #[must_use]
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// Translate a raw description; passthrough for unmapped input
    #[must_use]
    pub fn translate(&self, raw_description: &str) -> String {
        self.table
            .get(raw_description)
            .cloned()
            .unwrap_or_else(|| raw_description.to_string())
    }
}

impl Default for DescriptionTranslator {
    fn default() -> Self {
        let table = [
            ("clear sky", "Clear"),
            ("few clouds", "Few clouds"),
            ("scattered clouds", "Scattered clouds"),
            ("broken clouds", "Cloudy"),
            ("overcast clouds", "Overcast"),
            ("shower rain", "Showers"),
            ("rain", "Rain"),
            ("thunderstorm", "Storm"),
            ("snow", "Snow"),
            ("mist", "Mist"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_all_known_descriptions() {
        let translator = DescriptionTranslator::default();
        assert_eq!(translator.translate("clear sky"), "Clear");
        assert_eq!(translator.translate("few clouds"), "Few clouds");
        assert_eq!(translator.translate("scattered clouds"), "Scattered clouds");
        assert_eq!(translator.translate("broken clouds"), "Cloudy");
        assert_eq!(translator.translate("overcast clouds"), "Overcast");
        assert_eq!(translator.translate("shower rain"), "Showers");
        assert_eq!(translator.translate("rain"), "Rain");
        assert_eq!(translator.translate("thunderstorm"), "Storm");
        assert_eq!(translator.translate("snow"), "Snow");
        assert_eq!(translator.translate("mist"), "Mist");
    }

    #[test]
    fn unmapped_input_passes_through_unchanged() {
        let translator = DescriptionTranslator::default();
        assert_eq!(translator.translate("tornado"), "tornado");
        assert_eq!(translator.translate(""), "");
        assert_eq!(translator.translate("CLEAR SKY"), "CLEAR SKY");
    }

    #[test]
    fn custom_table_is_honored() {
        let table = [("rain".to_string(), "Regen".to_string())]
            .into_iter()
            .collect();
        let translator = DescriptionTranslator::new(table);
        assert_eq!(translator.translate("rain"), "Regen");
        assert_eq!(translator.translate("clear sky"), "clear sky");
    }
}
