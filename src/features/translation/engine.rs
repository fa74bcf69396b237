use chrono::Utc;

use crate::data::models::{
    DictionaryEntry, GrammaticalCategory, TranslationDirection, TranslationResult,
    TranslationStatistics,
};
use crate::features::dictionary::DictionaryEngine;

pub const UNAVAILABLE: &str = "Traducción no disponible";

const EXACT_NOTE: &str = "Traducción exacta encontrada en diccionario";
const PARTIAL_NOTE: &str = "Traducción aproximada basada en coincidencias parciales";
const COMPOSED_NOTE: &str = "Traducción compuesta palabra por palabra";
const MISSING_NOTE: &str = "No se encontró traducción en el diccionario";

/// How a translation was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    Exact,
    Partial,
    Composed,
    Missing,
}

impl MatchKind {
    fn confidence(self) -> u8 {
        match self {
            MatchKind::Exact => 100,
            MatchKind::Partial => 70,
            MatchKind::Composed => 50,
            MatchKind::Missing => 0,
        }
    }

    fn note(self) -> &'static str {
        match self {
            MatchKind::Exact => EXACT_NOTE,
            MatchKind::Partial => PARTIAL_NOTE,
            MatchKind::Composed => COMPOSED_NOTE,
            MatchKind::Missing => MISSING_NOTE,
        }
    }
}

/// Dictionary-backed word substitution in either direction
#[derive(Debug, Clone)]
pub struct TranslationEngine {
    dictionary: DictionaryEngine,
}

impl TranslationEngine {
    pub fn new(dictionary: DictionaryEngine) -> Self {
        Self { dictionary }
    }

    /// Exact headword, then substring, then word-by-word; first non-empty wins.
    pub fn translate(&self, text: &str, direction: TranslationDirection) -> TranslationResult {
        let normalized = text.trim().to_lowercase();
        let (kind, mut candidates) = self.candidates(&normalized, direction);

        if candidates.is_empty() {
            candidates.push(UNAVAILABLE.to_string());
        }
        let translated = candidates.remove(0);

        TranslationResult {
            original: text.to_string(),
            translated,
            direction,
            confidence: kind.confidence(),
            alternatives: candidates,
            notes: kind.note().to_string(),
        }
    }

    pub fn statistics(&self) -> TranslationStatistics {
        let entries = self.dictionary.all();

        let mut categories: Vec<GrammaticalCategory> = Vec::new();
        for entry in entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }

        TranslationStatistics {
            total_words: entries.len(),
            topic_areas: self.dictionary.topic_areas(),
            categories,
            timestamp: Utc::now(),
        }
    }

    fn candidates(&self, normalized: &str, direction: TranslationDirection) -> (MatchKind, Vec<String>) {
        let entries = self.dictionary.all();

        let exact: Vec<String> = entries
            .iter()
            .filter(|e| source(e, direction).to_lowercase() == normalized)
            .map(|e| target(e, direction).to_string())
            .collect();
        if !exact.is_empty() {
            return (MatchKind::Exact, exact);
        }

        let partial: Vec<String> = entries
            .iter()
            .filter(|e| {
                source(e, direction).to_lowercase().contains(normalized)
                    || (direction == TranslationDirection::SpanishToTriqui
                        && e.definition.to_lowercase().contains(normalized))
            })
            .map(|e| target(e, direction).to_string())
            .collect();
        if !partial.is_empty() {
            return (MatchKind::Partial, partial);
        }

        match self.compose(normalized, direction) {
            Some(composed) => (MatchKind::Composed, vec![composed]),
            None => (MatchKind::Missing, Vec::new()),
        }
    }

    /// Unknown tokens are kept in brackets. `None` unless at least one token
    /// was found in the dictionary.
    fn compose(&self, normalized: &str, direction: TranslationDirection) -> Option<String> {
        let entries = self.dictionary.all();
        let mut found_any = false;

        let words: Vec<String> = normalized
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let hit = entries
                    .iter()
                    .find(|e| source(e, direction).to_lowercase() == word);
                match hit {
                    Some(entry) => {
                        found_any = true;
                        target(entry, direction).to_string()
                    }
                    None => format!("[{}]", word),
                }
            })
            .collect();

        found_any.then(|| words.join(" "))
    }
}

fn source(entry: &DictionaryEntry, direction: TranslationDirection) -> &str {
    match direction {
        TranslationDirection::SpanishToTriqui => &entry.spanish,
        TranslationDirection::TriquiToSpanish => &entry.triqui,
    }
}

fn target(entry: &DictionaryEntry, direction: TranslationDirection) -> &str {
    match direction {
        TranslationDirection::SpanishToTriqui => &entry.triqui,
        TranslationDirection::TriquiToSpanish => &entry.spanish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples;
    use crate::data::models::TranslationDirection::*;

    fn engine() -> TranslationEngine {
        TranslationEngine::new(DictionaryEngine::new(samples::dictionary()))
    }

    fn with_entries(pairs: &[(&str, &str)]) -> TranslationEngine {
        let template = samples::dictionary().remove(0);
        let entries = pairs
            .iter()
            .enumerate()
            .map(|(i, (es, tr))| DictionaryEntry {
                id: i as u32 + 1,
                spanish: es.to_string(),
                triqui: tr.to_string(),
                definition: format!("significa {}", es),
                ..template.clone()
            })
            .collect();
        TranslationEngine::new(DictionaryEngine::new(entries))
    }

    #[test]
    fn exact_match_has_full_confidence() {
        let result = engine().translate("agua", SpanishToTriqui);
        assert_eq!(result.translated, "yaa");
        assert_eq!(result.confidence, 100);
        assert!(result.alternatives.is_empty());
        assert_eq!(result.notes, EXACT_NOTE);
    }

    #[test]
    fn input_is_normalized_but_echoed_verbatim() {
        let result = engine().translate("  AGUA ", SpanishToTriqui);
        assert_eq!(result.translated, "yaa");
        assert_eq!(result.original, "  AGUA ");
    }

    #[test]
    fn reverse_direction() {
        let result = engine().translate("yaa", TriquiToSpanish);
        assert_eq!(result.translated, "agua");
        assert_eq!(result.confidence, 100);
        assert_eq!(result.direction, TriquiToSpanish);
    }

    #[test]
    fn duplicates_become_alternatives() {
        let result = with_entries(&[("agua", "yaa"), ("agua", "ya'a")]).translate("agua", SpanishToTriqui);
        assert_eq!(result.translated, "yaa");
        assert_eq!(result.alternatives, vec!["ya'a"]);
    }

    #[test]
    fn substring_match_has_partial_confidence() {
        let result = engine().translate("agu", SpanishToTriqui);
        assert_eq!(result.translated, "yaa");
        assert_eq!(result.confidence, 70);
        assert_eq!(result.notes, PARTIAL_NOTE);
    }

    #[test]
    fn definition_only_counts_from_spanish() {
        let dict = engine();
        assert_eq!(dict.translate("transparente", SpanishToTriqui).confidence, 70);
        assert_eq!(dict.translate("transparente", TriquiToSpanish).confidence, 0);
    }

    #[test]
    fn phrases_are_composed_word_by_word() {
        let result = engine().translate("agua rio", SpanishToTriqui);
        assert_eq!(result.translated, "yaa [rio]");
        assert_eq!(result.confidence, 50);
        assert_eq!(result.notes, COMPOSED_NOTE);
    }

    #[test]
    fn repeated_spaces_are_skipped_when_composing() {
        let result = with_entries(&[("agua", "yaa"), ("fría", "xna")]).translate("agua   fría  hoy", SpanishToTriqui);
        assert_eq!(result.translated, "yaa xna [hoy]");
    }

    #[test]
    fn unknown_text_is_not_available() {
        let result = engine().translate("xyzzynotaword", SpanishToTriqui);
        assert_eq!(result.translated, UNAVAILABLE);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.notes, MISSING_NOTE);

        let phrase = engine().translate("foo bar", SpanishToTriqui);
        assert_eq!(phrase.translated, UNAVAILABLE);
        assert_eq!(phrase.confidence, 0);
    }

    #[test]
    fn blank_input_matches_every_entry_partially() {
        let result = with_entries(&[("agua", "yaa"), ("uno", "go'")]).translate("   ", SpanishToTriqui);
        assert_eq!(result.translated, "yaa");
        assert_eq!(result.alternatives, vec!["go'"]);
        assert_eq!(result.confidence, 70);
        assert_eq!(result.notes, PARTIAL_NOTE);
        assert_eq!(result.original, "   ");
    }

    #[test]
    fn statistics_report_present_values() {
        let stats = engine().statistics();
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.topic_areas, vec!["numeros"]);
        assert_eq!(stats.categories, vec![GrammaticalCategory::Noun]);
    }
}
