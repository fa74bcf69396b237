use chrono::{DateTime, Utc};

use crate::data::models::dates::parse_date;
use crate::data::models::{CulturalInfoEntry, CulturalType, DictionaryEntry, GrammaticalCategory};

fn day(raw: &str) -> DateTime<Utc> {
    parse_date(raw).unwrap_or_default()
}

/// Built-in dictionary served when the data file cannot be used
pub fn dictionary() -> Vec<DictionaryEntry> {
    vec![DictionaryEntry {
        id: 1,
        spanish: "agua".to_string(),
        triqui: "yaa".to_string(),
        pronunciation: Some("yaa".to_string()),
        category: GrammaticalCategory::Noun,
        topic_area: "numeros".to_string(),
        definition: "Líquido transparente, incoloro, inodoro e insípido que es esencial para la vida"
            .to_string(),
        example_spanish: Some("El agua del río está muy fría".to_string()),
        example_triqui: Some("Yaa nij si ga'a".to_string()),
        example_translation: Some("El agua del río está muy fría".to_string()),
        related_words: Some(vec!["río".to_string(), "lluvia".to_string(), "mar".to_string()]),
        notes: Some("Palabra fundamental en el vocabulario básico".to_string()),
        difficulty: 1,
        created_at: day("2024-01-01"),
        dialect_variants: Some(vec!["yaa".to_string(), "ya'a".to_string()]),
    }]
}

/// Built-in cultural records served when the data file cannot be used
pub fn cultural_info() -> Vec<CulturalInfoEntry> {
    vec![
        CulturalInfoEntry {
            id: 1,
            title: "Historia del Pueblo Triqui".to_string(),
            description: "Los triquis son un pueblo indígena de México que habita principalmente \
                en el estado de Oaxaca. Su historia se remonta a miles de años atrás, con una rica \
                tradición cultural que ha perdurado a través de los siglos."
                .to_string(),
            kind: CulturalType::History,
            image: Some("https://ejemplo.com/historia-triqui.jpg".to_string()),
            keywords: ["historia", "origen", "ancestros", "Oaxaca", "pueblo indígena"]
                .into_iter()
                .map(String::from)
                .collect(),
            region: "Oaxaca, México".to_string(),
            created_at: day("2024-01-01"),
        },
        CulturalInfoEntry {
            id: 2,
            title: "Tradiciones Ceremoniales".to_string(),
            description: "Las ceremonias triquis incluyen rituales de siembra, cosecha y \
                celebraciones espirituales que conectan a la comunidad con la naturaleza y sus \
                ancestros."
                .to_string(),
            kind: CulturalType::Traditions,
            image: Some("https://ejemplo.com/ceremonias-triqui.jpg".to_string()),
            keywords: ["ceremonias", "rituales", "siembra", "cosecha", "espiritual"]
                .into_iter()
                .map(String::from)
                .collect(),
            region: "Sierra de Oaxaca".to_string(),
            created_at: day("2024-01-02"),
        },
    ]
}
