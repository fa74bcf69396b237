use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::models::{CulturalInfoEntry, DictionaryEntry};
use crate::data::samples;
use crate::error::LoadError;

/// Loads the dictionary dataset, substituting the built-in sample on any failure.
pub fn load_dictionary(path: &Path) -> Vec<DictionaryEntry> {
    match read_dictionary(path) {
        Ok(entries) => {
            log::info!("Dictionary loaded with {} entries from {}", entries.len(), path.display());
            entries
        }
        Err(e) => {
            log::error!("Failed to load dictionary data from {}: {}", path.display(), e);
            log::warn!("Serving built-in sample dictionary");
            samples::dictionary()
        }
    }
}

/// Loads the cultural dataset, substituting the built-in sample on any failure.
pub fn load_cultural_info(path: &Path) -> Vec<CulturalInfoEntry> {
    match read_cultural_info(path) {
        Ok(entries) => {
            log::info!("Cultural info loaded with {} records from {}", entries.len(), path.display());
            entries
        }
        Err(e) => {
            log::error!("Failed to load cultural data from {}: {}", path.display(), e);
            log::warn!("Serving built-in sample cultural info");
            samples::cultural_info()
        }
    }
}

pub fn read_dictionary(path: &Path) -> Result<Vec<DictionaryEntry>, LoadError> {
    let entries: Vec<DictionaryEntry> = read_json(path)?;
    ensure_unique_ids(entries.iter().map(|e| e.id))?;

    for entry in &entries {
        if !(1..=3).contains(&entry.difficulty) {
            return Err(LoadError::Invalid(format!(
                "entry {} has difficulty {}, expected 1-3",
                entry.id, entry.difficulty
            )));
        }
        if entry.topic_area.trim().is_empty() {
            return Err(LoadError::Invalid(format!("entry {} has an empty topic area", entry.id)));
        }
    }

    Ok(entries)
}

pub fn read_cultural_info(path: &Path) -> Result<Vec<CulturalInfoEntry>, LoadError> {
    let entries: Vec<CulturalInfoEntry> = read_json(path)?;
    ensure_unique_ids(entries.iter().map(|e| e.id))?;
    Ok(entries)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn ensure_unique_ids(ids: impl Iterator<Item = u32>) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(LoadError::Invalid(format!("duplicate id {}", id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::CulturalType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const TWO_ENTRIES: &str = r#"[
        {"id": 1, "palabraEspanol": "uno", "palabraTriqui": "go'", "categoria": "numeral",
         "areaTematica": "numeros", "definicion": "El primer número", "nivelDificultad": 1,
         "fechaCreacion": "2024-01-01"},
        {"id": 2, "palabraEspanol": "madre", "palabraTriqui": "ni'", "categoria": "sustantivo",
         "areaTematica": "parentesco", "definicion": "Mujer que ha tenido hijos", "nivelDificultad": 2,
         "fechaCreacion": "2024-02-10T12:30:00.000Z", "variantesDialectales": ["ni'i"]}
    ]"#;

    #[test]
    fn reads_valid_dictionary() {
        let file = write_temp(TWO_ENTRIES);
        let entries = read_dictionary(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].triqui, "ni'");
        assert_eq!(entries[1].dialect_variants.as_deref(), Some(&["ni'i".to_string()][..]));
        assert!(entries[0].pronunciation.is_none());
    }

    #[test]
    fn missing_file_falls_back_to_sample() {
        let entries = load_dictionary(Path::new("/definitely/not/here.json"));
        assert_eq!(entries, samples::dictionary());
    }

    #[test]
    fn malformed_json_falls_back_to_sample() {
        let file = write_temp("[{ not json");
        assert!(matches!(read_dictionary(file.path()), Err(LoadError::Json(_))));
        assert_eq!(load_dictionary(file.path()), samples::dictionary());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dup = TWO_ENTRIES.replace("\"id\": 2", "\"id\": 1");
        let file = write_temp(&dup);
        assert!(matches!(read_dictionary(file.path()), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn out_of_range_difficulty_is_rejected() {
        let bad = TWO_ENTRIES.replace("\"nivelDificultad\": 2", "\"nivelDificultad\": 4");
        let file = write_temp(&bad);
        assert!(matches!(read_dictionary(file.path()), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn blank_topic_area_is_rejected() {
        let bad = TWO_ENTRIES.replace("\"parentesco\"", "\"  \"");
        let file = write_temp(&bad);
        assert!(matches!(read_dictionary(file.path()), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn unknown_cultural_type_falls_back() {
        let file = write_temp(
            r#"[{"id": 1, "titulo": "x", "descripcion": "y", "tipo": "deportes",
                 "palabrasClave": [], "region": "Oaxaca", "fechaCreacion": "2024-01-01"}]"#,
        );
        assert!(read_cultural_info(file.path()).is_err());
        let entries = load_cultural_info(file.path());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, CulturalType::History);
    }
}
