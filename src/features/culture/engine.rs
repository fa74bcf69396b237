use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data::models::{
    CulturalInfoEntry, CulturalType, CultureFilter, CulturePage, TypeCount, TypeDisplay,
};
use crate::utils::{format_label, page_bounds, total_pages};

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// Colors handed out to cultural types by position in the sorted type list
pub const TYPE_PALETTE: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#FFE66D", "#A8E6CF", "#FF8B94", "#D4A4EB", "#95E1D3", "#F8E8A6",
    "#C7CEEA", "#FFAAA5", "#FFA726", "#66BB6A", "#42A5F5", "#AB47BC", "#FF7043",
];

#[derive(Debug, Clone)]
pub struct CultureEngine {
    entries: Arc<[CulturalInfoEntry]>,
}

impl CultureEngine {
    pub fn new(entries: Vec<CulturalInfoEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn all(&self) -> &[CulturalInfoEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&CulturalInfoEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Type filter, then free-text search, then pagination. No sorting:
    /// results keep load order.
    pub fn query(&self, filter: &CultureFilter) -> CulturePage {
        let mut results: Vec<&CulturalInfoEntry> = self.entries.iter().collect();

        if let Some(kind) = filter.kind {
            results.retain(|e| e.kind == kind);
        }

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            results.retain(|e| matches_search(e, &term));
        }

        let page = filter.page.unwrap_or(1).max(1).min(u32::MAX as i64) as u32;
        let page_size = filter
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE) as u32;

        let total = results.len();
        let (start, end) = page_bounds(total, page, page_size);

        CulturePage {
            entries: results[start..end].iter().map(|e| (*e).clone()).collect(),
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }

    /// Distinct types present in the data, sorted by their wire name
    pub fn types(&self) -> Vec<CulturalType> {
        let mut types: Vec<CulturalType> = Vec::new();
        for entry in self.entries.iter() {
            if !types.contains(&entry.kind) {
                types.push(entry.kind);
            }
        }
        types.sort_by_key(|t| t.as_str());
        types
    }

    /// Label and color per present type. Recomputed on every call; colors
    /// follow the position of the type in [`CultureEngine::types`].
    pub fn type_display_config(&self) -> BTreeMap<String, TypeDisplay> {
        self.types()
            .into_iter()
            .enumerate()
            .map(|(index, kind)| {
                let display = TypeDisplay {
                    label: format_label(kind.as_str()),
                    color: TYPE_PALETTE[index % TYPE_PALETTE.len()].to_string(),
                };
                (kind.as_str().to_string(), display)
            })
            .collect()
    }

    /// Entries per type, in order of first appearance
    pub fn type_counts(&self) -> Vec<TypeCount> {
        let mut counts: Vec<TypeCount> = Vec::new();
        for entry in self.entries.iter() {
            match counts.iter_mut().find(|c| c.kind == entry.kind) {
                Some(count) => count.count += 1,
                None => counts.push(TypeCount {
                    kind: entry.kind,
                    count: 1,
                }),
            }
        }
        counts
    }
}

fn matches_search(entry: &CulturalInfoEntry, term: &str) -> bool {
    entry.title.to_lowercase().contains(term)
        || entry.description.to_lowercase().contains(term)
        || entry.keywords.iter().any(|k| k.to_lowercase().contains(term))
        || entry.region.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::dates::parse_date;

    fn record(id: u32, title: &str, kind: CulturalType, keywords: &[&str], region: &str) -> CulturalInfoEntry {
        CulturalInfoEntry {
            id,
            title: title.to_string(),
            description: format!("Descripción de {}", title.to_lowercase()),
            kind,
            image: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            region: region.to_string(),
            created_at: parse_date("2024-01-01").unwrap(),
        }
    }

    fn engine() -> CultureEngine {
        use crate::data::models::CulturalType::*;
        CultureEngine::new(vec![
            record(1, "Historia del Pueblo", History, &["origen"], "Oaxaca, México"),
            record(2, "Huipil", Attire, &["textil", "Tejido"], "San Andrés Chicahuaxtla"),
            record(3, "Ceremonia de Siembra", Traditions, &["rituales"], "Sierra de Oaxaca"),
            record(4, "Danza", Music, &["fiesta"], "Copala"),
            record(5, "Mercado", Traditions, &["comercio"], "Putla"),
        ])
    }

    fn ids(page: &CulturePage) -> Vec<u32> {
        page.entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn defaults_keep_load_order() {
        let page = engine().query(&CultureFilter::default());
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn search_covers_title_description_keywords_and_region() {
        let dict = engine();
        let search = |term: &str| {
            ids(&dict.query(&CultureFilter {
                search: Some(term.to_string()),
                ..Default::default()
            }))
        };
        assert_eq!(search("HUIPIL"), vec![2]);
        assert_eq!(search("descripción de danza"), vec![4]);
        assert_eq!(search("tejido"), vec![2]);
        assert_eq!(search("oaxaca"), vec![1, 3]);
        assert!(search("nada").is_empty());
    }

    #[test]
    fn only_empty_search_is_ignored() {
        let dict = engine();
        let search = |term: &str| {
            dict.query(&CultureFilter {
                search: Some(term.to_string()),
                ..Default::default()
            })
            .total
        };
        assert_eq!(search(""), 5);
        assert_eq!(search("   "), 0);
    }

    #[test]
    fn type_filter_applies_before_search() {
        let filter = CultureFilter {
            kind: Some(CulturalType::Traditions),
            search: Some("oaxaca".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&engine().query(&filter)), vec![3]);
    }

    #[test]
    fn paging_values_are_clamped() {
        let dict = engine();
        let page = dict.query(&CultureFilter {
            page: Some(-4),
            page_size: Some(0),
            ..Default::default()
        });
        assert_eq!((page.page, page.page_size), (1, 1));
        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.total_pages, 5);

        let page = dict.query(&CultureFilter {
            page: Some(2),
            page_size: Some(500),
            ..Default::default()
        });
        assert_eq!(page.page_size, 100);
        assert!(page.entries.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn types_are_distinct_and_sorted() {
        use crate::data::models::CulturalType::*;
        assert_eq!(engine().types(), vec![History, Music, Traditions, Attire]);
    }

    #[test]
    fn display_config_is_deterministic() {
        let dict = engine();
        let first = dict.type_display_config();
        assert_eq!(first, dict.type_display_config());

        assert_eq!(first["historia"].label, "Historia");
        assert_eq!(first["historia"].color, TYPE_PALETTE[0]);
        assert_eq!(first["musica"].color, TYPE_PALETTE[1]);
        assert_eq!(first["tradiciones"].color, TYPE_PALETTE[2]);
        assert_eq!(first["vestimenta"].color, TYPE_PALETTE[3]);

        let keys: Vec<&str> = first.keys().map(String::as_str).collect();
        let sorted: Vec<&str> = dict.types().iter().map(|t| t.as_str()).collect();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn palette_wraps_after_fifteen_types() {
        use crate::data::models::CulturalType::*;
        let all = [
            History, Traditions, Festivals, Crafts, Cuisine, Attire, Music, Location, Population,
            Language, Religion,
        ];
        let dict = CultureEngine::new(
            all.iter()
                .enumerate()
                .map(|(i, kind)| record(i as u32 + 1, "x", *kind, &[], "r"))
                .collect(),
        );
        let config = dict.type_display_config();
        assert_eq!(config.len(), 11);
        // artesanias sorts first
        assert_eq!(config["artesanias"].color, TYPE_PALETTE[0]);
        assert_eq!(config["vestimenta"].color, TYPE_PALETTE[10]);
    }

    #[test]
    fn counts_follow_first_appearance() {
        use crate::data::models::CulturalType::*;
        let counts = engine().type_counts();
        assert_eq!(
            counts,
            vec![
                TypeCount { kind: History, count: 1 },
                TypeCount { kind: Attire, count: 1 },
                TypeCount { kind: Traditions, count: 2 },
                TypeCount { kind: Music, count: 1 },
            ]
        );
    }

    #[test]
    fn lookup_by_id() {
        let dict = engine();
        assert_eq!(dict.get(4).map(|e| e.title.as_str()), Some("Danza"));
        assert!(dict.get(40).is_none());
        assert_eq!(dict.all().len(), 5);
    }
}
