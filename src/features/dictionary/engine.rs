use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::data::models::{
    CategoryCounts, DictionaryEntry, DictionaryFilter, DictionaryPage, DictionaryStatistics,
    DifficultyHistogram, GrammaticalCategory, LanguageScope, Pagination, SortDirection, SortKey,
};
use crate::utils::{page_bounds, total_pages};

const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
const UNSPECIFIED_AREA: &str = "sin-especificar";

/// Read-only query engine over the loaded dictionary snapshot.
///
/// Cloning is cheap: all clones share the same entries.
#[derive(Debug, Clone)]
pub struct DictionaryEngine {
    entries: Arc<[DictionaryEntry]>,
}

impl DictionaryEngine {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn all(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Search, filter, sort and paginate, in that order.
    pub fn query(&self, filter: &DictionaryFilter) -> DictionaryPage {
        let mut results: Vec<&DictionaryEntry> = self.entries.iter().collect();

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            results.retain(|e| matches_search(e, &term, filter.language));
        }

        if let Some(category) = filter.category {
            results.retain(|e| e.category == category);
        }

        if let Some(area) = filter.topic_area.as_deref().filter(|a| !a.is_empty()) {
            results.retain(|e| e.topic_area == area);
        }

        // Level 0 is not a level; it counts as "no filter".
        if let Some(level) = filter.difficulty.filter(|l| *l != 0) {
            results.retain(|e| e.difficulty == level);
        }

        results.sort_by(|a, b| {
            let ordering = compare_by(a, b, filter.sort_by);
            match filter.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let page = if filter.page == 0 { 1 } else { filter.page };
        let page_size = if filter.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            filter.page_size
        };

        let total = results.len();
        let total_pages = total_pages(total, page_size);
        let (start, end) = page_bounds(total, page, page_size);

        DictionaryPage {
            entries: results[start..end].iter().map(|e| (*e).clone()).collect(),
            pagination: Pagination {
                page,
                total_pages,
                total,
                page_size,
                has_next: page < total_pages,
                has_previous: page > 1,
            },
            applied_filter: filter.clone(),
        }
    }

    /// Case-insensitive exact headword lookup. Every matching entry is returned.
    pub fn lookup_word(&self, word: &str, scope: Option<LanguageScope>) -> Vec<DictionaryEntry> {
        let wanted = word.trim().to_lowercase();

        self.entries
            .iter()
            .filter(|e| match scope {
                Some(LanguageScope::Spanish) => e.spanish.to_lowercase() == wanted,
                Some(LanguageScope::Triqui) => e.triqui.to_lowercase() == wanted,
                Some(LanguageScope::Both) | None => {
                    e.spanish.to_lowercase() == wanted || e.triqui.to_lowercase() == wanted
                }
            })
            .cloned()
            .collect()
    }

    /// Headwords in either language starting with `term`, in dataset order.
    pub fn suggest(&self, term: &str, limit: usize) -> Vec<String> {
        let prefix = term.to_lowercase();
        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        for entry in self.entries.iter() {
            for word in [&entry.spanish, &entry.triqui] {
                if suggestions.len() >= limit {
                    return suggestions;
                }
                if word.to_lowercase().starts_with(&prefix) && seen.insert(word.as_str()) {
                    suggestions.push(word.clone());
                }
            }
        }

        suggestions.truncate(limit);
        suggestions
    }

    pub fn categories(&self) -> &'static [GrammaticalCategory] {
        &GrammaticalCategory::ALL
    }

    /// Distinct topic areas in order of first appearance
    pub fn topic_areas(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.topic_area.as_str())
            .filter(|area| !area.is_empty() && seen.insert(*area))
            .map(String::from)
            .collect()
    }

    pub fn statistics(&self) -> DictionaryStatistics {
        let mut by_category = CategoryCounts::default();
        let mut by_area: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_difficulty = DifficultyHistogram::default();

        for entry in self.entries.iter() {
            by_category.add(entry.category);

            let area = if entry.topic_area.is_empty() {
                UNSPECIFIED_AREA
            } else {
                entry.topic_area.as_str()
            };
            *by_area.entry(area.to_string()).or_insert(0) += 1;

            match entry.difficulty {
                1 => by_difficulty.basic += 1,
                2 => by_difficulty.intermediate += 1,
                3 => by_difficulty.advanced += 1,
                _ => {}
            }
        }

        DictionaryStatistics {
            total: self.entries.len(),
            by_category,
            by_area,
            by_difficulty,
        }
    }
}

fn matches_search(entry: &DictionaryEntry, term: &str, scope: LanguageScope) -> bool {
    let spanish = entry.spanish.to_lowercase().contains(term);
    let triqui = entry.triqui.to_lowercase().contains(term);
    let definition = entry.definition.to_lowercase().contains(term);

    match scope {
        LanguageScope::Spanish => spanish || definition,
        LanguageScope::Triqui => triqui,
        LanguageScope::Both => spanish || triqui || definition,
    }
}

fn compare_by(a: &DictionaryEntry, b: &DictionaryEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Spanish => a.spanish.to_lowercase().cmp(&b.spanish.to_lowercase()),
        SortKey::Triqui => a.triqui.to_lowercase().cmp(&b.triqui.to_lowercase()),
        SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
        SortKey::Difficulty => a.difficulty.cmp(&b.difficulty),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}
