//! # Bundled Dataset
//!
//! All domain data ships inside the binary as a single JSON document,
//! parsed once on first access. The dataset is read-only; callers that
//! need runtime mutation (forum posts, uploads) clone the collections
//! they own into the API layer.
//!
//! Top-level keys follow the fixed external schema: `recursos`,
//! `tutores`, `foro_posts`, `categorias_foro`, plus the three lookup
//! lists (`universidades`, `carreras`, `materias`) used only to build
//! filter option lists.

use crate::error::Result;
use crate::model::{Category, ForumPost, Resource, Tutor, University};
use once_cell::sync::OnceCell;
use serde::Deserialize;

const SEED_JSON: &str = include_str!("../data/seed.json");

static BUNDLED: OnceCell<Dataset> = OnceCell::new();

/// The full read-only data source.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    #[serde(rename = "recursos")]
    pub resources: Vec<Resource>,
    #[serde(rename = "tutores")]
    pub tutors: Vec<Tutor>,
    #[serde(rename = "foro_posts")]
    pub posts: Vec<ForumPost>,
    #[serde(rename = "categorias_foro")]
    pub categories: Vec<Category>,
    #[serde(rename = "universidades")]
    pub universities: Vec<University>,
    #[serde(rename = "carreras")]
    pub careers: Vec<String>,
    #[serde(rename = "materias")]
    pub subjects: Vec<String>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The dataset compiled into the binary, parsed on first use.
    pub fn bundled() -> Result<&'static Dataset> {
        BUNDLED.get_or_try_init(|| Dataset::from_json(SEED_JSON))
    }

    /// Subjects offered by at least one tutor, deduplicated and sorted.
    /// Tutor filter options come from the records themselves, not from
    /// the `materias` lookup, so the dropdown never offers a subject
    /// with zero tutors.
    pub fn tutor_subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = self
            .tutors
            .iter()
            .flat_map(|t| t.subjects.iter().cloned())
            .collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }

    /// Universities with at least one tutor, deduplicated and sorted.
    pub fn tutor_universities(&self) -> Vec<String> {
        let mut unis: Vec<String> = self.tutors.iter().map(|t| t.university.clone()).collect();
        unis.sort();
        unis.dedup();
        unis
    }

    /// Resolve a category by id.
    pub fn category(&self, id: u64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_parses() {
        let data = Dataset::bundled().unwrap();
        assert!(!data.resources.is_empty());
        assert!(!data.tutors.is_empty());
        assert!(!data.posts.is_empty());
        assert!(!data.categories.is_empty());
    }

    #[test]
    fn test_bundled_dataset_invariants() {
        let data = Dataset::bundled().unwrap();

        let mut ids: Vec<u64> = data.resources.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), data.resources.len(), "resource ids must be unique");

        for t in &data.tutors {
            assert!(!t.subjects.is_empty(), "tutor {} has no subjects", t.id);
            assert!(
                (0.0..=5.0).contains(&t.rating),
                "tutor {} rating out of range",
                t.id
            );
        }

        for p in &data.posts {
            assert!(
                data.category(p.category_id).is_some(),
                "post {} references unknown category {}",
                p.id,
                p.category_id
            );
        }
    }

    #[test]
    fn test_tutor_subjects_are_unique_and_sorted() {
        let data = Dataset::bundled().unwrap();
        let subjects = data.tutor_subjects();
        let mut expected = subjects.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(subjects, expected);
        assert!(subjects.contains(&"Cálculo I".to_string()));
    }

    #[test]
    fn test_tutor_universities_deduplicated() {
        let data = Dataset::bundled().unwrap();
        let unis = data.tutor_universities();
        // PUCP has two tutors in the seed but must appear once.
        assert_eq!(unis.iter().filter(|u| u.as_str() == "PUCP").count(), 1);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Dataset::from_json("{\"recursos\": 3}").is_err());
    }
}
