//! Free-text search predicate.
//!
//! Each record type exposes one search haystack: its searchable fields
//! joined with spaces. Matching is a plain case-insensitive substring
//! test over that haystack, so partial words count and terms may even
//! span adjacent fields. An empty term matches everything.

use crate::model::{ForumPost, Resource, Tutor};

/// Records that participate in free-text search.
pub trait Searchable {
    /// The record's searchable fields joined with single spaces, in
    /// their defined order.
    fn search_text(&self) -> String;
}

/// Case-insensitive substring test of `term` against the record's
/// search haystack.
pub fn matches_term<T: Searchable>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record
        .search_text()
        .to_lowercase()
        .contains(&term.to_lowercase())
}

impl Searchable for Resource {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.title,
            self.description,
            self.subject,
            self.career,
            self.university_code,
            self.university_name,
            self.tags.join(" ")
        )
    }
}

impl Searchable for Tutor {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.full_name,
            self.bio,
            self.specialty,
            self.subjects.join(" ")
        )
    }
}

impl Searchable for ForumPost {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title,
            self.content,
            self.author_name,
            self.tags.join(" "),
            self.subject.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Resource;

    fn resource(title: &str, description: &str, tags: &[&str]) -> Resource {
        let json = format!(
            r#"{{"id":1,"titulo":{:?},"descripcion":{:?},"tipo":"PDF","universidadSigla":"UTP","universidadNombre":"Universidad Tecnológica del Perú","carrera":"Ingeniería de Sistemas","materia":"Cálculo I","autor":"a","fecha":"2026-01-01","rating":80,"descargas":0,"likes":0,"tags":{}}}"#,
            title,
            description,
            serde_json::to_string(&tags).unwrap()
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let r = resource("Guía", "desc", &[]);
        assert!(matches_term(&r, ""));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let r = resource("Guía de CÁLCULO", "derivadas", &[]);
        assert!(matches_term(&r, "cálculo"));
        assert!(matches_term(&r, "CÁLCULO"));
        assert!(matches_term(&r, "DeRiVaDaS"));
    }

    #[test]
    fn test_partial_word_matches() {
        let r = resource("Integrales impropias", "", &[]);
        assert!(matches_term(&r, "integr"));
        assert!(matches_term(&r, "propias"));
    }

    #[test]
    fn test_search_covers_tags_and_university_name() {
        let r = resource("t", "d", &["parcial", "limites"]);
        assert!(matches_term(&r, "limites"));
        assert!(matches_term(&r, "tecnológica"));
        assert!(!matches_term(&r, "anatomia"));
    }

    #[test]
    fn test_post_search_includes_optional_subject() {
        use crate::model::ForumPost;
        let with_subject: ForumPost = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"c","authorId":1,"authorName":"Rosa","universidadSigla":"UTP","carrera":"g","categoryId":1,"materia":"Anatomía","date":"2026-05-02T18:00:00Z"}"#,
        )
        .unwrap();
        assert!(matches_term(&with_subject, "anatomía"));
        assert!(matches_term(&with_subject, "rosa"));

        let without: ForumPost = serde_json::from_str(
            r#"{"id":2,"title":"t","content":"c","authorId":1,"authorName":"Rosa","universidadSigla":"UTP","carrera":"g","categoryId":1,"date":"2026-05-02T18:00:00Z"}"#,
        )
        .unwrap();
        assert!(!matches_term(&without, "anatomía"));
    }
}
