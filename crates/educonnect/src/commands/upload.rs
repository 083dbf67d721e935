//! Simulated resource upload. Validates the form, fills in the catalog
//! defaults, and returns the record that a real backend would ingest.
//! The catalog itself is read-only; nothing is inserted.

use super::CmdMessage;
use crate::error::{EduError, FieldError, Result};
use crate::model::{Resource, ResourceKind};
use chrono::Utc;
use serde::Serialize;

/// An upload as the form captures it. `kind` defaults to PDF like the
/// form's preselected option.
#[derive(Debug, Clone)]
pub struct UploadDraft {
    pub title: String,
    pub kind: ResourceKind,
    pub description: String,
    pub subject: String,
    pub university: String,
}

impl Default for UploadDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: ResourceKind::Pdf,
            description: String::new(),
            subject: String::new(),
            university: String::new(),
        }
    }
}

/// The record the upload would create, plus the user-facing messages.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceipt {
    pub resource: Resource,
    pub messages: Vec<CmdMessage>,
}

/// Validate a draft and build the resource it describes.
///
/// Defaults mirror the form: materia `General`, universidad `UTP`, autor
/// `Tú`, zeroed counters, a midpoint rating of 50, today's date. The
/// provisional id is `max(existing ids) + 1` over the current catalog.
pub fn submit(resources: &[Resource], draft: &UploadDraft) -> Result<UploadReceipt> {
    if draft.title.trim().is_empty() {
        return Err(EduError::Validation(vec![FieldError::new(
            "titulo",
            "Por favor, ingresa un título para el recurso.",
        )]));
    }

    let next_id = resources.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    let university = if draft.university.is_empty() {
        "UTP".to_string()
    } else {
        draft.university.clone()
    };
    let resource = Resource {
        id: next_id,
        title: draft.title.clone(),
        description: draft.description.clone(),
        kind: draft.kind,
        university_name: university.clone(),
        university_code: university,
        career: "General".to_string(),
        subject: if draft.subject.is_empty() {
            "General".to_string()
        } else {
            draft.subject.clone()
        },
        author: "Tú".to_string(),
        date: Utc::now().date_naive(),
        rating: 50,
        downloads: 0,
        likes: 0,
        tags: Vec::new(),
    };

    Ok(UploadReceipt {
        resource,
        messages: vec![CmdMessage::success("¡Recurso subido exitosamente!")],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn draft(title: &str) -> UploadDraft {
        UploadDraft {
            title: title.into(),
            ..UploadDraft::default()
        }
    }

    #[test]
    fn test_submit_fills_in_defaults() {
        let receipt = submit(&[], &draft("Exámenes Resueltos - Cálculo I")).unwrap();
        let r = &receipt.resource;
        assert_eq!(r.id, 1);
        assert_eq!(r.kind, ResourceKind::Pdf);
        assert_eq!(r.subject, "General");
        assert_eq!(r.university_code, "UTP");
        assert_eq!(r.author, "Tú");
        assert_eq!(r.rating, 50);
        assert_eq!(r.downloads, 0);
        assert_eq!(r.likes, 0);
        assert_eq!(r.date, Utc::now().date_naive());
        assert!(receipt.messages[0].content.contains("exitosamente"));
    }

    #[test]
    fn test_submit_keeps_provided_fields() {
        let mut d = draft("Guía de integrales");
        d.kind = ResourceKind::Guia;
        d.subject = "Cálculo II".into();
        d.university = "PUCP".into();
        d.description = "Integrales paso a paso".into();
        let receipt = submit(&[], &d).unwrap();
        assert_eq!(receipt.resource.kind, ResourceKind::Guia);
        assert_eq!(receipt.resource.subject, "Cálculo II");
        assert_eq!(receipt.resource.university_code, "PUCP");
        assert_eq!(receipt.resource.description, "Integrales paso a paso");
    }

    #[test]
    fn test_submit_assigns_id_above_catalog_max() {
        let data = Dataset::bundled().unwrap();
        let max_id = data.resources.iter().map(|r| r.id).max().unwrap();
        let receipt = submit(&data.resources, &draft("Apuntes de redes")).unwrap();
        assert_eq!(receipt.resource.id, max_id + 1);
    }

    #[test]
    fn test_submit_requires_a_title() {
        let err = submit(&[], &draft("   ")).unwrap_err();
        match err {
            EduError::Validation(fields) => {
                assert_eq!(fields[0].field, "titulo");
                assert!(fields[0].message.contains("título"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
