//! # Domain Model
//!
//! Core data types for the EduConnect community: catalog resources, tutors,
//! forum posts with replies, and the static lookup tables that feed filter
//! option lists.
//!
//! ## Wire format
//!
//! Records are deserialized from the bundled dataset, whose schema is fixed
//! and partly Spanish-keyed (`titulo`, `descripcion`, `universidadSigla`,
//! ...). Rust field names stay idiomatic; serde renames bridge the gap, so
//! the dataset file round-trips byte-stably through these types.
//!
//! ## Mutability
//!
//! Everything here is read-only at runtime except the forum post collection
//! (new posts are prepended) and per-session like counts. Both are owned by
//! the API layer; the model itself carries no interior mutability.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The seven kinds of catalog resources.
///
/// Wire values keep their accented display form (`Guía`, `Presentación`),
/// which doubles as the user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Guía")]
    Guia,
    Apuntes,
    Ejercicios,
    #[serde(rename = "Presentación")]
    Presentacion,
    Formulario,
    Resumen,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Pdf,
        ResourceKind::Guia,
        ResourceKind::Apuntes,
        ResourceKind::Ejercicios,
        ResourceKind::Presentacion,
        ResourceKind::Formulario,
        ResourceKind::Resumen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pdf => "PDF",
            ResourceKind::Guia => "Guía",
            ResourceKind::Apuntes => "Apuntes",
            ResourceKind::Ejercicios => "Ejercicios",
            ResourceKind::Presentacion => "Presentación",
            ResourceKind::Formulario => "Formulario",
            ResourceKind::Resumen => "Resumen",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A study resource in the catalog.
///
/// `rating` is a 0-100 score; `date` is the upload date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: ResourceKind,
    #[serde(rename = "universidadSigla")]
    pub university_code: String,
    #[serde(rename = "universidadNombre")]
    pub university_name: String,
    #[serde(rename = "carrera")]
    pub career: String,
    #[serde(rename = "materia")]
    pub subject: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    pub rating: u8,
    #[serde(rename = "descargas")]
    pub downloads: u64,
    pub likes: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// What kind of person is tutoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorKind {
    AdvancedStudent,
    Graduate,
    Professor,
}

/// How a tutoring session can take place. Wire values match the display
/// labels, so no renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Presencial,
    Virtual,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Presencial => "Presencial",
            Modality::Virtual => "Virtual",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tutor profile. `rating` is 0.0-5.0; `subjects` is never empty in a
/// well-formed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub id: u64,
    pub full_name: String,
    pub is_verified: bool,
    pub tutor_type: TutorKind,
    /// Pre-localized label for `tutor_type` ("Estudiante Avanzado", ...).
    pub tutor_type_label: String,
    pub specialty: String,
    pub university: String,
    pub career: String,
    pub location: String,
    pub bio: String,
    pub subjects: Vec<String>,
    pub modality: Vec<Modality>,
    pub rating: f64,
    pub reviews_count: u64,
    pub price_per_hour: f64,
    pub currency: String,
    #[serde(default)]
    pub profile_image: String,
}

/// Lifecycle of a forum thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Open,
    Resolved,
    Closed,
}

impl PostStatus {
    /// User-facing badge label.
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Open => "Abierto",
            PostStatus::Resolved => "Resuelto",
            PostStatus::Closed => "Cerrado",
        }
    }
}

/// Aggregate counters shown on a post card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostStats {
    pub views: u64,
    pub likes: u64,
    pub replies: u64,
}

/// A reply inside a forum post. Owned by exactly one post; there is no
/// write path for replies yet (the submission hook is intentionally
/// unwired, see `commands::forum::ReplyDraft`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: u64,
    #[serde(rename = "authorName")]
    pub author_name: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub likes: u64,
}

/// A forum thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: u64,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "universidadSigla")]
    pub university_code: String,
    #[serde(rename = "carrera")]
    pub career: String,
    #[serde(rename = "categoryId")]
    pub category_id: u64,
    /// Optional subject tag; `null` and absent both mean "none".
    #[serde(rename = "materia", default)]
    pub subject: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub stats: PostStats,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A forum category. Static lookup; `icon` is an icon identifier and
/// `color` a theme token, both opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "icono")]
    pub icon: String,
    pub color: String,
}

/// A university lookup entry: short code ("UTP") plus full name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
}
