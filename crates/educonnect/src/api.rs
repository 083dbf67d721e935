//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all EduConnect operations, regardless of the
//! UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns session state**: the forum post list (the one mutable
//!   collection), the set of liked post ids, and the user preferences
//! - **Normalizes inputs** (e.g., parsing query strings into a
//!   [`QueryState`], resolving tutor ids to records)
//! - **Dispatches** to the appropriate command function
//! - **Persists preferences** after a change, when a config directory
//!   was provided
//! - **Emits analytics events** after the interactions worth measuring
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O beyond the prefs file**: No stdout, stderr, or formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Session Model
//!
//! The bundled dataset is read-only. On construction the facade clones
//! the forum posts out of it; new posts and like toggles live only in
//! that clone for the lifetime of the session. Resource uploads are
//! validated and receipted but never enter the catalog.
//!
//! ## Generic Over EventSink
//!
//! `EduApi<'_, E: EventSink>` is generic over the analytics sink:
//! - Production: `EduApi<'_, NullSink>` (or a real exporter)
//! - Testing: `EduApi<'_, &RecordingSink>`
//!
//! This enables asserting on emitted events without any network.
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch, input normalization, event emission, and
//! prefs persistence. Command logic is tested in the command modules.

use crate::commands::{account, forum, pricing, resources, tutors, upload};
use crate::dataset::Dataset;
use crate::error::{EduError, Result};
use crate::events::{EventSink, NullSink};
use crate::model::{ForumPost, Tutor};
use crate::prefs::{Preferences, Theme};
use crate::query::QueryState;
use std::collections::HashSet;
use std::path::PathBuf;

/// The main API facade for EduConnect operations.
///
/// Holds a borrow of the dataset plus all per-session mutable state.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct EduApi<'d, E: EventSink = NullSink> {
    data: &'d Dataset,
    posts: Vec<ForumPost>,
    liked: HashSet<u64>,
    prefs: Preferences,
    prefs_dir: Option<PathBuf>,
    sink: E,
}

impl EduApi<'static, NullSink> {
    /// Facade over the bundled dataset with default preferences and no
    /// analytics. The common starting point for one-shot invocations.
    pub fn bundled() -> Result<Self> {
        Ok(Self::new(Dataset::bundled()?, Preferences::default(), NullSink))
    }
}

impl<'d, E: EventSink> EduApi<'d, E> {
    pub fn new(data: &'d Dataset, prefs: Preferences, sink: E) -> Self {
        Self {
            data,
            posts: data.posts.clone(),
            liked: HashSet::new(),
            prefs,
            prefs_dir: None,
            sink,
        }
    }

    /// Persist preference changes to this directory from now on.
    pub fn with_prefs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prefs_dir = Some(dir.into());
        self
    }

    pub fn data(&self) -> &Dataset {
        self.data
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    // --- Resources ---

    pub fn resources(&self, query: &str) -> resources::ResourceListing {
        let state = QueryState::parse(query, resources::QUERY_KEYS);
        resources::browse(self.data, &state)
    }

    /// Validate an upload and return the receipt. The catalog itself is
    /// read-only, so the record does not enter it.
    pub fn upload(&self, draft: &upload::UploadDraft) -> Result<upload::UploadReceipt> {
        upload::submit(&self.data.resources, draft)
    }

    // --- Tutors ---

    pub fn tutors(&self, query: &str) -> tutors::TutorListing {
        let state = QueryState::parse(query, tutors::QUERY_KEYS);
        tutors::browse(self.data, &state)
    }

    /// Send a contact request to a tutor by id.
    pub fn contact_tutor(
        &self,
        tutor_id: u64,
        draft: &tutors::ContactDraft,
    ) -> Result<tutors::ContactReceipt> {
        let tutor = self.find_tutor(tutor_id)?;
        let receipt = tutors::contact(tutor, draft)?;
        self.sink.track("Tutorias", "Contactar_Tutor", &tutor.full_name);
        Ok(receipt)
    }

    fn find_tutor(&self, id: u64) -> Result<&Tutor> {
        self.data
            .tutors
            .iter()
            .find(|t| t.id == id)
            .ok_or(EduError::TutorNotFound(id))
    }

    // --- Forum ---

    pub fn forum(&self, query: &str) -> forum::ForumListing {
        let state = QueryState::parse(query, forum::QUERY_KEYS);
        forum::browse(&self.posts, &self.data.categories, &state)
    }

    pub fn forum_post(&self, id: u64) -> Result<ForumPost> {
        forum::view(&self.posts, id)
    }

    /// Publish a new post. It lands at the top of the session's list.
    pub fn create_post(&mut self, draft: &forum::PostDraft) -> Result<ForumPost> {
        forum::create(&mut self.posts, &self.data.categories, draft)
    }

    pub fn toggle_like(&mut self, post_id: u64) -> Result<forum::LikeOutcome> {
        forum::toggle_like(&mut self.posts, &mut self.liked, post_id)
    }

    /// Ids the user has liked this session.
    pub fn liked_posts(&self) -> &HashSet<u64> {
        &self.liked
    }

    // --- Account ---

    pub fn login(&self, email: &str, password: &str) -> Result<account::Session> {
        account::login(email, password)
    }

    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<account::Registration> {
        account::register(name, email, password, confirm)
    }

    // --- Pricing & Preferences ---

    pub fn plans(&self) -> Vec<pricing::Plan> {
        pricing::plans()
    }

    /// Activate Pro, persist the flag, and report the conversion.
    pub fn upgrade(&mut self) -> Result<pricing::UpgradeReceipt> {
        let receipt = pricing::upgrade(&mut self.prefs);
        self.persist_prefs()?;
        self.sink.track("Suscripcion", "Obtener_Premium", receipt.plan);
        Ok(receipt)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme> {
        self.prefs.theme = theme;
        self.persist_prefs()?;
        Ok(theme)
    }

    fn persist_prefs(&self) -> Result<()> {
        match &self.prefs_dir {
            Some(dir) => self.prefs.save(dir),
            None => Ok(()),
        }
    }
}

pub use crate::commands::forum::{ForumListing, LikeOutcome, PostDraft};
pub use crate::commands::pricing::{Plan, PlanFeature, UpgradeReceipt};
pub use crate::commands::resources::ResourceListing;
pub use crate::commands::tutors::{ContactDraft, ContactReceipt, TutorListing};
pub use crate::commands::upload::{UploadDraft, UploadReceipt};
pub use crate::commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingSink;
    use tempfile::TempDir;

    fn fixture() -> Dataset {
        Dataset::from_json(
            r#"{
            "recursos": [],
            "tutores": [{
                "id": 7,
                "fullName": "Ana García",
                "isVerified": true,
                "tutorType": "advanced_student",
                "tutorTypeLabel": "Estudiante Avanzado",
                "specialty": "Cálculo I",
                "university": "UTP",
                "career": "Ingeniería de Sistemas",
                "location": "Lima",
                "bio": "",
                "subjects": ["Cálculo I"],
                "modality": ["Virtual"],
                "rating": 4.8,
                "reviewsCount": 12,
                "pricePerHour": 40.0,
                "currency": "S/"
            }],
            "foro_posts": [],
            "categorias_foro": [{"id": 1, "nombre": "General", "descripcion": "", "icono": "", "color": ""}],
            "universidades": [],
            "carreras": [],
            "materias": []
        }"#,
        )
        .unwrap()
    }

    fn draft() -> ContactDraft {
        ContactDraft {
            student_name: "Juan Pérez".to_string(),
            email: "juan@utp.edu.pe".to_string(),
            subject: "Cálculo I".to_string(),
            preferred_date: None,
            preferred_time: None,
            message: "Necesito ayuda con límites y derivadas antes del parcial.".to_string(),
        }
    }

    #[test]
    fn test_contact_emits_event_with_tutor_name() {
        let data = fixture();
        let sink = RecordingSink::new();
        let api = EduApi::new(&data, Preferences::default(), &sink);

        api.contact_tutor(7, &draft()).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, "Tutorias");
        assert_eq!(events[0].action, "Contactar_Tutor");
        assert_eq!(events[0].label, "Ana García");
    }

    #[test]
    fn test_contact_unknown_tutor_emits_nothing() {
        let data = fixture();
        let sink = RecordingSink::new();
        let api = EduApi::new(&data, Preferences::default(), &sink);

        assert!(matches!(
            api.contact_tutor(99, &draft()),
            Err(EduError::TutorNotFound(99))
        ));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_failed_validation_emits_nothing() {
        let data = fixture();
        let sink = RecordingSink::new();
        let api = EduApi::new(&data, Preferences::default(), &sink);

        let mut bad = draft();
        bad.email = "not-an-email".to_string();
        assert!(api.contact_tutor(7, &bad).is_err());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_create_post_lands_in_session_list() {
        let data = fixture();
        let mut api = EduApi::new(&data, Preferences::default(), NullSink);

        let post = api
            .create_post(&PostDraft {
                title: "¿Cómo resolver integrales por partes?".to_string(),
                category_id: Some(1),
                content: "Me pierdo eligiendo u y dv, ¿algún truco general?".to_string(),
                ..PostDraft::default()
            })
            .unwrap();

        let listing = api.forum("");
        assert_eq!(listing.rows[0].id, post.id);
        // The bundled data is untouched; only the session copy grew.
        assert!(data.posts.is_empty());
    }

    #[test]
    fn test_toggle_like_tracks_session_state() {
        let data = fixture();
        let mut api = EduApi::new(&data, Preferences::default(), NullSink);
        let post = api
            .create_post(&PostDraft {
                title: "Recomendaciones de libros de álgebra".to_string(),
                category_id: Some(1),
                content: "Busco algo con muchos ejercicios resueltos, ideas?".to_string(),
                ..PostDraft::default()
            })
            .unwrap();

        let outcome = api.toggle_like(post.id).unwrap();
        assert!(outcome.liked);
        assert!(api.liked_posts().contains(&post.id));

        let outcome = api.toggle_like(post.id).unwrap();
        assert!(!outcome.liked);
        assert!(api.liked_posts().is_empty());
    }

    #[test]
    fn test_upgrade_persists_and_reports() {
        let data = fixture();
        let dir = TempDir::new().unwrap();
        let sink = RecordingSink::new();
        let mut api =
            EduApi::new(&data, Preferences::default(), &sink).with_prefs_dir(dir.path());

        let receipt = api.upgrade().unwrap();
        assert!(receipt.pro);
        assert!(api.preferences().pro);

        let saved = Preferences::load(dir.path()).unwrap();
        assert!(saved.pro);

        let events = sink.events();
        assert_eq!(events[0].action, "Obtener_Premium");
    }

    #[test]
    fn test_set_theme_round_trips_through_disk() {
        let data = fixture();
        let dir = TempDir::new().unwrap();
        let mut api =
            EduApi::new(&data, Preferences::default(), NullSink).with_prefs_dir(dir.path());

        api.set_theme(Theme::Dark).unwrap();
        assert_eq!(Preferences::load(dir.path()).unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_no_prefs_dir_means_no_disk_writes() {
        let data = fixture();
        let mut api = EduApi::new(&data, Preferences::default(), NullSink);
        api.upgrade().unwrap();
        assert!(api.preferences().pro);
    }
}
