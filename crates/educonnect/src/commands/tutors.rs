//! Tutor directory: filtered browse plus the contact-request flow with
//! its fee breakdown.

use super::CmdMessage;
use crate::dataset::Dataset;
use crate::error::{EduError, FieldError, Result};
use crate::model::Tutor;
use crate::query::{self, FieldFilter, QueryState};
use serde::Serialize;

/// Query-string keys the directory recognizes.
pub const QUERY_KEYS: &[&str] = &[
    "search",
    "subject",
    "university",
    "minPrice",
    "maxPrice",
    "minRating",
    "modality",
];

/// Service commission charged on top of the tutor's hourly rate.
pub const SERVICE_FEE_RATE: f64 = 0.10;

/// All matching tutors (the directory does not paginate) plus the option
/// lists for the filter bar, derived from the tutor records themselves.
#[derive(Debug, Clone, Serialize)]
pub struct TutorListing {
    pub rows: Vec<Tutor>,
    pub total: usize,
    pub subjects: Vec<String>,
    pub universities: Vec<String>,
}

pub fn browse(data: &Dataset, state: &QueryState) -> TutorListing {
    let filters = [
        FieldFilter::has("subject", state.get("subject")),
        FieldFilter::eq("university", state.get("university")),
        FieldFilter::min("price", state.get("minPrice")),
        FieldFilter::max("price", state.get("maxPrice")),
        FieldFilter::min("rating", state.get("minRating")),
        FieldFilter::has("modality", state.get("modality")),
    ];
    let rows: Vec<Tutor> = query::select(&data.tutors, &filters, state.search())
        .into_iter()
        .cloned()
        .collect();
    TutorListing {
        total: rows.len(),
        rows,
        subjects: data.tutor_subjects(),
        universities: data.tutor_universities(),
    }
}

/// A contact request as the student fills it in. Date and time are
/// optional scheduling hints, passed through untouched.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub student_name: String,
    pub email: String,
    pub subject: String,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub message: String,
}

/// Outcome of a validated contact request: who receives it, the price
/// breakdown, and the user-facing messages.
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub tutor_id: u64,
    pub tutor_name: String,
    pub subject: String,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub hourly_rate: f64,
    pub service_fee: f64,
    pub total_per_hour: f64,
    pub currency: String,
    pub messages: Vec<CmdMessage>,
}

/// Validate a contact request against the tutor it addresses.
///
/// Collects every failing field; the subject must be one the tutor
/// actually offers. On success the receipt carries the full per-hour
/// price breakdown (rate, 10% service fee, total).
pub fn contact(tutor: &Tutor, draft: &ContactDraft) -> Result<ContactReceipt> {
    let mut errors = Vec::new();

    if draft.student_name.trim().is_empty() {
        errors.push(FieldError::new("studentName", "Tu nombre es requerido"));
    }

    if draft.email.trim().is_empty() {
        errors.push(FieldError::new("studentEmail", "Tu email es requerido"));
    } else if !email_shape_ok(&draft.email) {
        errors.push(FieldError::new("studentEmail", "Email inválido"));
    }

    if draft.subject.is_empty() || !tutor.subjects.contains(&draft.subject) {
        errors.push(FieldError::new("subject", "Selecciona una materia"));
    }

    let message_len = draft.message.chars().count();
    if draft.message.trim().is_empty() {
        errors.push(FieldError::new("message", "El mensaje es requerido"));
    } else if message_len < 20 {
        errors.push(FieldError::new(
            "message",
            "El mensaje debe tener al menos 20 caracteres",
        ));
    } else if message_len > 500 {
        errors.push(FieldError::new(
            "message",
            "El mensaje debe tener máximo 500 caracteres",
        ));
    }

    if !errors.is_empty() {
        return Err(EduError::Validation(errors));
    }

    let hourly = tutor.price_per_hour;
    let fee = hourly * SERVICE_FEE_RATE;
    Ok(ContactReceipt {
        tutor_id: tutor.id,
        tutor_name: tutor.full_name.clone(),
        subject: draft.subject.clone(),
        preferred_date: draft.preferred_date.clone(),
        preferred_time: draft.preferred_time.clone(),
        hourly_rate: hourly,
        service_fee: fee,
        total_per_hour: hourly + fee,
        currency: tutor.currency.clone(),
        messages: vec![
            CmdMessage::success(format!(
                "¡Solicitud enviada a {}! Te contactarán pronto a {}.",
                tutor.full_name, draft.email
            )),
            CmdMessage::info(
                "El tutor recibirá tu solicitud y te contactará directamente a tu email \
                 para coordinar horarios y detalles de pago.",
            ),
        ],
    })
}

/// Accepts the shape `something@something.something`: exactly one `@`,
/// no whitespace, and a dot inside the domain that is neither its first
/// nor its last character.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor(id: u64, name: &str, uni: &str, price: f64, rating: f64) -> Tutor {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "fullName": name,
            "isVerified": true,
            "tutorType": "graduate",
            "tutorTypeLabel": "Egresado",
            "specialty": "Cálculo",
            "university": uni,
            "career": "Matemática",
            "location": "Lima",
            "bio": "Clases pacientes y con ejemplos",
            "subjects": ["Cálculo I", "Álgebra Lineal"],
            "modality": ["Virtual"],
            "rating": rating,
            "reviewsCount": 10,
            "pricePerHour": price,
            "currency": "S/"
        }))
        .unwrap()
    }

    fn dataset_with(tutors: Vec<Tutor>) -> Dataset {
        let mut data = Dataset::from_json(
            r#"{"recursos":[],"tutores":[],"foro_posts":[],"categorias_foro":[],
                "universidades":[],"carreras":[],"materias":[]}"#,
        )
        .unwrap();
        data.tutors = tutors;
        data
    }

    fn state(query: &str) -> QueryState {
        QueryState::parse(query, QUERY_KEYS)
    }

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            student_name: "Juan Pérez".into(),
            email: "juan@example.com".into(),
            subject: "Cálculo I".into(),
            preferred_date: None,
            preferred_time: None,
            message: "Necesito ayuda con límites y derivadas antes del parcial.".into(),
        }
    }

    #[test]
    fn test_browse_price_range() {
        let data = dataset_with(vec![
            tutor(1, "Ana", "UTP", 25.0, 4.5),
            tutor(2, "Bea", "UTP", 45.0, 4.5),
            tutor(3, "Carla", "UTP", 80.0, 4.5),
        ]);
        let listing = browse(&data, &state("minPrice=30&maxPrice=50"));
        assert_eq!(listing.total, 1);
        assert_eq!(listing.rows[0].id, 2);
    }

    #[test]
    fn test_browse_unparsable_bound_is_inactive() {
        let data = dataset_with(vec![tutor(1, "Ana", "UTP", 25.0, 4.5)]);
        let listing = browse(&data, &state("minPrice=abc"));
        assert_eq!(listing.total, 1);
    }

    #[test]
    fn test_browse_min_rating() {
        let data = dataset_with(vec![
            tutor(1, "Ana", "UTP", 25.0, 3.9),
            tutor(2, "Bea", "UTP", 25.0, 4.8),
        ]);
        let listing = browse(&data, &state("minRating=4.5"));
        assert_eq!(listing.total, 1);
        assert_eq!(listing.rows[0].id, 2);
    }

    #[test]
    fn test_browse_subject_membership() {
        let mut physics = tutor(2, "Bea", "UNI", 30.0, 4.0);
        physics.subjects = vec!["Física I".into()];
        let data = dataset_with(vec![tutor(1, "Ana", "UTP", 25.0, 4.5), physics]);
        let listing = browse(&data, &state("subject=Física+I"));
        assert_eq!(listing.total, 1);
        assert_eq!(listing.rows[0].id, 2);
    }

    #[test]
    fn test_browse_search_hits_bio() {
        let data = dataset_with(vec![
            tutor(1, "Ana", "UTP", 25.0, 4.5),
            tutor(2, "Bea", "UNI", 30.0, 4.0),
        ]);
        let listing = browse(&data, &state("search=PACIENTES&university=UNI"));
        assert_eq!(listing.total, 1);
        assert_eq!(listing.rows[0].id, 2);
    }

    #[test]
    fn test_browse_option_lists_from_records() {
        let data = dataset_with(vec![
            tutor(1, "Ana", "PUCP", 25.0, 4.5),
            tutor(2, "Bea", "PUCP", 30.0, 4.0),
        ]);
        let listing = browse(&data, &state(""));
        assert_eq!(listing.universities, vec!["PUCP".to_string()]);
        assert_eq!(
            listing.subjects,
            vec!["Cálculo I".to_string(), "Álgebra Lineal".to_string()]
        );
    }

    #[test]
    fn test_contact_happy_path_fee_breakdown() {
        let t = tutor(1, "Ana Torres", "UTP", 40.0, 4.8);
        let receipt = contact(&t, &valid_draft()).unwrap();
        assert!((receipt.hourly_rate - 40.0).abs() < f64::EPSILON);
        assert!((receipt.service_fee - 4.0).abs() < 1e-9);
        assert!((receipt.total_per_hour - 44.0).abs() < 1e-9);
        assert!(receipt.messages[0].content.contains("Ana Torres"));
        assert!(receipt.messages[0].content.contains("juan@example.com"));
    }

    #[test]
    fn test_contact_collects_every_failing_field() {
        let t = tutor(1, "Ana", "UTP", 40.0, 4.8);
        let err = contact(&t, &ContactDraft::default()).unwrap_err();
        match err {
            EduError::Validation(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["studentName", "studentEmail", "subject", "message"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_contact_rejects_bad_email_shapes() {
        let t = tutor(1, "Ana", "UTP", 40.0, 4.8);
        for email in ["juan", "juan@", "@example.com", "juan@example", "ju an@e.com", "juan@.com"] {
            let mut draft = valid_draft();
            draft.email = email.into();
            let err = contact(&t, &draft).unwrap_err();
            match err {
                EduError::Validation(fields) => {
                    assert_eq!(fields[0].field, "studentEmail");
                    assert_eq!(fields[0].message, "Email inválido");
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_contact_rejects_subject_the_tutor_does_not_offer() {
        let t = tutor(1, "Ana", "UTP", 40.0, 4.8);
        let mut draft = valid_draft();
        draft.subject = "Química Orgánica".into();
        let err = contact(&t, &draft).unwrap_err();
        match err {
            EduError::Validation(fields) => {
                assert_eq!(fields[0].message, "Selecciona una materia")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_contact_message_length_bounds() {
        let t = tutor(1, "Ana", "UTP", 40.0, 4.8);

        let mut short = valid_draft();
        short.message = "muy corto".into();
        assert!(matches!(
            contact(&t, &short),
            Err(EduError::Validation(ref f)) if f[0].message.contains("al menos 20")
        ));

        let mut long = valid_draft();
        long.message = "x".repeat(501);
        assert!(matches!(
            contact(&t, &long),
            Err(EduError::Validation(ref f)) if f[0].message.contains("máximo 500")
        ));
    }

    #[test]
    fn test_email_shape_accepts_reasonable_addresses() {
        assert!(email_shape_ok("a@b.c"));
        assert!(email_shape_ok("maria.quispe@utp.edu.pe"));
        assert!(!email_shape_ok("a@b"));
        assert!(!email_shape_ok("a b@c.d"));
    }
}
