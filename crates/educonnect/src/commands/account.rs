//! Simulated login and registration. No backend exists: the operations
//! validate their input and hand back a session-scoped token so the
//! interface stays honest for a future real integration.

use super::CmdMessage;
use crate::error::{EduError, FieldError, Result};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of a simulated login.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub email: String,
    pub messages: Vec<CmdMessage>,
}

pub fn login(email: &str, password: &str) -> Result<Session> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "El correo es requerido"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "La contraseña es requerida"));
    }
    if !errors.is_empty() {
        return Err(EduError::Validation(errors));
    }

    Ok(Session {
        session_id: Uuid::new_v4(),
        email: email.to_string(),
        messages: vec![CmdMessage::success(format!(
            "¡Bienvenido! Iniciando sesión con {email}"
        ))],
    })
}

/// Outcome of a simulated registration.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub account_id: Uuid,
    pub name: String,
    pub email: String,
    pub messages: Vec<CmdMessage>,
}

pub fn register(name: &str, email: &str, password: &str, confirm: &str) -> Result<Registration> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "El nombre es requerido"));
    }
    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "El correo es requerido"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "La contraseña es requerida"));
    } else if password.chars().count() < 6 {
        errors.push(FieldError::new(
            "password",
            "La contraseña debe tener al menos 6 caracteres",
        ));
    } else if password != confirm {
        errors.push(FieldError::new(
            "confirmPassword",
            "Las contraseñas no coinciden",
        ));
    }
    if !errors.is_empty() {
        return Err(EduError::Validation(errors));
    }

    Ok(Registration {
        account_id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        messages: vec![CmdMessage::success(format!(
            "¡Cuenta creada exitosamente! Bienvenido {name}"
        ))],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_returns_fresh_session() {
        let a = login("ana@utp.edu.pe", "secreta").unwrap();
        let b = login("ana@utp.edu.pe", "secreta").unwrap();
        assert_ne!(a.session_id, b.session_id);
        assert!(a.messages[0].content.contains("ana@utp.edu.pe"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let err = login("  ", "").unwrap_err();
        match err {
            EduError::Validation(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["email", "password"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_register_happy_path() {
        let r = register("Luis Paredes", "luis@pucp.edu.pe", "segura1", "segura1").unwrap();
        assert_eq!(r.email, "luis@pucp.edu.pe");
        assert!(r.messages[0].content.contains("Cuenta creada"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let err = register("Luis", "l@p.pe", "abc", "abc").unwrap_err();
        assert!(matches!(
            err,
            EduError::Validation(ref f) if f[0].message.contains("al menos 6")
        ));
    }

    #[test]
    fn test_register_rejects_mismatched_passwords() {
        let err = register("Luis", "l@p.pe", "segura1", "segura2").unwrap_err();
        match err {
            EduError::Validation(fields) => {
                assert_eq!(fields[0].field, "confirmPassword");
                assert_eq!(fields[0].message, "Las contraseñas no coinciden");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
