//! Pricing plans and the Pro upgrade.
//!
//! The plan catalog is static: a free "Estudiante" tier and the paid
//! "Universitario PRO" tier. Upgrading flips the Pro flag on the user's
//! preferences; there is no payment processing behind it.

use crate::commands::CmdMessage;
use crate::prefs::Preferences;
use serde::Serialize;

/// One line in a plan's feature list. Excluded features are shown
/// struck through on the free tier.
#[derive(Debug, Clone, Serialize)]
pub struct PlanFeature {
    pub label: &'static str,
    pub included: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub name: &'static str,
    /// Display price, already formatted ("S/. 9.90").
    pub price: &'static str,
    pub period: &'static str,
    pub tagline: &'static str,
    /// Badge shown on the highlighted tier ("Más Popular").
    pub badge: Option<&'static str>,
    pub features: Vec<PlanFeature>,
    pub highlighted: bool,
    /// Call-to-action label for the plan's button.
    pub cta: &'static str,
}

fn feature(label: &'static str, included: bool) -> PlanFeature {
    PlanFeature { label, included }
}

/// The two plans, free tier first.
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            name: "Estudiante",
            price: "S/. 0",
            period: "mes",
            tagline: "Para comenzar tu camino",
            badge: None,
            features: vec![
                feature("Acceso a foros", true),
                feature("Búsqueda de tutores", true),
                feature("3 descargas diarias", true),
                feature("Descargas ilimitadas", false),
                feature("Sin anuncios", false),
            ],
            highlighted: false,
            cta: "Plan Actual",
        },
        Plan {
            name: "Universitario PRO",
            price: "S/. 9.90",
            period: "mes",
            tagline: "Todo lo que necesitas para triunfar",
            badge: Some("Más Popular"),
            features: vec![
                feature("Descargas Ilimitadas", true),
                feature("Insignia de Verificado", true),
                feature("Sin Anuncios", true),
                feature("Acceso a Grabaciones", true),
                feature("Soporte Prioritario", true),
            ],
            highlighted: true,
            cta: "Obtener Premium",
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct UpgradeReceipt {
    pub plan: &'static str,
    pub pro: bool,
    pub messages: Vec<CmdMessage>,
}

/// Activate the Pro tier on the given preferences. Idempotent: an
/// already-Pro account gets the same welcome back.
pub fn upgrade(prefs: &mut Preferences) -> UpgradeReceipt {
    prefs.pro = true;
    UpgradeReceipt {
        plan: "Universitario PRO",
        pro: true,
        messages: vec![
            CmdMessage::success("¡Bienvenido a EduConnect Pro! 🎉"),
            CmdMessage::info(
                "Gracias por unirte a nuestra comunidad premium. En un proyecto real, aquí procesaríamos el pago.",
            ),
        ],
    }
}
