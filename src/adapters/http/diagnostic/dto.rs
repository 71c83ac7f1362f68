//! HTTP DTOs for the diagnostic endpoint.
//!
//! These types decouple the wire format from domain types; the request is
//! converted into a validated `LeadProfile` before the pipeline runs.

use serde::{Deserialize, Serialize};

use crate::domain::lead::{LeadProfile, LeadValidationError};

/// The questionnaire payload posted by the frontend form.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub sector: String,
    pub company_size: String,
    pub role: String,
    pub main_pain: String,
    #[serde(default)]
    pub critical_area: Option<String>,
    #[serde(default)]
    pub pain_quantification: Option<String>,
    pub digital_maturity: String,
    pub investment_capacity: String,
    pub urgency: String,
}

impl TryFrom<DiagnosticRequest> for LeadProfile {
    type Error = LeadValidationError;

    fn try_from(request: DiagnosticRequest) -> Result<Self, Self::Error> {
        let lead = LeadProfile {
            name: request.name,
            email: request.email,
            phone: request.phone,
            sector: request.sector,
            company_size: request.company_size,
            role: request.role,
            main_pain: request.main_pain,
            critical_area: request.critical_area,
            pain_quantification: request.pain_quantification,
            digital_maturity: request.digital_maturity,
            investment_capacity: request.investment_capacity,
            urgency: request.urgency,
        };
        lead.validate()?;
        Ok(lead)
    }
}

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Maria Silva",
            "email": "maria.silva@corporate.com",
            "phone": "11999998888",
            "sector": "Serviços Profissionais (Consultoria, Advocacia, etc.)",
            "company_size": "51-250 funcionários",
            "role": "Gerente/Coordenador(a)",
            "main_pain": "Processos manuais e repetitivos que consomem muito tempo da equipe",
            "critical_area": "Financeiro/Cobrança",
            "pain_quantification": "Nossa equipe gasta umas 30 horas por mês em faturamento manual.",
            "digital_maturity": "Usamos relatórios básicos e planilhas (Excel/Google Sheets)",
            "investment_capacity": "Até R$ 30.000 (projeto piloto/teste)",
            "urgency": "Alta - Gostaríamos de agir nos próximos 3 meses"
        })
    }

    #[test]
    fn deserializes_full_payload() {
        let request: DiagnosticRequest = serde_json::from_value(request_json()).unwrap();
        assert_eq!(request.name, "Maria Silva");
        assert_eq!(request.critical_area.as_deref(), Some("Financeiro/Cobrança"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let mut json = request_json();
        let obj = json.as_object_mut().unwrap();
        obj.remove("phone");
        obj.remove("critical_area");
        obj.remove("pain_quantification");

        let request: DiagnosticRequest = serde_json::from_value(json).unwrap();
        assert!(request.phone.is_none());
        assert!(request.critical_area.is_none());
        assert!(request.pain_quantification.is_none());
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let mut json = request_json();
        json.as_object_mut().unwrap().remove("sector");
        assert!(serde_json::from_value::<DiagnosticRequest>(json).is_err());
    }

    #[test]
    fn converts_into_validated_lead() {
        let request: DiagnosticRequest = serde_json::from_value(request_json()).unwrap();
        let lead = LeadProfile::try_from(request).unwrap();
        assert_eq!(lead.company_name(), "Maria Silva");
    }

    #[test]
    fn invalid_email_fails_conversion() {
        let mut json = request_json();
        json["email"] = serde_json::json!("not-an-email");
        let request: DiagnosticRequest = serde_json::from_value(json).unwrap();
        assert!(matches!(
            LeadProfile::try_from(request),
            Err(LeadValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn error_response_serializes_detail_key() {
        let body = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(body["detail"], "boom");
    }
}
