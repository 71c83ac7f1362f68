//! Lead questionnaire profile.
//!
//! The raw answers submitted by the frontend form. Created once per request
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder used when the lead left the company/contact name blank.
pub const DEFAULT_COMPANY_NAME: &str = "Sua Empresa";

/// A complete questionnaire submission.
///
/// Identity fields plus the nine diagnostic answers. Free-text answers are
/// kept verbatim; the scoring engine matches lookup keys as substrings, so no
/// normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub sector: String,
    pub company_size: String,
    pub role: String,
    pub main_pain: String,
    pub critical_area: Option<String>,
    pub pain_quantification: Option<String>,
    pub digital_maturity: String,
    pub investment_capacity: String,
    pub urgency: String,
}

impl LeadProfile {
    /// Name used in the report header, falling back to a generic placeholder.
    pub fn company_name(&self) -> &str {
        if self.name.trim().is_empty() {
            DEFAULT_COMPANY_NAME
        } else {
            &self.name
        }
    }

    /// The area fallback recommendations should speak to: the critical area
    /// when given, otherwise the stated main pain.
    pub fn focus_area(&self) -> &str {
        match self.critical_area.as_deref().map(str::trim) {
            Some(area) if !area.is_empty() => area,
            _ => &self.main_pain,
        }
    }

    /// Checks required fields and the email shape.
    ///
    /// # Errors
    ///
    /// Returns the first failing field so the caller can surface a precise
    /// client error.
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        require("name", &self.name)?;
        require("sector", &self.sector)?;
        require("company_size", &self.company_size)?;
        require("role", &self.role)?;
        require("main_pain", &self.main_pain)?;
        require("digital_maturity", &self.digital_maturity)?;
        require("investment_capacity", &self.investment_capacity)?;
        require("urgency", &self.urgency)?;
        validate_email(&self.email)
    }
}

/// Validation failures for an incoming questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadValidationError {
    #[error("field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

fn require(field: &'static str, value: &str) -> Result<(), LeadValidationError> {
    if value.trim().is_empty() {
        return Err(LeadValidationError::EmptyField(field));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), LeadValidationError> {
    let trimmed = email.trim();
    let invalid = || LeadValidationError::InvalidEmail(email.to_string());

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(invalid());
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadProfile {
        LeadProfile {
            name: "Maria Silva".to_string(),
            email: "maria.silva@corporate.com".to_string(),
            phone: Some("11999998888".to_string()),
            sector: "Serviços Profissionais".to_string(),
            company_size: "51-250 funcionários".to_string(),
            role: "Gerente/Coordenador(a)".to_string(),
            main_pain: "Processos manuais e repetitivos".to_string(),
            critical_area: Some("Financeiro/Cobrança".to_string()),
            pain_quantification: None,
            digital_maturity: "Usamos relatórios básicos e planilhas".to_string(),
            investment_capacity: "Até R$ 30.000".to_string(),
            urgency: "Alta - Próximos 3 meses".to_string(),
        }
    }

    #[test]
    fn valid_lead_passes_validation() {
        assert!(valid_lead().validate().is_ok());
    }

    #[test]
    fn company_name_falls_back_when_blank() {
        let mut lead = valid_lead();
        lead.name = "   ".to_string();
        assert_eq!(lead.company_name(), DEFAULT_COMPANY_NAME);
    }

    #[test]
    fn company_name_uses_submitted_name() {
        assert_eq!(valid_lead().company_name(), "Maria Silva");
    }

    #[test]
    fn focus_area_prefers_critical_area() {
        assert_eq!(valid_lead().focus_area(), "Financeiro/Cobrança");
    }

    #[test]
    fn focus_area_falls_back_to_main_pain() {
        let mut lead = valid_lead();
        lead.critical_area = None;
        assert_eq!(lead.focus_area(), "Processos manuais e repetitivos");

        lead.critical_area = Some("  ".to_string());
        assert_eq!(lead.focus_area(), "Processos manuais e repetitivos");
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let mut lead = valid_lead();
        lead.sector = String::new();
        assert_eq!(
            lead.validate(),
            Err(LeadValidationError::EmptyField("sector"))
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["", "no-at-sign", "@corporate.com", "maria@", "maria@no-dot", "a b@x.com"] {
            let mut lead = valid_lead();
            lead.email = email.to_string();
            assert!(
                matches!(lead.validate(), Err(LeadValidationError::InvalidEmail(_))),
                "expected rejection for {email:?}"
            );
        }
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut lead = valid_lead();
        lead.phone = None;
        lead.critical_area = None;
        lead.pain_quantification = None;
        assert!(lead.validate().is_ok());
    }
}
