//! Report document assembly.
//!
//! Pure aggregation of scoring output, recommendation output and the two
//! fixed risk statements into the structure persisted alongside the lead and
//! fed to the HTML renderer.

use serde::{Deserialize, Serialize};

use super::scoring::{DimensionScores, ScoreBreakdown};

/// A recommended AI initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(rename = "titulo")]
    pub title: String,
    pub description: String,
    /// Estimated return on investment, free text ("150-300% em 12 meses").
    pub roi: String,
    /// Priority tier: "alta", "media" or "baixa".
    pub priority: String,
    /// Success case for a similar company.
    #[serde(rename = "case")]
    pub case_reference: String,
}

/// A fixed risk statement appended to every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// Company block in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(rename = "nome")]
    pub name: String,
}

/// The consolidated diagnostic report.
///
/// Serialized as-is into the `ai_full_report_json` column and rendered to
/// HTML for the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(rename = "empresa")]
    pub company: CompanyInfo,
    #[serde(rename = "scores_radar")]
    pub dimensions: DimensionScores,
    #[serde(rename = "score_final")]
    pub final_score: f64,
    pub introduction: String,
    #[serde(rename = "relatorio_oportunidades")]
    pub opportunities: Vec<Opportunity>,
    #[serde(rename = "relatorio_riscos")]
    pub risks: Vec<RiskEntry>,
}

impl ReportDocument {
    /// Merges the pipeline outputs into one report.
    ///
    /// The two risk entries are static content, appended unconditionally.
    pub fn assemble(
        company_name: &str,
        scores: ScoreBreakdown,
        introduction: String,
        opportunities: Vec<Opportunity>,
    ) -> Self {
        Self {
            company: CompanyInfo {
                name: company_name.to_string(),
            },
            dimensions: scores.dimensions,
            final_score: scores.final_score,
            introduction,
            opportunities,
            risks: default_risks(),
        }
    }
}

fn default_risks() -> Vec<RiskEntry> {
    vec![
        RiskEntry {
            title: "Segurança de Dados".to_string(),
            description: "A implementação de IA exige atenção redobrada à segurança dos dados \
                          e conformidade com a LGPD."
                .to_string(),
        },
        RiskEntry {
            title: "Gestão da Mudança".to_string(),
            description: "A adoção de novas tecnologias requer uma comunicação clara e \
                          treinamento para garantir a adesão da equipe."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            dimensions: DimensionScores {
                decision_power: 8.0,
                culture_and_talent: 6.5,
                process_automation: 7.0,
                product_innovation: 5.5,
                market_intelligence: 8.5,
            },
            final_score: 7.5,
        }
    }

    fn opportunity(title: &str) -> Opportunity {
        Opportunity {
            title: title.to_string(),
            description: "Automatizar tarefas repetitivas".to_string(),
            roi: "200%".to_string(),
            priority: "alta".to_string(),
            case_reference: "Base39".to_string(),
        }
    }

    #[test]
    fn assemble_carries_inputs_through() {
        let report = ReportDocument::assemble(
            "Empresa Teste",
            breakdown(),
            "Introdução de teste".to_string(),
            vec![opportunity("RPA"), opportunity("BI"), opportunity("Chatbot")],
        );

        assert_eq!(report.company.name, "Empresa Teste");
        assert_eq!(report.final_score, 7.5);
        assert_eq!(report.introduction, "Introdução de teste");
        assert_eq!(report.opportunities.len(), 3);
    }

    #[test]
    fn assemble_always_appends_both_risk_entries() {
        let report =
            ReportDocument::assemble("Empresa", breakdown(), String::new(), Vec::new());

        assert_eq!(report.risks.len(), 2);
        assert_eq!(report.risks[0].title, "Segurança de Dados");
        assert_eq!(report.risks[1].title, "Gestão da Mudança");
    }

    #[test]
    fn report_serializes_with_original_column_shape() {
        let report = ReportDocument::assemble(
            "Empresa Teste",
            breakdown(),
            "Intro".to_string(),
            vec![opportunity("RPA")],
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["empresa"]["nome"], "Empresa Teste");
        assert_eq!(json["score_final"], 7.5);
        assert_eq!(json["scores_radar"]["poder_de_decisao"], 8.0);
        assert_eq!(json["relatorio_oportunidades"][0]["titulo"], "RPA");
        assert_eq!(json["relatorio_riscos"][0]["titulo"], "Segurança de Dados");
    }

    #[test]
    fn opportunity_round_trips_through_json() {
        let json = r#"{
            "titulo": "Agente de Vendas",
            "description": "Qualifica leads automaticamente",
            "roi": "150%",
            "priority": "alta",
            "case": "Zendesk para Vendas"
        }"#;
        let parsed: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.title, "Agente de Vendas");
        assert_eq!(parsed.case_reference, "Zendesk para Vendas");

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["titulo"], "Agente de Vendas");
        assert_eq!(back["case"], "Zendesk para Vendas");
    }
}
