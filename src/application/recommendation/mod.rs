//! Recommendation orchestrator.
//!
//! Runs the two independent generative subtasks (opportunity list, market
//! introduction) and substitutes fixed fallback content when either fails.
//! The fallback path does no I/O and cannot fail, so `generate` always
//! returns a complete, shape-valid result: exactly three opportunities and a
//! non-empty introduction.

mod prompts;

use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::domain::lead::LeadProfile;
use crate::domain::report::Opportunity;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

/// Number of opportunities every report carries.
const OPPORTUNITY_COUNT: usize = 3;

/// Output of the orchestrator, ready for report assembly.
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub opportunities: Vec<Opportunity>,
    pub introduction: String,
}

/// Orchestrates the generative subtasks with deterministic fallbacks.
#[derive(Clone)]
pub struct RecommendationService {
    provider: Arc<dyn AIProvider>,
}

impl RecommendationService {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Produces exactly three opportunities and one introduction.
    ///
    /// The subtasks have no ordering dependency and run concurrently. A
    /// failed subtask is replaced by its fallback and never retried.
    pub async fn generate(&self, lead: &LeadProfile) -> Recommendations {
        let (opportunities, introduction) =
            tokio::join!(self.opportunities(lead), self.introduction(lead));

        Recommendations {
            opportunities,
            introduction,
        }
    }

    async fn opportunities(&self, lead: &LeadProfile) -> Vec<Opportunity> {
        match self.try_opportunities(lead).await {
            Ok(opportunities) => opportunities,
            Err(err) => {
                warn!(error = %err, "opportunity generation failed, using fallback");
                fallback_opportunities(lead)
            }
        }
    }

    async fn try_opportunities(
        &self,
        lead: &LeadProfile,
    ) -> Result<Vec<Opportunity>, GenerationError> {
        let request = CompletionRequest::new()
            .with_system_prompt(prompts::OPPORTUNITY_SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompts::opportunity_context(lead))
            .with_temperature(0.7);

        let response = self.provider.complete(request).await?;
        let mut opportunities = parse_opportunities(&response.content)?;

        // The model is instructed to return exactly three; pad or truncate
        // rather than discarding an otherwise usable answer.
        opportunities.truncate(OPPORTUNITY_COUNT);
        if opportunities.len() < OPPORTUNITY_COUNT {
            let missing = fallback_opportunities(lead)
                .into_iter()
                .skip(opportunities.len());
            opportunities.extend(missing);
        }

        Ok(opportunities)
    }

    async fn introduction(&self, lead: &LeadProfile) -> String {
        match self.try_introduction(lead).await {
            Ok(introduction) => introduction,
            Err(err) => {
                warn!(error = %err, "introduction generation failed, using fallback");
                fallback_introduction(lead)
            }
        }
    }

    async fn try_introduction(&self, lead: &LeadProfile) -> Result<String, GenerationError> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::User, prompts::introduction_prompt(lead))
            .with_max_tokens(400)
            .with_temperature(0.7);

        let response = self.provider.complete(request).await?;
        let introduction = response.content.trim().to_string();
        if introduction.is_empty() {
            return Err(GenerationError::EmptyOutput);
        }
        Ok(introduction)
    }
}

/// Failures of a generative subtask. Always recovered by fallback content.
#[derive(Debug, Error)]
enum GenerationError {
    #[error(transparent)]
    Provider(#[from] AIError),

    #[error("malformed model output: {0}")]
    Malformed(String),

    #[error("model returned empty output")]
    EmptyOutput,
}

#[derive(Debug, Deserialize)]
struct OpportunitiesOutput {
    opportunities: Vec<Opportunity>,
}

/// Parses the model's JSON answer, tolerating a markdown code fence around it.
fn parse_opportunities(raw: &str) -> Result<Vec<Opportunity>, GenerationError> {
    let json = strip_code_fence(raw);

    let output: OpportunitiesOutput = serde_json::from_str(json)
        .map_err(|e| GenerationError::Malformed(e.to_string()))?;

    if output.opportunities.is_empty() {
        return Err(GenerationError::EmptyOutput);
    }
    if output
        .opportunities
        .iter()
        .any(|o| o.title.trim().is_empty() || o.description.trim().is_empty())
    {
        return Err(GenerationError::Malformed(
            "opportunity with empty title or description".to_string(),
        ));
    }

    Ok(output.opportunities)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Fixed opportunity list used when generation fails.
///
/// References the lead's critical area (or main pain) so the report still
/// reads as addressed to them.
fn fallback_opportunities(lead: &LeadProfile) -> Vec<Opportunity> {
    let area = lead.focus_area();
    vec![
        Opportunity {
            title: "Automação Inteligente de Processos".to_string(),
            description: format!(
                "Mapeamento e automação dos fluxos de trabalho mais repetitivos ligados a \
                 {area}, liberando a equipe para atividades de maior valor."
            ),
            roi: "150-300% em 12 meses".to_string(),
            priority: "alta".to_string(),
            case_reference: "Base39 - Análise de Crédito Acelerada".to_string(),
        },
        Opportunity {
            title: "Análise de Dados para Decisão".to_string(),
            description: format!(
                "Consolidação dos dados já existentes em painéis com insights automáticos, \
                 trazendo visibilidade imediata sobre {area} e reduzindo decisões por intuição."
            ),
            roi: "80-150% em 12 meses".to_string(),
            priority: "media".to_string(),
            case_reference: "Grupo Exame - Produtividade Editorial".to_string(),
        },
        Opportunity {
            title: "Assistente Virtual para Atendimento e Suporte".to_string(),
            description: "Implantação de um assistente de IA para responder às dúvidas mais \
                          frequentes de clientes e equipe interna, com escalonamento humano \
                          para casos complexos."
                .to_string(),
            roi: "60-120% em 12 meses".to_string(),
            priority: "media".to_string(),
            case_reference: "Loggi - Automação do Atendimento ao Cliente".to_string(),
        },
    ]
}

/// Fixed introduction used when generation fails. Embeds the questionnaire's
/// sector, company size and main pain verbatim.
fn fallback_introduction(lead: &LeadProfile) -> String {
    format!(
        "O setor de {sector} passa por uma transformação acelerada impulsionada pela \
         inteligência artificial, e empresas de porte {size} têm hoje acesso a soluções \
         que antes eram exclusividade de grandes corporações. Desafios como \"{pain}\" \
         são exatamente o tipo de gargalo em que a IA tem mostrado os retornos mais \
         rápidos e mensuráveis. As oportunidades a seguir foram selecionadas para o seu \
         contexto de maturidade digital e capacidade de investimento.",
        sector = lead.sector,
        size = lead.company_size,
        pain = lead.main_pain,
    )
}
