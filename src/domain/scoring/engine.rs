//! Scoring engine.
//!
//! Pure and total: blank answers and unmatched free text are worth zero
//! points, never an error.

use serde::{Deserialize, Serialize};

use crate::domain::lead::LeadProfile;

use super::table::ScoreCategory;

/// Weights applied to each category when computing the final score.
const FINAL_WEIGHTS: [(ScoreCategory, f64); 6] = [
    (ScoreCategory::Role, 0.20),
    (ScoreCategory::MainPain, 0.25),
    (ScoreCategory::PainQuantification, 0.10),
    (ScoreCategory::DigitalMaturity, 0.15),
    (ScoreCategory::Investment, 0.20),
    (ScoreCategory::Urgency, 0.10),
];

/// Theoretical maximum of the weighted sum, used to normalize onto 0-10.
/// (3*0.2)+(2*0.25)+(3*0.1)+(2*0.15)+(3*0.2)+(2*0.1) = 2.5
const MAX_WEIGHTED_POINTS: f64 = 2.5;

/// The five radar-chart dimension scores, each on a 0-10 scale rounded to
/// one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "poder_de_decisao")]
    pub decision_power: f64,
    #[serde(rename = "cultura_e_talentos")]
    pub culture_and_talent: f64,
    #[serde(rename = "processos_e_automacao")]
    pub process_automation: f64,
    #[serde(rename = "inovacao_de_produtos")]
    pub product_innovation: f64,
    #[serde(rename = "inteligencia_de_mercado")]
    pub market_intelligence: f64,
}

impl DimensionScores {
    /// Scores in radar-chart order, paired with display labels.
    pub fn labeled(&self) -> [(&'static str, f64); 5] {
        [
            ("Poder de Decisão", self.decision_power),
            ("Cultura e Talentos", self.culture_and_talent),
            ("Processos e Automação", self.process_automation),
            ("Inovação de Produtos", self.product_innovation),
            ("Inteligência de Mercado", self.market_intelligence),
        ]
    }
}

/// Result of scoring one questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub dimensions: DimensionScores,
    /// Weighted readiness score on a 0-10 scale, rounded to one decimal.
    pub final_score: f64,
}

/// Points awarded for `answer` in `category`.
///
/// Scans the category table in declaration order and returns the value of the
/// first key that is a substring of the answer; blank answers and unmatched
/// text score 0.
pub fn points_for(category: ScoreCategory, answer: &str) -> f64 {
    if answer.is_empty() {
        return 0.0;
    }
    category
        .entries()
        .iter()
        .find(|(key, _)| answer.contains(key))
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

/// Computes the five dimension scores and the weighted final score.
pub fn calculate_scores(lead: &LeadProfile) -> ScoreBreakdown {
    let dimensions = DimensionScores {
        decision_power: dimension(ScoreCategory::Role, &lead.role),
        culture_and_talent: dimension(ScoreCategory::DigitalMaturity, &lead.digital_maturity),
        process_automation: dimension(ScoreCategory::MainPain, &lead.main_pain),
        product_innovation: dimension(ScoreCategory::Investment, &lead.investment_capacity),
        market_intelligence: dimension(ScoreCategory::Urgency, &lead.urgency),
    };

    let weighted: f64 = FINAL_WEIGHTS
        .iter()
        .map(|(category, weight)| points_for(*category, answer_for(lead, *category)) * weight)
        .sum();
    let final_score = round1(weighted / MAX_WEIGHTED_POINTS * 10.0);

    ScoreBreakdown {
        dimensions,
        final_score,
    }
}

fn dimension(category: ScoreCategory, answer: &str) -> f64 {
    round1(points_for(category, answer) * (10.0 / category.max_points()))
}

fn answer_for(lead: &LeadProfile, category: ScoreCategory) -> &str {
    match category {
        ScoreCategory::Sector => &lead.sector,
        ScoreCategory::CompanySize => &lead.company_size,
        ScoreCategory::Role => &lead.role,
        ScoreCategory::MainPain => &lead.main_pain,
        ScoreCategory::PainQuantification => {
            lead.pain_quantification.as_deref().unwrap_or_default()
        }
        ScoreCategory::DigitalMaturity => &lead.digital_maturity,
        ScoreCategory::Investment => &lead.investment_capacity,
        ScoreCategory::Urgency => &lead.urgency,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lead_with(
        role: &str,
        main_pain: &str,
        pain_quantification: Option<&str>,
        digital_maturity: &str,
        investment_capacity: &str,
        urgency: &str,
    ) -> LeadProfile {
        LeadProfile {
            name: "Empresa Teste".to_string(),
            email: "teste@empresa.com".to_string(),
            phone: None,
            sector: "Tecnologia/Software".to_string(),
            company_size: "11-50 funcionários".to_string(),
            role: role.to_string(),
            main_pain: main_pain.to_string(),
            critical_area: None,
            pain_quantification: pain_quantification.map(str::to_string),
            digital_maturity: digital_maturity.to_string(),
            investment_capacity: investment_capacity.to_string(),
            urgency: urgency.to_string(),
        }
    }

    #[test]
    fn maximal_answers_score_ten() {
        let lead = lead_with(
            "Sócio(a)/CEO/Fundador(a)",
            "Processos manuais e repetitivos",
            Some("Sim, é um custo significativo (>R$ 10k/mês)"),
            "Já usamos alguns insights automatizados/IA",
            "Acima de R$ 300.000",
            "Crítica! Para ontem",
        );

        let breakdown = calculate_scores(&lead);
        assert_eq!(breakdown.final_score, 10.0);
        assert_eq!(breakdown.dimensions.decision_power, 10.0);
        assert_eq!(breakdown.dimensions.culture_and_talent, 10.0);
        assert_eq!(breakdown.dimensions.process_automation, 10.0);
        assert_eq!(breakdown.dimensions.product_innovation, 10.0);
        assert_eq!(breakdown.dimensions.market_intelligence, 10.0);
    }

    #[test]
    fn empty_answer_scores_zero_in_every_category() {
        use ScoreCategory::*;
        for category in [
            Sector,
            CompanySize,
            Role,
            MainPain,
            PainQuantification,
            DigitalMaturity,
            Investment,
            Urgency,
        ] {
            assert_eq!(points_for(category, ""), 0.0, "{category:?}");
        }
    }

    #[test]
    fn unmatched_answer_scores_zero() {
        assert_eq!(points_for(ScoreCategory::Role, "Estrategista de xadrez"), 0.0);
    }

    #[test]
    fn substring_match_ignores_surrounding_text() {
        let points = points_for(
            ScoreCategory::Investment,
            "Entre R$ 30.000 e R$ 100.000 (investimento estruturado)",
        );
        assert_eq!(points, 2.0);
    }

    #[test]
    fn first_declared_key_wins_when_answer_contains_two() {
        // Declaration order decides: the CEO entry precedes the analyst entry
        // in the role table, regardless of position within the answer.
        let answer = "Analista/Especialista e Sócio(a)/CEO/Fundador(a)";
        assert_eq!(points_for(ScoreCategory::Role, answer), 3.0);
    }

    #[test]
    fn missing_pain_quantification_contributes_zero() {
        let with = lead_with(
            "Gerente/Coordenador(a)",
            "Processos manuais e repetitivos",
            Some("Sim, é um custo significativo (>R$ 10k/mês)"),
            "Temos sistemas centralizados (CRM/ERP)",
            "Até R$ 30.000",
            "Alta - Próximos 3 meses",
        );
        let without = lead_with(
            "Gerente/Coordenador(a)",
            "Processos manuais e repetitivos",
            None,
            "Temos sistemas centralizados (CRM/ERP)",
            "Até R$ 30.000",
            "Alta - Próximos 3 meses",
        );

        let delta =
            calculate_scores(&with).final_score - calculate_scores(&without).final_score;
        // quantifyPain contributes 3 * 0.1 / 2.5 * 10 = 1.2 when matched
        assert!((delta - 1.2).abs() < 1e-9);
    }

    #[test]
    fn unmatched_category_zeroes_its_dimension() {
        let lead = lead_with(
            "Alguém que não está na tabela",
            "Processos manuais e repetitivos",
            None,
            "Temos sistemas centralizados (CRM/ERP)",
            "Até R$ 30.000",
            "Alta - Próximos 3 meses",
        );
        let breakdown = calculate_scores(&lead);
        assert_eq!(breakdown.dimensions.decision_power, 0.0);
    }

    #[test]
    fn dimension_scores_round_to_one_decimal() {
        // Diretor(a)/C-Level: 2.5 * (10/3) = 8.333... -> 8.3
        let lead = lead_with(
            "Diretor(a)/C-Level",
            "Processos manuais e repetitivos",
            None,
            "Temos sistemas centralizados (CRM/ERP)",
            "Até R$ 30.000",
            "Alta - Próximos 3 meses",
        );
        assert_eq!(calculate_scores(&lead).dimensions.decision_power, 8.3);
    }

    #[test]
    fn dimension_scores_serialize_with_report_keys() {
        let scores = DimensionScores {
            decision_power: 8.0,
            culture_and_talent: 6.5,
            process_automation: 7.0,
            product_innovation: 5.5,
            market_intelligence: 8.5,
        };
        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(json["poder_de_decisao"], 8.0);
        assert_eq!(json["inteligencia_de_mercado"], 8.5);
    }

    proptest! {
        #[test]
        fn scores_stay_within_bounds(
            role in ".{0,80}",
            main_pain in ".{0,80}",
            pain_quantification in proptest::option::of(".{0,80}"),
            digital_maturity in ".{0,80}",
            investment_capacity in ".{0,80}",
            urgency in ".{0,80}",
        ) {
            let lead = lead_with(
                &role,
                &main_pain,
                pain_quantification.as_deref(),
                &digital_maturity,
                &investment_capacity,
                &urgency,
            );
            let breakdown = calculate_scores(&lead);

            prop_assert!((0.0..=10.0).contains(&breakdown.final_score));
            for (_, score) in breakdown.dimensions.labeled() {
                prop_assert!((0.0..=10.0).contains(&score));
            }
        }
    }
}
