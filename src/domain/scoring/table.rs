//! Static score lookup table.
//!
//! Each category maps answer substrings to point values. Matching is
//! first-match-wins over the declaration order below, so the tables are kept
//! as ordered slices rather than maps: reordering entries changes behavior.

/// A questionnaire category with a point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    Sector,
    CompanySize,
    Role,
    MainPain,
    PainQuantification,
    DigitalMaturity,
    Investment,
    Urgency,
}

impl ScoreCategory {
    /// Ordered `(answer substring, points)` pairs for this category.
    pub fn entries(self) -> &'static [(&'static str, f64)] {
        match self {
            ScoreCategory::Sector => SECTOR,
            ScoreCategory::CompanySize => COMPANY_SIZE,
            ScoreCategory::Role => ROLE,
            ScoreCategory::MainPain => MAIN_PAIN,
            ScoreCategory::PainQuantification => PAIN_QUANTIFICATION,
            ScoreCategory::DigitalMaturity => DIGITAL_MATURITY,
            ScoreCategory::Investment => INVESTMENT,
            ScoreCategory::Urgency => URGENCY,
        }
    }

    /// Highest point value achievable in this category, used to normalize
    /// dimension scores onto the 0-10 scale.
    pub fn max_points(self) -> f64 {
        match self {
            ScoreCategory::Sector => 1.0,
            ScoreCategory::CompanySize => 5.0,
            ScoreCategory::Role => 3.0,
            ScoreCategory::MainPain => 2.0,
            ScoreCategory::PainQuantification => 3.0,
            ScoreCategory::DigitalMaturity => 2.0,
            ScoreCategory::Investment => 3.0,
            ScoreCategory::Urgency => 2.0,
        }
    }
}

const SECTOR: &[(&str, f64)] = &[
    ("Indústria/Manufatura", 1.0),
    ("Varejo/E-commerce", 1.0),
    ("Serviços Profissionais", 1.0),
    ("Saúde/Medicina", 1.0),
    ("Educação", 1.0),
    ("Financeiro/Fintech", 1.0),
    ("Logística/Supply Chain", 1.0),
    ("Construção/Imobiliário", 1.0),
    ("Tecnologia/Software", 1.0),
    ("Alimentação/Restaurantes", 1.0),
    ("Marketing/Agências", 1.0),
    ("Recursos Humanos", 1.0),
    ("Consultoria Empresarial", 1.0),
    ("Agronegócios", 1.0),
    ("Manutenção/Serviços Técnicos", 1.0),
    ("Outros", 1.0),
];

const COMPANY_SIZE: &[(&str, f64)] = &[
    ("1-10 funcionários", 1.0),
    ("11-50 funcionários", 2.0),
    ("51-250 funcionários", 3.0),
    ("251-500 funcionários", 4.0),
    ("+500 funcionários", 5.0),
];

const ROLE: &[(&str, f64)] = &[
    ("Sócio(a)/CEO/Fundador(a)", 3.0),
    ("Diretor(a)/C-Level", 2.5),
    ("Gerente/Coordenador(a)", 2.0),
    ("Analista/Especialista", 1.0),
    ("Estagiário/Trainee", 0.5),
    ("Consultor/Freelancer", 1.5),
];

const MAIN_PAIN: &[(&str, f64)] = &[
    ("Processos manuais e repetitivos", 2.0),
    ("Perda de oportunidades de venda", 2.0),
    ("Custos operacionais muito altos", 2.0),
    ("Dificuldade em entender clientes", 2.0),
    ("Tomada de decisão lenta ou baseada em 'achismo'", 2.0),
    ("Atendimento ao cliente demorado/ineficiente", 2.0),
    ("Dificuldade em contratar ou reter bons talentos", 1.0),
    ("Problemas de compliance/regulamentação", 1.0),
    ("Não temos grandes gargalos no momento", 0.0),
];

const PAIN_QUANTIFICATION: &[(&str, f64)] = &[
    ("Sim, é um custo significativo (>R$ 10k/mês)", 3.0),
    ("Sim, é um custo moderado (<R$ 10k/mês)", 2.5),
    ("Temos uma estimativa do tempo perdido", 2.5),
    ("Não consigo medir, mas o impacto é alto", 2.0),
];

const DIGITAL_MATURITY: &[(&str, f64)] = &[
    ("Principalmente na intuição", 0.0),
    ("Usamos relatórios básicos e planilhas", 0.5),
    ("Temos sistemas centralizados (CRM/ERP)", 1.0),
    ("Temos cultura de dados, com dashboards e BI", 1.5),
    ("Já usamos alguns insights automatizados/IA", 2.0),
];

const INVESTMENT: &[(&str, f64)] = &[
    ("Estamos em fase de estudo, sem orçamento", 0.5),
    ("Até R$ 30.000", 1.0),
    ("Entre R$ 30.000 e R$ 100.000", 2.0),
    ("Entre R$ 100.000 e R$ 300.000", 2.5),
    ("Acima de R$ 300.000", 3.0),
    ("Dependeria do ROI demonstrado", 1.5),
];

const URGENCY: &[(&str, f64)] = &[
    ("Crítica! Para ontem", 2.0),
    ("Alta - Próximos 3 meses", 1.5),
    ("Média - Próximos 6-12 meses", 1.0),
    ("Baixa - Apenas pesquisando", 0.5),
    ("Vai depender da proposta", 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ScoreCategory; 8] = [
        ScoreCategory::Sector,
        ScoreCategory::CompanySize,
        ScoreCategory::Role,
        ScoreCategory::MainPain,
        ScoreCategory::PainQuantification,
        ScoreCategory::DigitalMaturity,
        ScoreCategory::Investment,
        ScoreCategory::Urgency,
    ];

    #[test]
    fn every_category_has_entries() {
        for category in ALL {
            assert!(!category.entries().is_empty(), "{category:?}");
        }
    }

    #[test]
    fn max_points_matches_table_maximum() {
        for category in ALL {
            let table_max = category
                .entries()
                .iter()
                .map(|(_, points)| *points)
                .fold(f64::MIN, f64::max);
            assert_eq!(category.max_points(), table_max, "{category:?}");
        }
    }

    #[test]
    fn role_table_preserves_declaration_order() {
        let entries = ScoreCategory::Role.entries();
        assert_eq!(entries[0].0, "Sócio(a)/CEO/Fundador(a)");
        assert_eq!(entries[3].0, "Analista/Especialista");
    }
}
