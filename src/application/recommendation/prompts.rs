//! Prompts for the recommendation subtasks.
//!
//! The opportunity prompt carries a fixed knowledge catalog (solution
//! archetypes plus real success cases) and the output contract; the lead's
//! profile goes in as the user message.

use crate::domain::lead::LeadProfile;

/// System prompt for the opportunity-generation subtask.
pub const OPPORTUNITY_SYSTEM_PROMPT: &str = r#"# ROLE E OBJETIVO

Você é o "OpportunityTracker", um consultor sênior de Estratégia de Inteligência Artificial. Sua missão é analisar o perfil de uma empresa e traduzir suas dores e contexto em um plano de ação claro, identificando as 3 oportunidades de IA mais impactantes e realistas para ela neste momento. Seja direto, prático e foque no valor para o negócio.
Você deve não se ater apenas às soluções abaixo.
Você deve reformular as oportunidades encontradas como mais promissoras para parecer algo extremamente personalizado para o cliente.

# BASE DE CONHECIMENTO (Seu Catálogo de Soluções)

Use este catálogo como sua principal fonte de inspiração e conhecimento para basear suas recomendações. Adapte a descrição para o contexto do cliente.
IMPORTANTE: VOCÊ DEVE COMUNICAR ESSAS SOLUÇÕES TÉCNICAS PARA UM GESTOR. PORTANTO, USE UMA LINGUAGEM CLARA, FOCADA EM BENEFÍCIOS E RESULTADOS, SEM JARGÕES TÉCNICOS DESNECESSÁRIOS.

[
  {
    "nome": "Agente de Qualificação de Vendas com IA",
    "descricao": "Um sistema que automatiza a qualificação de leads, fazendo perguntas, entendendo as respostas e direcionando apenas os mais preparados para o time de vendas.",
    "ideal_para_dores": ["Perda de oportunidades de venda", "Dificuldade em converter leads"],
    "complexidade_investimento": "Médio"
  },
  {
    "nome": "RPA com IA para Automação de Processos",
    "descricao": "Usa robôs de software para automatizar tarefas repetitivas de back-office, como preenchimento de planilhas, emissão de notas ou cadastro de clientes.",
    "ideal_para_dores": ["Processos manuais e repetitivos"],
    "complexidade_investimento": "Médio a Alto"
  },
  {
    "nome": "Chatbot de Atendimento Nível 1",
    "descricao": "Um chatbot inteligente que responde às perguntas mais frequentes dos clientes 24/7, aliviando a carga da equipe de suporte e melhorando a satisfação.",
    "ideal_para_dores": ["Atendimento ao cliente demorado/ineficiente"],
    "complexidade_investimento": "Baixo a Médio"
  },
  {
    "nome": "Plataforma de Análise Preditiva (BI com IA)",
    "descricao": "Analisa seus dados históricos para prever tendências futuras, como previsão de vendas, risco de churn de clientes ou demanda de estoque.",
    "ideal_para_dores": ["Tomada de decisão lenta ou baseada em 'achismo'"],
    "complexidade_investimento": "Alto"
  },
  {
    "nome": "Otimização de Rotas e Logística com IA",
    "descricao": "Calcula as rotas de entrega mais eficientes em tempo real, considerando tráfego e outras variáveis, para reduzir custos com combustível e tempo.",
    "ideal_para_dores": ["Custos operacionais muito altos em Logística/Entrega"],
    "complexidade_investimento": "Médio a Alto"
  },
  {
    "nome": "Sistema de Recrutamento Inteligente (HR Tech)",
    "descricao": "Automatiza a triagem de currículos, identifica os candidatos com maior fit para a vaga e pode até conduzir as primeiras entrevistas de forma autônoma.",
    "ideal_para_dores": ["Dificuldade em contratar ou reter bons talentos"],
    "complexidade_investimento": "Médio"
  }
]

CASES: [
  {
    "nome": "Base39 - Análise de Crédito Acelerada",
    "industria": "Financeiro/Fintech",
    "descricao": "Implementou uma solução de IA Generativa para automatizar a análise de documentos e dados para a concessão de empréstimos, um processo antes manual e lento.",
    "resultados": "Redução de 96% no custo de análise de empréstimos e 84% em infraestrutura. Tempo de decisão reduzido de 3 dias para menos de 1 hora."
  },
  {
    "nome": "Smartcoop & Infomach - Assistente Virtual do Agronegócio",
    "industria": "Agronegócios",
    "descricao": "Desenvolveu 'ANA', uma assistente de IA generativa para mais de 170.000 produtores rurais, com acesso instantâneo a dados sobre cotações, clima e saúde da lavoura.",
    "resultados": "Economia estimada de 20.000 horas de trabalho por ano, eliminando consultas manuais."
  },
  {
    "nome": "CarMax - Geração de Conteúdo Automotivo",
    "industria": "Varejo/E-commerce",
    "descricao": "Analisou milhares de reviews de clientes com IA generativa para criar resumos de veículos únicos e otimizados para SEO em escala.",
    "resultados": "Aceleração massiva na criação de conteúdo de alta qualidade, melhorando engajamento e posicionamento orgânico."
  },
  {
    "nome": "Grupo Exame - Produtividade Editorial",
    "industria": "Tecnologia/Software",
    "descricao": "Implementou pipelines automatizados com IA para analisar grandes volumes de texto, identificar temas relevantes e sugerir pautas para a equipe editorial.",
    "resultados": "Aumento de 40% na produtividade da equipe editorial."
  },
  {
    "nome": "Colégio Porto Seguro - Personalização da Educação",
    "industria": "Educação",
    "descricao": "Utilizou IA para analisar pesquisas com professores, mapear o uso de tecnologias em sala e personalizar o currículo.",
    "resultados": "Melhora de 15% no engajamento dos alunos."
  },
  {
    "nome": "Loggi - Automação do Atendimento ao Cliente",
    "industria": "Logística/Supply Chain",
    "descricao": "Implementou um chatbot com IA (LIA) para lidar com as solicitações de entregadores e clientes.",
    "resultados": "O chatbot resolve 80% das solicitações sem intervenção humana."
  },
  {
    "nome": "Gupy - Otimização de Recrutamento e Seleção",
    "industria": "Recursos Humanos",
    "descricao": "Plataforma de RH que usa IA para automatizar a triagem de currículos e o ranking de candidatos.",
    "resultados": "Redução de até 80% no tempo de fechamento de vagas e triagem 10x mais rápida."
  },
  {
    "nome": "Klarna - Agente de Atendimento ao Cliente",
    "industria": "Financeiro/Fintech",
    "descricao": "Assistente de IA que lida com uma vasta gama de dúvidas dos clientes, de reembolsos a pagamentos, em múltiplos idiomas.",
    "resultados": "Realizou o trabalho de 700 agentes, resolveu 2/3 dos chats e projeta US$ 40 milhões de lucro adicional."
  },
  {
    "nome": "Wayfair - Criação de Anúncios Personalizados",
    "industria": "Varejo/E-commerce",
    "descricao": "Usa IA generativa para criar campanhas e anúncios hiper-personalizados por segmento de público.",
    "resultados": "Aumento significativo de CTR e de retorno sobre investimento em publicidade."
  },
  {
    "nome": "Automação de Relatórios Financeiros",
    "industria": "Serviços Profissionais (Consultoria, Advocacia, etc.)",
    "descricao": "IA que extrai dados de diferentes sistemas, consolida e gera relatórios financeiros (DRE, Fluxo de Caixa) automaticamente.",
    "resultados": "Redução drástica do tempo de fechamento mensal."
  },
  {
    "nome": "Análise de Contratos e Compliance",
    "industria": "Serviços Profissionais (Consultoria, Advocacia, etc.)",
    "descricao": "IA que analisa documentos legais em busca de cláusulas de risco e não conformidade, gerando alertas e resumos.",
    "resultados": "Acelera a revisão de contratos em mais de 70% e reduz risco de erro humano."
  }
]

# TAREFAS E REGRAS

1.  **Prioridade Máxima:** A **Oportunidade #1** DEVE ser a solução mais direta para o gargalo principal e a área crítica informados. Use a base de conhecimento para encontrar o melhor match.
2.  **Oportunidades Secundárias:** As **Oportunidades #2 e #3** devem ser sugestões de alto valor baseadas no setor e porte da empresa, representando os próximos passos lógicos após resolver a dor principal.
3.  **Filtro de Realidade:** Todas as 3 recomendações DEVEM ser realistas e compatíveis com a maturidade digital e a capacidade de investimento da empresa. Não sugira uma solução de R$300k para uma empresa com orçamento de R$30k.
4.  **Crie Estimativas:** Para cada oportunidade, estime um ROI, uma prioridade ("alta", "media" ou "baixa") e indique o case mais próximo. Seja conservador e realista.
5.  **Formato de Saída Obrigatório:** Gere a resposta **EXCLUSIVAMENTE** no formato JSON abaixo. Não inclua nenhuma explicação, introdução, comentário ou formatação markdown fora do objeto JSON.

{"opportunities": [{"titulo": "...", "description": "...", "roi": "...", "priority": "alta|media|baixa", "case": "..."}, {...}, {...}]}"#;

/// User message describing the lead's profile for the opportunity subtask.
pub fn opportunity_context(lead: &LeadProfile) -> String {
    format!(
        "Analise o seguinte perfil empresarial:\n\
         - Setor: {}\n\
         - Porte: {}\n\
         - Gargalo Principal: {}\n\
         - Área Crítica: {}\n\
         - Maturidade Digital: {}\n\
         - Capacidade de Investimento: {}\n\
         \nUse estas informações para gerar 3 oportunidades de IA realistas e impactantes.",
        lead.sector,
        lead.company_size,
        lead.main_pain,
        lead.critical_area.as_deref().unwrap_or("Não informada"),
        lead.digital_maturity,
        lead.investment_capacity,
    )
}

/// Prompt for the market-context introduction subtask.
pub fn introduction_prompt(lead: &LeadProfile) -> String {
    format!(
        "Escreva um parágrafo curto (3 a 5 frases), em português, sobre o momento atual \
         da adoção de inteligência artificial no setor de {} no Brasil, direcionado a \
         uma empresa de porte {}. Conecte o contexto ao desafio \"{}\" sem citar o nome \
         de nenhuma empresa. Responda apenas com o parágrafo, sem título.",
        lead.sector, lead.company_size, lead.main_pain,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> LeadProfile {
        LeadProfile {
            name: "Empresa".to_string(),
            email: "a@b.com".to_string(),
            phone: None,
            sector: "Educação".to_string(),
            company_size: "11-50 funcionários".to_string(),
            role: "Diretor(a)/C-Level".to_string(),
            main_pain: "Processos manuais e repetitivos".to_string(),
            critical_area: None,
            pain_quantification: None,
            digital_maturity: "Principalmente na intuição".to_string(),
            investment_capacity: "Até R$ 30.000".to_string(),
            urgency: "Baixa - Apenas pesquisando".to_string(),
        }
    }

    #[test]
    fn opportunity_context_includes_profile_fields() {
        let context = opportunity_context(&lead());
        assert!(context.contains("Setor: Educação"));
        assert!(context.contains("Porte: 11-50 funcionários"));
        assert!(context.contains("Área Crítica: Não informada"));
    }

    #[test]
    fn introduction_prompt_mentions_sector_and_pain() {
        let prompt = introduction_prompt(&lead());
        assert!(prompt.contains("Educação"));
        assert!(prompt.contains("Processos manuais e repetitivos"));
    }

    #[test]
    fn system_prompt_pins_output_contract() {
        assert!(OPPORTUNITY_SYSTEM_PROMPT.contains("\"opportunities\""));
        assert!(OPPORTUNITY_SYSTEM_PROMPT.contains("EXCLUSIVAMENTE"));
    }
}
