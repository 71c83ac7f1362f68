//! HTML report renderer.
//!
//! Renders the diagnostic report as one self-contained HTML page: inline
//! styles, a radar chart fed from the dimension scores, opportunity cards and
//! the risk section. Section-by-section string building against a fixed
//! template structure.

use chrono::{Datelike, Utc};

use crate::domain::report::{Opportunity, ReportDocument, RiskEntry};
use crate::ports::{RenderError, ReportRenderer};

/// Template-based implementation of ReportRenderer.
#[derive(Debug, Clone, Default)]
pub struct HtmlReportRenderer;

impl HtmlReportRenderer {
    /// Creates a new HTML report renderer.
    pub fn new() -> Self {
        Self
    }

    fn header(&self, report: &ReportDocument, generated_on: &str) -> String {
        format!(
            r#"  <header class="report-header">
    <p class="brand">AI Hunter</p>
    <h1>Diagnóstico de Maturidade em IA</h1>
    <p class="company">{company}</p>
    <p class="generated">Gerado em {generated_on}</p>
  </header>
"#,
            company = escape_html(&report.company.name),
        )
    }

    fn score_section(&self, report: &ReportDocument) -> String {
        format!(
            r#"  <section class="score">
    <h2>Pontuação Geral</h2>
    <div class="score-value">{score:.1}<span class="score-scale">/10</span></div>
  </section>
"#,
            score = report.final_score,
        )
    }

    fn introduction_section(&self, report: &ReportDocument) -> String {
        format!(
            r#"  <section class="introduction">
    <h2>Contexto de Mercado</h2>
    <p>{intro}</p>
  </section>
"#,
            intro = escape_html(&report.introduction),
        )
    }

    /// Radar chart over the five dimension scores.
    fn radar_section(&self, report: &ReportDocument) -> String {
        let labeled = report.dimensions.labeled();
        let labels: Vec<String> = labeled
            .iter()
            .map(|(label, _)| format!("\"{}\"", label))
            .collect();
        let values: Vec<String> = labeled
            .iter()
            .map(|(_, value)| format!("{:.1}", value))
            .collect();

        format!(
            r#"  <section class="radar">
    <h2>Dimensões Avaliadas</h2>
    <canvas id="radar-chart" width="420" height="420"></canvas>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
    <script>
      new Chart(document.getElementById("radar-chart"), {{
        type: "radar",
        data: {{
          labels: [{labels}],
          datasets: [{{
            label: "Pontuação",
            data: [{values}],
            fill: true,
            backgroundColor: "rgba(37, 99, 235, 0.2)",
            borderColor: "rgb(37, 99, 235)"
          }}]
        }},
        options: {{ scales: {{ r: {{ min: 0, max: 10 }} }} }}
      }});
    </script>
  </section>
"#,
            labels = labels.join(", "),
            values = values.join(", "),
        )
    }

    fn opportunity_card(&self, index: usize, opportunity: &Opportunity) -> String {
        format!(
            r#"      <article class="opportunity priority-{priority}">
        <h3>{index}. {title}</h3>
        <p>{description}</p>
        <ul>
          <li><strong>ROI estimado:</strong> {roi}</li>
          <li><strong>Prioridade:</strong> {priority}</li>
          <li><strong>Case de referência:</strong> {case}</li>
        </ul>
      </article>
"#,
            index = index + 1,
            title = escape_html(&opportunity.title),
            description = escape_html(&opportunity.description),
            roi = escape_html(&opportunity.roi),
            priority = escape_html(&opportunity.priority),
            case = escape_html(&opportunity.case_reference),
        )
    }

    fn opportunities_section(&self, report: &ReportDocument) -> String {
        let mut section = String::from(
            "  <section class=\"opportunities\">\n    <h2>Oportunidades Recomendadas</h2>\n",
        );
        for (index, opportunity) in report.opportunities.iter().enumerate() {
            section.push_str(&self.opportunity_card(index, opportunity));
        }
        section.push_str("  </section>\n");
        section
    }

    fn risk_entry(&self, risk: &RiskEntry) -> String {
        format!(
            r#"      <article class="risk">
        <h3>{title}</h3>
        <p>{description}</p>
      </article>
"#,
            title = escape_html(&risk.title),
            description = escape_html(&risk.description),
        )
    }

    fn risks_section(&self, report: &ReportDocument) -> String {
        let mut section =
            String::from("  <section class=\"risks\">\n    <h2>Pontos de Atenção</h2>\n");
        for risk in &report.risks {
            section.push_str(&self.risk_entry(risk));
        }
        section.push_str("  </section>\n");
        section
    }

    fn footer(&self, year: i32) -> String {
        format!(
            r#"  <footer>
    <p>&copy; {year} AI Hunter &mdash; Diagnóstico gerado automaticamente.</p>
  </footer>
"#,
        )
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(&self, report: &ReportDocument) -> Result<String, RenderError> {
        let now = Utc::now();
        let generated_on = now.format("%d/%m/%Y").to_string();

        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!(
            "  <title>Diagnóstico IA - {}</title>\n",
            escape_html(&report.company.name)
        ));
        html.push_str("  <style>\n");
        html.push_str(STYLESHEET);
        html.push_str("  </style>\n</head>\n<body>\n");

        html.push_str(&self.header(report, &generated_on));
        html.push_str(&self.score_section(report));
        html.push_str(&self.radar_section(report));
        html.push_str(&self.introduction_section(report));
        html.push_str(&self.opportunities_section(report));
        html.push_str(&self.risks_section(report));
        html.push_str(&self.footer(now.year()));

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

const STYLESHEET: &str = r#"    body { font-family: "Segoe UI", Roboto, sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }
    header.report-header { background: #111827; color: #f9fafb; padding: 2.5rem 2rem; text-align: center; }
    header .brand { text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.8rem; color: #93c5fd; }
    header .company { font-size: 1.3rem; margin-top: 0.5rem; }
    header .generated { color: #9ca3af; font-size: 0.85rem; }
    section { max-width: 760px; margin: 1.5rem auto; padding: 1.5rem 2rem; background: #ffffff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
    h2 { border-bottom: 2px solid #2563eb; padding-bottom: 0.4rem; }
    .score-value { font-size: 3.5rem; font-weight: 700; color: #2563eb; text-align: center; }
    .score-scale { font-size: 1.2rem; color: #6b7280; }
    .radar canvas { display: block; margin: 0 auto; max-width: 420px; }
    .opportunity { border-left: 4px solid #2563eb; padding-left: 1rem; margin-bottom: 1.2rem; }
    .opportunity.priority-alta { border-color: #dc2626; }
    .risk { border-left: 4px solid #f59e0b; padding-left: 1rem; margin-bottom: 1rem; }
    footer { text-align: center; color: #9ca3af; padding: 2rem 0; font-size: 0.85rem; }
"#;

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
