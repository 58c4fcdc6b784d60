use htmlize::escape_text;

use crate::visualization::chart::PLOTLY_CDN_URL;
use crate::visualization::templates::{REPORT_TEMPLATE, STYLES_CSS};

/// Page-level text: document title and the header banner
#[derive(Debug, Clone)]
pub struct ReportPage {
    pub title: String,
    pub heading: String,
    pub intro: String,
}

impl ReportPage {
    pub fn reference() -> Self {
        Self {
            title: "Dashboard Comparativo Tributário - Apresentação".to_string(),
            heading: "Análise Comparativa de Regimes Tributários".to_string(),
            intro: "Simulação de Custos: Otimização Tributária".to_string(),
        }
    }
}

/// One card of the report: a heading, a sentence and an embedded chart
#[derive(Debug, Clone)]
pub struct ReportCard {
    pub heading: String,
    pub description: String,
    /// Chart markup, inserted verbatim
    pub fragment: String,
}

/// Cards for the tax-value and effective-rate fragments, in that order
pub fn reference_cards(tax_fragment: String, rate_fragment: String) -> [ReportCard; 2] {
    [
        ReportCard {
            heading: "💰 Valor Absoluto do Imposto (R$)".to_string(),
            description: "O custo total em Reais para cada Regime de Tributação simulado."
                .to_string(),
            fragment: tax_fragment,
        },
        ReportCard {
            heading: "📈 Alíquota Efetiva (%)".to_string(),
            description: "A porcentagem real que a empresa paga em impostos sobre a Receita."
                .to_string(),
            fragment: rate_fragment,
        },
    ]
}

/// Render the full HTML document.
///
/// Text fields are escaped; fragments are substituted last so their
/// contents are never scanned for placeholders.
pub fn render_report(page: &ReportPage, cards: &[ReportCard; 2]) -> String {
    let [first, second] = cards;

    REPORT_TEMPLATE
        .replace("/* __STYLES_PLACEHOLDER__ */", STYLES_CSS.trim_end())
        .replace("__PLOTLY_SRC__", PLOTLY_CDN_URL)
        .replace("__TITLE__", &escape_text(page.title.as_str()))
        .replace("__HEADING__", &escape_text(page.heading.as_str()))
        .replace("__INTRO__", &escape_text(page.intro.as_str()))
        .replace("__CARD_0_HEADING__", &escape_text(first.heading.as_str()))
        .replace("__CARD_0_DESCRIPTION__", &escape_text(first.description.as_str()))
        .replace("__CARD_1_HEADING__", &escape_text(second.heading.as_str()))
        .replace("__CARD_1_DESCRIPTION__", &escape_text(second.description.as_str()))
        .replace("<!-- __CARD_0_FRAGMENT__ -->", &first.fragment)
        .replace("<!-- __CARD_1_FRAGMENT__ -->", &second.fragment)
}
