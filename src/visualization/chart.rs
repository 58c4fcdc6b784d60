use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::format::{format_br, NumberKind};
use crate::model::{RegimeRecord, RegimeTable};

/// Plotly.js build loaded by the report page
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const GRID_COLOR: &str = "#EBF0F8";
const CHART_HEIGHT_PX: u32 = 450;
/// Plotly number separators: decimal `,` then thousands `.`
const BR_SEPARATORS: &str = ",.";

/// Numeric field plotted on the y-axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    TaxValue,
    EffectiveRate,
}

impl ValueField {
    pub fn value(&self, record: &RegimeRecord) -> Decimal {
        match self {
            ValueField::TaxValue => record.tax_value,
            ValueField::EffectiveRate => record.effective_rate,
        }
    }

    /// Label format matching the field's unit
    pub fn number_kind(&self) -> NumberKind {
        match self {
            ValueField::TaxValue => NumberKind::Currency,
            ValueField::EffectiveRate => NumberKind::Percentage,
        }
    }

    /// Element id of the chart's container div
    pub fn chart_id(&self) -> &'static str {
        match self {
            ValueField::TaxValue => "tax-value-chart",
            ValueField::EffectiveRate => "effective-rate-chart",
        }
    }
}

/// A Plotly figure plus the id of the div it renders into
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(skip)]
    pub id: String,
    pub data: Vec<BarTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub text: Vec<String>,
    pub textposition: &'static str,
    pub marker: Marker,
    /// Highlight category per bar
    pub customdata: Vec<&'static str>,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub showlegend: bool,
    /// Decimal and thousands characters for axis ticks
    pub separators: &'static str,
    pub height: u32,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<&'static str>,
    pub gridcolor: &'static str,
    pub automargin: bool,
}

/// Build one bar chart comparing `field` across all regimes.
///
/// Bars are coloured by highlight category and labelled above with the
/// Brazilian-formatted value. With `y_as_percentage` the axis ticks use
/// Plotly's `.2%` format, which agrees with the percentage labels.
pub fn build_bar_chart(
    table: &RegimeTable,
    field: ValueField,
    title: &str,
    y_axis_label: &str,
    y_as_percentage: bool,
) -> ChartSpec {
    let records = table.records();
    let kind = field.number_kind();

    let trace = BarTrace {
        trace_type: "bar",
        x: records.iter().map(|r| r.name.clone()).collect(),
        y: records
            .iter()
            .map(|r| field.value(r).to_f64().unwrap_or_default())
            .collect(),
        text: records
            .iter()
            .map(|r| format_br(Some(field.value(r)), kind))
            .collect(),
        textposition: "outside",
        marker: Marker {
            color: records.iter().map(|r| r.highlight.color()).collect(),
        },
        customdata: records.iter().map(|r| r.highlight.label()).collect(),
        hovertemplate: "%{x}<br>%{text}<br>%{customdata}<extra></extra>",
    };

    ChartSpec {
        id: field.chart_id().to_string(),
        data: vec![trace],
        layout: Layout {
            title: Title { text: title.to_string() },
            showlegend: false,
            separators: BR_SEPARATORS,
            height: CHART_HEIGHT_PX,
            paper_bgcolor: "white",
            plot_bgcolor: "white",
            xaxis: Axis {
                title: None,
                tickformat: None,
                gridcolor: GRID_COLOR,
                automargin: true,
            },
            yaxis: Axis {
                title: Some(Title { text: y_axis_label.to_string() }),
                tickformat: y_as_percentage.then_some(".2%"),
                gridcolor: GRID_COLOR,
                automargin: true,
            },
        },
    }
}

/// The tax-value and effective-rate charts shown in the report, in order
pub fn reference_charts(table: &RegimeTable) -> [ChartSpec; 2] {
    [
        build_bar_chart(
            table,
            ValueField::TaxValue,
            "Comparativo do Valor Total de Impostos (R$)",
            "Valor do Imposto (R$)",
            false,
        ),
        build_bar_chart(
            table,
            ValueField::EffectiveRate,
            "Comparativo da Alíquota Efetiva (%)",
            "Alíquota Efetiva",
            true,
        ),
    ]
}

impl ChartSpec {
    /// Embeddable markup for this chart: a container div and the script that
    /// draws into it. Requires Plotly.js to be loaded by the page.
    pub fn to_fragment(&self) -> Result<String> {
        let data = script_safe_json(&self.data)?;
        let layout = script_safe_json(&self.layout)?;

        Ok(format!(
            r#"<div id="{id}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div>
            <script type="text/javascript">
                window.PLOTLYENV = window.PLOTLYENV || {{}};
                if (document.getElementById("{id}")) {{
                    Plotly.newPlot("{id}", {data}, {layout}, {{"responsive": true}});
                }}
            </script>"#,
            id = self.id,
            height = self.layout.height,
            data = data,
            layout = layout,
        ))
    }
}

/// JSON that cannot terminate the surrounding `<script>` element
fn script_safe_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What Plotly prints for a `.2%` tick at `value`, in Brazilian notation
    fn tick_label(value: f64) -> String {
        format!("{:.2}%", value * 100.0).replace('.', ",")
    }

    #[test]
    fn test_tax_chart_labels_every_record() {
        let table = RegimeTable::reference();
        let chart = build_bar_chart(&table, ValueField::TaxValue, "t", "y", false);
        let trace = &chart.data[0];

        assert_eq!(trace.x.len(), table.len());
        for (record, label) in table.records().iter().zip(&trace.text) {
            assert_eq!(label, &format_br(Some(record.tax_value), NumberKind::Currency));
        }
        assert_eq!(trace.text[0], "R$ 15.043,17");
        assert_eq!(trace.textposition, "outside");
        assert!(chart.layout.yaxis.tickformat.is_none());
    }

    #[test]
    fn test_colors_follow_highlight() {
        let table = RegimeTable::reference();
        let chart = build_bar_chart(&table, ValueField::TaxValue, "t", "y", false);
        assert_eq!(chart.data[0].marker.color, ["#28a745", "#007bff", "#007bff", "#007bff"]);
        assert!(!chart.layout.showlegend);
    }

    #[test]
    fn test_rate_ticks_agree_with_labels() {
        let table = RegimeTable::reference();
        let chart = build_bar_chart(&table, ValueField::EffectiveRate, "t", "y", true);
        let trace = &chart.data[0];

        assert_eq!(chart.layout.yaxis.tickformat, Some(".2%"));
        for (y, label) in trace.y.iter().zip(&trace.text) {
            assert_eq!(&tick_label(*y), label);
        }
        assert_eq!(trace.text[0], "11,30%");
    }

    #[test]
    fn test_fragment_is_not_a_document() {
        let table = RegimeTable::reference();
        let [tax, rate] = reference_charts(&table);
        let fragment = tax.to_fragment().unwrap();

        assert!(fragment.starts_with(r#"<div id="tax-value-chart""#));
        assert!(fragment.contains(r#"Plotly.newPlot("tax-value-chart""#));
        assert!(fragment.contains("R$ 15.043,17"));
        assert!(!fragment.contains("<html"));
        assert!(!fragment.contains("<!DOCTYPE"));

        let fragment = rate.to_fragment().unwrap();
        assert!(fragment.contains(r#""tickformat":".2%""#));
        assert!(fragment.contains("11,30%"));
    }

    #[test]
    fn test_fragment_escapes_closing_script() {
        let table = RegimeTable::from_rows([(
            "</script><b>",
            rust_decimal_macros::dec!(1),
            rust_decimal_macros::dec!(0.1),
        )]);
        let chart = build_bar_chart(&table, ValueField::TaxValue, "t", "y", false);
        let fragment = chart.to_fragment().unwrap();
        assert_eq!(fragment.matches("</script>").count(), 1);
    }

    #[test]
    fn test_axis_ticks_use_brazilian_separators() {
        let table = RegimeTable::reference();
        let [tax, rate] = reference_charts(&table);

        for chart in [&tax, &rate] {
            assert_eq!(chart.layout.separators, ",.");
            let fragment = chart.to_fragment().unwrap();
            assert!(fragment.contains(r#""separators":",.""#));
        }
    }

    #[test]
    fn test_x_axis_title_suppressed() {
        let table = RegimeTable::reference();
        let chart = build_bar_chart(&table, ValueField::TaxValue, "t", "Eixo", false);
        let json = serde_json::to_value(&chart.layout).unwrap();
        assert!(json["xaxis"].get("title").is_none());
        assert_eq!(json["yaxis"]["title"]["text"], "Eixo");
    }
}
