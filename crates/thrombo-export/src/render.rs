use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report::Report;
use crate::styles::DocumentStyles;

/// Built-in HTML layout.
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.html");

/// Render the report with the built-in layout.
pub fn render_html(report: &Report, styles: &DocumentStyles) -> Result<String, ExportError> {
    render_template("report.html", REPORT_TEMPLATE, report, styles)
}

/// Render a Tera template with a report.
///
/// The template sees `report` (title, details, tables) and `styles`.
/// Names ending in `.html` are autoescaped.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &Report,
    styles: &DocumentStyles,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::json!({
        "report": report,
        "styles": styles,
    });
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
