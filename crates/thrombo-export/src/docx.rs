use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow,
};

use crate::error::ExportError;
use crate::report::{Report, ReportTable};
use crate::styles::DocumentStyles;

/// Generate a DOCX document with the report header and one captioned
/// table per report section.
pub fn generate_docx(report: &Report, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.title_size))
        .add_style(heading_style("Heading2", "heading 2", styles.caption_size));

    let title = heading_paragraph(&report.title, "Heading1", styles);
    docx = docx.add_paragraph(title);

    for detail in &report.details {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Left)
                .add_run(text_run(&format!("{}: ", detail.label), styles).bold())
                .add_run(text_run(&detail.value, styles)),
        );
    }

    for table in &report.tables {
        docx = docx
            .add_paragraph(Paragraph::new())
            .add_paragraph(heading_paragraph(&table.title, "Heading2", styles))
            .add_table(build_table(table, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(
        bytes = bytes.len(),
        tables = report.tables.len(),
        "docx generated"
    );
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    let run = Run::new()
        .add_text(text)
        .fonts(RunFonts::new().ascii(&styles.heading_font));
    Paragraph::new().style(style_id).add_run(run)
}

fn text_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

fn cell(run: Run) -> TableCell {
    let paragraph = Paragraph::new().add_run(run);
    TableCell::new().add_paragraph(paragraph)
}

fn build_table(table: &ReportTable, styles: &DocumentStyles) -> Table {
    let header = TableRow::new(
        table
            .headers
            .iter()
            .map(|h| cell(text_run(h, styles).bold()))
            .collect(),
    );

    let rows = table.rows.iter().map(|row| {
        let cells = row.iter().map(|c| cell(text_run(c, styles))).collect();
        TableRow::new(cells)
    });

    Table::new(std::iter::once(header).chain(rows).collect())
}
