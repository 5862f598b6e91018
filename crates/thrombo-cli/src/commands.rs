use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

use thrombo_export::docx::generate_docx;
use thrombo_export::render::{render_html, render_template};
use thrombo_export::spreadsheet::{append_row, flatten_row};
use thrombo_export::{Report, ReportConfig, build_report};

use crate::intake::read_intake;

pub struct AssessArgs {
    pub config: PathBuf,
    pub intake: PathBuf,
    pub html: Option<PathBuf>,
    pub docx: Option<PathBuf>,
    pub append: bool,
    pub print_json: bool,
}

pub fn assess(args: &AssessArgs) -> Result<()> {
    let config = ReportConfig::load(&args.config)?;
    let intake = read_intake(&args.intake)?;

    let observation = intake.observation.validated()?;
    let header = intake.header.into_report_header();

    let assessment = thrombo_scoring::assess(&observation)?;
    let report = build_report(&config.report_title, &header, &observation, &assessment);

    if args.print_json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_summary(&report);
    }

    if let Some(path) = &args.html {
        let html = match &config.html_template {
            Some(template) => {
                let content = std::fs::read_to_string(template)
                    .wrap_err_with(|| format!("failed to read template {}", template.display()))?;
                render_template("custom.html", &content, &report, &config.document_styles)?
            }
            None => render_html(&report, &config.document_styles)?,
        };
        write_output(path, html.as_bytes())?;
    }

    if let Some(path) = &args.docx {
        let bytes = generate_docx(&report, &config.document_styles)?;
        write_output(path, &bytes)?;
    }

    if args.append {
        let row = flatten_row(&header, &observation, &assessment);
        append_row(&config.spreadsheet_path, &row)?;
    }

    Ok(())
}

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "{} already exists; pass --force to overwrite",
            path.display()
        ));
    }
    ReportConfig::default().save(path)?;
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "report written");
    Ok(())
}

fn print_summary(report: &Report) {
    println!("{}", report.title);
    for detail in &report.details {
        println!("{}: {}", detail.label, detail.value);
    }
    for table in &report.tables {
        println!();
        println!("## {}", table.title);
        for row in &table.rows {
            for (header, cell) in table.headers.iter().zip(row) {
                println!("  {header}: {cell}");
            }
            println!();
        }
    }
}
