//! `proposal check` — report which required context fields are filled in.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use proposal_core::{load_context, ProposalContext, REQUIRED_FIELDS};

/// Arguments for `proposal check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Context file (YAML or JSON).
    pub context: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let proposal = load_context(&self.context)
            .with_context(|| format!("failed to load context '{}'", self.context.display()))?;

        let report = build_report(&proposal);
        if self.json {
            print_json(&report)?;
        } else {
            print_table(&report);
        }

        if !report.missing.is_empty() {
            bail!(
                "{} required field(s) missing: {}",
                report.missing.len(),
                report.missing.join(", ")
            );
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct FieldStatus {
    field: &'static str,
    set: bool,
    chars: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    company_name: String,
    fields: Vec<FieldStatus>,
    missing: Vec<&'static str>,
    date: Option<String>,
    case_studies: usize,
}

#[derive(Tabled)]
struct FieldTableRow {
    #[tabled(rename = "field")]
    field: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "length")]
    length: usize,
}

fn build_report(proposal: &ProposalContext) -> CheckReport {
    let missing = proposal.missing_fields();
    let fields = REQUIRED_FIELDS
        .iter()
        .map(|&field| FieldStatus {
            field,
            set: !missing.contains(&field),
            chars: proposal.field(field).map_or(0, |v| v.chars().count()),
        })
        .collect();

    CheckReport {
        company_name: proposal.company_name.0.clone(),
        fields,
        missing,
        date: Some(proposal.date.clone()).filter(|d| !d.is_empty()),
        case_studies: proposal.case_studies.len(),
    }
}

fn print_json(report: &CheckReport) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(report).context("failed to serialize check JSON")?
    );
    Ok(())
}

fn print_table(report: &CheckReport) {
    let company = if report.company_name.is_empty() {
        "(unnamed)".to_string()
    } else {
        report.company_name.clone()
    };
    println!("{}", company.bold());

    let rows: Vec<FieldTableRow> = report
        .fields
        .iter()
        .map(|f| FieldTableRow {
            field: f.field.to_string(),
            status: if f.set { "SET".to_string() } else { "MISSING".to_string() },
            length: f.chars,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    match &report.date {
        Some(date) => println!("date: {date}"),
        None => println!("date: {}", "today (filled at render time)".bright_black()),
    }
    if report.case_studies == 0 {
        println!("case studies: {}", "none (default bullets)".bright_black());
    } else {
        println!("case studies: {}", report.case_studies);
    }

    if report.missing.is_empty() {
        println!("{} all required fields set", "■".green().bold());
    } else {
        println!(
            "{} {} missing; they will render empty (use --strict to refuse)",
            "■".red().bold(),
            report.missing.len()
        );
    }
}
