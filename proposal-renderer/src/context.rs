//! Template context — serializable rendering payload built from [`ProposalContext`].

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use proposal_core::types::ProposalContext;

use crate::error::RenderError;

/// Flat rendering payload. Every placeholder the embedded template uses is
/// always present, so Tera never sees an undefined variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub company_name: String,
    pub contact_name: String,
    pub date: String,
    pub executive_summary: String,
    pub problem_statement: String,
    pub proposed_solution: String,
    pub timeline: String,
    pub investment: String,
    pub next_steps: String,
    /// Empty means the template falls back to its default bullets.
    pub case_studies: Vec<String>,
}

impl TemplateContext {
    /// Build a [`TemplateContext`], filling an empty `date` with today's local date.
    pub fn from_proposal(
        proposal: &ProposalContext,
        date_format: &str,
    ) -> Result<Self, RenderError> {
        Self::from_proposal_on(proposal, date_format, Local::now().date_naive())
    }

    /// Same as [`from_proposal`](Self::from_proposal) with an explicit "today".
    pub fn from_proposal_on(
        proposal: &ProposalContext,
        date_format: &str,
        today: NaiveDate,
    ) -> Result<Self, RenderError> {
        let date = if proposal.date.is_empty() {
            format_date(today, date_format)?
        } else {
            proposal.date.clone()
        };

        Ok(TemplateContext {
            company_name: proposal.company_name.0.clone(),
            contact_name: proposal.contact_name.clone(),
            date,
            executive_summary: proposal.executive_summary.clone(),
            problem_statement: proposal.problem_statement.clone(),
            proposed_solution: proposal.proposed_solution.clone(),
            timeline: proposal.timeline.clone(),
            investment: proposal.investment.clone(),
            next_steps: proposal.next_steps.clone(),
            case_studies: proposal.case_studies.clone(),
        })
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Format `date` with a strftime string, rejecting specifiers a date cannot
/// satisfy (e.g. `%H`) instead of panicking inside `Display`.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String, RenderError> {
    let items = StrftimeItems::new(format);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(RenderError::DateFormat(format.to_string()));
    }
    let mut out = String::new();
    write!(out, "{}", date.format_with_items(items))
        .map_err(|_| RenderError::DateFormat(format.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_core::types::CompanyName;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 7).expect("valid date")
    }

    #[test]
    fn empty_date_is_filled() {
        let proposal = ProposalContext {
            company_name: CompanyName::from("Acme"),
            ..ProposalContext::default()
        };
        let ctx = TemplateContext::from_proposal_on(&proposal, "%B %d, %Y", day()).unwrap();
        assert_eq!(ctx.date, "October 07, 2026");
        assert_eq!(ctx.company_name, "Acme");
    }

    #[test]
    fn supplied_date_is_kept() {
        let proposal = ProposalContext {
            date: "sometime next spring".to_string(),
            ..ProposalContext::default()
        };
        let ctx = TemplateContext::from_proposal_on(&proposal, "%Y", day()).unwrap();
        assert_eq!(ctx.date, "sometime next spring");
    }

    #[test]
    fn time_specifier_is_rejected() {
        let err = format_date(day(), "%H:%M").unwrap_err();
        assert!(matches!(err, RenderError::DateFormat(_)), "got: {err}");
    }

    #[test]
    fn malformed_format_is_rejected() {
        assert!(format_date(day(), "%Q").is_err());
    }

    #[test]
    fn to_tera_context_succeeds() {
        let ctx = TemplateContext::from_proposal_on(&ProposalContext::default(), "%Y", day())
            .unwrap();
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        assert!(tera_ctx.contains_key("case_studies"));
        assert!(tera_ctx.contains_key("next_steps"));
    }
}
