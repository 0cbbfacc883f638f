//! Domain types for proposal rendering.
//!
//! Every [`ProposalContext`] field is `#[serde(default)]`: a context file may
//! omit any key and the field renders as empty text.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// The client company a proposal is prepared for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(pub String);

impl CompanyName {
    /// File-name-safe form: every non-alphanumeric char becomes `_`.
    ///
    /// An empty name yields `proposal`.
    pub fn slug(&self) -> String {
        if self.0.is_empty() {
            return "proposal".to_string();
        }
        self.0
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CompanyName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CompanyName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// ProposalContext
// ---------------------------------------------------------------------------

/// Fields that must be non-blank for a complete proposal, in template order.
pub const REQUIRED_FIELDS: &[&str] = &[
    "company_name",
    "executive_summary",
    "problem_statement",
    "proposed_solution",
    "timeline",
    "investment",
    "next_steps",
];

/// Flat mapping of placeholder values for one render pass.
///
/// Prose fields are inserted verbatim; no trimming or escaping is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProposalContext {
    #[serde(default)]
    pub company_name: CompanyName,
    /// Not referenced by the default template; available to overrides.
    #[serde(default)]
    pub contact_name: String,
    /// Free-form date text. Empty means "fill in today's date at render time".
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub executive_summary: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub proposed_solution: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub investment: String,
    #[serde(default)]
    pub next_steps: String,
    /// Case-study bullet lines. `null`, absent and `[]` all mean "use defaults".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub case_studies: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProposalContext {
    /// Value of a required field by name. Unknown names return `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "company_name" => &self.company_name.0,
            "executive_summary" => &self.executive_summary,
            "problem_statement" => &self.problem_statement,
            "proposed_solution" => &self.proposed_solution,
            "timeline" => &self.timeline,
            "investment" => &self.investment,
            "next_steps" => &self.next_steps,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Required fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| self.field(name).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    /// True when the case-study loop runs instead of the default bullets.
    pub fn has_case_studies(&self) -> bool {
        !self.case_studies.is_empty()
    }

    /// File-name-safe form of the company name, used in generated output
    /// names. See [`CompanyName::slug`].
    pub fn safe_company_slug(&self) -> String {
        self.company_name.slug()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn full_context() -> ProposalContext {
        ProposalContext {
            company_name: CompanyName::from("Acme Corp"),
            contact_name: "Jane Doe".to_string(),
            date: "March 3, 2025".to_string(),
            executive_summary: "summary".to_string(),
            problem_statement: "problem".to_string(),
            proposed_solution: "solution".to_string(),
            timeline: "twelve weeks".to_string(),
            investment: "$40k-$60k".to_string(),
            next_steps: "book a call".to_string(),
            case_studies: vec![],
        }
    }

    #[test]
    fn company_name_display() {
        assert_eq!(CompanyName::from("Acme").to_string(), "Acme");
    }

    #[test]
    fn slug_replaces_non_alphanumerics() {
        assert_eq!(CompanyName::from("Acme Corp, Inc.").slug(), "Acme_Corp__Inc_");
        assert_eq!(CompanyName::from("").slug(), "proposal");
        let p = ProposalContext {
            company_name: CompanyName::from("Globex/EU"),
            ..ProposalContext::default()
        };
        assert_eq!(p.safe_company_slug(), "Globex_EU");
        assert_eq!(ProposalContext::default().safe_company_slug(), "proposal");
    }

    #[test]
    fn full_context_has_no_missing_fields() {
        assert!(full_context().missing_fields().is_empty());
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let mut ctx = full_context();
        ctx.timeline = "  \n".to_string();
        ctx.company_name = CompanyName::default();
        assert_eq!(ctx.missing_fields(), vec!["company_name", "timeline"]);
    }

    #[test]
    fn date_and_contact_are_optional() {
        let mut ctx = full_context();
        ctx.date.clear();
        ctx.contact_name.clear();
        assert!(ctx.missing_fields().is_empty());
    }

    #[test]
    fn empty_mapping_deserializes_to_defaults() {
        let ctx: ProposalContext = serde_yaml::from_str("{}").expect("parse");
        assert_eq!(ctx, ProposalContext::default());
        assert_eq!(ctx.missing_fields(), REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn null_case_studies_is_empty() {
        let ctx: ProposalContext =
            serde_yaml::from_str("company_name: Acme\ncase_studies: ~\n").expect("parse");
        assert!(!ctx.has_case_studies());
    }

    #[test]
    fn unknown_field_name_returns_none() {
        assert!(full_context().field("markdown_content").is_none());
    }
}
