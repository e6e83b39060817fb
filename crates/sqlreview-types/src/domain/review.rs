use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{ReportId, SqlId};
use crate::Timestamp;

/// Assessment status of a single report section.
///
/// Reports are produced by an LLM, so anything outside the closed set
/// (including `"error"`) decodes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Excellent,
    Good,
    NeedsImprovement,
    HasIssues,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The fixed, ordered catalog of report sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSection {
    OverallAssessment,
    Consistency,
    Conventions,
    Performance,
    Security,
    Readability,
    Maintainability,
}

impl ReportSection {
    /// Render order
    pub const ORDERED: [ReportSection; 7] = [
        ReportSection::OverallAssessment,
        ReportSection::Consistency,
        ReportSection::Conventions,
        ReportSection::Performance,
        ReportSection::Security,
        ReportSection::Readability,
        ReportSection::Maintainability,
    ];

    /// Payload key
    pub fn key(&self) -> &'static str {
        match self {
            ReportSection::OverallAssessment => "overall_assessment",
            ReportSection::Consistency => "consistency",
            ReportSection::Conventions => "conventions",
            ReportSection::Performance => "performance",
            ReportSection::Security => "security",
            ReportSection::Readability => "readability",
            ReportSection::Maintainability => "maintainability",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionAssessment {
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<ReviewStatus>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub suggestions: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmInfo {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Review report, either freshly produced (`review_result`) or fetched by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewReport {
    #[serde(default)]
    pub id: Option<ReportId>,
    #[serde(default)]
    pub sql_statement_id: Option<SqlId>,
    #[serde(default)]
    pub overall_assessment: Option<SectionAssessment>,
    #[serde(default)]
    pub consistency: Option<SectionAssessment>,
    #[serde(default)]
    pub conventions: Option<SectionAssessment>,
    #[serde(default)]
    pub performance: Option<SectionAssessment>,
    #[serde(default)]
    pub security: Option<SectionAssessment>,
    #[serde(default)]
    pub readability: Option<SectionAssessment>,
    #[serde(default)]
    pub maintainability: Option<SectionAssessment>,
    #[serde(default)]
    pub llm_info: Option<LlmInfo>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub optimized_sql: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl ReviewReport {
    pub fn section(&self, section: ReportSection) -> Option<&SectionAssessment> {
        match section {
            ReportSection::OverallAssessment => self.overall_assessment.as_ref(),
            ReportSection::Consistency => self.consistency.as_ref(),
            ReportSection::Conventions => self.conventions.as_ref(),
            ReportSection::Performance => self.performance.as_ref(),
            ReportSection::Security => self.security.as_ref(),
            ReportSection::Readability => self.readability.as_ref(),
            ReportSection::Maintainability => self.maintainability.as_ref(),
        }
    }
}

/// Response of `POST /api/reviews/sql/{id}/review`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub report_id: ReportId,
    pub review_result: ReviewReport,
}

/// Entry of `GET /api/reviews/sql/{id}/history` (newest first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub id: ReportId,
    #[serde(default, deserialize_with = "lenient_status")]
    pub overall_status: Option<ReviewStatus>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub llm_provider: Option<String>,
    #[serde(default)]
    pub llm_model: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ReviewStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(
            serde_json::from_value(Value::String(s.to_ascii_lowercase()))
                .unwrap_or(ReviewStatus::Unknown),
        ),
        Some(_) => Some(ReviewStatus::Unknown),
    })
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect();
            Some(parts.join("; "))
        }
        Some(other) => Some(other.to_string()),
    })
}
