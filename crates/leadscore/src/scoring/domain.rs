use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for leads flowing through the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// A prospective contact plus their employer, as submitted for scoring.
///
/// `source` and `date_added` are provenance metadata; no scorer reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub company: CompanyProfile,
    pub contact: ContactProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<BehaviorSignals>,
    pub source: String,
    pub date_added: NaiveDate,
}

/// Employer attributes. Only `name`, `size`, and `industry` are required;
/// the scorers substitute documented neutral defaults for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub size: u32,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Contact attributes. `email`, `phone`, and `linkedin_url` ride along for
/// callers but carry no scoring signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactProfile {
    pub position: String,
    pub seniority: Seniority,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "linkedInUrl")]
    pub linkedin_url: Option<String>,
}

/// Contact seniority ladder. Unrecognized wire values land in `Other` so a
/// sloppy upstream enrichment never fails deserialization; the scorer gives
/// them the neutral midpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Seniority {
    CLevel,
    Vp,
    Director,
    Manager,
    IndividualContributor,
    Other(String),
}

impl Seniority {
    pub fn as_str(&self) -> &str {
        match self {
            Seniority::CLevel => "C-Level",
            Seniority::Vp => "VP",
            Seniority::Director => "Director",
            Seniority::Manager => "Manager",
            Seniority::IndividualContributor => "Individual Contributor",
            Seniority::Other(value) => value,
        }
    }
}

impl From<String> for Seniority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "C-Level" => Seniority::CLevel,
            "VP" => Seniority::Vp,
            "Director" => Seniority::Director,
            "Manager" => Seniority::Manager,
            "Individual Contributor" => Seniority::IndividualContributor,
            _ => Seniority::Other(value),
        }
    }
}

impl From<Seniority> for String {
    fn from(value: Seniority) -> Self {
        value.as_str().to_string()
    }
}

/// Engagement signals collected from marketing tooling. The whole struct is
/// optional on a lead, and every field is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_visits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_downloads: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_engagement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_engagement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_attendance: Option<bool>,
}

impl BehaviorSignals {
    /// True when no individual signal is populated.
    pub fn is_empty(&self) -> bool {
        self.website_visits.is_none()
            && self.content_downloads.is_none()
            && self.email_engagement.is_none()
            && self.social_engagement.is_none()
            && self.event_attendance.is_none()
    }
}

/// Qualification tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    Qualified,
    Pending,
    Unqualified,
}

impl LeadStatus {
    /// Step classifier: 80+ qualified, 50+ pending, everything else
    /// unqualified.
    pub const fn from_score(score: i64) -> Self {
        if score >= 80 {
            LeadStatus::Qualified
        } else if score >= 50 {
            LeadStatus::Pending
        } else {
            LeadStatus::Unqualified
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LeadStatus::Qualified => "qualified",
            LeadStatus::Pending => "pending",
            LeadStatus::Unqualified => "unqualified",
        }
    }
}

/// The scorable attributes of a lead, in the order the engine computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    CompanySize,
    Industry,
    FundingStage,
    AnnualRevenue,
    GrowthRate,
    TechnologyStack,
    Position,
    Seniority,
    Department,
    WebsiteVisits,
    ContentDownloads,
    EmailEngagement,
    SocialEngagement,
    EventAttendance,
}

impl Feature {
    /// Display label used when ranking contributing factors.
    pub const fn label(self) -> &'static str {
        match self {
            Feature::CompanySize => "Company Size",
            Feature::Industry => "Industry Relevance",
            Feature::FundingStage => "Funding Stage",
            Feature::AnnualRevenue => "Annual Revenue",
            Feature::GrowthRate => "Growth Rate",
            Feature::TechnologyStack => "Technology Stack",
            Feature::Position => "Job Position",
            Feature::Seniority => "Seniority Level",
            Feature::Department => "Department",
            Feature::WebsiteVisits => "Website Visits",
            Feature::ContentDownloads => "Content Downloads",
            Feature::EmailEngagement => "Email Engagement",
            Feature::SocialEngagement => "Social Media Engagement",
            Feature::EventAttendance => "Event Attendance",
        }
    }
}
