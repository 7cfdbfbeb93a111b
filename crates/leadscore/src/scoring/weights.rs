use super::domain::Feature;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Relative importance of each feature within its category.
///
/// Values are not required to sum to 1 and are consumed exactly as supplied;
/// only the top-level category weights are ever redistributed. A partial
/// weights document fills the missing categories from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringWeights {
    pub company: CompanyWeights,
    pub contact: ContactWeights,
    pub behavior: BehaviorWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyWeights {
    pub size: f64,
    pub industry: f64,
    pub funding_stage: f64,
    pub annual_revenue: f64,
    pub growth_rate: f64,
    pub technology_stack: f64,
    /// No scorer consumes location yet; the field is kept so stored weight
    /// sets stay loadable.
    pub location: f64,
}

impl Default for CompanyWeights {
    fn default() -> Self {
        Self {
            size: 0.15,
            industry: 0.2,
            funding_stage: 0.1,
            annual_revenue: 0.15,
            growth_rate: 0.15,
            technology_stack: 0.15,
            location: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactWeights {
    pub position: f64,
    pub seniority: f64,
    pub department: f64,
}

impl Default for ContactWeights {
    fn default() -> Self {
        Self {
            position: 0.3,
            seniority: 0.5,
            department: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BehaviorWeights {
    pub website_visits: f64,
    pub content_downloads: f64,
    pub email_engagement: f64,
    pub social_engagement: f64,
    pub event_attendance: f64,
}

impl Default for BehaviorWeights {
    fn default() -> Self {
        Self {
            website_visits: 0.2,
            content_downloads: 0.25,
            email_engagement: 0.25,
            social_engagement: 0.2,
            event_attendance: 0.1,
        }
    }
}

impl ScoringWeights {
    /// Weight applied to a feature, looked up from the category that owns it.
    pub fn weight_for(&self, feature: Feature) -> f64 {
        match feature {
            Feature::CompanySize => self.company.size,
            Feature::Industry => self.company.industry,
            Feature::FundingStage => self.company.funding_stage,
            Feature::AnnualRevenue => self.company.annual_revenue,
            Feature::GrowthRate => self.company.growth_rate,
            Feature::TechnologyStack => self.company.technology_stack,
            Feature::Position => self.contact.position,
            Feature::Seniority => self.contact.seniority,
            Feature::Department => self.contact.department,
            Feature::WebsiteVisits => self.behavior.website_visits,
            Feature::ContentDownloads => self.behavior.content_downloads,
            Feature::EmailEngagement => self.behavior.email_engagement,
            Feature::SocialEngagement => self.behavior.social_engagement,
            Feature::EventAttendance => self.behavior.event_attendance,
        }
    }

    /// Unbalanced weight sets are accepted as-is (scores may then leave the
    /// nominal 0-100 range); this only surfaces a warning for operators.
    pub(crate) fn warn_if_unbalanced(&self) {
        let company_sum = self.company.size
            + self.company.industry
            + self.company.funding_stage
            + self.company.annual_revenue
            + self.company.growth_rate
            + self.company.technology_stack
            + self.company.location;
        let contact_sum = self.contact.position + self.contact.seniority + self.contact.department;
        let behavior_sum = self.behavior.website_visits
            + self.behavior.content_downloads
            + self.behavior.email_engagement
            + self.behavior.social_engagement
            + self.behavior.event_attendance;

        for (category, sum) in [
            ("company", company_sum),
            ("contact", contact_sum),
            ("behavior", behavior_sum),
        ] {
            if (sum - 1.0).abs() > 0.1 {
                warn!(category, sum, "scoring weights do not sum to 1.0");
            }
        }
    }
}
