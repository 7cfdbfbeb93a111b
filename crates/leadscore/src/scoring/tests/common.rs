use chrono::NaiveDate;

use crate::scoring::domain::{
    BehaviorSignals, CompanyProfile, ContactProfile, Lead, LeadId, Seniority,
};
use crate::scoring::engine::ScoringEngine;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

/// Strong lead: late-stage SaaS company, C-Level technical buyer, fully
/// engaged. Scores 91 under default weights.
pub(super) fn enterprise_lead() -> Lead {
    Lead {
        id: LeadId("LEAD-2001".to_string()),
        name: "Priya Raman".to_string(),
        company: CompanyProfile {
            name: "Forgepoint Systems".to_string(),
            size: 500,
            industry: "SaaS".to_string(),
            funding_stage: Some("Series C+".to_string()),
            annual_revenue: Some(50_000_000.0),
            growth_rate: Some(25.0),
            technology_stack: Some(vec![
                "GCP".to_string(),
                "Angular".to_string(),
                "Java".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ]),
            location: Some("Austin, TX".to_string()),
        },
        contact: ContactProfile {
            position: "CTO".to_string(),
            seniority: Seniority::CLevel,
            department: "Technology".to_string(),
            email: Some("priya@forgepoint.example".to_string()),
            phone: None,
            linkedin_url: None,
        },
        behavior: Some(BehaviorSignals {
            website_visits: Some(12),
            content_downloads: Some(5),
            email_engagement: Some(0.9),
            social_engagement: Some(0.8),
            event_attendance: Some(true),
        }),
        source: "Crunchbase".to_string(),
        date_added: NaiveDate::from_ymd_opt(2024, 3, 11).expect("valid date"),
    }
}

/// Weak lead: small hospitality company with no enrichment data and an
/// individual contributor in legal. Scores 43 under default weights.
pub(super) fn sparse_lead() -> Lead {
    Lead {
        id: LeadId("LEAD-2002".to_string()),
        name: "Tom Okafor".to_string(),
        company: CompanyProfile {
            name: "Lakeview Inns".to_string(),
            size: 50,
            industry: "Hospitality".to_string(),
            funding_stage: None,
            annual_revenue: None,
            growth_rate: None,
            technology_stack: None,
            location: None,
        },
        contact: ContactProfile {
            position: "Paralegal".to_string(),
            seniority: Seniority::IndividualContributor,
            department: "Legal".to_string(),
            email: None,
            phone: None,
            linkedin_url: None,
        },
        behavior: None,
        source: "Trade Show".to_string(),
        date_added: NaiveDate::from_ymd_opt(2024, 4, 2).expect("valid date"),
    }
}
