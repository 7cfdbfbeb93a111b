use crate::infra::load_weights;
use chrono::NaiveDate;
use clap::Args;
use leadscore::error::AppError;
use leadscore::scoring::{
    BehaviorSignals, CompanyProfile, ContactProfile, Lead, LeadCsvImporter, LeadEvaluation, LeadId,
    LeadStatus, ScoringEngine, Seniority,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON file with scoring weight overrides
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file containing a single lead record
    #[arg(long)]
    pub(crate) lead: PathBuf,
    /// JSON file with scoring weight overrides
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export of leads to score
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// JSON file with scoring weight overrides
    #[arg(long)]
    pub(crate) weights: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let weights = load_weights(args.weights.as_deref())?;
    let engine = ScoringEngine::new(weights);

    println!("Lead scoring demo");
    for lead in sample_leads() {
        let evaluation = engine.evaluate(&lead)?;
        render_evaluation(&lead, &evaluation);
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let weights = load_weights(args.weights.as_deref())?;
    let engine = ScoringEngine::new(weights);

    let raw = std::fs::read_to_string(&args.lead)?;
    let lead: Lead = serde_json::from_str(&raw)?;
    let evaluation = engine.evaluate(&lead)?;
    render_evaluation(&lead, &evaluation);

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let weights = load_weights(args.weights.as_deref())?;
    let engine = ScoringEngine::new(weights);

    let leads = LeadCsvImporter::from_path(&args.csv)?;

    let mut qualified = 0u32;
    let mut pending = 0u32;
    let mut unqualified = 0u32;
    for lead in &leads {
        let evaluation = engine.evaluate(lead)?;
        match evaluation.status {
            LeadStatus::Qualified => qualified += 1,
            LeadStatus::Pending => pending += 1,
            LeadStatus::Unqualified => unqualified += 1,
        }
        println!(
            "- {} | {} | {}/100 {}",
            evaluation.lead_id.0,
            lead.name,
            evaluation.total_score,
            evaluation.status.label()
        );
    }

    println!(
        "\n{} lead(s): {} qualified, {} pending, {} unqualified",
        leads.len(),
        qualified,
        pending,
        unqualified
    );

    Ok(())
}

fn render_evaluation(lead: &Lead, evaluation: &LeadEvaluation) {
    println!(
        "\n{} | {} ({})",
        evaluation.lead_id.0, lead.name, lead.company.name
    );
    println!(
        "  Score: {}/100 ({})",
        evaluation.total_score,
        evaluation.status.label()
    );
    println!(
        "  Categories: company {}/100, contact {}/100, behavior {}/100",
        evaluation.category_scores.company,
        evaluation.category_scores.contact,
        evaluation.category_scores.behavior
    );
    println!("  Top factors:");
    for factor in &evaluation.top_factors {
        println!("    - {} (impact: {})", factor.factor, factor.impact);
    }
    println!("  {}", evaluation.explanation);
}

/// The canonical demo dataset shipped with the product.
pub(crate) fn sample_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: LeadId("LEAD-1001".to_string()),
            name: "Sarah Johnson".to_string(),
            company: CompanyProfile {
                name: "TechGrowth Inc.".to_string(),
                size: 250,
                industry: "Technology".to_string(),
                funding_stage: Some("Series B".to_string()),
                annual_revenue: Some(15_000_000.0),
                growth_rate: Some(35.0),
                technology_stack: Some(vec![
                    "AWS".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                    "Kubernetes".to_string(),
                ]),
                location: None,
            },
            contact: ContactProfile {
                position: "VP of Marketing".to_string(),
                seniority: Seniority::Vp,
                department: "Marketing".to_string(),
                email: Some("sarah@techgrowth.com".to_string()),
                phone: None,
                linkedin_url: Some("linkedin.com/in/sarahjohnson".to_string()),
            },
            behavior: Some(BehaviorSignals {
                website_visits: Some(8),
                content_downloads: Some(3),
                email_engagement: Some(0.7),
                social_engagement: Some(0.5),
                event_attendance: Some(true),
            }),
            source: "LinkedIn".to_string(),
            date_added: demo_date(2023, 5, 15),
        },
        Lead {
            id: LeadId("LEAD-1002".to_string()),
            name: "Michael Chen".to_string(),
            company: CompanyProfile {
                name: "Innovate Solutions".to_string(),
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
                location: None,
            },
            contact: ContactProfile {
                position: "CTO".to_string(),
                seniority: Seniority::CLevel,
                department: "Technology".to_string(),
                email: Some("michael@innovatesolutions.com".to_string()),
                phone: None,
                linkedin_url: Some("linkedin.com/in/michaelchen".to_string()),
            },
            behavior: Some(BehaviorSignals {
                website_visits: Some(12),
                content_downloads: Some(5),
                email_engagement: Some(0.9),
                social_engagement: Some(0.8),
                event_attendance: Some(true),
            }),
            source: "Crunchbase".to_string(),
            date_added: demo_date(2023, 5, 10),
        },
        Lead {
            id: LeadId("LEAD-1003".to_string()),
            name: "Jessica Williams".to_string(),
            company: CompanyProfile {
                name: "DataDrive Analytics".to_string(),
                size: 120,
                industry: "Technology".to_string(),
                funding_stage: Some("Series A".to_string()),
                annual_revenue: Some(8_000_000.0),
                growth_rate: Some(40.0),
                technology_stack: Some(vec![
                    "AWS".to_string(),
                    "Python".to_string(),
                    "TensorFlow".to_string(),
                    "SQL".to_string(),
                    "Tableau".to_string(),
                ]),
                location: None,
            },
            contact: ContactProfile {
                position: "Director of Operations".to_string(),
                seniority: Seniority::Director,
                department: "Operations".to_string(),
                email: Some("jessica@datadrive.com".to_string()),
                phone: None,
                linkedin_url: Some("linkedin.com/in/jessicawilliams".to_string()),
            },
            behavior: Some(BehaviorSignals {
                website_visits: Some(5),
                content_downloads: Some(2),
                email_engagement: Some(0.5),
                social_engagement: Some(0.3),
                event_attendance: Some(false),
            }),
            source: "Job Board".to_string(),
            date_added: demo_date(2023, 5, 20),
        },
        Lead {
            id: LeadId("LEAD-1004".to_string()),
            name: "David Rodriguez".to_string(),
            company: CompanyProfile {
                name: "Cloud Systems Co.".to_string(),
                size: 350,
                industry: "Technology".to_string(),
                funding_stage: Some("Series B".to_string()),
                annual_revenue: Some(20_000_000.0),
                growth_rate: Some(30.0),
                technology_stack: Some(vec![
                    "Azure".to_string(),
                    "C#".to_string(),
                    ".NET".to_string(),
                    "SQL Server".to_string(),
                    "Microservices".to_string(),
                ]),
                location: None,
            },
            contact: ContactProfile {
                position: "Head of Sales".to_string(),
                seniority: Seniority::Director,
                department: "Sales".to_string(),
                email: Some("david@cloudsystems.com".to_string()),
                phone: None,
                linkedin_url: Some("linkedin.com/in/davidrodriguez".to_string()),
            },
            behavior: Some(BehaviorSignals {
                website_visits: Some(10),
                content_downloads: Some(4),
                email_engagement: Some(0.8),
                social_engagement: Some(0.6),
                event_attendance: Some(true),
            }),
            source: "LinkedIn".to_string(),
            date_added: demo_date(2023, 5, 18),
        },
        Lead {
            id: LeadId("LEAD-1005".to_string()),
            name: "Emma Thompson".to_string(),
            company: CompanyProfile {
                name: "Growth Ventures".to_string(),
                size: 50,
                industry: "Financial Services".to_string(),
                funding_stage: Some("Seed".to_string()),
                annual_revenue: Some(2_000_000.0),
                growth_rate: Some(60.0),
                technology_stack: Some(vec![
                    "AWS".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                ]),
                location: None,
            },
            contact: ContactProfile {
                position: "CEO".to_string(),
                seniority: Seniority::CLevel,
                department: "Executive".to_string(),
                email: Some("emma@growthventures.com".to_string()),
                phone: None,
                linkedin_url: Some("linkedin.com/in/emmathompson".to_string()),
            },
            behavior: Some(BehaviorSignals {
                website_visits: Some(15),
                content_downloads: Some(6),
                email_engagement: Some(0.95),
                social_engagement: Some(0.9),
                event_attendance: Some(true),
            }),
            source: "Crunchbase".to_string(),
            date_added: demo_date(2023, 5, 12),
        },
    ]
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}
