//! Feature scorers: total functions from one raw lead attribute to a
//! normalized score in [0, 1].
//!
//! Buckets use inclusive lower bounds evaluated highest-first. Optional
//! inputs have a documented default for absence; for annual revenue and
//! growth rate the absence default (0.5) is deliberately more favorable
//! than the present-but-tiny floor (0.3).

use super::domain::Seniority;

/// Industries ranked by fit. Lookup is an exact string match; anything not
/// listed scores the neutral 0.5.
static INDUSTRY_RELEVANCE: &[(&str, f64)] = &[
    ("Technology", 1.0),
    ("SaaS", 1.0),
    ("Financial Services", 0.9),
    ("Healthcare", 0.8),
    ("E-commerce", 0.9),
    ("Manufacturing", 0.7),
    ("Education", 0.6),
    ("Retail", 0.7),
    ("Telecommunications", 0.8),
    ("Media", 0.7),
    ("Real Estate", 0.6),
    ("Energy", 0.5),
    ("Transportation", 0.6),
    ("Hospitality", 0.5),
    ("Construction", 0.4),
    ("Agriculture", 0.3),
];

/// Stack entries matching any of these (case-insensitive substring) count
/// toward the technology fit bucket.
static RELEVANT_TECHNOLOGIES: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "cloud",
    "react",
    "angular",
    "vue",
    "node",
    "javascript",
    "typescript",
    "python",
    "java",
    "kubernetes",
    "docker",
    "microservices",
    "ai",
    "machine learning",
    "data science",
    "big data",
    "saas",
    "api",
    "rest",
    "graphql",
];

/// Ordered department table; the first key found as a substring of the
/// lead's department wins.
static DEPARTMENT_RELEVANCE: &[(&str, f64)] = &[
    ("Executive", 1.0),
    ("IT", 0.9),
    ("Technology", 0.9),
    ("Engineering", 0.9),
    ("Product", 0.9),
    ("Operations", 0.8),
    ("Marketing", 0.7),
    ("Sales", 0.7),
    ("Finance", 0.6),
    ("HR", 0.5),
    ("Customer Support", 0.5),
    ("Legal", 0.4),
    ("Administrative", 0.3),
];

/// Titles carrying final purchasing authority.
static DECISION_MAKER_KEYWORDS: &[&str] = &[
    "ceo",
    "cto",
    "cio",
    "cfo",
    "coo",
    "chief",
    "vp",
    "vice president",
    "head",
    "director",
    "president",
    "founder",
    "owner",
    "principal",
];

/// Titles that influence a purchase without owning it.
static INFLUENCER_KEYWORDS: &[&str] = &[
    "manager",
    "lead",
    "senior",
    "architect",
    "team lead",
    "supervisor",
];

pub(crate) fn score_company_size(size: u32) -> f64 {
    if size >= 1000 {
        1.0
    } else if size >= 500 {
        0.9
    } else if size >= 200 {
        0.8
    } else if size >= 100 {
        0.7
    } else if size >= 50 {
        0.6
    } else if size >= 20 {
        0.5
    } else if size >= 10 {
        0.4
    } else {
        0.3
    }
}

pub(crate) fn score_industry(industry: &str) -> f64 {
    INDUSTRY_RELEVANCE
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, score)| *score)
        .unwrap_or(0.5)
}

pub(crate) fn score_funding_stage(stage: Option<&str>) -> f64 {
    let Some(stage) = stage else { return 0.5 };

    match stage.to_lowercase().as_str() {
        "series c+" | "public" => 1.0,
        "series b" => 0.9,
        "series a" => 0.8,
        "seed" => 0.7,
        "pre-seed" => 0.6,
        "bootstrapped" => 0.5,
        _ => 0.5,
    }
}

pub(crate) fn score_annual_revenue(revenue: Option<f64>) -> f64 {
    // Absent revenue scores the neutral 0.5; a reported tiny revenue drops
    // to the 0.3 floor. The two must stay distinct.
    let Some(revenue) = revenue else { return 0.5 };

    if revenue >= 100_000_000.0 {
        1.0
    } else if revenue >= 50_000_000.0 {
        0.9
    } else if revenue >= 10_000_000.0 {
        0.8
    } else if revenue >= 5_000_000.0 {
        0.7
    } else if revenue >= 1_000_000.0 {
        0.6
    } else if revenue >= 500_000.0 {
        0.5
    } else if revenue >= 100_000.0 {
        0.4
    } else {
        0.3
    }
}

pub(crate) fn score_growth_rate(growth_rate: Option<f64>) -> f64 {
    let Some(rate) = growth_rate else { return 0.5 };

    if rate >= 100.0 {
        1.0
    } else if rate >= 50.0 {
        0.9
    } else if rate >= 30.0 {
        0.8
    } else if rate >= 20.0 {
        0.7
    } else if rate >= 10.0 {
        0.6
    } else if rate >= 5.0 {
        0.5
    } else if rate >= 0.0 {
        0.4
    } else {
        0.3
    }
}

pub(crate) fn score_technology_stack(stack: Option<&[String]>) -> f64 {
    let stack = match stack {
        Some(stack) if !stack.is_empty() => stack,
        _ => return 0.5,
    };

    let match_count = stack
        .iter()
        .filter(|tech| {
            let tech = tech.to_lowercase();
            RELEVANT_TECHNOLOGIES
                .iter()
                .any(|keyword| tech.contains(keyword))
        })
        .count();

    if match_count >= 5 {
        1.0
    } else if match_count >= 3 {
        0.8
    } else if match_count >= 1 {
        0.6
    } else {
        0.4
    }
}

pub(crate) fn score_seniority(seniority: &Seniority) -> f64 {
    match seniority {
        Seniority::CLevel => 1.0,
        Seniority::Vp => 0.9,
        Seniority::Director => 0.8,
        Seniority::Manager => 0.6,
        Seniority::IndividualContributor => 0.4,
        Seniority::Other(_) => 0.5,
    }
}

pub(crate) fn score_department(department: &str) -> f64 {
    let department = department.to_lowercase();
    for (key, score) in DEPARTMENT_RELEVANCE {
        if department.contains(&key.to_lowercase()) {
            return *score;
        }
    }

    0.5
}

pub(crate) fn score_position(position: &str) -> f64 {
    let position = position.to_lowercase();

    if DECISION_MAKER_KEYWORDS
        .iter()
        .any(|keyword| position.contains(keyword))
    {
        return 1.0;
    }

    if INFLUENCER_KEYWORDS
        .iter()
        .any(|keyword| position.contains(keyword))
    {
        return 0.7;
    }

    0.4
}

pub(crate) fn score_website_visits(visits: Option<u32>) -> f64 {
    match visits {
        None | Some(0) => 0.0,
        Some(v) if v >= 10 => 1.0,
        Some(v) if v >= 5 => 0.8,
        Some(v) if v >= 3 => 0.6,
        Some(_) => 0.4,
    }
}

pub(crate) fn score_content_downloads(downloads: Option<u32>) -> f64 {
    match downloads {
        None | Some(0) => 0.0,
        Some(d) if d >= 3 => 1.0,
        Some(2) => 0.8,
        Some(_) => 0.6,
    }
}

/// Shared bucket table for the email and social engagement ratios.
pub(crate) fn score_engagement(level: Option<f64>) -> f64 {
    let Some(level) = level else { return 0.0 };

    if level >= 0.8 {
        1.0
    } else if level >= 0.5 {
        0.8
    } else if level >= 0.3 {
        0.6
    } else if level >= 0.1 {
        0.4
    } else {
        0.0
    }
}

pub(crate) fn score_event_attendance(attended: Option<bool>) -> f64 {
    if attended == Some(true) {
        1.0
    } else {
        0.0
    }
}
