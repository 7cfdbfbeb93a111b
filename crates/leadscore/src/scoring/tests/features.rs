use crate::scoring::domain::Seniority;
use crate::scoring::features::*;

#[test]
fn company_size_buckets_use_inclusive_lower_bounds() {
    assert_eq!(score_company_size(1000), 1.0);
    assert_eq!(score_company_size(999), 0.9);
    assert_eq!(score_company_size(500), 0.9);
    assert_eq!(score_company_size(200), 0.8);
    assert_eq!(score_company_size(100), 0.7);
    assert_eq!(score_company_size(50), 0.6);
    assert_eq!(score_company_size(20), 0.5);
    assert_eq!(score_company_size(10), 0.4);
    assert_eq!(score_company_size(9), 0.3);
    assert_eq!(score_company_size(0), 0.3);
}

#[test]
fn industry_lookup_is_exact_with_neutral_default() {
    assert_eq!(score_industry("Technology"), 1.0);
    assert_eq!(score_industry("SaaS"), 1.0);
    assert_eq!(score_industry("Agriculture"), 0.3);
    // No fuzzy matching: casing and unknown industries fall back to 0.5.
    assert_eq!(score_industry("technology"), 0.5);
    assert_eq!(score_industry("Quantum Basket Weaving"), 0.5);
}

#[test]
fn funding_stage_matches_case_insensitively() {
    assert_eq!(score_funding_stage(Some("Series C+")), 1.0);
    assert_eq!(score_funding_stage(Some("PUBLIC")), 1.0);
    assert_eq!(score_funding_stage(Some("series b")), 0.9);
    assert_eq!(score_funding_stage(Some("Seed")), 0.7);
    assert_eq!(score_funding_stage(Some("Bootstrapped")), 0.5);
    assert_eq!(score_funding_stage(Some("Angel")), 0.5);
    assert_eq!(score_funding_stage(None), 0.5);
}

#[test]
fn absent_revenue_outscores_reported_tiny_revenue() {
    assert_eq!(score_annual_revenue(None), 0.5);
    assert_eq!(score_annual_revenue(Some(0.0)), 0.3);
    assert_eq!(score_annual_revenue(Some(99_999.0)), 0.3);
    assert_eq!(score_annual_revenue(Some(100_000.0)), 0.4);
    assert_eq!(score_annual_revenue(Some(500_000.0)), 0.5);
    assert_eq!(score_annual_revenue(Some(1_000_000.0)), 0.6);
    assert_eq!(score_annual_revenue(Some(50_000_000.0)), 0.9);
    assert_eq!(score_annual_revenue(Some(100_000_000.0)), 1.0);
}

#[test]
fn growth_rate_distinguishes_absent_flat_and_negative() {
    assert_eq!(score_growth_rate(None), 0.5);
    assert_eq!(score_growth_rate(Some(0.0)), 0.4);
    assert_eq!(score_growth_rate(Some(-3.0)), 0.3);
    assert_eq!(score_growth_rate(Some(5.0)), 0.5);
    assert_eq!(score_growth_rate(Some(10.0)), 0.6);
    assert_eq!(score_growth_rate(Some(20.0)), 0.7);
    assert_eq!(score_growth_rate(Some(30.0)), 0.8);
    assert_eq!(score_growth_rate(Some(50.0)), 0.9);
    assert_eq!(score_growth_rate(Some(100.0)), 1.0);
}

#[test]
fn technology_stack_counts_keyword_matches() {
    assert_eq!(score_technology_stack(None), 0.5);

    let empty: Vec<String> = Vec::new();
    assert_eq!(score_technology_stack(Some(empty.as_slice())), 0.5);

    let unrelated = vec!["COBOL".to_string(), "Fortran".to_string()];
    assert_eq!(score_technology_stack(Some(unrelated.as_slice())), 0.4);

    let one = vec!["AWS Lambda".to_string()];
    assert_eq!(score_technology_stack(Some(one.as_slice())), 0.6);

    let three = vec![
        "AWS".to_string(),
        "React".to_string(),
        "Node.js".to_string(),
    ];
    assert_eq!(score_technology_stack(Some(three.as_slice())), 0.8);

    let five = vec![
        "AWS".to_string(),
        "React".to_string(),
        "Node.js".to_string(),
        "Kubernetes".to_string(),
        "TypeScript".to_string(),
    ];
    assert_eq!(score_technology_stack(Some(five.as_slice())), 1.0);
}

#[test]
fn seniority_scores_with_neutral_unknown() {
    assert_eq!(score_seniority(&Seniority::CLevel), 1.0);
    assert_eq!(score_seniority(&Seniority::Vp), 0.9);
    assert_eq!(score_seniority(&Seniority::Director), 0.8);
    assert_eq!(score_seniority(&Seniority::Manager), 0.6);
    assert_eq!(score_seniority(&Seniority::IndividualContributor), 0.4);
    assert_eq!(
        score_seniority(&Seniority::Other("Fellow".to_string())),
        0.5
    );
}

#[test]
fn department_first_table_match_wins() {
    assert_eq!(score_department("Executive Office"), 1.0);
    assert_eq!(score_department("engineering"), 0.9);
    // "Recruiting" contains "it", so the IT entry wins before any fallback.
    assert_eq!(score_department("Recruiting"), 0.9);
    // "Procurement" contains no table key and takes the default.
    assert_eq!(score_department("Procurement"), 0.5);
    // "Sales Operations" contains both keys; "Operations" is listed first.
    assert_eq!(score_department("Sales Operations"), 0.8);
    assert_eq!(score_department("Legal"), 0.4);
}

#[test]
fn position_checks_decision_makers_before_influencers() {
    assert_eq!(score_position("Chief Revenue Officer"), 1.0);
    assert_eq!(score_position("VP of Engineering"), 1.0);
    assert_eq!(score_position("founder & ceo"), 1.0);
    assert_eq!(score_position("Senior Software Engineer"), 0.7);
    assert_eq!(score_position("Engineering Manager"), 0.7);
    assert_eq!(score_position("Accountant"), 0.4);
}

#[test]
fn behavior_scorers_treat_zero_and_absent_alike() {
    assert_eq!(score_website_visits(None), 0.0);
    assert_eq!(score_website_visits(Some(0)), 0.0);
    assert_eq!(score_website_visits(Some(1)), 0.4);
    assert_eq!(score_website_visits(Some(3)), 0.6);
    assert_eq!(score_website_visits(Some(5)), 0.8);
    assert_eq!(score_website_visits(Some(10)), 1.0);

    assert_eq!(score_content_downloads(None), 0.0);
    assert_eq!(score_content_downloads(Some(0)), 0.0);
    assert_eq!(score_content_downloads(Some(1)), 0.6);
    assert_eq!(score_content_downloads(Some(2)), 0.8);
    assert_eq!(score_content_downloads(Some(3)), 1.0);

    assert_eq!(score_engagement(None), 0.0);
    assert_eq!(score_engagement(Some(0.05)), 0.0);
    assert_eq!(score_engagement(Some(0.1)), 0.4);
    assert_eq!(score_engagement(Some(0.3)), 0.6);
    assert_eq!(score_engagement(Some(0.5)), 0.8);
    assert_eq!(score_engagement(Some(0.8)), 1.0);

    assert_eq!(score_event_attendance(None), 0.0);
    assert_eq!(score_event_attendance(Some(false)), 0.0);
    assert_eq!(score_event_attendance(Some(true)), 1.0);
}
