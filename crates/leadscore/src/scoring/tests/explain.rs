use crate::scoring::engine::CategoryScores;
use crate::scoring::explain::score_explanation;
use crate::scoring::factors::Factor;

fn factor(label: &str, impact: i64) -> Factor {
    Factor {
        factor: label.to_string(),
        impact,
    }
}

#[test]
fn renders_full_narrative_with_behavior_and_factors() {
    let categories = CategoryScores {
        company: 80,
        contact: 98,
        behavior: 100,
    };
    let factors = vec![
        factor("Seniority Level", 50),
        factor("Job Position", 30),
        factor("Content Downloads", 25),
    ];

    let explanation = score_explanation(91, &categories, &factors);

    assert_eq!(
        explanation,
        "This lead has been qualified with a score of 91/100. The score is based on \
         company factors (80/100), contact information (98/100), and behavioral data \
         (100/100). The top contributing factors are: Seniority Level (impact: 50), \
         Job Position (impact: 30), Content Downloads (impact: 25)."
    );
}

#[test]
fn omits_behavior_clause_when_category_is_zero() {
    let categories = CategoryScores {
        company: 47,
        contact: 40,
        behavior: 0,
    };

    let explanation = score_explanation(43, &categories, &[]);

    assert_eq!(
        explanation,
        "This lead has been unqualified with a score of 43/100. The score is based on \
         company factors (47/100), contact information (40/100). "
    );
    assert!(!explanation.contains("behavioral data"));
}

#[test]
fn omits_factor_clause_when_no_factors_exist() {
    let categories = CategoryScores {
        company: 60,
        contact: 55,
        behavior: 20,
    };

    let explanation = score_explanation(55, &categories, &[]);

    assert!(explanation.contains("and behavioral data (20/100)"));
    assert!(!explanation.contains("top contributing factors"));
    assert!(explanation.ends_with(". "));
}

#[test]
fn renders_at_most_three_factors() {
    let categories = CategoryScores {
        company: 80,
        contact: 90,
        behavior: 70,
    };
    let factors = vec![
        factor("Seniority Level", 50),
        factor("Job Position", 30),
        factor("Content Downloads", 25),
        factor("Email Engagement", 25),
        factor("Industry Relevance", 20),
    ];

    let explanation = score_explanation(85, &categories, &factors);

    assert!(explanation.contains("Content Downloads (impact: 25)."));
    assert!(!explanation.contains("Email Engagement"));
    assert!(!explanation.contains("Industry Relevance"));
}
