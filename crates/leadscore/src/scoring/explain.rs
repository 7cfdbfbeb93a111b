use super::domain::LeadStatus;
use super::engine::CategoryScores;
use super::factors::Factor;

/// How many ranked factors the narrative calls out.
const EXPLAINED_FACTOR_LIMIT: usize = 3;

/// Render the human-readable scoring summary.
///
/// The behavior clause appears only when the behavior category actually
/// contributed, and the factor sentence only when at least one factor
/// exists; either can drop out without leaving dangling punctuation.
pub fn score_explanation(
    total_score: i64,
    category_scores: &CategoryScores,
    top_factors: &[Factor],
) -> String {
    let status = LeadStatus::from_score(total_score);

    let mut explanation = format!(
        "This lead has been {} with a score of {}/100. ",
        status.label(),
        total_score
    );

    explanation.push_str(&format!(
        "The score is based on company factors ({}/100), contact information ({}/100)",
        category_scores.company, category_scores.contact
    ));

    if category_scores.behavior > 0 {
        explanation.push_str(&format!(
            ", and behavioral data ({}/100)",
            category_scores.behavior
        ));
    }

    explanation.push_str(". ");

    if !top_factors.is_empty() {
        let rendered: Vec<String> = top_factors
            .iter()
            .take(EXPLAINED_FACTOR_LIMIT)
            .map(|factor| format!("{} (impact: {})", factor.factor, factor.impact))
            .collect();
        explanation.push_str("The top contributing factors are: ");
        explanation.push_str(&rendered.join(", "));
        explanation.push('.');
    }

    explanation
}
