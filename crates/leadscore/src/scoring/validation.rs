use super::domain::Lead;

/// Raised before scoring when a lead carries numeric values the bucket
/// tables are not defined over. Field names match the wire format so API
/// callers can map the error back to their payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("{field} must be between 0.0 and 1.0")]
    OutOfRange { field: &'static str },
}

/// Fail fast on malformed numeric input. Unknown enum-ish strings (industry,
/// seniority, funding stage) are not errors; the scorers degrade those to
/// their documented neutral defaults.
pub fn validate_lead(lead: &Lead) -> Result<(), LeadValidationError> {
    if let Some(revenue) = lead.company.annual_revenue {
        if !revenue.is_finite() {
            return Err(LeadValidationError::NonFinite {
                field: "company.annualRevenue",
            });
        }
        if revenue < 0.0 {
            return Err(LeadValidationError::Negative {
                field: "company.annualRevenue",
            });
        }
    }

    if let Some(rate) = lead.company.growth_rate {
        // Negative growth is legitimate; only reject NaN and infinities.
        if !rate.is_finite() {
            return Err(LeadValidationError::NonFinite {
                field: "company.growthRate",
            });
        }
    }

    if let Some(behavior) = &lead.behavior {
        let ratios = [
            ("behavior.emailEngagement", behavior.email_engagement),
            ("behavior.socialEngagement", behavior.social_engagement),
        ];
        for (field, ratio) in ratios {
            if let Some(ratio) = ratio {
                if !ratio.is_finite() {
                    return Err(LeadValidationError::NonFinite { field });
                }
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(LeadValidationError::OutOfRange { field });
                }
            }
        }
    }

    Ok(())
}
