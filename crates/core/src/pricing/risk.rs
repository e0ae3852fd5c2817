use crate::domain::complexity::ComplexityScore;
use crate::pricing::MAX_RISK_MULTIPLIER;

/// Service codes that historically blow up schedules and insurance costs.
/// Each one present in the request adds a flat premium.
pub const HIGH_RISK_SERVICES: &[&str] =
    &["demolition", "excavation", "crane-lift", "emergency-callout"];

const COMPLEXITY_WEIGHT: f64 = 0.2;
const HIGH_RISK_PREMIUM: f64 = 0.05;

/// Risk premium multiplier: 1.0 for a trivial project, capped at 1.5 no
/// matter how hairy the job gets.
pub fn risk_multiplier(complexity: &ComplexityScore, services: &[String]) -> f64 {
    let mut multiplier = 1.0 + (complexity.overall / 10.0) * COMPLEXITY_WEIGHT;

    for service in services {
        if HIGH_RISK_SERVICES.contains(&service.as_str()) {
            multiplier += HIGH_RISK_PREMIUM;
        }
    }

    multiplier.min(MAX_RISK_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use crate::domain::complexity::ComplexityScore;

    use super::risk_multiplier;

    fn complexity(overall: f64) -> ComplexityScore {
        ComplexityScore {
            technical: overall,
            access: overall,
            safety: overall,
            timeline: overall,
            coordination: overall,
            overall,
        }
    }

    fn services(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|code| code.to_string()).collect()
    }

    #[test]
    fn scales_with_overall_complexity() {
        let low = risk_multiplier(&complexity(1.0), &[]);
        let high = risk_multiplier(&complexity(10.0), &[]);

        assert!((low - 1.02).abs() < 1e-9);
        assert!((high - 1.2).abs() < 1e-9);
    }

    #[test]
    fn each_high_risk_service_adds_five_percent() {
        let base = risk_multiplier(&complexity(5.0), &services(&["installation"]));
        let risky = risk_multiplier(&complexity(5.0), &services(&["demolition", "crane-lift"]));

        assert!((base - 1.1).abs() < 1e-9);
        assert!((risky - 1.2).abs() < 1e-9);
    }

    #[test]
    fn multiplier_is_capped_at_one_point_five() {
        let stacked = risk_multiplier(
            &complexity(10.0),
            &services(&["demolition", "excavation", "crane-lift", "emergency-callout"]),
        );

        assert!((stacked - 1.4).abs() < 1e-9);

        let with_more = risk_multiplier(
            &complexity(10.0),
            &services(&[
                "demolition",
                "excavation",
                "crane-lift",
                "emergency-callout",
                "demolition",
                "excavation",
                "crane-lift",
            ]),
        );
        assert!((with_more - 1.5).abs() < 1e-9);
    }

    #[test]
    fn multiplier_never_drops_below_one() {
        let multiplier = risk_multiplier(&complexity(0.0), &[]);

        assert!(multiplier >= 1.0);
    }
}
