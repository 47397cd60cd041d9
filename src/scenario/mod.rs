//! Named scenarios and batch comparison runs
//!
//! A scenario pairs a mortgage with the HELOC strategy terms to evaluate
//! against it. Batches fan out across cores; each run is a pure function of
//! its scenario, so order never matters.

pub mod loader;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::comparison::{compare_strategies, ComparisonResult};
use crate::loan::{HelocInput, MortgageInput};

pub use loader::{load_scenarios, read_scenarios, DEFAULT_SCENARIOS_PATH};

/// A named comparison case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub mortgage: MortgageInput,
    pub heloc: HelocInput,
}

/// Result of one scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: ComparisonResult,
}

/// Run a single scenario
pub fn run_scenario(scenario: &Scenario) -> ScenarioOutcome {
    ScenarioOutcome {
        name: scenario.name.clone(),
        result: compare_strategies(&scenario.mortgage, &scenario.heloc),
    }
}

/// Run a batch of scenarios in parallel, preserving input order
pub fn run_batch(scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios.par_iter().map(run_scenario).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(name: &str, discretionary: f64) -> Scenario {
        let mortgage = MortgageInput::new(200_000.0, 0.06, 360);
        let heloc = HelocInput::for_mortgage(&mortgage, 25_000.0, 0.08, discretionary);
        Scenario {
            name: name.to_string(),
            mortgage,
            heloc,
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let scenarios = vec![
            scenario("baseline", 0.0),
            scenario("moderate", 500.0),
            scenario("aggressive", 1_500.0),
        ];

        let outcomes = run_batch(&scenarios);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].name, "baseline");
        assert_eq!(outcomes[2].name, "aggressive");
    }

    #[test]
    fn test_more_surplus_pays_off_sooner() {
        let outcomes = run_batch(&[scenario("moderate", 500.0), scenario("aggressive", 1_500.0)]);

        assert!(
            outcomes[1].result.heloc.payoff_months < outcomes[0].result.heloc.payoff_months
        );
        assert!(outcomes[1].result.comparison.interest_saved
            > outcomes[0].result.comparison.interest_saved);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let s = scenario("solo", 750.0);
        let single = run_scenario(&s);
        let batched = run_batch(std::slice::from_ref(&s));

        assert_eq!(
            single.result.heloc.payoff_months,
            batched[0].result.heloc.payoff_months
        );
        assert_eq!(
            single.result.comparison.interest_saved.to_bits(),
            batched[0].result.comparison.interest_saved.to_bits()
        );
    }
}
