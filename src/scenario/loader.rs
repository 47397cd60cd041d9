//! Load scenarios from a CSV definition file
//!
//! Rate columns are whole-number percentages (6.5 means 6.5%), matching how
//! callers supply them; conversion to decimal fractions happens here.
//! Optional override columns may be left empty.

use csv::Reader;
use std::error::Error;
use std::io::Read;
use std::path::Path;

use crate::loan::{HelocInput, MortgageInput};
use super::Scenario;

/// Default location for the scenario definition file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "TermMonths")]
    term_months: u32,
    #[serde(rename = "CurrentBalance")]
    current_balance: Option<f64>,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: Option<f64>,
    #[serde(rename = "HelocLimit")]
    heloc_limit: f64,
    #[serde(rename = "HelocRatePct")]
    heloc_rate_pct: f64,
    #[serde(rename = "DiscretionaryIncome")]
    discretionary_income: f64,
}

impl CsvRow {
    fn to_scenario(self) -> Scenario {
        let mortgage = MortgageInput {
            principal: self.principal,
            annual_interest_rate: self.annual_rate_pct / 100.0,
            term_in_months: self.term_months,
            current_balance: self.current_balance,
            monthly_payment: self.monthly_payment,
        };
        let heloc = HelocInput::for_mortgage(
            &mortgage,
            self.heloc_limit,
            self.heloc_rate_pct / 100.0,
            self.discretionary_income,
        );

        Scenario {
            name: self.name,
            mortgage,
            heloc,
        }
    }
}

/// Load scenarios from a CSV file on disk
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Read scenarios from any CSV source
pub fn read_scenarios<R: Read>(source: R) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let reader = Reader::from_reader(source);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut scenarios = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row?;
        scenarios.push(row.to_scenario());
    }
    Ok(scenarios)
}
