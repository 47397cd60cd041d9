//! Loan input value types

mod data;

pub use data::{HelocInput, MortgageInput};
