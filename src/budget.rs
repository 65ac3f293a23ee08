use crate::{
    core::{EmissionsTable, Year},
    data::{DEFAULT_BUDGET, historical_emissions},
    error::{BankError, BankResult},
};

/// A historical emissions record paired with the total carbon budget it is
/// accounted against. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Bank {
    table: EmissionsTable,
    budget: f64, // gigatonnes
}

impl Bank {
    pub fn new(table: EmissionsTable, budget: f64) -> BankResult<Self> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(BankError::validation("budget must be a positive number"));
        }
        Ok(Self { table, budget })
    }

    /// The embedded historical record against the default budget.
    pub fn historical() -> Self {
        Self {
            table: historical_emissions().clone(),
            budget: DEFAULT_BUDGET,
        }
    }

    pub fn table(&self) -> &EmissionsTable {
        &self.table
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Cumulative historical emissions up to and including `year`, in
    /// gigatonnes. Years without data contribute nothing: queries before the
    /// record yield 0, queries past it yield the full historical sum.
    pub fn used_budget_as_of(&self, year: Year) -> f64 {
        self.table
            .points()
            .iter()
            .filter(|d| d.year <= year)
            .map(|d| d.emissions)
            .sum::<f64>()
            / 1e9
    }

    /// Budget left after `year`, converted back to raw tonnes so it is
    /// directly comparable with yearly emission rates. Negative means the
    /// budget is already exhausted, not that the input was invalid.
    pub fn remaining_budget(&self, year: Year) -> f64 {
        (self.budget - self.used_budget_as_of(year)) * 1e9
    }
}
