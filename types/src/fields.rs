//! The ten recognized form fields and their raw text values.

use std::fmt;

/// One input field of the retirement planning form.
///
/// The set is closed: every field the form collects is listed here, and the
/// normalizer consumes exactly these. Ordering matters - it is the order
/// fields are displayed and tabbed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Income,
    Expenses,
    Cashflows,
    Liabilities,
    CurrentValue,
    EquityPct,
    FixedIncomePct,
    AlternativesPct,
    GoalAmount,
    GoalYears,
}

/// Unit category of a field, used for labeling and validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A non-negative currency amount.
    Currency,
    /// A whole-number percentage, later divided by 100.
    Percent,
    /// A positive integer count of years.
    Years,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 10] = [
        Field::Income,
        Field::Expenses,
        Field::Cashflows,
        Field::Liabilities,
        Field::CurrentValue,
        Field::EquityPct,
        Field::FixedIncomePct,
        Field::AlternativesPct,
        Field::GoalAmount,
        Field::GoalYears,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable snake_case name, used in logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Income => "income",
            Field::Expenses => "expenses",
            Field::Cashflows => "cashflows",
            Field::Liabilities => "liabilities",
            Field::CurrentValue => "current_value",
            Field::EquityPct => "equity_allocation",
            Field::FixedIncomePct => "fixed_income_allocation",
            Field::AlternativesPct => "other_allocation",
            Field::GoalAmount => "goal",
            Field::GoalYears => "goal_years",
        }
    }

    /// Human-facing label for the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::Income => "Annual Income (₹)",
            Field::Expenses => "Annual Expenses (₹)",
            Field::Cashflows => "Annual Cash Flows (₹)",
            Field::Liabilities => "Annual Liabilities (₹)",
            Field::CurrentValue => "Portfolio Current Value (₹)",
            Field::EquityPct => "Equity Allocation (%)",
            Field::FixedIncomePct => "Fixed Income Allocation (%)",
            Field::AlternativesPct => "Other Allocation (%)",
            Field::GoalAmount => "Goal Amount (₹)",
            Field::GoalYears => "Goal Years",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Income
            | Field::Expenses
            | Field::Cashflows
            | Field::Liabilities
            | Field::CurrentValue
            | Field::GoalAmount => FieldKind::Currency,
            Field::EquityPct | Field::FixedIncomePct | Field::AlternativesPct => FieldKind::Percent,
            Field::GoalYears => FieldKind::Years,
        }
    }

    const fn index(self) -> usize {
        match self {
            Field::Income => 0,
            Field::Expenses => 1,
            Field::Cashflows => 2,
            Field::Liabilities => 3,
            Field::CurrentValue => 4,
            Field::EquityPct => 5,
            Field::FixedIncomePct => 6,
            Field::AlternativesPct => 7,
            Field::GoalAmount => 8,
            Field::GoalYears => 9,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw, unvalidated text values for every form field.
///
/// Owned exclusively by the active form session and mutated on every
/// keystroke. Nothing here is numeric yet; conversion happens once per
/// submission attempt in the normalizer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawInputs {
    values: [String; Field::COUNT],
}

impl RawInputs {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Mutable access to one field's text, for in-place editing.
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        &mut self.values[field.index()]
    }
}
