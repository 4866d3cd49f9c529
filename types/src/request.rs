//! The normalized, unit-consistent simulation request.

/// Portfolio split as fractions in `[0, 1]`.
///
/// Derived from whole-number percentage inputs divided by 100. The
/// normalizer guarantees the three fractions sum to 1.0 within tolerance
/// before a request is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocations {
    pub equity: f64,
    pub fixed_income: f64,
    pub alternatives: f64,
}

/// A fully validated simulation request.
///
/// Created once per submission attempt from [`RawInputs`] and immutable
/// afterwards. All currency amounts are non-negative; `goal_years` is a
/// positive integer horizon.
///
/// [`RawInputs`]: crate::RawInputs
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub income: f64,
    pub expenses: f64,
    pub cashflows: f64,
    pub liabilities: f64,
    pub current_value: f64,
    pub allocations: Allocations,
    pub goal_amount: f64,
    pub goal_years: u32,
}
