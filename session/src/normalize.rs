//! Raw text inputs to a validated [`SimulationRequest`].
//!
//! Fail-closed: any field that does not parse, any negative amount, a
//! non-positive horizon, or allocations that do not sum to 100% abort the
//! submission before a single byte goes over the wire.

use glidepath_types::{Allocations, Field, RawInputs, SimulationRequest, ValidationError};

/// Tolerance on the allocation fraction sum, absorbing the division of
/// whole-number percentages by 100.
const ALLOCATION_SUM_TOLERANCE: f64 = 1e-6;

/// Convert raw inputs into a simulation request, or name the first field
/// that fails.
///
/// Pure: no side effects, same inputs always give the same result.
pub fn normalize(inputs: &RawInputs) -> Result<SimulationRequest, ValidationError> {
    let income = parse_amount(inputs, Field::Income)?;
    let expenses = parse_amount(inputs, Field::Expenses)?;
    let cashflows = parse_amount(inputs, Field::Cashflows)?;
    let liabilities = parse_amount(inputs, Field::Liabilities)?;
    let current_value = parse_amount(inputs, Field::CurrentValue)?;

    let equity = parse_amount(inputs, Field::EquityPct)? / 100.0;
    let fixed_income = parse_amount(inputs, Field::FixedIncomePct)? / 100.0;
    let alternatives = parse_amount(inputs, Field::AlternativesPct)? / 100.0;

    let goal_amount = parse_amount(inputs, Field::GoalAmount)?;
    let goal_years = parse_years(inputs)?;

    let sum = equity + fixed_income + alternatives;
    if (sum - 1.0).abs() > ALLOCATION_SUM_TOLERANCE {
        return Err(ValidationError::AllocationSum {
            sum_pct: sum * 100.0,
        });
    }

    Ok(SimulationRequest {
        income,
        expenses,
        cashflows,
        liabilities,
        current_value,
        allocations: Allocations {
            equity,
            fixed_income,
            alternatives,
        },
        goal_amount,
        goal_years,
    })
}

fn parse_amount(inputs: &RawInputs, field: Field) -> Result<f64, ValidationError> {
    let raw = inputs.get(field).trim();
    let value: f64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    // "NaN" and "inf" parse successfully; neither is a usable amount.
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(value)
}

fn parse_years(inputs: &RawInputs) -> Result<u32, ValidationError> {
    let raw = inputs.get(Field::GoalYears).trim();
    if let Ok(years) = raw.parse::<u32>() {
        if years == 0 {
            return Err(ValidationError::NonPositiveYears);
        }
        return Ok(years);
    }
    // Numeric but not a positive integer (negative, fractional) reads
    // differently from plain garbage.
    if raw.parse::<f64>().is_ok_and(f64::is_finite) {
        Err(ValidationError::NonPositiveYears)
    } else {
        Err(ValidationError::NotANumber {
            field: Field::GoalYears,
            value: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use glidepath_types::{Field, RawInputs, ValidationError};

    fn valid_inputs() -> RawInputs {
        let mut inputs = RawInputs::default();
        inputs.set(Field::Income, "120000");
        inputs.set(Field::Expenses, "60000");
        inputs.set(Field::Cashflows, "5000");
        inputs.set(Field::Liabilities, "10000");
        inputs.set(Field::CurrentValue, "250000");
        inputs.set(Field::EquityPct, "60");
        inputs.set(Field::FixedIncomePct, "30");
        inputs.set(Field::AlternativesPct, "10");
        inputs.set(Field::GoalAmount, "1000000");
        inputs.set(Field::GoalYears, "10");
        inputs
    }

    #[test]
    fn valid_inputs_normalize() {
        let request = normalize(&valid_inputs()).unwrap();
        assert!((request.income - 120_000.0).abs() < f64::EPSILON);
        assert!((request.allocations.equity - 0.6).abs() < f64::EPSILON);
        assert_eq!(request.goal_years, 10);
    }

    #[test]
    fn allocation_fractions_sum_to_one() {
        // Any whole-number split of 100 must survive the /100 division.
        for (e, f, a) in [(60, 30, 10), (100, 0, 0), (33, 33, 34), (1, 1, 98)] {
            let mut inputs = valid_inputs();
            inputs.set(Field::EquityPct, e.to_string());
            inputs.set(Field::FixedIncomePct, f.to_string());
            inputs.set(Field::AlternativesPct, a.to_string());
            let request = normalize(&inputs).unwrap();
            let sum = request.allocations.equity
                + request.allocations.fixed_income
                + request.allocations.alternatives;
            assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
        }
    }

    #[test]
    fn non_numeric_text_names_the_field() {
        for field in Field::ALL {
            let mut inputs = valid_inputs();
            inputs.set(field, "twelve");
            let error = normalize(&inputs).unwrap_err();
            match error {
                ValidationError::NotANumber { field: named, .. } => assert_eq!(named, field),
                other => panic!("expected NotANumber for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_field_is_not_a_number() {
        let mut inputs = valid_inputs();
        inputs.set(Field::GoalAmount, "");
        assert!(matches!(
            normalize(&inputs).unwrap_err(),
            ValidationError::NotANumber {
                field: Field::GoalAmount,
                ..
            }
        ));
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        for text in ["NaN", "inf", "-inf"] {
            let mut inputs = valid_inputs();
            inputs.set(Field::Income, text);
            assert!(
                matches!(
                    normalize(&inputs).unwrap_err(),
                    ValidationError::NotANumber { .. } | ValidationError::Negative { .. }
                ),
                "{text} slipped through"
            );
        }
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut inputs = valid_inputs();
        inputs.set(Field::Liabilities, "-5");
        assert_eq!(
            normalize(&inputs).unwrap_err(),
            ValidationError::Negative {
                field: Field::Liabilities,
            }
        );
    }

    #[test]
    fn goal_years_must_be_a_positive_integer() {
        for text in ["0", "-3", "2.5"] {
            let mut inputs = valid_inputs();
            inputs.set(Field::GoalYears, text);
            assert_eq!(
                normalize(&inputs).unwrap_err(),
                ValidationError::NonPositiveYears,
                "for input {text:?}"
            );
        }
    }

    #[test]
    fn allocations_must_sum_to_hundred() {
        let mut inputs = valid_inputs();
        inputs.set(Field::AlternativesPct, "5");
        match normalize(&inputs).unwrap_err() {
            ValidationError::AllocationSum { sum_pct } => {
                assert!((sum_pct - 95.0).abs() < 1e-6);
            }
            other => panic!("expected AllocationSum, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_is_trimmed() {
        let mut inputs = valid_inputs();
        inputs.set(Field::Income, " 120000 ");
        assert!(normalize(&inputs).is_ok());
    }
}
