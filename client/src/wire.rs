//! Wire contract with the projection service.
//!
//! Outbound: flat JSON body with a nested `portfolio` object. Inbound:
//! `{"data": {"simulation": {"probability": ..., "avg_yearly_networth":
//! [...]}}}`. The inbound side is probed field by field rather than
//! deserialized wholesale, so a missing or wrong-typed field becomes a
//! precise [`ResponseShapeError`] instead of an opaque decode error.

use glidepath_types::{ResponseShapeError, SimulationRequest, SimulationResponse};
use serde::Serialize;
use serde_json::Value;

const PROBABILITY_PATH: &str = "data.simulation.probability";
const NETWORTH_PATH: &str = "data.simulation.avg_yearly_networth";

#[derive(Debug, Serialize)]
pub(crate) struct RequestBody {
    income: f64,
    expenses: f64,
    liabilities: f64,
    cashflows: f64,
    current_value: f64,
    portfolio: Portfolio,
    goal: f64,
    year: u32,
}

#[derive(Debug, Serialize)]
struct Portfolio {
    equity: f64,
    fixed_income: f64,
    alternatives: f64,
}

impl From<&SimulationRequest> for RequestBody {
    fn from(request: &SimulationRequest) -> Self {
        Self {
            income: request.income,
            expenses: request.expenses,
            liabilities: request.liabilities,
            cashflows: request.cashflows,
            current_value: request.current_value,
            portfolio: Portfolio {
                equity: request.allocations.equity,
                fixed_income: request.allocations.fixed_income,
                alternatives: request.allocations.alternatives,
            },
            goal: request.goal_amount,
            year: request.goal_years,
        }
    }
}

/// Validate a success-status payload into a [`SimulationResponse`].
pub(crate) fn validate_payload(payload: &Value) -> Result<SimulationResponse, ResponseShapeError> {
    let probability = payload
        .pointer("/data/simulation/probability")
        .and_then(Value::as_f64)
        .ok_or(ResponseShapeError::Missing {
            path: PROBABILITY_PATH,
        })?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(ResponseShapeError::ProbabilityOutOfRange {
            path: PROBABILITY_PATH,
            value: probability,
        });
    }

    let entries = payload
        .pointer("/data/simulation/avg_yearly_networth")
        .and_then(Value::as_array)
        .ok_or(ResponseShapeError::Missing {
            path: NETWORTH_PATH,
        })?;

    let mut yearly_net_worth = Vec::with_capacity(entries.len());
    for entry in entries {
        let value = entry
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or(ResponseShapeError::NotFinite {
                path: NETWORTH_PATH,
            })?;
        yearly_net_worth.push(value);
    }

    Ok(SimulationResponse {
        probability,
        yearly_net_worth,
    })
}
