//! Service response and its presentation-ready derivative.

/// A validated simulation result from the projection service.
///
/// `probability` stays in `[0, 1]` here; scaling to a percentage happens
/// only in [`ProjectionModel`], so the raw value can be re-derived at any
/// scale without another fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResponse {
    /// Likelihood of reaching the goal, in `[0, 1]`.
    pub probability: f64,
    /// Average net worth at the end of each simulated year, chronological.
    pub yearly_net_worth: Vec<f64>,
}

/// One labeled point of the projection chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Presentation-ready derivative of a [`SimulationResponse`].
///
/// Recomputed whenever a new response arrives; it has no identity of its
/// own. Labels are purely positional ("Year 1", "Year 2", ...) and sized
/// to the actual response sequence, which is not assumed to match the
/// requested horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionModel {
    pub probability_percent: f64,
    pub series: Vec<SeriesPoint>,
}

impl ProjectionModel {
    #[must_use]
    pub fn from_response(response: &SimulationResponse) -> Self {
        let series = response
            .yearly_net_worth
            .iter()
            .enumerate()
            .map(|(index, &value)| SeriesPoint {
                label: format!("Year {}", index + 1),
                value,
            })
            .collect();

        Self {
            probability_percent: response.probability * 100.0,
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectionModel, SimulationResponse};

    #[test]
    fn derives_percent_and_positional_labels() {
        let response = SimulationResponse {
            probability: 0.5,
            yearly_net_worth: vec![100.0, 200.0, 300.0],
        };
        let model = ProjectionModel::from_response(&response);

        assert!((model.probability_percent - 50.0).abs() < f64::EPSILON);
        let labels: Vec<&str> = model.series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Year 1", "Year 2", "Year 3"]);
        let values: Vec<f64> = model.series.iter().map(|p| p.value).collect();
        assert_eq!(values, [100.0, 200.0, 300.0]);
    }

    #[test]
    fn sizes_series_to_response_not_horizon() {
        // The service decides the horizon; an empty trajectory is an empty
        // chart, not an error.
        let response = SimulationResponse {
            probability: 1.0,
            yearly_net_worth: vec![],
        };
        let model = ProjectionModel::from_response(&response);
        assert!(model.series.is_empty());
        assert!((model.probability_percent - 100.0).abs() < f64::EPSILON);
    }
}
