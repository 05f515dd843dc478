//! Sampling strategy DTOs
//!
//! The shape of a sampling strategy as returned by the remote authority.
//! Caches treat these values as opaque and only clone them.

use serde::{Deserialize, Serialize};

/// Kind of top-level sampling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SamplingStrategyType {
    Probabilistic,
    RateLimiting,
}

/// Samples a fixed fraction of traces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilisticSamplingStrategy {
    /// Sampling probability in the range [0, 1]
    pub sampling_rate: f64,
}

/// Samples at most a fixed number of traces per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitingSamplingStrategy {
    pub max_traces_per_second: i32,
}

/// Probabilistic strategy for a single operation (endpoint) of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSamplingStrategy {
    pub operation: String,
    pub probabilistic_sampling: ProbabilisticSamplingStrategy,
}

/// Per-operation strategies plus the defaults applied to unlisted operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerOperationSamplingStrategies {
    pub default_sampling_probability: f64,
    pub default_lower_bound_traces_per_second: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_upper_bound_traces_per_second: Option<f64>,
    #[serde(default)]
    pub per_operation_strategies: Vec<OperationSamplingStrategy>,
}

/// Sampling strategy for one service, as returned by the remote authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingStrategyResponse {
    pub strategy_type: SamplingStrategyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilistic_sampling: Option<ProbabilisticSamplingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limiting_sampling: Option<RateLimitingSamplingStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_sampling: Option<PerOperationSamplingStrategies>,
}

impl SamplingStrategyResponse {
    /// Creates a probabilistic strategy with the given sampling rate.
    pub fn probabilistic(sampling_rate: f64) -> Self {
        Self {
            strategy_type: SamplingStrategyType::Probabilistic,
            probabilistic_sampling: Some(ProbabilisticSamplingStrategy { sampling_rate }),
            rate_limiting_sampling: None,
            operation_sampling: None,
        }
    }

    /// Creates a rate-limiting strategy.
    pub fn rate_limiting(max_traces_per_second: i32) -> Self {
        Self {
            strategy_type: SamplingStrategyType::RateLimiting,
            probabilistic_sampling: None,
            rate_limiting_sampling: Some(RateLimitingSamplingStrategy {
                max_traces_per_second,
            }),
            operation_sampling: None,
        }
    }

    /// Attaches per-operation strategies to this response.
    pub fn with_operation_sampling(mut self, operations: PerOperationSamplingStrategies) -> Self {
        self.operation_sampling = Some(operations);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probabilistic_constructor() {
        let response = SamplingStrategyResponse::probabilistic(0.25);
        assert_eq!(response.strategy_type, SamplingStrategyType::Probabilistic);
        assert_eq!(
            response.probabilistic_sampling.unwrap().sampling_rate,
            0.25
        );
        assert!(response.rate_limiting_sampling.is_none());
    }

    #[test]
    fn test_serialize_rate_limiting() {
        let response = SamplingStrategyResponse::rate_limiting(5);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "strategyType": "RATE_LIMITING",
                "rateLimitingSampling": { "maxTracesPerSecond": 5 }
            })
        );
    }

    #[test]
    fn test_deserialize_per_operation() {
        let body = json!({
            "strategyType": "PROBABILISTIC",
            "probabilisticSampling": { "samplingRate": 0.5 },
            "operationSampling": {
                "defaultSamplingProbability": 0.1,
                "defaultLowerBoundTracesPerSecond": 1.0,
                "perOperationStrategies": [
                    {
                        "operation": "GET /checkout",
                        "probabilisticSampling": { "samplingRate": 1.0 }
                    }
                ]
            }
        });

        let response: SamplingStrategyResponse = serde_json::from_value(body).unwrap();
        let operations = response.operation_sampling.unwrap();
        assert_eq!(operations.default_sampling_probability, 0.1);
        assert!(operations.default_upper_bound_traces_per_second.is_none());
        assert_eq!(operations.per_operation_strategies.len(), 1);
        assert_eq!(
            operations.per_operation_strategies[0].operation,
            "GET /checkout"
        );
    }
}
