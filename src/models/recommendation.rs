use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Key performance indicators attached to a recommendation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Kpi {
    /// Value of the performance metric
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 0.9)]
    pub performance: Option<f64>,
    /// Average performance of a model
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 0.75)]
    pub avg_performance: Option<f64>,
    /// Computation priority
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub priority: Option<i64>,
    /// Average value of the execution time
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 144.1)]
    pub avg_training_time: Option<f64>,
    /// Computational complexity
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "n")]
    pub complexity: Option<String>,
}

/// A recommended method for a task, with its setup and KPIs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Recommendation {
    /// Task ID
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "046b6c7f-0b8a-43b9")]
    pub task_id: Option<String>,
    /// Strategy ID
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "096b6c7f-9a6c-32c8")]
    pub strategy_id: Option<String>,
    /// Recommended method
    #[schema(example = "svm")]
    pub method: String,
    /// Recommended method setup, as serialized configuration text
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "{'C': 1.0,  'kernel': 'rbf', 'degree': 3}")]
    pub method_setup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpi: Option<Kpi>,
}

impl Recommendation {
    /// The fixed example served by the recommender endpoints
    pub fn example() -> Self {
        Self {
            task_id: Some("046b6c7f-0b8a-43b9".to_string()),
            strategy_id: Some("096b6c7f-9a6c-32c8".to_string()),
            method: "svm".to_string(),
            method_setup: Some("{'C': 1.0,  'kernel': 'rbf', 'degree': 3}".to_string()),
            kpi: Some(Kpi {
                performance: Some(0.9),
                avg_performance: Some(0.75),
                priority: Some(1),
                avg_training_time: Some(144.1),
                complexity: Some("n".to_string()),
            }),
        }
    }
}
