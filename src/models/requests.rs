use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{FieldKind, FieldSpec, RequestSchema};

/// Body of `POST /recommender`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecommenderRequest {
    /// Task ID from Knowledge Repository
    #[schema(example = "046b6c7f-0b8a-43b9")]
    pub task_id: String,
    /// Name of preferable kpi based on which the list should be ranked
    #[schema(example = "performance")]
    pub kpi: String,
    /// Preferable performance metric that should be used to select methods
    #[schema(example = "predictive_accuracy")]
    pub performance_metric: String,
    /// Preferable method to solve a task
    #[schema(example = "decisionTreeClassifier")]
    pub strategy: String,
    /// Task indicator
    #[schema(example = "oml")]
    pub task_indicator: Option<String>,
}

impl RequestSchema for RecommenderRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("task_id", FieldKind::String),
        FieldSpec::required("kpi", FieldKind::String),
        FieldSpec::required("performance_metric", FieldKind::String),
        FieldSpec::required("strategy", FieldKind::String),
        FieldSpec::optional("task_indicator", FieldKind::String),
    ];
}

/// Body of `POST /recommender-training`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecommenderTrainingRequest {
    /// Dataset ID from Knowledge Repository
    #[schema(example = "1")]
    pub dataset_id: String,
    /// Data type: tabular, time_series, image
    #[schema(example = "tabular")]
    pub data_type: String,
    /// Task type: classification, regression, clustering, optimisation
    #[schema(example = "classification")]
    pub task_type: String,
    /// Name of preferable kpi based on which the list should be ranked
    #[schema(example = "performance")]
    pub kpi: String,
    /// Preferable performance metric that should be used to select methods
    #[schema(example = "predictive_accuracy")]
    pub performance_metric: String,
    /// Preferable method to solve a task
    #[schema(example = "decisionTreeClassifier")]
    pub strategy: String,
    /// Task indicator
    #[schema(example = "oml")]
    pub task_indicator: Option<String>,
}

impl RequestSchema for RecommenderTrainingRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("dataset_id", FieldKind::String),
        FieldSpec::required("data_type", FieldKind::String),
        FieldSpec::required("task_type", FieldKind::String),
        FieldSpec::required("kpi", FieldKind::String),
        FieldSpec::required("performance_metric", FieldKind::String),
        FieldSpec::required("strategy", FieldKind::String),
        FieldSpec::optional("task_indicator", FieldKind::String),
    ];
}
