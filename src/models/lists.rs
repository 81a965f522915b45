use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Top-level entries of the list catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKey {
    TaskType,
    DataType,
    Kpi,
    PerformanceMetric,
    Strategy,
}

impl ListKey {
    pub const ALL: [ListKey; 5] = [
        ListKey::TaskType,
        ListKey::DataType,
        ListKey::Kpi,
        ListKey::PerformanceMetric,
        ListKey::Strategy,
    ];

    /// Key name in the catalog document
    pub fn as_str(self) -> &'static str {
        match self {
            ListKey::TaskType => "task_type",
            ListKey::DataType => "data_type",
            ListKey::Kpi => "kpi",
            ListKey::PerformanceMetric => "performance_metric",
            ListKey::Strategy => "strategy",
        }
    }

    /// Response field that wraps a flat list, if this key holds one
    pub fn envelope(self) -> Option<&'static str> {
        match self {
            ListKey::TaskType => Some("task_type_all"),
            ListKey::DataType => Some("data_type_all"),
            ListKey::Kpi => Some("kpi_all"),
            ListKey::PerformanceMetric | ListKey::Strategy => None,
        }
    }

    /// Shapes a stored catalog value into the response body for this key.
    ///
    /// Flat lists are wrapped in their envelope field. Anything else is
    /// returned as stored.
    pub fn shape(self, value: Value) -> Value {
        match (self.envelope(), value) {
            (Some(field), Value::Array(items)) => {
                let mut body = Map::new();
                body.insert(field.to_string(), Value::Array(items));
                Value::Object(body)
            }
            (_, value) => value,
        }
    }
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Response shapes below are only referenced by the API description.

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskTypeList {
    #[schema(example = json!(["classification", "regression", "clustering", "optimisation"]))]
    pub task_type_all: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DataTypeList {
    #[schema(example = json!(["tabular", "time_series", "image"]))]
    pub data_type_all: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct KpiList {
    #[schema(example = json!(["performance", "avg_performance", "avg_training_time"]))]
    pub kpi_all: Vec<String>,
}

/// Performance metrics grouped by task type
#[derive(Debug, Serialize, ToSchema)]
pub struct PerformanceMetricList {
    pub classification: Option<Vec<String>>,
    pub regression: Option<Vec<String>>,
    pub clustering: Option<Vec<String>>,
    pub optimisation: Option<Vec<String>>,
}

/// Strategies grouped by data type and task type
#[derive(Debug, Serialize, ToSchema)]
pub struct StrategyList {
    pub tabular_classification: Option<Vec<String>>,
    pub tabular_regression: Option<Vec<String>>,
    pub tabular_clustering: Option<Vec<String>>,
    pub tabular_optimisation: Option<Vec<String>>,
    pub time_series_classification: Option<Vec<String>>,
    pub time_series_regression: Option<Vec<String>>,
    pub time_series_clustering: Option<Vec<String>>,
    pub image_classification: Option<Vec<String>>,
}
