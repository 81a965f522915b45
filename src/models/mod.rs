mod lists;
mod recommendation;
mod requests;

pub use lists::{
    DataTypeList, KpiList, ListKey, PerformanceMetricList, StrategyList, TaskTypeList,
};
pub use recommendation::{Kpi, Recommendation};
pub use requests::{RecommenderRequest, RecommenderTrainingRequest};
