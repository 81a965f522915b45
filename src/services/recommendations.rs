use crate::{
    error::AppResult,
    models::{Recommendation, RecommenderRequest, RecommenderTrainingRequest},
};

/// Recommends a method for deploying an existing task
///
/// No ranking is performed yet: every request receives the fixed example
/// recommendation, whatever its task, KPI or strategy preference.
pub async fn recommend_for_task(request: &RecommenderRequest) -> AppResult<Recommendation> {
    tracing::info!(
        task_id = %request.task_id,
        kpi = %request.kpi,
        strategy = %request.strategy,
        "Serving example recommendation for task"
    );

    Ok(Recommendation::example())
}

/// Recommends a method for training on a dataset
///
/// Like [`recommend_for_task`], the response does not depend on the request.
pub async fn recommend_for_training(
    request: &RecommenderTrainingRequest,
) -> AppResult<Recommendation> {
    tracing::info!(
        dataset_id = %request.dataset_id,
        data_type = %request.data_type,
        task_type = %request.task_type,
        "Serving example recommendation for training"
    );

    Ok(Recommendation::example())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_request(strategy: &str) -> RecommenderRequest {
        RecommenderRequest {
            task_id: "046b6c7f-0b8a-43b9".to_string(),
            kpi: "performance".to_string(),
            performance_metric: "predictive_accuracy".to_string(),
            strategy: strategy.to_string(),
            task_indicator: None,
        }
    }

    #[tokio::test]
    async fn test_recommendation_ignores_request_content() {
        let a = recommend_for_task(&task_request("decisionTreeClassifier"))
            .await
            .unwrap();
        let b = recommend_for_task(&task_request("kMeans")).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Recommendation::example());
    }

    #[tokio::test]
    async fn test_training_recommendation_is_example() {
        let request = RecommenderTrainingRequest {
            dataset_id: "1".to_string(),
            data_type: "tabular".to_string(),
            task_type: "classification".to_string(),
            kpi: "performance".to_string(),
            performance_metric: "predictive_accuracy".to_string(),
            strategy: "decisionTreeClassifier".to_string(),
            task_indicator: Some("oml".to_string()),
        };

        let recommendation = recommend_for_training(&request).await.unwrap();
        assert_eq!(recommendation.method, "svm");
    }
}
