use anyhow::Result;
use log::debug;

use crate::api::ChartsApi;

/// Delete a chart by id
#[tracing::instrument(skip(api))]
pub async fn remove<C: ChartsApi>(api: &C, id: i64) -> Result<()> {
    debug!("Deleting chart {}", id);

    let response = api.delete_chart(id).await?;

    println!("{}", response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockChartsApi;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_remove_chart() {
        let mut api = MockChartsApi::new();
        api.expect_delete_chart()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(json!({"status": "deleted"})));

        let result = remove(&api, 5).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_remove_chart_propagates_error() {
        let mut api = MockChartsApi::new();
        api.expect_delete_chart()
            .with(eq(999))
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("HTTP status client error (404 Not Found)")));

        let result = remove(&api, 999).await;
        assert!(result.is_err());
    }
}
