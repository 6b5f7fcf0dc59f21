use anyhow::{Context, Result};
use log::debug;

use crate::api::{ChartsApi, NewChart};

/// Create a chart from a name and a raw JSON payload string
#[tracing::instrument(skip(api, data))]
pub async fn create<C: ChartsApi>(api: &C, name: &str, data: &str) -> Result<()> {
    let data = serde_json::from_str(data).context("Invalid JSON in --data")?;

    debug!("Creating chart {:?}", name);

    let created = api
        .create_chart(&NewChart {
            name: name.to_string(),
            data,
        })
        .await?;

    println!("Created chart {}", created.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CreatedChart, MockChartsApi, NewChart};
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_chart() {
        let mut api = MockChartsApi::new();
        api.expect_create_chart()
            .with(eq(NewChart {
                name: "A".to_string(),
                data: json!({"nodes": []}),
            }))
            .times(1)
            .returning(|_| Ok(CreatedChart { id: 17 }));

        let result = create(&api, "A", r#"{"nodes": []}"#).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_chart_invalid_json() {
        let api = MockChartsApi::new();

        let result = create(&api, "A", "{not json").await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_create_chart_propagates_error() {
        let mut api = MockChartsApi::new();
        api.expect_create_chart()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("HTTP status client error (400 Bad Request)")));

        let result = create(&api, "A", "{}").await;
        assert!(result.is_err());
    }
}
