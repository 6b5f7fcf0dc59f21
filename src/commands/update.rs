use anyhow::{Context, Result};
use log::debug;

use crate::api::{ChartUpdate, ChartsApi};

/// Update a chart's payload, and optionally its name
#[tracing::instrument(skip(api, data))]
pub async fn update<C: ChartsApi>(
    api: &C,
    id: i64,
    name: Option<String>,
    data: &str,
) -> Result<()> {
    let data = serde_json::from_str(data).context("Invalid JSON in --data")?;

    debug!("Updating chart {}", id);

    let response = api.update_chart(id, &ChartUpdate { name, data }).await?;

    println!("{}", response);
    Ok(())
}
