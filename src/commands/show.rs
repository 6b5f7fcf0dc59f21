use anyhow::{Context, Result};
use log::debug;

use crate::api::ChartsApi;

/// Fetch one chart and print it as pretty JSON
#[tracing::instrument(skip(api))]
pub async fn show<C: ChartsApi>(api: &C, id: i64) -> Result<()> {
    debug!("Fetching chart {}", id);

    let chart = api.get_chart(id).await?;
    let rendered =
        serde_json::to_string_pretty(&chart).context("Failed to render chart as JSON")?;
    println!("{}", rendered);

    Ok(())
}
