use anyhow::Result;
use log::debug;

use crate::api::ChartsApi;

/// List all charts known to the backend
#[tracing::instrument(skip(api))]
pub async fn list<C: ChartsApi>(api: &C) -> Result<()> {
    let charts = api.list_charts().await?;
    if charts.is_empty() {
        println!("No charts found.");
        return Ok(());
    }

    debug!("Found {} chart(s)", charts.len());

    for chart in charts {
        println!("{}\t{}\t{}", chart.id, chart.name, chart.created_at);
    }

    Ok(())
}
