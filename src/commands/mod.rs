//! CLI command implementations.
//!
//! Each command takes a [`ChartsApi`] implementation so tests can drive it
//! with a mock instead of a live backend.

use anyhow::Result;
use reqwest::Client;

use crate::api::ChartsClient;

mod create;
mod list;
mod remove;
mod show;
mod update;

pub use create::create;
pub use list::list;
pub use remove::remove;
pub use show::show;
pub use update::update;

/// Build a charts client from the optional base URL override.
pub fn build_client(base_url: Option<String>) -> Result<ChartsClient> {
    let client = Client::builder().user_agent("chartctl").build()?;
    Ok(ChartsClient::new(client, base_url))
}
