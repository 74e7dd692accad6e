use anyhow::Result;
use media_tracker_core::{AppConfig, ListKind};
use media_tracker_ui::Filters;

use crate::{collections, search_service};

pub(crate) async fn run_search(config: &AppConfig, title: &str) -> Result<()> {
    let record = search_service(config)?.search(Some(title)).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) async fn run_list(
    config: &AppConfig,
    kind: &str,
    media_type: Option<&str>,
    year: Option<&str>,
) -> Result<()> {
    let kind: ListKind = kind.parse()?;
    let mut filters = Filters::default();
    filters.set_media_type(media_type.unwrap_or_default());
    filters.set_year(year.unwrap_or_default());

    let entries = collections(config).await?.list(kind).await?;
    let shown: Vec<_> = entries.iter().filter(|e| filters.matches(e)).collect();
    println!("{}", serde_json::to_string_pretty(&shown)?);
    Ok(())
}
