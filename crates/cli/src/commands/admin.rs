use anyhow::Result;
use media_tracker_core::AppConfig;

use crate::collections;

pub(crate) async fn run_init_db(config: &AppConfig) -> Result<()> {
    let collections = collections(config).await?;
    collections.setup().await?;
    let at = collections.ping().await?;
    println!("Tables created successfully! ({at})");
    Ok(())
}
