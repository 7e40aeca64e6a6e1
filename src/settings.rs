use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// Bundle naming and metadata, overridable through `PGDOCSET_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bundle: String,
    pub name: String,
    pub identifier: String,
    pub platform_family: String,
    pub index_page: String,
}

pub fn load() -> Result<Settings> {
    let settings = Config::builder()
        .set_default("bundle", "postgresql.docset")?
        .set_default("name", "PostgreSQL")?
        .set_default("identifier", "postgresql")?
        .set_default("platform_family", "postgresql")?
        .set_default("index_page", "index.html")?
        .add_source(Environment::with_prefix("PGDOCSET"))
        .build()?
        .try_deserialize()?;
    Ok(settings)
}
