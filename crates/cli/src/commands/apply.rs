use crate::di::Services;
use anyhow::{bail, Context};
use cfgattr_domain::Config;
use cfgattr_infrastructure::tunnel::ResolvConfWriter;
use cfgattr_infrastructure::wire::ConfigurationPayload;
use std::path::PathBuf;
use tracing::{info, warn};

pub enum PayloadSource {
    Hex(String),
    File(PathBuf),
}

impl PayloadSource {
    async fn read(&self) -> anyhow::Result<Vec<u8>> {
        match self {
            PayloadSource::Hex(text) => {
                let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
                hex::decode(&compact).context("Payload is not valid hex")
            }
            PayloadSource::File(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

pub async fn run(
    services: &Services,
    config: &Config,
    source: PayloadSource,
    dry_run: bool,
) -> anyhow::Result<()> {
    let bytes = source.read().await?;
    let payload = ConfigurationPayload::decode(&bytes)?;

    if !payload.config_type.carries_configuration() {
        bail!("Refusing to apply a {} payload", payload.config_type);
    }

    let report = services.apply.execute(&payload.attributes);
    println!(
        "accepted={} rejected={} unhandled={}",
        report.accepted, report.rejected, report.unhandled
    );
    for attribute_type in &report.unhandled_types {
        info!(attribute = %attribute_type, "Attribute left to other handlers");
    }

    let settings = services.builder.snapshot();
    let writer = ResolvConfWriter::from_config(&config.output);

    if dry_run {
        print!("{}", writer.render(&settings));
    } else if settings.is_empty() {
        warn!(
            path = %writer.path().display(),
            "No resolver settings received, leaving file untouched"
        );
    } else {
        writer.write(&settings).await?;
    }

    Ok(())
}
