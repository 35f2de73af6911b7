use super::ResolverSettings;
use cfgattr_domain::config::OutputConfig;
use cfgattr_domain::DomainError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// Writes collected resolver settings as a resolv.conf file.
pub struct ResolvConfWriter {
    path: PathBuf,
    header: String,
}

impl ResolvConfWriter {
    pub fn new(path: impl Into<PathBuf>, header: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            header: header.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.resolv_conf_path, config.header.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(&self, settings: &ResolverSettings) -> String {
        settings.render(&self.header)
    }

    /// Replaces the target file atomically: the content goes to a sibling
    /// temp file first, which is then renamed over the target.
    pub async fn write(&self, settings: &ResolverSettings) -> Result<(), DomainError> {
        let content = self.render(settings);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::IoError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content.as_bytes()).await.map_err(|e| {
            DomainError::IoError(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                warn!(path = %tmp_path.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(DomainError::IoError(format!(
                "Failed to move {} to {}: {}",
                tmp_path.display(),
                self.path.display(),
                e
            )));
        }

        info!(
            path = %self.path.display(),
            nameservers = settings.nameservers.len(),
            search_domains = settings.search_domains.len(),
            "resolv.conf written"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "resolv.conf".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
