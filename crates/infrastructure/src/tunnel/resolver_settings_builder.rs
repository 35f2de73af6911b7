use super::ResolverSettings;
use cfgattr_application::ports::TunnelBuilder;
use std::net::IpAddr;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Tunnel builder that collects the resolver part of the interface
/// configuration, to be written out once negotiation is done.
#[derive(Default)]
pub struct ResolverSettingsBuilder {
    settings: Mutex<ResolverSettings>,
}

impl ResolverSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ResolverSettings {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ResolverSettings> {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TunnelBuilder for ResolverSettingsBuilder {
    fn add_dns(&self, server: IpAddr) {
        if !self.lock().add_nameserver(server) {
            debug!(server = %server, "DNS server already installed");
        }
    }

    fn add_search_domain(&self, domain: &str) {
        if !self.lock().add_search_domain(domain) {
            debug!(domain, "Search domain already installed");
        }
    }
}
