use crate::services::AttributeHandlerChain;
use cfgattr_domain::AttributeRequest;
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Use case: collect the attributes to send in a CFG_REQUEST.
pub struct BuildConfigurationRequestUseCase {
    chain: Arc<AttributeHandlerChain>,
}

impl BuildConfigurationRequestUseCase {
    pub fn new(chain: Arc<AttributeHandlerChain>) -> Self {
        Self { chain }
    }

    /// Drains every handler's requests in chain order. A request asked for
    /// by several handlers is kept once, at its first position.
    pub fn execute(&self, virtual_ips: &[IpAddr]) -> Vec<AttributeRequest> {
        let mut seen = HashSet::new();
        let requests: Vec<AttributeRequest> = self
            .chain
            .request_attributes(virtual_ips)
            .filter(|request| seen.insert(request.clone()))
            .collect();

        debug!(count = requests.len(), vips = virtual_ips.len(), "Configuration request built");
        requests
    }
}
