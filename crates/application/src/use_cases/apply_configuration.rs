use crate::services::AttributeHandlerChain;
use cfgattr_domain::{AttributeOutcome, AttributeType, RawAttribute};
use std::sync::Arc;
use tracing::{debug, info};

/// Tally of one configuration reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub accepted: usize,
    pub rejected: usize,
    pub unhandled: usize,
    /// Types nobody in the chain owned, in arrival order.
    pub unhandled_types: Vec<AttributeType>,
}

impl ApplyReport {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.unhandled
    }
}

/// Use case: apply the attributes of a CFG_REPLY/CFG_SET to the tunnel.
pub struct ApplyConfigurationUseCase {
    chain: Arc<AttributeHandlerChain>,
}

impl ApplyConfigurationUseCase {
    pub fn new(chain: Arc<AttributeHandlerChain>) -> Self {
        Self { chain }
    }

    pub fn execute(&self, attributes: &[RawAttribute<'_>]) -> ApplyReport {
        let mut report = ApplyReport::default();

        for attribute in attributes {
            match self.chain.handle(attribute.attribute_type, attribute.data) {
                AttributeOutcome::Accepted => report.accepted += 1,
                AttributeOutcome::Rejected => report.rejected += 1,
                AttributeOutcome::NotApplicable => {
                    debug!(attribute = %attribute.attribute_type, "No handler for attribute");
                    report.unhandled += 1;
                    report.unhandled_types.push(attribute.attribute_type);
                }
            }
        }

        info!(
            total = report.total(),
            accepted = report.accepted,
            rejected = report.rejected,
            unhandled = report.unhandled,
            "Configuration attributes processed"
        );
        report
    }
}
