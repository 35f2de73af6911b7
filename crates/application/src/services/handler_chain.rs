use crate::ports::AttributeHandler;
use cfgattr_domain::{AttributeOutcome, AttributeRequest, AttributeType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of dispatching one attribute through the chain, together with
/// the position of the handler that accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub outcome: AttributeOutcome,
    pub handler: Option<usize>,
}

/// Ordered set of attribute handlers tried one after another.
#[derive(Default, Clone)]
pub struct AttributeHandlerChain {
    handlers: Vec<Arc<dyn AttributeHandler>>,
}

impl AttributeHandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(mut self, handler: Arc<dyn AttributeHandler>) -> Self {
        self.register(handler);
        self
    }

    /// Appends a handler; it is consulted after every handler registered
    /// before it. Returns its position in the chain.
    pub fn register(&mut self, handler: Arc<dyn AttributeHandler>) -> usize {
        debug!(
            handler = handler.name(),
            position = self.handlers.len(),
            "Registering attribute handler"
        );
        self.handlers.push(handler);
        self.handlers.len() - 1
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handle(&self, attribute_type: AttributeType, data: &[u8]) -> AttributeOutcome {
        self.dispatch(attribute_type, data).outcome
    }

    /// Offers the attribute to each handler in order until one accepts it.
    ///
    /// A rejection does not stop the walk. If nobody accepts, the result is
    /// `Rejected` when at least one handler owned the type and
    /// `NotApplicable` otherwise.
    pub fn dispatch(&self, attribute_type: AttributeType, data: &[u8]) -> Dispatch {
        let mut rejected = false;

        for (position, handler) in self.handlers.iter().enumerate() {
            match handler.handle(attribute_type, data) {
                AttributeOutcome::Accepted => {
                    trace!(
                        attribute = %attribute_type,
                        handler = handler.name(),
                        "Attribute accepted"
                    );
                    return Dispatch {
                        outcome: AttributeOutcome::Accepted,
                        handler: Some(position),
                    };
                }
                AttributeOutcome::Rejected => rejected = true,
                AttributeOutcome::NotApplicable => {}
            }
        }

        let outcome = if rejected {
            AttributeOutcome::Rejected
        } else {
            AttributeOutcome::NotApplicable
        };
        Dispatch {
            outcome,
            handler: None,
        }
    }

    /// Hands a previously accepted attribute back to the handler at
    /// `handler`, as reported by [`dispatch`](Self::dispatch).
    pub fn release(&self, handler: usize, attribute_type: AttributeType, data: &[u8]) {
        match self.handlers.get(handler) {
            Some(owner) => owner.release(attribute_type, data),
            None => debug!(
                handler,
                attribute = %attribute_type,
                "Release for unknown handler ignored"
            ),
        }
    }

    /// Requests of every handler, in registration order.
    pub fn request_attributes<'a>(
        &'a self,
        virtual_ips: &'a [IpAddr],
    ) -> impl Iterator<Item = AttributeRequest> + 'a {
        self.handlers
            .iter()
            .flat_map(move |handler| handler.request_attributes(virtual_ips))
    }
}
