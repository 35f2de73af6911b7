use cfgattr_application::ports::{AttributeHandler, AttributeRequests, TunnelBuilder};
use cfgattr_domain::{AttributeOutcome, AttributeRequest, AttributeType};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderCall {
    Dns(IpAddr),
    SearchDomain(String),
}

/// Tunnel builder that records every call in order.
#[derive(Default)]
pub struct MockTunnelBuilder {
    calls: Mutex<Vec<BuilderCall>>,
}

impl MockTunnelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<BuilderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TunnelBuilder for MockTunnelBuilder {
    fn add_dns(&self, server: IpAddr) {
        self.calls.lock().unwrap().push(BuilderCall::Dns(server));
    }

    fn add_search_domain(&self, domain: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(BuilderCall::SearchDomain(domain.to_string()));
    }
}

/// Handler returning a fixed outcome for the types it owns and
/// `NotApplicable` for everything else.
pub struct StubAttributeHandler {
    name: &'static str,
    owned: Vec<AttributeType>,
    outcome: AttributeOutcome,
    requests: Vec<AttributeRequest>,
    handled: Mutex<Vec<AttributeType>>,
    released: Mutex<Vec<AttributeType>>,
}

impl StubAttributeHandler {
    pub fn new(name: &'static str, owned: Vec<AttributeType>, outcome: AttributeOutcome) -> Self {
        Self {
            name,
            owned,
            outcome,
            requests: Vec::new(),
            handled: Mutex::new(Vec::new()),
            released: Mutex::new(Vec::new()),
        }
    }

    pub fn with_requests(mut self, requests: Vec<AttributeRequest>) -> Self {
        self.requests = requests;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn handled(&self) -> Vec<AttributeType> {
        self.handled.lock().unwrap().clone()
    }

    pub fn released(&self) -> Vec<AttributeType> {
        self.released.lock().unwrap().clone()
    }
}

impl AttributeHandler for StubAttributeHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn handle(&self, attribute_type: AttributeType, _data: &[u8]) -> AttributeOutcome {
        self.handled.lock().unwrap().push(attribute_type);
        if self.owned.contains(&attribute_type) {
            self.outcome
        } else {
            AttributeOutcome::NotApplicable
        }
    }

    fn release(&self, attribute_type: AttributeType, _data: &[u8]) {
        self.released.lock().unwrap().push(attribute_type);
    }

    fn request_attributes<'a>(&'a self, _virtual_ips: &'a [IpAddr]) -> AttributeRequests<'a> {
        Box::new(self.requests.iter().cloned())
    }
}
