use std::net::IpAddr;

/// Accumulates network parameters for the tunnel interface being set up.
///
/// One builder exists per tunnel and is shared by every attribute handler
/// working on that tunnel. Calls are expected to be serialized by the
/// negotiation task; implementations need not be reentrant. Both calls are
/// idempotent requests.
pub trait TunnelBuilder: Send + Sync {
    fn add_dns(&self, server: IpAddr);

    fn add_search_domain(&self, domain: &str);
}
