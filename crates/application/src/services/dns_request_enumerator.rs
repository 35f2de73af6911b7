use cfgattr_domain::{AttributeRequest, AttributeType};
use std::iter::FusedIterator;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    EmitDns4,
    EmitDns6,
    Done,
}

/// Yields the DNS server requests this client puts in a CFG_REQUEST.
///
/// IPv4 is always requested before IPv6; gateways treat the first DNS
/// attribute as the primary resolver for dual-stack clients.
#[derive(Debug, Clone)]
pub struct DnsRequestEnumerator {
    state: State,
}

impl DnsRequestEnumerator {
    /// `virtual_ips` are the addresses already assigned for the session.
    /// DNS requests do not depend on them, but every request source takes
    /// the same context so further sources can plug in without changing
    /// the handler interface.
    pub fn new(_virtual_ips: &[IpAddr]) -> Self {
        Self {
            state: State::EmitDns4,
        }
    }
}

impl Iterator for DnsRequestEnumerator {
    type Item = AttributeRequest;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::EmitDns4 => {
                self.state = State::EmitDns6;
                Some(AttributeRequest::empty(AttributeType::InternalIp4Dns))
            }
            State::EmitDns6 => {
                self.state = State::Done;
                Some(AttributeRequest::empty(AttributeType::InternalIp6Dns))
            }
            State::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.state {
            State::EmitDns4 => 2,
            State::EmitDns6 => 1,
            State::Done => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DnsRequestEnumerator {}

impl FusedIterator for DnsRequestEnumerator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_advances_linearly() {
        let mut requests = DnsRequestEnumerator::new(&[]);
        assert_eq!(requests.state, State::EmitDns4);
        requests.next();
        assert_eq!(requests.state, State::EmitDns6);
        requests.next();
        assert_eq!(requests.state, State::Done);
        requests.next();
        assert_eq!(requests.state, State::Done);
    }
}
