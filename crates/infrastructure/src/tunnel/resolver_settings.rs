use std::fmt::Write as _;
use std::net::IpAddr;

/// Resolver parameters collected for one tunnel interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverSettings {
    pub nameservers: Vec<IpAddr>,
    pub search_domains: Vec<String>,
}

impl ResolverSettings {
    pub fn is_empty(&self) -> bool {
        self.nameservers.is_empty() && self.search_domains.is_empty()
    }

    /// Returns false when the server was already present.
    pub fn add_nameserver(&mut self, server: IpAddr) -> bool {
        if self.nameservers.contains(&server) {
            return false;
        }
        self.nameservers.push(server);
        true
    }

    /// Returns false when the domain was already present. Domain names
    /// compare case-insensitively.
    pub fn add_search_domain(&mut self, domain: &str) -> bool {
        if self
            .search_domains
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(domain))
        {
            return false;
        }
        self.search_domains.push(domain.to_string());
        true
    }

    /// Renders the settings in resolv.conf(5) syntax, servers in the order
    /// they were installed.
    pub fn render(&self, header: &str) -> String {
        let mut out = String::new();

        if !header.is_empty() {
            let _ = writeln!(out, "# {}", header);
        }
        if !self.search_domains.is_empty() {
            let _ = writeln!(out, "search {}", self.search_domains.join(" "));
        }
        for server in &self.nameservers {
            let _ = writeln!(out, "nameserver {}", server);
        }

        out
    }
}
