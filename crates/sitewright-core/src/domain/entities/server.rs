//! The host's public addresses, captured once and threaded explicitly.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

/// Public IPv4/IPv6 addresses of the server being provisioned.
///
/// The original tool captured these into ambient variables at startup; here
/// they are an explicit value passed to whoever needs them (the CLI's DNS
/// pre-flight). Either address may be absent — a v6-only host has no IPv4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAddresses {
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
}

impl ServerAddresses {
    pub fn new(ipv4: Option<Ipv4Addr>, ipv6: Option<Ipv6Addr>) -> Self {
        Self { ipv4, ipv6 }
    }

    /// No address known at all.
    pub fn is_unknown(&self) -> bool {
        self.ipv4.is_none() && self.ipv6.is_none()
    }

    /// Whether `addr` is one of this server's public addresses.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match addr {
            IpAddr::V4(v4) => self.ipv4 == Some(v4),
            IpAddr::V6(v6) => self.ipv6 == Some(v6),
        }
    }

    /// Whether any resolved address points at this server.
    pub fn matches_any<'a>(&self, addrs: impl IntoIterator<Item = &'a IpAddr>) -> bool {
        addrs.into_iter().any(|a| self.contains(*a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_checks_matching_family() {
        let server = ServerAddresses::new(Some(Ipv4Addr::new(203, 0, 113, 10)), None);
        assert!(server.contains("203.0.113.10".parse().unwrap()));
        assert!(!server.contains("203.0.113.11".parse().unwrap()));
        assert!(!server.contains("2001:db8::1".parse().unwrap()));
    }

    #[test]
    fn matches_any_over_lookup_answers() {
        let server = ServerAddresses::new(Some(Ipv4Addr::new(203, 0, 113, 10)), None);
        let answers: Vec<IpAddr> = vec![
            "198.51.100.1".parse().unwrap(),
            "203.0.113.10".parse().unwrap(),
        ];
        assert!(server.matches_any(&answers));
        assert!(!server.matches_any(&[]));
    }

    #[test]
    fn default_is_unknown() {
        assert!(ServerAddresses::default().is_unknown());
    }
}
