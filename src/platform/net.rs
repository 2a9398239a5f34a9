// Connection profile and host name table via sysinfo network lists

use crate::models::{AddressFamily, ConnectionProfile, HostNameEntry};
use crate::providers::NetworkProvider;
use std::net::{IpAddr, UdpSocket};
use sysinfo::Networks;

pub struct SysinfoNetwork;

impl NetworkProvider for SysinfoNetwork {
    fn internet_connection_profile(&self) -> Option<ConnectionProfile> {
        let local = default_route_local_addr()?;
        let networks = Networks::new_with_refreshed_list();
        let adapter_id = networks.list().iter().find_map(|(name, data)| {
            data.ip_networks()
                .iter()
                .any(|n| n.addr == local)
                .then(|| name.clone())
        });
        Some(ConnectionProfile { adapter_id })
    }

    fn host_names(&self) -> Vec<HostNameEntry> {
        let networks = Networks::new_with_refreshed_list();
        networks
            .list()
            .iter()
            .flat_map(|(name, data)| {
                data.ip_networks().iter().map(move |n| HostNameEntry {
                    family: if n.addr.is_ipv4() {
                        AddressFamily::Ipv4
                    } else {
                        AddressFamily::Ipv6
                    },
                    adapter_id: Some(name.clone()),
                    canonical_name: n.addr.to_string(),
                })
            })
            .collect()
    }
}

/// Local address the default route would use. Connecting a UDP socket
/// selects the route without sending any packet.
fn default_route_local_addr() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:53").ok()?;
    socket.local_addr().ok().map(|a| a.ip())
}
