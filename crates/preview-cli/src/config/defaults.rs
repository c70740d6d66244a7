use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

pub fn default_port() -> u16 {
    preview_server::DEFAULT_PORT
}

pub fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

pub fn default_fallback_html() -> PathBuf {
    PathBuf::from("public").join("preview-fallback.html")
}
