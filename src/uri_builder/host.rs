use tracing::trace;

/// Resolves the authority (`host[:port]`) from a host that may already carry
/// a port and a separately supplied port
///
/// * No host means no authority, whatever the port.
/// * A supplied port replaces everything after the first colon of the host.
///   Nothing past that colon is parsed, so multi-colon hosts lose their tail.
/// * Without a supplied port the host is returned untouched.
pub fn normalize_host(host: &str, port: &str) -> String {
    if host.is_empty() {
        if !port.is_empty() {
            trace!("Discarding port {} supplied without a host", port);
        }
        return String::new();
    }

    if port.is_empty() {
        return host.to_owned();
    }

    let name = host.split_once(':').map_or(host, |(name, _)| name);
    format!("{}:{}", name, port)
}
