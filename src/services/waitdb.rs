use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Single reachability attempt: can we open a TCP connection to the endpoint?
pub fn probe(host: &str, port: u16) -> bool {
    let addrs = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(_) => return false,
    };
    for addr in addrs {
        if TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT).is_ok() {
            return true;
        }
    }
    false
}

/// Polls the endpoint once per `interval` until a connection succeeds.
/// There is no timeout: if the endpoint never comes up this blocks forever.
pub fn wait_until_reachable(host: &str, port: u16, interval: Duration) {
    while !probe(host, port) {
        println!("Waiting for database at {}:{}...", host, port);
        tracing::debug!(host, port, "database not reachable yet");
        std::thread::sleep(interval);
    }
}
