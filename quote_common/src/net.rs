//! Shared networking constants, file paths and timeouts used by client and server.

/// TCP port the quote server listens on.
pub const SERVER_PORT: u16 = 8080;
/// Default bind address of the quote server.
pub const BIND_ADDRESS: &str = "0.0.0.0:8080";
/// The single route served by the quote server.
pub const QUOTE_ENDPOINT: &str = "/get-dollar-quote";

/// Base URL of the upstream quote API; the pair is appended as the last segment.
pub const UPSTREAM_BASE_URL: &str = "https://economia.awesomeapi.com.br/json/last";
/// Timeout for a single upstream call, in milliseconds.
pub const UPSTREAM_TIMEOUT_MS: u64 = 3000;

/// Directory that holds the SQLite database.
pub const DATA_DIR: &str = "./data";
/// SQLite database file name inside `DATA_DIR`.
pub const DB_FILE: &str = "currency.db";
/// Timeout for a single insert, in milliseconds.
pub const INSERT_TIMEOUT_MS: u64 = 1000;

/// Timeout of the client call to the quote server, in milliseconds.
pub const CLIENT_TIMEOUT_MS: u64 = 300;
/// File the client writes the quote to.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Helper to format a host and port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Full URL of the quote endpoint on a server reachable at `host`.
pub fn quote_url(host: &str) -> String {
    format!("http://{}{}", addr(host, SERVER_PORT), QUOTE_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_url_points_at_local_endpoint() {
        assert_eq!(
            quote_url("localhost"),
            "http://localhost:8080/get-dollar-quote"
        );
    }
}
