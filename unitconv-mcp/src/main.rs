//! Unitconv MCP Server
//!
//! MCP Server (protocol revision 2025-11-25) over line-delimited stdio
//!
//! Tools:
//! - list_categories: Categories with base units
//! - list_units: Units of one category
//! - convert: Convert a value, with formula and example
//! - describe_formula: Formula for a unit pair
//! - quick_convert: Convert a free-text query
//!
//! Configuration (environment):
//! - UNITCONV_PRECISION: significant digits for display (default 10)
//! - UNITCONV_STRICT: report unknown units instead of returning the input
//! - UNITCONV_FORMULAS: "curated" (default) or "derived"
//! - RUST_LOG: log filter (default "info"); logs go to stderr

mod config;
mod protocol;
mod tools;

use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use unitconv_units::UNITS;

use crate::config::ServerConfig;
use crate::protocol::{McpError, McpRequest, McpResponse, PARSE_ERROR};
use crate::tools::{handle_request, Server, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries protocol frames, so logs must go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

fn main() {
    init_logging();

    let config = ServerConfig::from_env();
    let server = Server::new(config, &UNITS);

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Unitconv MCP Server started");
    info!(
        precision = config.precision,
        strict = config.strict,
        formulas = ?config.formulas,
        units = UNITS.len(),
        "configuration loaded"
    );
    debug!(stdin_terminal = io::stdin().is_terminal(), stdout_terminal = io::stdout().is_terminal());

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("Server ready, waiting for requests...");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                debug!(bytes = line.len(), "received");

                let request: McpRequest = match serde_json::from_str(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(error = %e, "error parsing request");
                        let response = McpResponse::from_result(
                            None,
                            Err(McpError::new(PARSE_ERROR, format!("Parse error: {}", e))),
                        );
                        if let Err(e) = write_response(&response) {
                            error!(error = %e, "error writing response");
                            break;
                        }
                        continue;
                    }
                };

                debug!(method = %request.method, "processing");
                let response = handle_request(&server, &request);

                // Notifications (no id) should NOT receive a response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed (no response)");
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    error!(error = %e, "error writing response");
                    break;
                }
                debug!(method = %request.method, "sent response");
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("Server shutting down");
}
