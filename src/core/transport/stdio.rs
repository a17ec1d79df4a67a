//! STDIO transport implementation.
//!
//! Newline-delimited JSON-RPC over stdin/stdout: one request envelope per
//! line in, one response envelope per line out. Notifications and
//! unparseable lines produce no output; stdout carries protocol frames
//! only, logging goes to stderr.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::core::context::RequestContext;
use crate::core::dispatcher::DispatchOutcome;
use crate::core::server::McpServer;

use super::error::TransportResult;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until stdin closes.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let dispatcher = server.dispatcher();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            // No transport headers on stdio; the context stays empty.
            let ctx = RequestContext::empty();

            match dispatcher.dispatch(&line, &ctx).await {
                DispatchOutcome::Reply(response) | DispatchOutcome::BadRequest(response) => {
                    let mut frame = serde_json::to_vec(&response)?;
                    frame.push(b'\n');
                    stdout.write_all(&frame).await?;
                    stdout.flush().await?;
                }
                DispatchOutcome::Accepted => {}
                DispatchOutcome::ParseFailure => {
                    warn!("Dropping unparseable stdio frame");
                }
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
