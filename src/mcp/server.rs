//! MCP server for the design-system catalog.
//!
//! The lifecycle follows MCP:
//!
//! 1. **Initialisation**: `initialize` request, then the
//!    `notifications/initialized` notification
//! 2. **Operation**: `tools/list`, `tools/call` and `ping`
//! 3. **Shutdown**: EOF on stdin, SIGINT or SIGTERM
//!
//! [`Session`] holds the protocol state and answers one message at a time
//! without touching stdio; [`McpServer`] drives a session from the stdio
//! transport.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::mcp::protocol::{
    parse_message, ErrorCode, IncomingMessage, JsonRpcError, JsonRpcErrorData, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, RequestId, ToolCallParams, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::tools::{ToolContext, ToolRegistry};
use crate::mcp::transport::StdioTransport;

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    pub tools: ToolCapabilities,
}

/// Tool-specific capabilities.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCapabilities {
    /// The tool list is fixed for the lifetime of the process.
    pub list_changed: bool,
}

/// Server information for initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: &'static str,
    /// Server version.
    pub version: &'static str,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: Value,
    /// Client information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// A message to send back to the client.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Successful response.
    Response(JsonRpcResponse),
    /// Error response.
    Error(JsonRpcError),
}

impl Reply {
    /// Serialises the reply as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the reply cannot be represented as JSON.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            Self::Response(response) => serde_json::to_value(response),
            Self::Error(error) => serde_json::to_value(error),
        }
    }
}

impl From<Result<JsonRpcResponse, JsonRpcError>> for Reply {
    fn from(result: Result<JsonRpcResponse, JsonRpcError>) -> Self {
        match result {
            Ok(response) => Self::Response(response),
            Err(error) => Self::Error(error),
        }
    }
}

/// Protocol state of one client connection.
pub struct Session {
    state: ServerState,
    protocol_version: Option<String>,
    registry: ToolRegistry,
    context: ToolContext,
}

impl Session {
    /// Creates a session serving `context`.
    #[must_use]
    pub fn new(context: ToolContext) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            protocol_version: None,
            registry: ToolRegistry::new(),
            context,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Returns the negotiated protocol version, once initialised.
    #[must_use]
    pub fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    /// Marks the session as shutting down.
    pub fn shut_down(&mut self) {
        self.state = ServerState::ShuttingDown;
    }

    /// Handles one line of input.
    ///
    /// Returns the reply to send, or `None` for notifications and blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        if line.trim().is_empty() {
            return None;
        }

        match parse_message(line) {
            Ok(IncomingMessage::Request(req)) => Some(self.handle_request(&req)),
            Ok(IncomingMessage::Notification(notif)) => {
                self.handle_notification(&notif);
                None
            }
            Err(error) => Some(Reply::Error(error)),
        }
    }

    fn handle_request(&mut self, req: &JsonRpcRequest) -> Reply {
        tracing::debug!(method = %req.method, id = %req.id, "Request");
        match req.method.as_str() {
            "initialize" => self.handle_initialize(req).into(),
            "tools/list" => self.handle_tools_list(req).into(),
            "tools/call" => self.handle_tools_call(req).into(),
            "ping" => Reply::Response(JsonRpcResponse::success(req.id.clone(), json!({}))),
            _ => Reply::Error(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        }
    }

    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            tracing::info!("Client initialised");
            self.state = ServerState::Running;
        }
    }

    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::new(
                Some(req.id.clone()),
                JsonRpcErrorData::with_message(ErrorCode::InvalidRequest, "Server already initialised"),
            ));
        }

        let params: InitializeParams = params(req, "initialize")?;
        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                version = client.version.as_deref().unwrap_or("unknown"),
                requested = %params.protocol_version,
                "Initialising"
            );
        }

        self.protocol_version = Some(MCP_PROTOCOL_VERSION.to_string());
        self.state = ServerState::Initialising;

        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({
                "protocolVersion": MCP_PROTOCOL_VERSION,
                "capabilities": ServerCapabilities {
                    tools: ToolCapabilities::default(),
                },
                "serverInfo": ServerInfo::default(),
            }),
        ))
    }

    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;
        let tools: Vec<_> = self.registry.definitions().collect();
        Ok(JsonRpcResponse::success(req.id.clone(), json!({ "tools": tools })))
    }

    fn handle_tools_call(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let call: ToolCallParams = params(req, "tool call")?;
        if !self.registry.contains(&call.name) {
            tracing::warn!(tool = %call.name, "Unknown tool requested");
        }

        let internal = |e: serde_json::Error| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::internal_error(req.id.clone(), "Internal error: failed to serialise result")
        };

        let result = self
            .registry
            .call_to_result(&self.context, &call.name, call.arguments)
            .map_err(internal)?;
        let result = serde_json::to_value(&result).map_err(internal)?;

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::new(
                Some(id.clone()),
                JsonRpcErrorData::with_message(ErrorCode::InvalidRequest, "Server not initialised"),
            ));
        }
        Ok(())
    }
}

/// Deserialises the required params object of a request.
fn params<T: serde::de::DeserializeOwned>(req: &JsonRpcRequest, what: &str) -> Result<T, JsonRpcError> {
    let value = req
        .params
        .clone()
        .ok_or_else(|| JsonRpcError::invalid_params(req.id.clone(), format!("Missing {what} params")))?;
    serde_json::from_value(value)
        .map_err(|e| JsonRpcError::invalid_params(req.id.clone(), format!("Invalid {what} params: {e}")))
}

/// The MCP server over stdio.
pub struct McpServer {
    session: Session,
    transport: StdioTransport,
}

impl McpServer {
    /// Creates a server serving `context`.
    #[must_use]
    pub fn new(context: ToolContext) -> Self {
        Self {
            session: Session::new(context),
            transport: StdioTransport::new(),
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.session.state()
    }

    /// Runs the MCP server main loop with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with_shutdown().await
    }

    #[cfg(unix)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT, initiating graceful shutdown");
                    self.session.shut_down();
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating graceful shutdown");
                    self.session.shut_down();
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    #[cfg(windows)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
                    self.session.shut_down();
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            tracing::info!("stdin closed, shutting down");
            self.session.shut_down();
            return Ok(true);
        };

        match self.session.handle_line(&line) {
            Some(Reply::Response(response)) => self.transport.write_message(&response).await?,
            Some(Reply::Error(error)) => self.transport.write_message(&error).await?,
            None => {}
        }

        Ok(self.session.state() == ServerState::ShuttingDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    fn session() -> Session {
        Session::new(ToolContext::new(CatalogStore::embedded()))
    }

    fn reply(session: &mut Session, line: &str) -> Value {
        session.handle_line(line).unwrap().to_value().unwrap()
    }

    fn initialise(session: &mut Session) {
        reply(
            session,
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test"}}}"#,
        );
        assert!(session
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .is_none());
    }

    #[test]
    fn session_initial_state() {
        let server = McpServer::new(ToolContext::new(CatalogStore::embedded()));
        assert_eq!(server.state(), ServerState::AwaitingInit);
    }

    #[test]
    fn lifecycle_reaches_running() {
        let mut session = session();
        initialise(&mut session);
        assert_eq!(session.state(), ServerState::Running);
        assert_eq!(session.protocol_version(), Some(MCP_PROTOCOL_VERSION));
    }

    #[test]
    fn tools_require_initialisation() {
        let mut session = session();
        let response = reply(&mut session, r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#);
        assert_eq!(response["error"]["code"], ErrorCode::InvalidRequest.code());
    }

    #[test]
    fn second_initialize_is_rejected() {
        let mut session = session();
        initialise(&mut session);
        let response = reply(
            &mut session,
            r#"{"jsonrpc":"2.0","id":3,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#,
        );
        assert_eq!(response["error"]["message"], "Server already initialised");
    }

    #[test]
    fn blank_lines_and_ping() {
        let mut session = session();
        assert!(session.handle_line("   ").is_none());
        let response = reply(&mut session, r#"{"jsonrpc":"2.0","id":"p","method":"ping"}"#);
        assert_eq!(response["result"], json!({}));
    }

    #[test]
    fn tool_call_missing_params() {
        let mut session = session();
        initialise(&mut session);
        let response = reply(&mut session, r#"{"jsonrpc":"2.0","id":4,"method":"tools/call"}"#);
        assert_eq!(response["error"]["code"], ErrorCode::InvalidParams.code());
    }
}
