use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, ErrorData as McpError, ServerHandler,
};

use crate::config::ScannerConfig;
use crate::request::RunScannerRequest;
use crate::runner;
use crate::validation::Validatable;

/// Literal marker appended to the subprocess output on success
const COMPLETION_MARKER: &str = " fenjing completed successfully";

#[derive(Clone)]
pub struct FenjingServer {
    config: ScannerConfig,
    tool_router: ToolRouter<Self>,
}

impl FenjingServer {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }
}

fn completion_text(output: String) -> String {
    format!("{}{}", output, COMPLETION_MARKER)
}

const SERVER_INSTRUCTIONS: &str = r#"An MCP server wrapping the fenjing SSTI scanner. The run-scanner tool spawns the fenjing executable against a target URL and returns its combined output once the scan finishes.

Modes:
  scan   scan an entire website for SSTI injection points
  crack  attack a specific form; requires --inputs, usually with --exec-cmd

Extra arguments are raw fenjing CLI tokens appended verbatim, flag and value as separate entries. Commonly used options:
  -i, --inputs TEXT      comma-separated parameter names to test (required for crack)
  -m, --method TEXT      HTTP method used to submit parameters (default POST)
  -e, --exec-cmd TEXT    shell command to run after a successful crack
  -a, --action TEXT      submit path, when it differs from the URL path
  --extra-data TEXT      extra POST parameters, e.g. a=1&b=2
  --extra-params TEXT    extra GET parameters, e.g. a=1&b=2
  --cookies TEXT         cookies sent with each request
  --header TEXT          extra request headers
  --user-agent TEXT      custom User-Agent
  --proxy TEXT           proxy used for requests
  --interval FLOAT       delay between requests
  --no-verify-ssl        skip TLS certificate verification
  --detect-mode MODE     analysis mode, accurate or fast

Example: {"mode": "crack", "target": "http://example.com", "extra_arguments": ["--inputs", "name", "--method", "GET", "--exec-cmd", "whoami"]}"#;

#[rmcp::tool_router]
impl FenjingServer {
    #[tool(
        name = "run-scanner",
        description = "Run the fenjing SSTI scanner against a target URL. mode is \"scan\" (probe a whole site) or \"crack\" (attack one form, requires --inputs in extra_arguments). extra_arguments are raw fenjing CLI tokens passed through verbatim, flag and value as separate entries, e.g. [\"--inputs\", \"name,age\", \"--method\", \"GET\", \"--exec-cmd\", \"whoami\"]. Returns the scanner's combined stdout and stderr once it exits."
    )]
    async fn run_scanner(
        &self,
        Parameters(req): Parameters<RunScannerRequest>,
    ) -> Result<CallToolResult, McpError> {
        // Reject bad input before any process is spawned.
        req.validate()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let args = req.build_args();
        let output = runner::run_to_completion(&self.config.fenjing_path, &args)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(
            completion_text(output),
        )]))
    }
}

#[rmcp::tool_handler]
impl ServerHandler for FenjingServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        }
    }
}
