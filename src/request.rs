use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use crate::validation::{validate_target_url, Validatable, ValidationError};

/// Scanner invocation modes accepted by the wrapped tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scan the target website for SSTI injection points
    Scan,
    /// Attack a specific form, requires --inputs (and usually --exec-cmd)
    Crack,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Scan => "scan",
            Mode::Crack => "crack",
        }
    }
}

/// Request parameters for the run-scanner tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RunScannerRequest {
    /// Scanner mode: "scan" probes a whole site, "crack" attacks one form
    pub mode: Mode,
    /// Target URL to test for Server-Side Template Injection vulnerabilities
    pub target: String,
    /// Additional fenjing CLI tokens, passed through verbatim in order
    /// (flag names and values as separate entries, e.g. ["--inputs", "name,age"])
    #[serde(default)]
    pub extra_arguments: Vec<String>,
}

impl Validatable for RunScannerRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_target_url(&self.target)
    }
}

impl RunScannerRequest {
    /// Build the full argument list for the subprocess.
    /// Order is fixed by the wrapped tool's CLI parser: mode, then the URL
    /// flag, then caller-supplied tokens unmodified.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(3 + self.extra_arguments.len());
        args.push(self.mode.as_str().to_string());
        args.push("-u".to_string());
        args.push(self.target.clone());
        args.extend(self.extra_arguments.iter().cloned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(mode: Mode, target: &str, extra: &[&str]) -> RunScannerRequest {
        RunScannerRequest {
            mode,
            target: target.to_string(),
            extra_arguments: extra.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_build_args_prepends_mode_and_url_flag() {
        let req = make_request(Mode::Scan, "http://example.com", &[]);
        assert_eq!(req.build_args(), vec!["scan", "-u", "http://example.com"]);
    }

    #[test]
    fn test_build_args_preserves_extra_argument_order() {
        let req = make_request(
            Mode::Crack,
            "http://example.com/login",
            &["--inputs", "name,age", "--method", "GET", "--exec-cmd", "whoami"],
        );
        assert_eq!(
            req.build_args(),
            vec![
                "crack",
                "-u",
                "http://example.com/login",
                "--inputs",
                "name,age",
                "--method",
                "GET",
                "--exec-cmd",
                "whoami",
            ]
        );
    }

    #[test]
    fn test_validate_accepts_well_formed_url() {
        let req = make_request(Mode::Scan, "http://example.com", &[]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let req = make_request(Mode::Scan, "definitely not a url", &[]);
        assert!(matches!(
            req.validate(),
            Err(ValidationError::InvalidTargetUrl(_, _))
        ));
    }

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "mode": "crack",
            "target": "http://example.com",
            "extra_arguments": ["--inputs", "name"]
        }"#;
        let req: RunScannerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.mode, Mode::Crack);
        assert_eq!(req.target, "http://example.com");
        assert_eq!(req.extra_arguments, vec!["--inputs", "name"]);
    }

    #[test]
    fn test_deserialize_defaults_extra_arguments_to_empty() {
        let json = r#"{"mode": "scan", "target": "http://example.com"}"#;
        let req: RunScannerRequest = serde_json::from_str(json).unwrap();
        assert!(req.extra_arguments.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_mode() {
        let json = r#"{"mode": "exploit", "target": "http://example.com"}"#;
        assert!(serde_json::from_str::<RunScannerRequest>(json).is_err());
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(Mode::Scan.as_str(), "scan");
        assert_eq!(Mode::Crack.as_str(), "crack");
    }
}
