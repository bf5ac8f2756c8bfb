//! Doctor module for trackbridge diagnostics
//!
//! Checks the pieces a working MCP deployment needs: the API key, the
//! endpoint URL, the timeout override and the log directory. The doctor
//! accumulates check results and maps them onto exit codes:
//! 0 all passed, 1 warnings, 2 errors.

use std::path::Path;

use anyhow::Result;
use colored::*;
use url::Url;

use trackbridge::config::{API_KEY_VAR, API_URL_VAR, DEFAULT_API_URL, TIMEOUT_VAR};

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

/// Status of one diagnostic check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// One diagnostic result
#[derive(Debug)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub fix: Option<String>,
}

/// Diagnostic tool accumulating check results
pub struct Doctor {
    checks: Vec<Check>,
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new()
    }
}

impl Doctor {
    /// Create a new Doctor instance for running diagnostics
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Run all diagnostic checks and print the results
    pub fn run_diagnostics(&mut self) -> Result<i32> {
        println!("{}", "trackbridge doctor".bold().blue());
        println!("{}", "Running diagnostics...".dimmed());
        println!();

        self.check_api_key();
        self.check_endpoint();
        self.check_timeout();
        let log_dir = default_log_dir();
        self.check_log_directory(&log_dir);

        self.print_results();
        Ok(self.exit_code())
    }

    fn check_api_key(&mut self) {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if key.trim().is_empty() => self.checks.push(Check {
                name: "API key".to_string(),
                status: CheckStatus::Error,
                message: format!("{API_KEY_VAR} is set but empty"),
                fix: Some(format!("export {API_KEY_VAR}=<your tracker API key>")),
            }),
            Ok(_) => self.checks.push(Check {
                name: "API key".to_string(),
                status: CheckStatus::Ok,
                message: format!("{API_KEY_VAR} is set"),
                fix: None,
            }),
            Err(_) => self.checks.push(Check {
                name: "API key".to_string(),
                status: CheckStatus::Error,
                message: format!("{API_KEY_VAR} is not set"),
                fix: Some(format!("export {API_KEY_VAR}=<your tracker API key>")),
            }),
        }
    }

    fn check_endpoint(&mut self) {
        let endpoint =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        match Url::parse(&endpoint) {
            Ok(url) if url.scheme() == "https" => self.checks.push(Check {
                name: "Endpoint".to_string(),
                status: CheckStatus::Ok,
                message: format!("Using {endpoint}"),
                fix: None,
            }),
            Ok(url) if url.scheme() == "http" => self.checks.push(Check {
                name: "Endpoint".to_string(),
                status: CheckStatus::Warning,
                message: format!("{endpoint} is not https"),
                fix: Some("Prefer an https endpoint for API keys in transit".to_string()),
            }),
            Ok(url) => self.checks.push(Check {
                name: "Endpoint".to_string(),
                status: CheckStatus::Error,
                message: format!("Unsupported scheme '{}' in {endpoint}", url.scheme()),
                fix: Some(format!("Set {API_URL_VAR} to an http(s) URL")),
            }),
            Err(e) => self.checks.push(Check {
                name: "Endpoint".to_string(),
                status: CheckStatus::Error,
                message: format!("{API_URL_VAR} is not a valid URL: {e}"),
                fix: Some(format!("Set {API_URL_VAR} to an http(s) URL")),
            }),
        }
    }

    fn check_timeout(&mut self) {
        match std::env::var(TIMEOUT_VAR) {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => self.checks.push(Check {
                    name: "Timeout".to_string(),
                    status: CheckStatus::Ok,
                    message: format!("Request timeout is {secs}s"),
                    fix: None,
                }),
                Err(_) => self.checks.push(Check {
                    name: "Timeout".to_string(),
                    status: CheckStatus::Error,
                    message: format!("{TIMEOUT_VAR} is not a number: {raw}"),
                    fix: Some(format!("Set {TIMEOUT_VAR} to a number of seconds")),
                }),
            },
            Err(_) => self.checks.push(Check {
                name: "Timeout".to_string(),
                status: CheckStatus::Ok,
                message: "Using the default request timeout".to_string(),
                fix: None,
            }),
        }
    }

    fn check_log_directory(&mut self, dir: &Path) {
        let writable = dir.exists() || std::fs::create_dir_all(dir).is_ok();
        if writable {
            self.checks.push(Check {
                name: "Log directory".to_string(),
                status: CheckStatus::Ok,
                message: format!("{} is writable", dir.display()),
                fix: None,
            });
        } else {
            self.checks.push(Check {
                name: "Log directory".to_string(),
                status: CheckStatus::Warning,
                message: format!("Cannot create {}", dir.display()),
                fix: Some("Serve mode will fall back to stderr logging".to_string()),
            });
        }
    }

    fn print_results(&self) {
        for check in &self.checks {
            let (symbol, name) = match check.status {
                CheckStatus::Ok => ("✓".green(), check.name.normal()),
                CheckStatus::Warning => ("⚠".yellow(), check.name.yellow()),
                CheckStatus::Error => ("✗".red(), check.name.red().bold()),
            };
            println!("{symbol} {name}: {}", check.message);
            if let Some(fix) = &check.fix {
                println!("  {}", format!("fix: {fix}").dimmed());
            }
        }

        println!();
        match self.exit_code() {
            EXIT_SUCCESS => println!("{}", "All checks passed".green()),
            EXIT_WARNING => println!("{}", "Warnings detected".yellow()),
            _ => println!("{}", "Errors detected".red().bold()),
        }
    }

    fn exit_code(&self) -> i32 {
        if self
            .checks
            .iter()
            .any(|c| c.status == CheckStatus::Error)
        {
            EXIT_ERROR
        } else if self
            .checks
            .iter()
            .any(|c| c.status == CheckStatus::Warning)
        {
            EXIT_WARNING
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Directory serve-mode logs land in
pub fn default_log_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".trackbridge")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_check_with_tempdir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut doctor = Doctor::new();
        doctor.check_log_directory(&tmp.path().join("logs"));

        assert_eq!(doctor.checks.len(), 1);
        assert_eq!(doctor.checks[0].status, CheckStatus::Ok);
    }

    #[test]
    fn test_exit_code_prefers_errors_over_warnings() {
        let mut doctor = Doctor::new();
        doctor.checks.push(Check {
            name: "warn".to_string(),
            status: CheckStatus::Warning,
            message: String::new(),
            fix: None,
        });
        assert_eq!(doctor.exit_code(), EXIT_WARNING);

        doctor.checks.push(Check {
            name: "err".to_string(),
            status: CheckStatus::Error,
            message: String::new(),
            fix: None,
        });
        assert_eq!(doctor.exit_code(), EXIT_ERROR);
    }

    #[test]
    fn test_empty_doctor_passes() {
        let doctor = Doctor::new();
        assert_eq!(doctor.exit_code(), EXIT_SUCCESS);
    }
}
