// Handles all interactions with the `brew services` command.

use super::model::{ActionResult, ServiceAction, ServiceStatus};
use super::parser::parse_service_list;
use std::ffi::OsString;
use std::io;
use std::process::{Command, Output};

/// Exit status and captured streams of one supervisor invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for ProcessOutcome {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl From<ProcessOutcome> for ActionResult {
    fn from(outcome: ProcessOutcome) -> Self {
        let mut output = outcome.stdout;
        output.push_str(&outcome.stderr);
        Self {
            ok: outcome.success,
            output: output.trim().to_string(),
        }
    }
}

/// The external service manager, narrowed to what the dashboard needs.
pub trait ServiceManager: Send + Sync {
    /// Raw text of the "list services" report.
    fn list_report(&self) -> io::Result<String>;

    /// Runs `action` against `service`. The name is passed as its own
    /// argument and must never reach a shell.
    fn apply(&self, action: ServiceAction, service: &str) -> io::Result<ProcessOutcome>;
}

#[derive(Debug, thiserror::Error)]
pub enum SupervisorError {
    #[error("failed to execute `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// `brew services` on the local machine.
#[derive(Debug, Clone)]
pub struct BrewServices {
    program: OsString,
}

impl BrewServices {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("services");
        command
    }
}

impl ServiceManager for BrewServices {
    fn list_report(&self) -> io::Result<String> {
        // Exit status is ignored; whatever reached stdout is the report.
        let output = self.command().arg("list").output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn apply(&self, action: ServiceAction, service: &str) -> io::Result<ProcessOutcome> {
        let output = self
            .command()
            .arg(action.as_str())
            .arg(service)
            .output()?;
        Ok(ProcessOutcome::from(output))
    }
}

/// Fetches and parses the current service report.
pub fn list_services(manager: &dyn ServiceManager) -> Result<Vec<ServiceStatus>, SupervisorError> {
    let report = manager
        .list_report()
        .map_err(|source| SupervisorError::Spawn {
            command: "services list".to_string(),
            source,
        })?;
    Ok(parse_service_list(&report))
}

/// Validates `action` against the allow-list and, only if it passes, asks the
/// manager to perform it on `service`.
pub fn dispatch(
    manager: &dyn ServiceManager,
    service: &str,
    action: &str,
) -> Result<ActionResult, SupervisorError> {
    let action = match action.parse::<ServiceAction>() {
        Ok(action) => action,
        Err(err) => {
            tracing::warn!(service, action, "rejected service action");
            return Ok(ActionResult::rejected(&err));
        }
    };

    let outcome = manager
        .apply(action, service)
        .map_err(|source| SupervisorError::Spawn {
            command: format!("services {action} {service}"),
            source,
        })?;

    let result = ActionResult::from(outcome);
    tracing::info!(service, %action, ok = result.ok, "service action finished");
    Ok(result)
}
