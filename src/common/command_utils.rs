use std::process::{Command, Stdio};

/// Check whether a command answers a probe argument (e.g. `go version`)
///
/// Output is discarded so probes never pollute the status display.
pub fn is_command_available(cmd: &str, probe_arg: &str) -> bool {
    Command::new(cmd)
        .arg(probe_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
