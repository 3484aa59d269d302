//! Bounded-time subprocess execution for version probes

use std::io::{self, Read};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::constants::probe::POLL_INTERVAL;

/// Captured result of a probe that ran to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a version probe. `None` means the program could not be run at all
/// or did not finish within `timeout`.
pub trait ProbeRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Option<ProbeOutput>;
}

/// Runs probes as real subprocesses
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProbeRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], timeout: Duration) -> Option<ProbeOutput> {
        let executable = match which::which(program) {
            Ok(path) => path,
            Err(e) => {
                debug!(program, error = %e, "not found on PATH");
                return None;
            }
        };

        let child = Command::new(&executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                debug!(program, error = %e, "failed to spawn probe");
                return None;
            }
        };

        match wait_with_deadline(child, timeout) {
            Ok(output) => output,
            Err(e) => {
                debug!(program, error = %e, "probe failed");
                None
            }
        }
    }
}

/// Read a pipe to the end on its own thread, so a full pipe buffer cannot
/// stall the child while the deadline loop polls it.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn wait_with_deadline(mut child: Child, timeout: Duration) -> io::Result<Option<ProbeOutput>> {
    let deadline = Instant::now() + timeout;
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            debug!(pid = child.id(), ?timeout, "probe timed out, killing");
            // the child may exit between try_wait and kill
            let _ = child.kill();
            let _ = child.wait();
            // readers finish on their own once the pipes close
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout.join().unwrap_or_default();
    let stderr = stderr.join().unwrap_or_default();
    Ok(Some(ProbeOutput {
        success: status.success(),
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_none() {
        let output = SystemRunner.run(
            "stackscout-definitely-not-installed",
            &["--version"],
            Duration::from_secs(1),
        );
        assert!(output.is_none());
    }

    #[test]
    fn test_cargo_probe_completes() {
        let output = SystemRunner
            .run(env!("CARGO"), &["--version"], Duration::from_secs(30))
            .unwrap();

        assert!(output.success);
        assert!(output.stdout.starts_with("cargo "));
    }

    #[cfg(unix)]
    #[test]
    fn test_hung_program_times_out() {
        let started = Instant::now();
        let output = SystemRunner.run("sleep", &["5"], Duration::from_millis(200));

        assert!(output.is_none());
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_larger_than_pipe_buffer() {
        let output = SystemRunner
            .run(
                "sh",
                &["-c", "head -c 200000 /dev/zero; echo tool 1.2.3"],
                Duration::from_secs(10),
            )
            .unwrap();

        assert!(output.success);
        assert!(output.stdout.len() > 200_000);
        assert!(output.stdout.ends_with("tool 1.2.3\n"));
    }
}
