use std::ffi::OsString;
use std::fmt;
use std::process::Child;
use std::process::Command;
use std::process::Stdio;

use crate::app::error::Error;

/// One `go test` invocation. The repeat count is handed to the subprocess as
/// `-count=<n>`; everything after the tool's own flags is forwarded verbatim.
pub struct TestJob {
    count: u64,
    args: Vec<OsString>,
}

impl TestJob {
    pub fn new(count: u64, args: Vec<OsString>) -> Self {
        Self { count, args }
    }

    /// Spawns the test process with its event stream piped back and its
    /// stderr left on the terminal.
    pub fn spawn(&self) -> Result<Child, Error> {
        self.command()
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(Error::Spawn)
    }

    fn command(&self) -> Command {
        let mut command = Command::new("go");
        command
            .arg("test")
            .arg(format!("-count={}", self.count))
            .arg("-failfast")
            .arg("-json")
            .args(&self.args);
        command
    }
}

impl fmt::Display for TestJob {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "go test -count={} -failfast -json", self.count)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::TestJob;

    #[test]
    fn test_command_argv_threads_count_and_forwards_args() {
        let job = TestJob::new(
            25,
            vec![
                OsString::from("./..."),
                OsString::from("-run"),
                OsString::from("TestFoo"),
            ],
        );
        let command = job.command();

        assert_eq!(command.get_program(), "go");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(
            args,
            vec!["test", "-count=25", "-failfast", "-json", "./...", "-run", "TestFoo"]
        );
    }

    #[test]
    fn test_display_reads_as_the_spawned_command_line() {
        let job = TestJob::new(3, vec![OsString::from("./pkg")]);

        assert_eq!(
            format!("{}", job),
            "go test -count=3 -failfast -json ./pkg"
        );
    }
}
