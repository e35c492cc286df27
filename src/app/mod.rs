pub(crate) mod aggregate;
pub(crate) mod error;
pub(crate) mod event;
pub(crate) mod job;
pub(crate) mod render;

use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::process::ExitStatus;

use crate::app::aggregate::Tracker;
use crate::app::error::Error;
use crate::app::event::Action;
use crate::app::event::Decoded;
use crate::app::event::EventStream;
use crate::app::job::TestJob;
use crate::app::render::StatusLine;
use crate::configuration::command_line::Opt;

pub struct App {
    job: TestJob,
}

impl App {
    pub fn new(options: Opt) -> Self {
        App {
            job: TestJob::new(options.count, options.args),
        }
    }

    pub fn run(&self) -> Result<ExitStatus, Error> {
        info!("Running {}", self.job);
        let mut child = self.job.spawn()?;
        let piped = child.stdout.take().expect("Child stdout is piped");
        let mut events = EventStream::new(BufReader::new(piped));
        let mut tracker = Tracker::new();
        let stdout = io::stdout();
        let mut status = StatusLine::new(stdout.lock());
        consume(&mut events, &mut tracker, &mut status).map_err(Error::Render)?;
        child.wait().map_err(Error::Wait)
    }
}

/// Folds the event stream into the tally and the status line, one event at a
/// time, until the stream ends or stops decoding.
fn consume<R: BufRead, W: Write>(
    events: &mut EventStream<R>,
    tracker: &mut Tracker,
    status: &mut StatusLine<W>,
) -> io::Result<()> {
    loop {
        let event = match events.next_event() {
            Decoded::Event(event) => event,
            Decoded::EndOfStream => break,
            Decoded::Malformed(reason) => {
                debug!("Stopping on undecodable event: {}", reason);
                break;
            }
        };
        if event.test.is_empty() {
            // Package-level records carry no per-test signal.
            continue;
        }
        let key = format!("{}.{}", event.package, event.test);
        trace!("{:?} for {} at {:?}", event.action, key, event.time);
        match event.action {
            Action::Run => tracker.on_run(&key),
            Action::Pass => {
                let attempt = tracker.on_pass(&key);
                status.render(&key, &attempt)?;
            }
            Action::Fail => {
                let attempt = tracker.on_fail(&key);
                status.render(&key, &attempt)?;
            }
            Action::Output => tracker.on_output(&event.output),
            Action::Other => {}
        }
    }
    status.finish(tracker.trailing_output())
}
