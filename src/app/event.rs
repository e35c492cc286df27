use chrono::DateTime;
use chrono::Utc;
use serde_derive::Deserialize;
use std::io::BufRead;

/// One record of the machine-readable test event stream, as emitted by
/// `go test -json` (one JSON object per line).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestEvent {
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub action: Action,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub test: String,
    #[serde(default)]
    pub output: String,
}

/// The fixed action vocabulary. Anything outside it, including an absent
/// action, folds to `Other` and is ignored downstream.
#[derive(Debug, PartialEq)]
pub enum Action {
    Run,
    Pass,
    Fail,
    Output,
    Other,
}

impl Default for Action {
    fn default() -> Self {
        Action::Other
    }
}

impl<'de> serde::Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "run" => Action::Run,
            "pass" => Action::Pass,
            "fail" => Action::Fail,
            "output" => Action::Output,
            _ => Action::Other,
        })
    }
}

/// Outcome of pulling the next unit off the stream. `Malformed` is kept
/// apart from `EndOfStream` so the caller can see the distinction even
/// though both stop consumption.
pub enum Decoded {
    Event(TestEvent),
    EndOfStream,
    Malformed(String),
}

pub struct EventStream<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> EventStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    pub fn next_event(&mut self) -> Decoded {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return Decoded::EndOfStream,
                Ok(_) => {
                    let raw = self.line.trim();
                    if raw.is_empty() {
                        continue;
                    }
                    return match serde_json::from_str(raw) {
                        Ok(event) => Decoded::Event(event),
                        Err(e) => Decoded::Malformed(format!("{}", e)),
                    };
                }
                Err(e) => return Decoded::Malformed(format!("{}", e)),
            }
        }
    }
}
