use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::configuration::constants::defaults::RUN_COUNT;
use clap::arg_enum;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME, setting = AppSettings::TrailingVarArg)]
pub struct Opt {
    /// Times to run each selected test
    #[structopt(long, short = "c", default_value = RUN_COUNT)]
    pub count: u64,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    /// Packages and arguments forwarded to the test command
    #[structopt(parse(from_os_str))]
    pub args: Vec<OsString>,
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
