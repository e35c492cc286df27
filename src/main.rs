#[macro_use]
extern crate log;

mod app;
mod configuration;
mod time;

use log::LevelFilter;
use signal_hook::{iterator::Signals, SIGINT};
use std::{env, path::PathBuf, process::exit, thread};
use structopt::StructOpt;

use self::app::App;
use self::configuration::command_line::{LogLevel, Opt};

fn main() {
    let mut options = Opt::from_args();
    if env::args().len() < 2 {
        Opt::clap().print_long_help().expect("Cannot print usage");
        println!();
        return;
    }
    let signals = Signals::new(&[SIGINT]).unwrap();

    thread::spawn(move || {
        for sig in signals.forever() {
            info!("Received signal {:?}, stopping", sig);
            exit(130);
        }
    });

    init_logging(
        options.logging.take().unwrap_or(LogLevel::Warn).into(),
        &options.log_output_file,
    );

    let app = App::new(options);
    match app.run() {
        Ok(status) if status.success() => {}
        Ok(status) => exit(status.code().unwrap_or(1)),
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file).unwrap())
    }
    dispatcher.apply().unwrap();
    debug!("Logging level {} enabled", level);
}
