use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    Spawn(io::Error),
    Render(io::Error),
    Wait(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Spawn(err) => write!(f, "Cannot start test process: {}", err),
            Error::Render(err) => write!(f, "Cannot write status output: {}", err),
            Error::Wait(err) => write!(f, "Cannot await test process: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spawn(err) | Error::Render(err) | Error::Wait(err) => Some(err),
        }
    }
}
