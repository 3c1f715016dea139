mod loader;
mod serial;

use crate::loader::{Error, Loader, Timing};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

const BAUD_RATE: u32 = 115200;

fn run(port_path: &str, file_path: &str) -> Result<(), Error> {
    let conn = serial::new(port_path, BAUD_RATE).map_err(|e| Error::PortOpen {
        path: port_path.to_string(),
        source: e,
    })?;
    let file = File::open(file_path).map_err(|e| Error::FileOpen {
        path: file_path.to_string(),
        source: e,
    })?;

    log::info!("loading {} via {}", file_path, port_path);
    let mut loader = Loader::new(conn, Timing::default());
    loader.load(BufReader::new(file), &mut io::stdout())
    // conn is dropped here, closing the port on every exit path
}

fn main() -> ExitCode {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let args: Vec<String> = env::args().skip(1).collect();
    let (port_path, file_path) = match args.as_slice() {
        [port, file] => (port.as_str(), file.as_str()),
        _ => {
            eprintln!("USAGE: basic_loader <port> <file.bas>");
            return ExitCode::from(2);
        }
    };

    match run(port_path, file_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
