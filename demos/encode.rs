//! Print the IR code for a JSON command.
//!
//! ```text
//! cargo run --example encode -- '{"has_command": true, "target": "空调", "action": "调节", "params": {"temperature": 21}}'
//! ```
//!
//! Reads the command from stdin when no argument is given. Raise log
//! verbosity with `-v` (debug) or `-vv` (trace).

use std::io::{stdin, Read};

use ac_ir_code::Encoder;
use tracing::level_filters::LevelFilter;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let level = match args.iter().position(|a| a.starts_with("-v")) {
        Some(index) => match args.remove(index).as_str() {
            "-v" => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        },
        None => LevelFilter::WARN,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    let json = match args.pop() {
        Some(json) => json,
        None => {
            let mut input = String::new();
            stdin()
                .read_to_string(&mut input)
                .expect("stdin must be readable.");
            input
        }
    };

    match Encoder::default().encode_json(&json) {
        Ok(code) => println!("{code}"),
        Err(e) => {
            eprintln!("Command not understood: {e}");
            std::process::exit(1);
        }
    }
}
