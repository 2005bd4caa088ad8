//! Zone CLI: lays out chat scripts and converts bitmap assets.
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug zone layout -`).

mod args;
mod run;

use std::env;
use std::process;

use thiserror::Error;
use zone_text::FontError;
use zone_texture::TextureError;

use args::{parse_args, Invocation, USAGE};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("Invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
    #[error("Font error: {0}")]
    Font(#[from] FontError),
}

fn execute(invocation: Invocation) -> Result<String, CliError> {
    match invocation {
        Invocation::Layout(layout) => {
            let font = run::load_font(layout.font.as_deref())?;
            let script = run::read_input(&layout.input)?;
            run::layout(&script, &font, &layout)
        }
        Invocation::Encode { input, solid, format } => {
            run::encode(&run::read_input(&input)?, solid, format)
        }
        Invocation::Decode { input, solid } => run::decode(&run::read_input(&input)?, solid),
        Invocation::Avatar { rows } => run::avatar(&rows),
        Invocation::Help => Ok(USAGE.to_string()),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse_args(&args).and_then(execute);

    match result {
        Ok(output) => println!("{output}"),
        Err(CliError::Usage(message)) => {
            eprintln!("zone: {message}\n\n{USAGE}");
            process::exit(2);
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("zone: {e}");
            process::exit(1);
        }
    }
}
