//! Subcommand implementations. Each takes already-read input and returns
//! the text to print.

use std::fs;
use std::io::{self, Read};

use zone_core::{FontData, PixelFormat, TextureData};
use zone_layout::{script_to_pages, LayoutConfig};
use zone_text::{ascii_small, parse_fakedown, Font};
use zone_texture::{decode_ascii_texture, decode_texture, encode_avatar, encode_texture};

use crate::args::LayoutArgs;
use crate::CliError;

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<String, CliError> {
    let io_error = |source: io::Error| CliError::Io { path: path.to_string(), source };
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(io_error)?;
        Ok(text)
    } else {
        fs::read_to_string(path).map_err(io_error)
    }
}

/// The font named by `--font`, or the bundled one.
pub fn load_font(path: Option<&str>) -> Result<Font, CliError> {
    match path {
        Some(path) => {
            let data: FontData = serde_json::from_str(&read_input(path)?)?;
            Ok(Font::decode(&data)?)
        }
        None => Ok(ascii_small()?),
    }
}

/// Lay out a script and render the pages as JSON.
pub fn layout(script: &str, font: &Font, args: &LayoutArgs) -> Result<String, CliError> {
    let mut config = LayoutConfig::default();
    if let Some(width) = args.width {
        config.line_width = width;
    }
    if let Some(lines) = args.lines {
        config.line_count = lines;
    }

    let script = if args.fakedown { parse_fakedown(script) } else { script.to_string() };
    let pages = script_to_pages(&script, font, &config);
    log::info!("Laid out {} pages with font '{}'", pages.len(), font.name);
    Ok(serde_json::to_string_pretty(&pages)?)
}

/// ASCII art to a texture record.
pub fn encode(ascii: &str, solid: char, format: PixelFormat) -> Result<String, CliError> {
    let buffer = decode_ascii_texture(ascii, solid)?;
    let texture = encode_texture(&buffer, format);
    log::debug!("Encoded {}x{} texture as {}", texture.width, texture.height, format);
    Ok(serde_json::to_string_pretty(&texture)?)
}

/// A texture record to ASCII art.
pub fn decode(json: &str, solid: char) -> Result<String, CliError> {
    let texture: TextureData = serde_json::from_str(json)?;
    let buffer = decode_texture(&texture)?;
    Ok(buffer.to_ascii(solid, '_'))
}

/// Eight rows of `1`/`0` art to an avatar string.
pub fn avatar(rows: &[String]) -> Result<String, CliError> {
    Ok(encode_avatar(&rows.join("\n"))?)
}
