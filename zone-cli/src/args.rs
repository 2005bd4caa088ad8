//! Command-line parsing.

use zone_core::PixelFormat;
use zone_texture::parse_format;

use crate::CliError;

pub const USAGE: &str = "\
Usage:
  zone layout <script-file|-> [--font <font.json>] [--width N] [--lines N] [--fakedown]
  zone encode <ascii-file|-> [--solid C] [--format RGBA8|R8|R4|M1]
  zone decode <texture.json|-> [--solid C]
  zone avatar <row> [<row> ...]";

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutArgs {
    pub input: String,
    pub font: Option<String>,
    pub width: Option<u32>,
    pub lines: Option<usize>,
    pub fakedown: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Invocation {
    Layout(LayoutArgs),
    Encode { input: String, solid: char, format: PixelFormat },
    Decode { input: String, solid: char },
    Avatar { rows: Vec<String> },
    Help,
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage("missing command".into()));
    };

    match command.as_str() {
        "layout" => {
            let mut layout = LayoutArgs {
                input: String::new(),
                font: None,
                width: None,
                lines: None,
                fakedown: false,
            };
            let mut input = None;
            let mut index = 0;
            while index < rest.len() {
                match rest[index].as_str() {
                    "--font" => layout.font = Some(flag_value(rest, index, "--font")?.to_string()),
                    "--width" => layout.width = Some(parse_number(rest, index, "--width")?),
                    "--lines" => layout.lines = Some(parse_number(rest, index, "--lines")?),
                    "--fakedown" => {
                        layout.fakedown = true;
                        index += 1;
                        continue;
                    }
                    other => {
                        set_input(&mut input, other)?;
                        index += 1;
                        continue;
                    }
                }
                index += 2;
            }
            layout.input = input.ok_or_else(|| CliError::Usage("layout needs a script".into()))?;
            Ok(Invocation::Layout(layout))
        }
        "encode" => {
            let mut input = None;
            let mut solid = '#';
            let mut format = PixelFormat::M1;
            let mut index = 0;
            while index < rest.len() {
                match rest[index].as_str() {
                    "--solid" => solid = parse_char(rest, index, "--solid")?,
                    "--format" => format = parse_format(flag_value(rest, index, "--format")?)?,
                    other => {
                        set_input(&mut input, other)?;
                        index += 1;
                        continue;
                    }
                }
                index += 2;
            }
            let input = input.ok_or_else(|| CliError::Usage("encode needs an ASCII file".into()))?;
            Ok(Invocation::Encode { input, solid, format })
        }
        "decode" => {
            let mut input = None;
            let mut solid = '#';
            let mut index = 0;
            while index < rest.len() {
                match rest[index].as_str() {
                    "--solid" => solid = parse_char(rest, index, "--solid")?,
                    other => {
                        set_input(&mut input, other)?;
                        index += 1;
                        continue;
                    }
                }
                index += 2;
            }
            let input = input.ok_or_else(|| CliError::Usage("decode needs a texture".into()))?;
            Ok(Invocation::Decode { input, solid })
        }
        "avatar" => {
            if rest.is_empty() {
                return Err(CliError::Usage("avatar needs 8 rows of ASCII art".into()));
            }
            Ok(Invocation::Avatar { rows: rest.to_vec() })
        }
        "help" | "--help" | "-h" => Ok(Invocation::Help),
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
}

fn set_input(input: &mut Option<String>, value: &str) -> Result<(), CliError> {
    if value.starts_with("--") {
        return Err(CliError::Usage(format!("unknown flag '{value}'")));
    }
    if input.replace(value.to_string()).is_some() {
        return Err(CliError::Usage(format!("unexpected argument '{value}'")));
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn parse_number<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    flag: &str,
) -> Result<T, CliError> {
    let value = flag_value(args, index, flag)?;
    value.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

fn parse_char(args: &[String], index: usize, flag: &str) -> Result<char, CliError> {
    let value = flag_value(args, index, flag)?;
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(CliError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_layout_defaults() {
        let parsed = parse_args(&args("layout chat.txt")).unwrap();
        assert_eq!(
            parsed,
            Invocation::Layout(LayoutArgs {
                input: "chat.txt".into(),
                font: None,
                width: None,
                lines: None,
                fakedown: false,
            })
        );
    }

    #[test]
    fn test_layout_flags_any_order() {
        let parsed = parse_args(&args("layout --width 120 - --fakedown --lines 3 --font f.json")).unwrap();
        let Invocation::Layout(layout) = parsed else {
            panic!("expected layout, got {parsed:?}");
        };
        assert_eq!(layout.input, "-");
        assert_eq!(layout.width, Some(120));
        assert_eq!(layout.lines, Some(3));
        assert_eq!(layout.font.as_deref(), Some("f.json"));
        assert!(layout.fakedown);
    }

    #[test]
    fn test_encode_options() {
        let parsed = parse_args(&args("encode art.txt --solid 1 --format R4")).unwrap();
        assert_eq!(
            parsed,
            Invocation::Encode { input: "art.txt".into(), solid: '1', format: PixelFormat::R4 }
        );
    }

    #[test]
    fn test_encode_bad_format() {
        let err = parse_args(&args("encode art.txt --format RGB")).unwrap_err();
        assert!(matches!(err, CliError::Texture(_)), "got {err:?}");
    }

    #[test]
    fn test_decode_and_avatar() {
        assert_eq!(
            parse_args(&args("decode tex.json")).unwrap(),
            Invocation::Decode { input: "tex.json".into(), solid: '#' }
        );
        let Invocation::Avatar { rows } = parse_args(&args("avatar 11 00")).unwrap() else {
            panic!("expected avatar");
        };
        assert_eq!(rows, vec!["11", "00"]);
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(parse_args(&[]), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("frobnicate")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("layout")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("layout a b")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("layout a --bogus")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("layout a --width")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("avatar")), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            parse_args(&args("layout a --width wide")),
            Err(CliError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_args(&args("decode t.json --solid ##")),
            Err(CliError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args("--help")).unwrap(), Invocation::Help);
    }
}
