//! Session command grammar and parser.

use crate::draw::Color;
use crate::util;
use thiserror::Error;

/// A parsed session command.
///
/// `swatch`/`width` take 1-based indices as typed by the user and are stored
/// 0-based, matching the toolbar intent indices.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `pen <color> [width]` - select a pen directly (any positive width)
    Pen { color: Color, width: Option<f64> },
    /// `eraser` - toggle the eraser
    Eraser,
    /// `swatch <n>` - tap the nth palette swatch
    Swatch(usize),
    /// `width <n>` - tap the nth width preset
    Width(usize),
    /// `stroke x,y x,y ...` - commit a stroke with the active tool
    Stroke(Vec<(i32, i32)>),
    /// `scroll <dy>` - scroll the page vertically
    Scroll(f64),
    /// `undo`
    Undo,
    /// `redo`
    Redo,
    /// `state` - print the status line
    State,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Errors produced while parsing a session command line.
///
/// These never abort the session; the shell reports them and reads the next
/// line.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("missing {0} argument")]
    MissingArgument(&'static str),

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("stroke width must be positive, got {0}")]
    NonPositiveWidth(f64),

    #[error("invalid point '{0}' (expected x,y)")]
    InvalidPoint(String),

    #[error("index must be 1 or greater")]
    ZeroIndex,
}

/// Parses one input line.
///
/// Blank lines and `#` comments parse to `None` so scripts can be annotated.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "pen" => {
            let color_arg = words.next().ok_or(CommandError::MissingArgument("color"))?;
            let color = parse_color(color_arg)?;
            let width = match words.next() {
                Some(arg) => {
                    let width = parse_f64(arg)?;
                    if width <= 0.0 {
                        return Err(CommandError::NonPositiveWidth(width));
                    }
                    Some(width)
                }
                None => None,
            };
            Command::Pen { color, width }
        }
        "eraser" => Command::Eraser,
        "swatch" => Command::Swatch(parse_index(words.next(), "swatch")?),
        "width" => Command::Width(parse_index(words.next(), "width")?),
        "stroke" => {
            let points = words.map(parse_point).collect::<Result<Vec<_>, _>>()?;
            if points.is_empty() {
                return Err(CommandError::MissingArgument("point"));
            }
            Command::Stroke(points)
        }
        "scroll" => {
            let arg = words.next().ok_or(CommandError::MissingArgument("delta"))?;
            Command::Scroll(parse_f64(arg)?)
        }
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "state" => Command::State,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Named palette color, or an `r,g,b` triple with 0-255 components.
fn parse_color(arg: &str) -> Result<Color, CommandError> {
    if let Some(color) = util::name_to_color(arg) {
        return Ok(color);
    }
    if arg.contains(',') {
        let parts: Vec<&str> = arg.split(',').collect();
        if parts.len() == 3 {
            let mut rgb = [0u8; 3];
            for (slot, part) in rgb.iter_mut().zip(&parts) {
                *slot = part
                    .parse()
                    .map_err(|_| CommandError::UnknownColor(arg.to_string()))?;
            }
            return Ok(Color::new(
                rgb[0] as f64 / 255.0,
                rgb[1] as f64 / 255.0,
                rgb[2] as f64 / 255.0,
                1.0,
            ));
        }
    }
    Err(CommandError::UnknownColor(arg.to_string()))
}

fn parse_f64(arg: &str) -> Result<f64, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

/// 1-based user index to 0-based toolbar index.
fn parse_index(arg: Option<&str>, what: &'static str) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(what))?;
    let index: usize = arg
        .parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))?;
    if index == 0 {
        return Err(CommandError::ZeroIndex);
    }
    Ok(index - 1)
}

fn parse_point(arg: &str) -> Result<(i32, i32), CommandError> {
    let invalid = || CommandError::InvalidPoint(arg.to_string());
    let (x, y) = arg.split_once(',').ok_or_else(invalid)?;
    Ok((
        x.parse().map_err(|_| invalid())?,
        y.parse().map_err(|_| invalid())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLUE;

    #[test]
    fn parses_pen_with_width() {
        let command = parse("pen blue 4.5").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Pen {
                color: BLUE,
                width: Some(4.5)
            }
        );
    }

    #[test]
    fn parses_pen_rgb_triple() {
        let command = parse("pen 255,0,0").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Pen {
                color: Color::new(1.0, 0.0, 0.0, 1.0),
                width: None
            }
        );
    }

    #[test]
    fn rejects_non_positive_width() {
        assert_eq!(
            parse("pen blue 0"),
            Err(CommandError::NonPositiveWidth(0.0))
        );
    }

    #[test]
    fn parses_stroke_points() {
        let command = parse("stroke 0,0 10,20 30,-5").unwrap().unwrap();
        assert_eq!(command, Command::Stroke(vec![(0, 0), (10, 20), (30, -5)]));
    }

    #[test]
    fn stroke_requires_points() {
        assert_eq!(parse("stroke"), Err(CommandError::MissingArgument("point")));
    }

    #[test]
    fn indices_are_one_based() {
        assert_eq!(parse("swatch 1").unwrap().unwrap(), Command::Swatch(0));
        assert_eq!(parse("width 3").unwrap().unwrap(), Command::Width(2));
        assert_eq!(parse("swatch 0"), Err(CommandError::ZeroIndex));
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
        assert_eq!(parse("# a comment"), Ok(None));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse("zoom 2"),
            Err(CommandError::Unknown("zoom".to_string()))
        );
    }

    #[test]
    fn unknown_color_is_reported() {
        assert_eq!(
            parse("pen chartreuse"),
            Err(CommandError::UnknownColor("chartreuse".to_string()))
        );
    }
}
