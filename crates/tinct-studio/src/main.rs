use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use tinct_engine::coords::Rect;
use tinct_engine::logging::{LoggingConfig, WriteStyle, init_logging};
use tinct_engine::paint::{Color, GradientDirection};
use tinct_engine::text::AttributedText;

#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(about = "Decode hex colors and inspect gradient geometry")]
#[command(version)]
struct Args {
    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_filter: Option<String>,

    /// When to color log output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex color such as "#F80" or "#1e293b"
    Decode {
        hex: String,

        /// Opacity in 0.0..=1.0
        #[arg(short, long, default_value_t = 1.0)]
        alpha: f32,
    },
    /// Print the start/end points of a gradient direction
    Gradient {
        direction: GradientDirection,

        /// Bounding box as X,Y,W,H (defaults to the unit square)
        #[arg(short, long, value_parser = parse_bounds)]
        bounds: Option<Rect>,
    },
    /// List every gradient direction with its vector
    Directions,
    /// Color the first case-insensitive match of NEEDLE in TEXT
    Highlight {
        text: String,
        needle: String,
        hex: String,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for WriteStyle {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => WriteStyle::Auto,
            ColorChoice::Always => WriteStyle::Always,
            ColorChoice::Never => WriteStyle::Never,
        }
    }
}

fn parse_bounds(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in bounds {s:?}: {e}"))?;
    match parts[..] {
        [x, y, w, h] => Ok(Rect::new(x, y, w, h)),
        _ => Err(format!("bounds must be X,Y,W,H, got {} values", parts.len())),
    }
}

fn decode(hex: &str, alpha: f32) -> Result<String> {
    let color = Color::from_hex(hex, alpha).with_context(|| format!("cannot decode {hex}"))?;
    let (r, g, b, a) = color.to_tuple();
    Ok(format!(
        "r={r:.4} g={g:.4} b={b:.4} a={a:.4}  {}",
        color.to_hex()
    ))
}

fn gradient(direction: GradientDirection, bounds: Option<Rect>) -> String {
    let vector = direction.vector();
    let vector = match bounds {
        Some(bounds) => vector.in_rect(bounds),
        None => vector,
    };
    format!(
        "{direction}: ({}, {}) -> ({}, {})",
        vector.start.x, vector.start.y, vector.end.x, vector.end.y
    )
}

fn highlight(text: &str, needle: &str, hex: &str) -> Result<String> {
    let color: Color = hex.parse().with_context(|| format!("cannot decode {hex}"))?;
    let mut attributed = AttributedText::new(text);
    if !attributed.set_color_for(needle, color) {
        log::warn!("{needle:?} does not occur in {text:?}");
        return Ok(format!("no match for {needle:?}"));
    }
    let span = &attributed.spans()[0];
    Ok(format!(
        "{:?} at {}..{} in {}",
        attributed.span_text(span).unwrap_or_default(),
        span.range.start,
        span.range.end,
        color.to_hex()
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default().with_write_style(args.color.into());
    if let Some(filter) = args.log_filter {
        logging = logging.with_filter(filter);
    }
    init_logging(logging);
    log::debug!("running {:?}", args.command);

    match args.command {
        Command::Decode { hex, alpha } => println!("{}", decode(&hex, alpha)?),
        Command::Gradient { direction, bounds } => println!("{}", gradient(direction, bounds)),
        Command::Directions => {
            for direction in GradientDirection::ALL {
                println!("{}", gradient(direction, None));
            }
        }
        Command::Highlight { text, needle, hex } => {
            println!("{}", highlight(&text, &needle, &hex)?)
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parses_decode_with_alpha() {
        let args = Args::try_parse_from(["tinct", "decode", "#F80", "--alpha", "0.5"]).unwrap();
        match args.command {
            Command::Decode { hex, alpha } => {
                assert_eq!(hex, "#F80");
                assert_eq!(alpha, 0.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_gradient_direction_and_bounds() {
        let args = Args::try_parse_from([
            "tinct", "gradient", "top-left-to-bottom-right", "--bounds", "0,0,100,50",
        ])
        .unwrap();
        match args.command {
            Command::Gradient { direction, bounds } => {
                assert_eq!(direction, GradientDirection::DiagonalTopLeftToBottomRight);
                assert_eq!(bounds, Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(parse_bounds("1,2,3").is_err());
        assert!(parse_bounds("1,2,x,4").is_err());
    }

    #[test]
    fn decode_output() {
        assert_eq!(
            decode("#FFFFFF", 1.0).unwrap(),
            "r=1.0000 g=1.0000 b=1.0000 a=1.0000  #ffffff"
        );
    }

    #[test]
    fn decode_error_has_context() {
        let err = decode("FFFFFF", 1.0).unwrap_err();
        assert_eq!(err.to_string(), "cannot decode FFFFFF");
        assert!(format!("{err:#}").contains("missing '#'"));
    }

    #[test]
    fn gradient_output_in_bounds() {
        assert_eq!(
            gradient(GradientDirection::Vertical, Some(Rect::new(0.0, 0.0, 10.0, 20.0))),
            "vertical: (5, 0) -> (5, 20)"
        );
    }

    #[test]
    fn highlight_output() {
        assert_eq!(
            highlight("Read the Terms", "terms", "#f00").unwrap(),
            "\"Terms\" at 9..14 in #ff0000"
        );
        assert_eq!(highlight("abc", "z", "#f00").unwrap(), "no match for \"z\"");
    }
}
