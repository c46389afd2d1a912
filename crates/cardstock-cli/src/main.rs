//! Command-line frontend: deck JSON in, SVG/PDF/PNG artifact out.

use std::io::Read as _;
use std::path::PathBuf;
use std::str::FromStr;

use cardstock::render::{RenderOptions, write_artifact};
use cardstock::{Deck, DeckGeometry};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Parse(cardstock::Error),
    Render(cardstock::render::DeckRenderError),
    SvgParse,
    PixmapAlloc,
    PngEncode,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Parse(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::SvgParse => write!(f, "failed to parse generated SVG"),
            CliError::PixmapAlloc => write!(f, "failed to allocate pixmap for PNG rendering"),
            CliError::PngEncode => write!(f, "failed to encode PNG"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<cardstock::Error> for CliError {
    fn from(value: cardstock::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<cardstock::render::DeckRenderError> for CliError {
    fn from(value: cardstock::render::DeckRenderError) -> Self {
        Self::Render(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Validate,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Pdf,
    Png,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    format: RenderFormat,
    out: Option<PathBuf>,
    card_width_mm: Option<f64>,
    png_scale: f32,
}

const USAGE: &str = "\
Usage: cardstock-cli [COMMAND] [OPTIONS] [DECK.json]

Commands:
  render      render the deck (default)
  validate    parse and validate the deck, printing a summary

Options:
  --format FORMAT     svg | pdf | png (default: svg)
  --out PATH          output artifact path (required for pdf/png)
  --card-width MM     card width in mm (default: 26; height keeps 2.5:3.5)
  --scale FACTOR      PNG pixels per mm (default: 8)

Reads the deck from DECK.json, or from stdin when the path is `-` or omitted.";

fn parse_args() -> Result<Args, CliError> {
    let mut args = Args {
        png_scale: 8.0,
        ..Args::default()
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "render" => args.command = Command::Render,
            "validate" => args.command = Command::Validate,
            "--format" => {
                let value = it.next().ok_or(CliError::Usage("--format needs a value"))?;
                args.format = value
                    .parse()
                    .map_err(|_| CliError::Usage("--format must be svg, pdf or png"))?;
            }
            "--out" => {
                let value = it.next().ok_or(CliError::Usage("--out needs a value"))?;
                args.out = Some(PathBuf::from(value));
            }
            "--card-width" => {
                let value = it
                    .next()
                    .ok_or(CliError::Usage("--card-width needs a value"))?;
                let mm: f64 = value
                    .parse()
                    .map_err(|_| CliError::Usage("--card-width must be a number in mm"))?;
                if !(mm.is_finite() && mm > 0.0) {
                    return Err(CliError::Usage("--card-width must be positive"));
                }
                args.card_width_mm = Some(mm);
            }
            "--scale" => {
                let value = it.next().ok_or(CliError::Usage("--scale needs a value"))?;
                args.png_scale = value
                    .parse()
                    .map_err(|_| CliError::Usage("--scale must be a number"))?;
            }
            "--help" | "-h" => return Err(CliError::Usage(USAGE)),
            _ if args.input.is_none() => args.input = Some(arg),
            _ => return Err(CliError::Usage("unexpected extra argument")),
        }
    }
    Ok(args)
}

fn read_deck_json(input: Option<&str>) -> Result<String, CliError> {
    match input {
        Some(path) if path != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, CliError> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Helvetica".to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| CliError::SvgParse)?;
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(CliError::PixmapAlloc)?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    pixmap.encode_png().map_err(|_| CliError::PngEncode)
}

fn run() -> Result<(), CliError> {
    let args = parse_args()?;
    let json = read_deck_json(args.input.as_deref())?;
    let deck = Deck::from_json_str(&json)?;

    match args.command {
        Command::Validate => {
            println!("deck OK: {} card(s)", deck.len());
            return Ok(());
        }
        Command::Render => {}
    }

    let mut options = RenderOptions::default();
    if let Some(mm) = args.card_width_mm {
        options.geometry = DeckGeometry::with_card_width(mm);
    }

    match args.format {
        RenderFormat::Svg => {
            let svg = cardstock::render::render_svg(&deck, &options)?;
            match &args.out {
                Some(path) => {
                    write_artifact(path, svg.as_bytes())?;
                    println!("{}", path.display());
                }
                None => print!("{svg}"),
            }
        }
        RenderFormat::Pdf => {
            let path = args
                .out
                .as_ref()
                .ok_or(CliError::Usage("--out is required for pdf output"))?;
            cardstock::render::pdf::render_pdf_to_file(&deck, &options, path)?;
            println!("{}", path.display());
        }
        RenderFormat::Png => {
            let path = args
                .out
                .as_ref()
                .ok_or(CliError::Usage("--out is required for png output"))?;
            let svg = cardstock::render::render_svg(&deck, &options)?;
            let png = svg_to_png(&svg, args.png_scale)?;
            write_artifact(path, &png)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
