//! ZX Spectrum snapshot screenshot tool.
//!
//! Reads a SNA snapshot or bare SCR screen dump, decodes the screen
//! through `spectrum-screen`, and writes a 256×192 PNG.

use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process;

use spectrum_screen::{SCREEN_HEIGHT, SCREEN_WIDTH, render_snapshot};

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

struct CliArgs {
    input: PathBuf,
    out: Option<PathBuf>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut input: Option<PathBuf> = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                out = args.get(i).map(PathBuf::from);
            }
            "--help" | "-h" => {
                eprintln!("Usage: sna-screenshot <snapshot> [--out <file>]");
                eprintln!();
                eprintln!("Renders the screen of a ZX Spectrum snapshot as a PNG image.");
                eprintln!();
                eprintln!("Arguments:");
                eprintln!("  <snapshot>    SNA snapshot (48K or 128K) or bare SCR screen dump");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --out <file>  Output PNG path [default: <snapshot stem>.png]");
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown argument: {other}");
                process::exit(1);
            }
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    eprintln!("More than one input file given");
                    process::exit(1);
                }
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        eprintln!("Usage: sna-screenshot <snapshot> [--out <file>]");
        process::exit(1);
    };

    CliArgs { input, out }
}

/// Default output path: the input's file name with a `.png` extension, in
/// the current directory.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("screen"));
    let mut path = PathBuf::from(stem);
    path.set_extension("png");
    path
}

/// Write RGBA pixels as a 256×192 PNG file.
fn save_png(path: &Path, pixels: &[u8]) -> Result<(), Box<dyn Error>> {
    let file = fs::File::create(path)?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    Ok(())
}

fn main() {
    let cli = parse_args();

    let data = match fs::read(&cli.input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", cli.input.display());
            process::exit(1);
        }
    };

    let pixels = match render_snapshot(&data) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to decode {}: {e}", cli.input.display());
            process::exit(1);
        }
    };

    let out = cli.out.unwrap_or_else(|| default_output_path(&cli.input));
    if let Err(e) = save_png(&out, &pixels) {
        eprintln!("Failed to write {}: {e}", out.display());
        process::exit(1);
    }
    eprintln!("Screenshot saved to {}", out.display());
}
