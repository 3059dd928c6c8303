//! Command-line configuration and pipeline orchestration.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::encode::Encoder;
use crate::error::Error;
use crate::render::print_qr;
use crate::term;

/// Size levels 1-10 map to these module counts. The step of four keeps every
/// entry on a valid symbol version; level 1 starts at version 2 (25 modules).
const SIZE_STEPS: [usize; 10] = [25, 29, 33, 37, 41, 45, 49, 53, 57, 61];

/// Pixels drawn per module when saving a raster image.
const RASTER_PIXELS_PER_MODULE: u32 = 8;

/// Render configuration, parsed from the command line and passed by value
/// into the pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "qrterm",
    version,
    about = "Generate QR codes in the terminal or save to file.",
    after_help = "Examples:\n  \
        qrterm --text \"Hello, World!\"\n  \
        qrterm -t \"https://example.com\" -s 5\n  \
        qrterm -t \"Save to file\" -o qr.png\n  \
        echo \"Pipe input\" | qrterm -t -"
)]
pub struct Config {
    /// Text to encode in the QR code; "-" reads from stdin
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Size scale 1-10 (0 for auto-detect, 1=smallest, 10=largest)
    #[arg(short, long, default_value_t = 0)]
    pub size: i32,

    /// Write a PNG image to this path instead of rendering to the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the banner around interactive terminal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Border width in modules; zero or negative disables the border
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub border: i32,
}

impl Config {
    /// Replaces a text of `"-"` with the content of standard input, read to
    /// EOF and trimmed once as a whole.
    pub fn resolve_text(&mut self) -> io::Result<()> {
        if self.text == "-" {
            let mut input = String::new();
            io::stdin().lock().read_to_string(&mut input)?;
            self.text = input.trim().to_string();
        }
        Ok(())
    }
}

/// Maps a user-facing size level to a module count.
///
/// Values outside 1-10 fall back to [`term::DEFAULT_SIZE`]; the driver
/// routes those through terminal auto-detection before ever getting here.
pub fn convert_size_scale(user_size: i32) -> usize {
    if !(1..=10).contains(&user_size) {
        return term::DEFAULT_SIZE;
    }
    SIZE_STEPS[(user_size - 1) as usize]
}

fn resolve_target_size(size: i32) -> usize {
    if (1..=10).contains(&size) {
        convert_size_scale(size)
    } else {
        term::auto_size()
    }
}

/// Runs the pipeline described by `config` against the given module source.
///
/// With an output path set the text goes straight to a raster file; the
/// raster path only supports toggling the quiet zone, not sizing it.
/// Otherwise the symbol is scaled, padded, and printed to standard output,
/// framed by a banner when stdout is interactive and quiet mode is off.
pub fn run(config: &Config, source: &impl Encoder) -> Result<(), Error> {
    if config.text.is_empty() {
        return Err(Error::MissingInput);
    }

    if let Some(path) = &config.output {
        debug!("raster mode, writing to {}", path.display());
        return source.write_raster(
            &config.text,
            RASTER_PIXELS_PER_MODULE,
            path,
            config.border > 0,
        );
    }

    let matrix = source.encode(&config.text)?;
    let target_size = resolve_target_size(config.size);
    let border = config.border.max(0) as usize;
    debug!("terminal mode, target size {}, border {}", target_size, border);

    let interactive = term::is_interactive();
    if !config.quiet && interactive {
        println!("QR Code for: {}", config.text);
        println!();
    }

    print_qr(matrix, target_size, border);

    if !config.quiet && interactive {
        println!();
    }

    Ok(())
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;

    /// Module source that hands out a fixed checkerboard and records raster
    /// requests, so driver flows run without any symbol math.
    struct FakeSource {
        raster_calls: RefCell<Vec<(String, u32, PathBuf, bool)>>,
    }

    impl FakeSource {
        fn new() -> Self {
            FakeSource {
                raster_calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Encoder for FakeSource {
        fn encode(&self, _text: &str) -> Result<Vec<Vec<bool>>, Error> {
            Ok(vec![vec![true, false], vec![false, true]])
        }

        fn write_raster(
            &self,
            text: &str,
            pixels_per_module: u32,
            path: &Path,
            include_border: bool,
        ) -> Result<(), Error> {
            self.raster_calls.borrow_mut().push((
                text.to_string(),
                pixels_per_module,
                path.to_path_buf(),
                include_border,
            ));
            Ok(())
        }
    }

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse(&["qrterm", "--text", "hello world"]);
        assert_eq!(config.text, "hello world");
        assert_eq!(config.size, 0);
        assert_eq!(config.output, None);
        assert!(!config.quiet);
        assert_eq!(config.border, 2);
    }

    #[test]
    fn test_parse_short_flags() {
        let config = parse(&["qrterm", "-t", "test", "-s", "10", "-b", "1"]);
        assert_eq!(config.text, "test");
        assert_eq!(config.size, 10);
        assert_eq!(config.border, 1);
    }

    #[test]
    fn test_parse_all_flags() {
        let config = parse(&[
            "qrterm", "--text", "full test", "--size", "15", "--output", "test.png", "--quiet",
            "--border", "3",
        ]);
        assert_eq!(config.text, "full test");
        assert_eq!(config.size, 15);
        assert_eq!(config.output, Some(PathBuf::from("test.png")));
        assert!(config.quiet);
        assert_eq!(config.border, 3);
    }

    #[test]
    fn test_parse_negative_border() {
        let config = parse(&["qrterm", "-t", "x", "-b", "-1"]);
        assert_eq!(config.border, -1);
    }

    #[test]
    fn test_convert_size_scale() {
        assert_eq!(convert_size_scale(1), 25);
        assert_eq!(convert_size_scale(5), 41);
        assert_eq!(convert_size_scale(10), 61);
        assert_eq!(convert_size_scale(0), 25);
        assert_eq!(convert_size_scale(11), 25);
        assert_eq!(convert_size_scale(-1), 25);
    }

    #[test]
    fn test_run_refuses_empty_text() {
        let source = FakeSource::new();
        let config = parse(&["qrterm"]);
        assert!(matches!(
            run(&config, &source),
            Err(Error::MissingInput)
        ));
        assert!(source.raster_calls.borrow().is_empty());
    }

    #[test]
    fn test_run_terminal_mode() {
        let source = FakeSource::new();
        let config = parse(&["qrterm", "-t", "test message", "-q", "-s", "1"]);
        run(&config, &source).unwrap();
        assert!(source.raster_calls.borrow().is_empty());
    }

    #[test]
    fn test_run_raster_mode_maps_border_flag() {
        let source = FakeSource::new();

        let config = parse(&["qrterm", "-t", "file test", "-o", "qr.png"]);
        run(&config, &source).unwrap();

        let config = parse(&["qrterm", "-t", "file test", "-o", "qr.png", "-b", "0"]);
        run(&config, &source).unwrap();

        let calls = source.raster_calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "file test");
        assert_eq!(calls[0].2, PathBuf::from("qr.png"));
        assert!(calls[0].3, "default border enables the quiet zone");
        assert!(!calls[1].3, "border 0 disables the quiet zone");
    }
}
