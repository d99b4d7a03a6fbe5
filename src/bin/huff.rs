//! huff CLI - Huffman compression of a single file.
//!
//! ```text
//! huff -huff <source> <destination>     compress
//! huff -unhuff <source> <destination>   decompress
//! ```
//!
//! Exit status: 0 on success, 1 on I/O or usage errors, 2 when the file
//! would not shrink, 3 when the source is not a huff container, 4 when the
//! container is damaged. Nothing is written to the destination on failure.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgGroup, Parser};

use huff::{EncodeOptions, Error};

/// Compress or decompress a file with a static Huffman code.
#[derive(Parser, Debug)]
#[command(name = "huff")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["huff", "unhuff"])))]
struct Args {
    /// Compress SOURCE into DESTINATION
    #[arg(long, num_args = 2, value_names = ["SOURCE", "DESTINATION"])]
    huff: Option<Vec<PathBuf>>,

    /// Decompress SOURCE into DESTINATION
    #[arg(long, num_args = 2, value_names = ["SOURCE", "DESTINATION"])]
    unhuff: Option<Vec<PathBuf>>,

    /// Write the container even if it is not smaller than the source
    #[arg(long)]
    force: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Huff,
    Unhuff,
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version print to stdout and are not failures.
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let (mode, paths) = match (&args.huff, &args.unhuff) {
        (Some(paths), _) => (Mode::Huff, paths),
        (_, Some(paths)) => (Mode::Unhuff, paths),
        // clap enforces exactly one mode
        (None, None) => unreachable!(),
    };

    match run(mode, &paths[0], &paths[1], &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Parse the command line, accepting the historical single-dash spelling.
fn parse_args<I>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    let argv = argv.into_iter().map(|arg| match arg.to_str() {
        Some("-huff") => OsString::from("--huff"),
        Some("-unhuff") => OsString::from("--unhuff"),
        _ => arg,
    });
    Args::try_parse_from(argv)
}

fn exit_code(e: &Error) -> u8 {
    match e {
        Error::WouldNotShrink { .. } => 2,
        Error::NotEncoded { .. } => 3,
        e if e.is_malformed() => 4,
        _ => 1,
    }
}

/// Convert `source` into `destination`. The destination is only written
/// once the whole output exists in memory.
fn run(mode: Mode, source: &Path, destination: &Path, args: &Args) -> Result<(), Error> {
    let input = fs::read(source)?;
    let start = Instant::now();
    let output = match mode {
        Mode::Huff => {
            let options = EncodeOptions {
                require_shrink: !args.force,
            };
            huff::encode_with(&input, &options)?
        }
        Mode::Unhuff => huff::decode(&input)?,
    };
    let elapsed = start.elapsed();
    fs::write(destination, &output)?;

    if args.verbose {
        let ratio = if input.is_empty() {
            0.0
        } else {
            output.len() as f64 / input.len() as f64 * 100.0
        };
        eprintln!("{:?} -> {:?}", source, destination);
        if mode == Mode::Huff {
            let header = huff::inspect(&output)?;
            eprintln!("  Symbols: {}", header.symbol_count());
            eprintln!("  Payload: {} bytes", output.len() - header.payload_offset);
        }
        eprintln!("  Time: {:.2?}", elapsed);
        eprintln!(
            "  Size: {} -> {} bytes ({:.1}%)",
            input.len(),
            output.len(),
            ratio
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("huff-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn args(line: &[&str]) -> Result<Args, clap::Error> {
        parse_args(line.iter().map(OsString::from))
    }

    fn quiet() -> Args {
        args(&["huff", "-huff", "a", "b"]).unwrap()
    }

    #[test]
    fn single_dash_modes_parse() {
        let parsed = args(&["huff", "-huff", "in.txt", "out.huff"]).unwrap();
        assert_eq!(
            parsed.huff,
            Some(vec![PathBuf::from("in.txt"), PathBuf::from("out.huff")])
        );
        let parsed = args(&["huff", "--unhuff", "out.huff", "back.txt", "-v"]).unwrap();
        assert!(parsed.unhuff.is_some());
        assert!(parsed.verbose);
    }

    #[test]
    fn usage_errors_are_reported_to_stderr() {
        let missing_destination = args(&["huff", "-huff", "in.txt"]).unwrap_err();
        assert!(missing_destination.use_stderr());
        let no_mode = args(&["huff"]).unwrap_err();
        assert!(no_mode.use_stderr());
        let both = args(&["huff", "-huff", "a", "b", "-unhuff", "c", "d"]).unwrap_err();
        assert!(both.use_stderr());
        assert!(!args(&["huff", "--help"]).unwrap_err().use_stderr());
    }

    #[test]
    fn exit_codes_per_error_class() {
        let io = Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(exit_code(&io), 1);
        assert_eq!(exit_code(&Error::CountOverflow(0)), 1);
        assert_eq!(
            exit_code(&Error::WouldNotShrink {
                original: 4,
                estimated: 19
            }),
            2
        );
        assert_eq!(exit_code(&Error::NotEncoded { found: None }), 3);
        assert_eq!(exit_code(&Error::TruncatedHeader), 4);
        assert_eq!(exit_code(&Error::TruncatedPayload), 4);
        assert_eq!(exit_code(&Error::MissingSentinel), 4);
    }

    #[test]
    fn refused_compression_writes_nothing() {
        let dir = scratch_dir("refused");
        let source = dir.join("aaaa.txt");
        let destination = dir.join("aaaa.huff");
        fs::write(&source, b"aaaa").unwrap();

        let err = run(Mode::Huff, &source, &destination, &quiet()).unwrap_err();
        assert!(matches!(err, Error::WouldNotShrink { .. }));
        assert!(!destination.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn foreign_file_is_not_decoded_and_writes_nothing() {
        let dir = scratch_dir("foreign");
        let source = dir.join("notes.txt");
        let destination = dir.join("notes.out");
        fs::write(&source, b"just some text, never compressed").unwrap();

        let err = run(Mode::Unhuff, &source, &destination, &quiet()).unwrap_err();
        assert!(matches!(err, Error::NotEncoded { .. }));
        assert_eq!(exit_code(&err), 3);
        assert!(!destination.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn huff_then_unhuff_restores_the_file() {
        let dir = scratch_dir("roundtrip");
        let source = dir.join("text.txt");
        let packed = dir.join("text.huff");
        let restored = dir.join("text.out");
        let text: Vec<u8> = b"all work and no play makes jack a dull boy. "
            .iter()
            .copied()
            .cycle()
            .take(4096)
            .collect();
        fs::write(&source, &text).unwrap();

        run(Mode::Huff, &source, &packed, &quiet()).unwrap();
        assert!(fs::metadata(&packed).unwrap().len() < text.len() as u64);
        run(Mode::Unhuff, &packed, &restored, &quiet()).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), text);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn force_writes_a_growing_container() {
        let dir = scratch_dir("force");
        let source = dir.join("aaaa.txt");
        let destination = dir.join("aaaa.huff");
        fs::write(&source, b"aaaa").unwrap();
        let forced = args(&["huff", "-huff", "a", "b", "--force"]).unwrap();

        run(Mode::Huff, &source, &destination, &forced).unwrap();
        assert_eq!(fs::metadata(&destination).unwrap().len(), 19);
        fs::remove_dir_all(&dir).unwrap();
    }
}
