use clap::Parser;
use log::{info, LevelFilter};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fmt::Display, fmt::Formatter};

use crate::compression::decode::decode_to_vec;
use crate::compression::encode::encode;
use crate::error::Result;

/// Extension of encoded files.
pub const EXTENSION: &str = "hef";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Encode or decode
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Define the two output channels
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman encode a file into a .hef container, or decode one",
    long_about = None)]
pub struct Args {
    /// File to process. Files ending in .hef are decoded, anything else is encoded
    #[clap()]
    filename: PathBuf,

    /// Encode the input file, whatever its extension
    #[clap(short = 'z', long = "encode")]
    encode: bool,

    /// Decode the input file, whatever its extension
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Keep (don't delete) the input file. This is the default
    #[clap(short = 'k', long = "keep", conflicts_with = "remove")]
    keep: bool,

    /// Remove the input file once the output is written
    #[clap(long = "remove")]
    remove: bool,

    /// Only report errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v shows debug output, -vv traces the code tables
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Defines all user settable options to control program behavior
pub struct HefOpts {
    /// Name of the file to read for input
    pub file: PathBuf,
    /// Encode or decode
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Remove the input file after processing
    pub remove_input: bool,
    /// Log level for the terminal logger
    pub log_level: LevelFilter,
}

impl HefOpts {
    /// Copy the parsed command line into our options, filling in the defaults.
    pub fn from_args(args: Args) -> Self {
        let op_mode = if args.decode {
            Mode::Decode
        } else if args.encode {
            Mode::Encode
        } else {
            mode_for(&args.filename)
        };
        let log_level = match (args.quiet, args.verbose) {
            (true, _) => LevelFilter::Error,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self {
            file: args.filename,
            op_mode,
            output: if args.stdout {
                Output::Stdout
            } else {
                Output::File
            },
            force_overwrite: args.force,
            remove_input: args.remove && !args.keep,
            log_level,
        }
    }

    /// Where the output file goes: `name.hef` when encoding, `name` with the `.hef`
    /// stripped when decoding.
    pub fn output_path(&self) -> PathBuf {
        match self.op_mode {
            Mode::Encode => {
                let mut name = self.file.clone().into_os_string();
                name.push(".");
                name.push(EXTENSION);
                PathBuf::from(name)
            }
            Mode::Decode if mode_for(&self.file) == Mode::Decode => self.file.with_extension(""),
            Mode::Decode => {
                let mut name = self.file.clone().into_os_string();
                name.push(".out");
                PathBuf::from(name)
            }
        }
    }
}

/// Files ending in .hef are already encoded.
pub fn mode_for(path: &Path) -> Mode {
    match path.extension() {
        Some(ext) if ext == EXTENSION => Mode::Decode,
        _ => Mode::Encode,
    }
}

/// Parse the command line into HefOpts.
pub fn hefopts_init() -> HefOpts {
    HefOpts::from_args(Args::parse())
}

/// Log the options we are running with.
pub fn report_opts(opts: &HefOpts) {
    info!("---- HEF Initialization Start ----",);
    info!("Verbosity set to {}", opts.log_level);
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.file.display());
    match opts.output {
        Output::File => info!("Sending output to {}", opts.output_path().display()),
        Output::Stdout => info!("Sending output to stdout"),
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.remove_input {
        info!("Removing input file when done")
    };
    info!("---- HEF Initialization End ----\n");
}

/// Read the input file, encode or decode it, and write the result.
pub fn process(opts: &HefOpts) -> Result<()> {
    let input = fs::read(&opts.file)?;

    let output = match opts.op_mode {
        Mode::Encode => {
            info!("Encoding {}", opts.file.display());
            let blob = encode(&input)?;
            if !input.is_empty() {
                let ratio = blob.len() as f64 / input.len() as f64;
                info!("Compression ratio: {:.2}%", ratio * 100.0);
            }
            blob
        }
        Mode::Decode => {
            info!("Decoding {}", opts.file.display());
            decode_to_vec::<u8>(&input)?
        }
    };

    match opts.output {
        Output::Stdout => io::stdout().lock().write_all(&output)?,
        Output::File => {
            let path = opts.output_path();
            if path.exists() && !opts.force_overwrite {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists, use -f to overwrite it", path.display()),
                )
                .into());
            }
            fs::write(&path, &output)?;
            info!("Wrote {} bytes to {}", output.len(), path.display());
        }
    }

    if opts.remove_input {
        fs::remove_file(&opts.file)?;
    }
    Ok(())
}
