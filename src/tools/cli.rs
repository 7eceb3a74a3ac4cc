use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

use crate::compression::container::{CodecOptions, DEFAULT_LOOKAHEAD_SIZE, DEFAULT_WINDOW_SIZE};
use crate::error::{Error, Result};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the numeric `-v` level. Anything above 5 is treated as trace.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LzOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// How far back a match may reach
    pub window_size: usize,
    /// Longest single match
    pub lookahead_size: usize,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Directory for output files. Defaults to the directory of each input.
    pub out_dir: Option<PathBuf>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl LzOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            op_mode: Mode::Zip,
            window_size: DEFAULT_WINDOW_SIZE,
            lookahead_size: DEFAULT_LOOKAHEAD_SIZE,
            force_overwrite: false,
            out_dir: None,
            verbose: Verbosity::Info,
        }
    }

    /// The LZ77 parameters for the library calls.
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            window_size: self.window_size,
            lookahead_size: self.lookahead_size,
        }
    }
}

impl Default for LzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Lossless single file compressor using LZ77, Huffman and Elias-omega codes",
    long_about = "
    Each file is parsed into LZ77 (offset, length, next symbol) triples found with the Z-algorithm.
    Offsets and lengths are written as Elias-omega codes and next symbols as Huffman codes. The
    original filename is stored in the container and restored on decompression.

    Input must be text whose characters all have code points below 256."
)]
pub struct Args {
    /// Files to process
    #[clap(required = true)]
    files: Vec<String>,

    /// Compress the input files (default)
    #[clap(short = 'z', long = "zip")]
    zip: bool,

    /// Decompress the input files
    #[clap(short = 'd', long = "unzip", conflicts_with_all = &["zip", "test"])]
    unzip: bool,

    /// Decompress without writing anything, only checking the files decode
    #[clap(short = 't', long = "test", conflicts_with = "zip")]
    test: bool,

    /// Search window size in symbols
    #[clap(short = 'w', long = "window", default_value_t = DEFAULT_WINDOW_SIZE)]
    window: usize,

    /// Lookahead buffer size in symbols, at least 1
    #[clap(short = 'l', long = "lookahead", default_value_t = DEFAULT_LOOKAHEAD_SIZE)]
    lookahead: usize,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Write output files into this directory
    #[clap(short = 'o', long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

impl TryFrom<Args> for LzOpts {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        if args.lookahead == 0 {
            return Err(Error::invalid_parameter(
                "lookahead",
                "the lookahead must hold at least one symbol",
            ));
        }
        let op_mode = if args.unzip {
            Mode::Unzip
        } else if args.test {
            Mode::Test
        } else {
            Mode::Zip
        };
        Ok(Self {
            files: args.files,
            op_mode,
            window_size: args.window,
            lookahead_size: args.lookahead,
            force_overwrite: args.force,
            out_dir: args.out_dir,
            verbose: Verbosity::from_level(args.v),
        })
    }
}

/// Read the command line, set the log level and report the settings.
pub fn lzopts_init() -> Result<LzOpts> {
    let opts = LzOpts::try_from(Args::parse())?;

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Input files: {}", opts.files.join(", "));
    if opts.op_mode == Mode::Zip {
        info!(
            "Window set to {}, lookahead set to {}",
            opts.window_size, opts.lookahead_size
        );
    }
    if let Some(dir) = &opts.out_dir {
        info!("Writing output into {}", dir.display());
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Initialization End ----");
    Ok(opts)
}
