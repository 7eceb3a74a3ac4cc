//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use lzomega::compression::compress::compress_file;
use lzomega::compression::decompress::decompress_file;
use lzomega::tools::cli::{lzopts_init, Mode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), lzomega::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The -v flag narrows this.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let options = lzopts_init()?;

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress_file(&options),
        Mode::Unzip | Mode::Test => decompress_file(&options),
    };

    match &result {
        Ok(()) => info!("Done."),
        Err(e) => error!("Failed: {}", e),
    }
    result
}
