use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{error, info};

use super::compress::write_output;
use super::container::decompress;
use crate::bitstream::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::tools::cli::{LzOpts, Mode};

/// Decompress every file named in opts <LzOpts>. In test mode the files are only decoded.
pub fn decompress_file(opts: &LzOpts) -> Result<()> {
    for file in &opts.files {
        let input = Path::new(file);
        match decompress_one(input, opts) {
            Ok(Some(written)) => info!("Wrote {}", written.display()),
            Ok(None) => info!("{}: ok", input.display()),
            Err(e) => {
                error!("{}: {}", input.display(), e);
                return Err(e);
            }
        }
    }
    Ok(())
}

fn decompress_one(input: &Path, opts: &LzOpts) -> Result<Option<PathBuf>> {
    let bytes = fs::read(input)?;
    info!("Decompressing {} ({} bytes)", input.display(), bytes.len());
    let (filename, content) = decompress(&BitVec::from_bytes(&bytes))?;

    let name = stored_file_name(&filename)?;
    if opts.op_mode == Mode::Test {
        return Ok(None);
    }

    let out_path = match &opts.out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    };
    write_output(&out_path, content.as_bytes(), opts.force_overwrite)?;
    Ok(Some(out_path))
}

/// Accept the stored filename only if it is a single plain path component, so a container can
/// never direct output outside the chosen directory.
pub fn stored_file_name(filename: &str) -> Result<&Path> {
    let path = Path::new(filename);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(path),
        _ => Err(Error::corrupt(format!(
            "stored filename {:?} is not a plain file name",
            filename
        ))),
    }
}
