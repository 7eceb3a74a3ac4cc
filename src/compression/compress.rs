use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use super::container::compress_with;
use crate::error::{Error, Result};
use crate::tools::cli::LzOpts;

/// Extension appended to compressed files.
pub const COMPRESSED_EXTENSION: &str = "bin";

/// Compress every file named in opts <LzOpts>. Stops at the first failure.
pub fn compress_file(opts: &LzOpts) -> Result<()> {
    for file in &opts.files {
        let written = compress_one(Path::new(file), opts)?;
        info!("Wrote {}", written.display());
    }
    Ok(())
}

fn compress_one(input: &Path, opts: &LzOpts) -> Result<PathBuf> {
    // Only the file name component is stored, never the directories leading to it
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Error::invalid_parameter(
                "file",
                format!("{} does not end in a UTF-8 file name", input.display()),
            )
        })?;

    let content = fs::read_to_string(input)?;
    info!("Compressing {} ({} bytes)", input.display(), content.len());

    let bits = compress_with(&content, name, &opts.codec_options())?;
    let bytes = bits.into_bytes();
    if bytes.len() >= content.len() {
        warn!(
            "{} grew from {} to {} bytes",
            input.display(),
            content.len(),
            bytes.len()
        );
    } else {
        info!(
            "{} shrank from {} to {} bytes ({:.1}%)",
            input.display(),
            content.len(),
            bytes.len(),
            100.0 * bytes.len() as f64 / content.len() as f64
        );
    }

    let out_path = compressed_path(input, opts.out_dir.as_deref());
    write_output(&out_path, &bytes, opts.force_overwrite)?;
    Ok(out_path)
}

/// `<input>.bin`, inside `out_dir` when one is given.
pub fn compressed_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let mut name = input.file_name().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    match out_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Write `bytes` to `path`, refusing to replace an existing file unless `force` is set.
pub(crate) fn write_output(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        // Fails in the open itself if the file already exists
        options.create_new(true);
    }
    let mut f_out = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            error!(
                "{} already exists. Use --force to overwrite it.",
                path.display()
            );
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )
        } else {
            e
        }
    })?;
    f_out.write_all(bytes)?;
    f_out.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitvec::BitVec;
    use crate::compression::container::decompress;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lzomega-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn compressed_path_test() {
        assert_eq!(
            compressed_path(Path::new("docs/notes.txt"), None),
            PathBuf::from("docs/notes.txt.bin")
        );
        assert_eq!(
            compressed_path(Path::new("docs/notes.txt"), Some(Path::new("out"))),
            PathBuf::from("out/notes.txt.bin")
        );
    }

    #[test]
    fn write_output_keeps_existing_file_test() {
        let dir = scratch_dir("write-output");
        let target = dir.join("kept.txt");
        fs::write(&target, "first").unwrap();

        match write_output(&target, b"second", false) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::AlreadyExists),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&target).unwrap(), "first");

        write_output(&target, b"2nd", true).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "2nd");

        let fresh = dir.join("fresh.txt");
        write_output(&fresh, b"new", false).unwrap();
        assert_eq!(fs::read_to_string(&fresh).unwrap(), "new");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn compress_file_test() {
        let dir = scratch_dir("compress");
        let input = dir.join("song.txt");
        fs::write(&input, "la la la, la la la, la la la la la").unwrap();

        let opts = LzOpts {
            files: vec![input.to_string_lossy().into_owned()],
            ..LzOpts::new()
        };
        compress_file(&opts).unwrap();

        let written = fs::read(dir.join("song.txt.bin")).unwrap();
        let (name, content) = decompress(&BitVec::from_bytes(&written)).unwrap();
        assert_eq!(name, "song.txt");
        assert_eq!(content, "la la la, la la la, la la la la la");

        // A second run must not replace the output without force
        assert!(matches!(compress_file(&opts), Err(Error::Io(_))));
        let forced = LzOpts {
            force_overwrite: true,
            ..opts
        };
        compress_file(&forced).unwrap();
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unsupported_input_is_not_written_test() {
        let dir = scratch_dir("unsupported");
        let input = dir.join("greek.txt");
        fs::write(&input, "αβγ").unwrap();
        let opts = LzOpts {
            files: vec![input.to_string_lossy().into_owned()],
            ..LzOpts::new()
        };
        assert!(matches!(
            compress_file(&opts),
            Err(Error::UnsupportedSymbol { position: 0, .. })
        ));
        assert!(!dir.join("greek.txt.bin").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input_test() {
        let opts = LzOpts {
            files: vec!["/nonexistent/lzomega/input.txt".to_string()],
            ..LzOpts::new()
        };
        assert!(matches!(compress_file(&opts), Err(Error::Io(_))));
    }
}
