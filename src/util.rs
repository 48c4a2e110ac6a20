use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub(crate) const LINE_BUF_CAPACITY: usize = 256 * 1024;

/// `.gz` by extension only; content is never sniffed.
pub(crate) fn is_gzip_path(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

/// Open `path` as a buffered line source, decompressing `.gz` files.
pub(crate) fn open_path(path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
    let f = File::open(path)?;
    if is_gzip_path(path) {
        #[cfg(feature = "gzip")]
        {
            log::debug!("opening {} (gzip)", path.display());
            let dec = flate2::read::MultiGzDecoder::new(f);
            Ok(Box::new(BufReader::with_capacity(LINE_BUF_CAPACITY, dec)))
        }
        #[cfg(not(feature = "gzip"))]
        {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("{}: gzip support not enabled", path.display()),
            ))
        }
    } else {
        log::debug!("opening {} (plain)", path.display());
        Ok(Box::new(BufReader::with_capacity(LINE_BUF_CAPACITY, f)))
    }
}
