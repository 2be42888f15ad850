//! Core utilities and shared types
//!
//! - `line_reader`: the one-line prompt collaborator used by rebase
//! - `settings`: environment driven configuration
//! - `PagerWriter`: `Write` adapter over the `minus` pager used by `log`

pub mod line_reader;
pub mod settings;

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Feeds everything written to it into a `minus` pager
///
/// Output is only shown once the caller hands the pager to `minus::page_all`.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = std::str::from_utf8(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
