//! Streaming BMP pixel decoder.
//!
//! Reads the headers from a seekable byte source, then walks the pixel array
//! row by row and hands each converted pixel to a [`FrameSink`].

use std::io::{self, Read, Seek, SeekFrom};

use enough::Stop;

use super::header::{BmpHeaders, FileHeader, InfoHeader};
use crate::error::BitmapError;
use crate::pixel::PixelSample;
use crate::sink::FrameSink;

// ── Byte source ─────────────────────────────────────────────────────

/// Seekable reader that knows how far it has read.
pub(crate) struct Source<R> {
    inner: R,
    pos: u64,
}

impl<R: Read + Seek> Source<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub(crate) fn rewind(&mut self) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(0))?;
        self.pos = 0;
        Ok(())
    }

    /// Seek to an absolute offset, failing if it lies past the end.
    pub(crate) fn seek_within(&mut self, offset: u64) -> Result<(), BitmapError> {
        let len = self.inner.seek(SeekFrom::End(0)).map_err(BitmapError::IoOpen)?;
        if offset > len {
            return Err(BitmapError::Truncated(format!(
                "pixel data offset {offset} is past the end of the {len}-byte source"
            )));
        }
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(BitmapError::IoOpen)?;
        self.pos = offset;
        Ok(())
    }

    /// Read until `buf` is full or the source ends. Returns the byte count.
    fn read_up_to(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        self.pos += filled as u64;
        Ok(filled)
    }

    fn read_fixed_bytes<const N: usize>(&mut self, what: &str) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        let got = self.read_up_to(&mut buf).map_err(BitmapError::IoOpen)?;
        if got < N {
            return Err(BitmapError::Truncated(format!(
                "{what} needs {N} bytes, only {got} available"
            )));
        }
        Ok(buf)
    }

    /// Pixel-data read: a failed read counts as the end of data.
    fn fill(&mut self, buf: &mut [u8]) -> usize {
        match self.read_up_to(buf) {
            Ok(n) => n,
            Err(e) => {
                log::warn!("read error at byte {}: {e}", self.pos);
                0
            }
        }
    }

    /// Skip `n` bytes of row padding. False if the source ended first.
    fn skip(&mut self, n: usize) -> bool {
        let mut scratch = [0u8; 4];
        let mut left = n;
        while left > 0 {
            let chunk = left.min(scratch.len());
            if self.fill(&mut scratch[..chunk]) < chunk {
                return false;
            }
            left -= chunk;
        }
        true
    }
}

// ── Headers ─────────────────────────────────────────────────────────

/// Read the file header and info header from the current position.
pub(crate) fn read_headers<R: Read + Seek>(
    src: &mut Source<R>,
) -> Result<BmpHeaders, BitmapError> {
    let file = FileHeader::parse(&src.read_fixed_bytes::<{ FileHeader::SIZE }>("file header")?);
    let info = InfoHeader::parse(&src.read_fixed_bytes::<{ InfoHeader::SIZE }>("info header")?);
    Ok(BmpHeaders { file, info })
}

// ── Pixels ──────────────────────────────────────────────────────────

/// What the pixel walk managed to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Streamed {
    pub pixels_written: u64,
    pub truncated: bool,
}

/// Walk rows bottom-up from the current position, writing each pixel to
/// `(col, height - 1 - row)`.
///
/// Running out of data ends the walk early without an error.
pub(crate) fn stream_pixels<R, S>(
    src: &mut Source<R>,
    headers: &BmpHeaders,
    padded_rows: bool,
    sink: &mut S,
    stop: &dyn Stop,
) -> Result<Streamed, BitmapError>
where
    R: Read + Seek,
    S: FrameSink + ?Sized,
{
    let width = headers.width();
    let height = headers.height();
    let bpp = headers.bytes_per_pixel();
    let row_pad = (headers.row_bytes(padded_rows) - headers.row_bytes(false)) as usize;

    let mut raw = vec![0u8; bpp];
    let mut written = 0u64;

    for row in 0..height {
        stop.check()?;
        if row > 0 && row_pad > 0 && !src.skip(row_pad) {
            log::warn!("pixel data ended in row padding before row {row}");
            return Ok(Streamed {
                pixels_written: written,
                truncated: true,
            });
        }
        log::trace!("row {row} at byte {}", src.pos);

        let y = height - 1 - row;
        for col in 0..width {
            if src.fill(&mut raw) < bpp {
                log::warn!(
                    "pixel data ended at row {row} col {col}; wrote {written} of {} pixels",
                    u64::from(width) * u64::from(height)
                );
                return Ok(Streamed {
                    pixels_written: written,
                    truncated: true,
                });
            }
            sink.set_pixel(col, y, PixelSample::from_bytes(&raw).to_rgb565());
            written += 1;
        }
    }

    Ok(Streamed {
        pixels_written: written,
        truncated: false,
    })
}
