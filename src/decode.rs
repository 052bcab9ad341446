use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bmp::decode::{Source, read_headers, stream_pixels};
use crate::bmp::{BmpHeaders, Permissiveness};
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::sink::{FrameSink, ScanDirection, ScanScope};

/// Result of a load that did not fail.
///
/// A bitmap whose pixel data ends early still loads: `truncated` is set and
/// `pixels_written` is short of `width * height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOutcome {
    pub width: u32,
    pub height: u32,
    pub pixels_written: u64,
    pub truncated: bool,
}

impl LoadOutcome {
    /// Whether every declared pixel reached the sink.
    pub fn is_complete(&self) -> bool {
        !self.truncated
    }
}

/// Builder for loading one bitmap into a [`FrameSink`].
///
/// The walk visits every position the header declares, and depths below
/// 8 bits or zero-width rows consume no input while doing so. A header
/// claiming `u32::MAX` x `u32::MAX` therefore runs practically forever. Bound
/// untrusted input with [`LoadRequest::with_limits`], usually
/// [`Limits::for_panel`].
///
/// ```no_run
/// use lcdbitmap::{FrameBuffer, LoadRequest, Limits, Unstoppable};
///
/// let file = std::io::BufReader::new(std::fs::File::open("pic/time.bmp")?);
/// let mut fb = FrameBuffer::new(160, 128);
/// let limits = Limits::for_panel(160, 128);
/// let outcome = LoadRequest::new(file)
///     .with_limits(&limits)
///     .load(&mut fb, Unstoppable)?;
/// assert!(outcome.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct LoadRequest<'a, R> {
    source: R,
    limits: Option<&'a Limits>,
    permissiveness: Permissiveness,
    padded_rows: bool,
    scan: Option<ScanDirection>,
}

impl<'a, R: Read + Seek> LoadRequest<'a, R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            limits: None,
            permissiveness: Permissiveness::default(),
            padded_rows: false,
            scan: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: Permissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Treat rows as padded to a 4-byte boundary, as the BMP format
    /// specifies. Off by default: rows are read back to back.
    pub fn with_padded_rows(mut self, padded: bool) -> Self {
        self.padded_rows = padded;
        self
    }

    /// Scan direction the sink uses while this load runs. The sink is
    /// returned to its default direction when the load ends.
    pub fn with_scan_direction(mut self, dir: ScanDirection) -> Self {
        self.scan = Some(dir);
        self
    }

    /// Stream the bitmap into `sink`.
    ///
    /// Once the source has been rewound, every exit path restores the sink's
    /// default scan direction exactly once and drops the source.
    pub fn load<S: FrameSink + ?Sized>(
        self,
        sink: &mut S,
        stop: impl Stop,
    ) -> Result<LoadOutcome, BitmapError> {
        let mut source = Source::new(self.source);
        source.rewind().map_err(BitmapError::IoOpen)?;
        let mut sink = ScanScope::open(sink, self.scan);

        let headers = read_headers(&mut source)?;
        log::debug!(
            "bmp {}x{} {}bpp compression={} offset={} size={}",
            headers.width(),
            headers.height(),
            headers.info.bits_per_pixel,
            headers.info.compression,
            headers.file.pixel_offset,
            headers.file.file_size
        );

        if self.permissiveness == Permissiveness::Strict {
            headers.validate_strict()?;
        }
        if let Some(limits) = self.limits {
            limits.check(headers.width(), headers.height())?;
        }
        stop.check()?;

        source.seek_within(u64::from(headers.file.pixel_offset))?;
        let streamed = stream_pixels(&mut source, &headers, self.padded_rows, &mut *sink, &stop)?;

        Ok(LoadOutcome {
            width: headers.width(),
            height: headers.height(),
            pixels_written: streamed.pixels_written,
            truncated: streamed.truncated,
        })
    }
}

/// Load a bitmap from a seekable source with default options.
///
/// No [`Limits`] apply, so the walk is as long as the header says. Use
/// [`LoadRequest::with_limits`] for files that are not known to be sane.
pub fn load_bitmap<R, S>(source: R, sink: &mut S) -> Result<LoadOutcome, BitmapError>
where
    R: Read + Seek,
    S: FrameSink + ?Sized,
{
    LoadRequest::new(source).load(sink, Unstoppable)
}

/// Open `path` and load it with default options.
///
/// A file that cannot be opened fails with [`BitmapError::IoOpen`] before the
/// sink is touched. Like [`load_bitmap`], no [`Limits`] apply.
pub fn load_bitmap_file<P, S>(path: P, sink: &mut S) -> Result<LoadOutcome, BitmapError>
where
    P: AsRef<Path>,
    S: FrameSink + ?Sized,
{
    let file = File::open(path.as_ref()).map_err(BitmapError::IoOpen)?;
    load_bitmap(BufReader::new(file), sink)
}

/// Read both headers without decoding any pixels.
pub fn probe_bitmap<R: Read + Seek>(source: R) -> Result<BmpHeaders, BitmapError> {
    let mut source = Source::new(source);
    source.rewind().map_err(BitmapError::IoOpen)?;
    read_headers(&mut source)
}
