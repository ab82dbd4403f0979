//! A uniform pull-style reader over three backends: a fixed in-memory
//! buffer, a one-shot `Read` stream, and a `Read + Seek` stream with an
//! internal look-ahead view that gets rewound on teardown.

use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom};

/// Fixed look-ahead chunk size used by [`Source::SeekableReader`] when its
/// view is exhausted and more bytes must be pulled from the underlying
/// stream.
pub const SEEK_LOOKAHEAD: usize = 256;

/// A single object-safe trait combining `Read` and `Seek`, so a seekable
/// backend can be stored as one trait object (`Box<dyn Read + Seek>` is not
/// itself legal — only one non-auto trait is allowed per object).
trait ReadSeek: Read + Seek {}
impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// One of the three byte-source backends this decoder accepts.
pub enum Source<'a> {
    /// Wraps a contiguous in-memory byte view.
    Fixed { data: &'a [u8], pos: usize },
    /// A blocking stream that hands back a fresh view on every call and is
    /// never rewound. Backed by any `std::io::Read`.
    Reader { reader: Box<dyn Read + 'a> },
    /// A seekable blocking stream. Maintains an internal look-ahead view and
    /// rewinds any unread bytes of it back onto the stream on teardown.
    SeekableReader {
        reader: Box<dyn ReadSeek + 'a>,
        view: Vec<u8>,
        pos: usize,
    },
}

impl<'a> Source<'a> {
    #[must_use]
    pub fn fixed(data: &'a [u8]) -> Self {
        Source::Fixed { data, pos: 0 }
    }

    #[must_use]
    pub fn reader(reader: impl Read + 'a) -> Self {
        Source::Reader {
            reader: Box::new(reader),
        }
    }

    #[must_use]
    pub fn seekable_reader(reader: impl Read + Seek + 'a) -> Self {
        Source::SeekableReader {
            reader: Box::new(reader),
            view: Vec::new(),
            pos: 0,
        }
    }

    /// Requests up to `len` bytes. Returns a slice of length `0..=len`: a
    /// slice shorter than `len` (including empty) signals a short read,
    /// which the caller treats either as clean EOF (length 0, only
    /// valid at a top-level value boundary) or as fatal `InsufficientInput`.
    pub(crate) fn pull(&mut self, len: usize) -> std::io::Result<Cow<'_, [u8]>> {
        match self {
            Source::Fixed { data, pos } => {
                let available = len.min(data.len() - *pos);
                let slice = &data[*pos..*pos + available];
                *pos += available;
                Ok(Cow::Borrowed(slice))
            }
            Source::Reader { reader } => {
                // One `read` call per `pull`: the backend must never
                // aggregate across calls.
                let mut buf = std::vec![0u8; len];
                let n = read_once(reader.as_mut(), &mut buf)?;
                buf.truncate(n);
                Ok(Cow::Owned(buf))
            }
            Source::SeekableReader { reader, view, pos } => {
                let remaining = view.len() - *pos;
                if remaining >= len {
                    let slice = &view[*pos..*pos + len];
                    *pos += len;
                    return Ok(Cow::Borrowed(slice));
                }

                let mut stitched = Vec::with_capacity(len);
                stitched.extend_from_slice(&view[*pos..]);
                view.clear();
                *pos = 0;

                let want = (len - remaining).max(SEEK_LOOKAHEAD);
                let mut fresh = std::vec![0u8; want];
                let n = read_once(reader.as_mut(), &mut fresh)?;
                fresh.truncate(n);

                let take = (len - remaining).min(fresh.len());
                stitched.extend_from_slice(&fresh[..take]);

                *view = fresh;
                *pos = take;

                Ok(Cow::Owned(stitched))
            }
        }
    }

    /// Runs the teardown duty required of a seekable backend: rewind the
    /// stream by exactly the unread portion of the current view, so the
    /// caller's stream cursor ends up at the first byte this decoder did not
    /// consume. A no-op for the other two backends.
    ///
    /// A rewind failure is surfaced only if no decode error is
    /// already in flight; callers pass `prior_error` to enforce that.
    pub(crate) fn teardown(&mut self, prior_error: bool) -> std::io::Result<()> {
        if let Source::SeekableReader { reader, view, pos } = self {
            let unread = (view.len() - *pos) as i64;
            if unread != 0 {
                if let Err(e) = reader.seek(SeekFrom::Current(-unread)) {
                    if !prior_error {
                        return Err(e);
                    }
                }
            }
        }
        Ok(())
    }
}

fn read_once(reader: &mut dyn Read, buf: &mut [u8]) -> std::io::Result<usize> {
    if buf.is_empty() {
        return Ok(0);
    }
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
