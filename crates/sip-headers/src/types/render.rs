//! Header rendering and the scratch buffer pool.
//!
//! A header renders into a pooled `String` first and is then written to the
//! caller's sink in one `write_all`, so partially rendered output never
//! reaches the sink. Buffers go back to the pool when the [`PooledBuf`]
//! guard drops, on every exit path.

use std::fmt::{self, Write as _};
use std::io;
use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::Result;
use crate::types::headers::Header;

/// Idle buffers kept by the global pool.
pub const DEFAULT_POOL_SIZE: usize = 64;
/// Buffers that grew beyond this are dropped instead of pooled.
pub const MAX_RETAINED_CAPACITY: usize = 16 * 1024;

/// Options controlling how a header line is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    /// Use the single-letter compact name when the header has one.
    pub compact: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options requesting compact header names.
    pub fn compact() -> Self {
        RenderOptions { compact: true }
    }
}

/// Bounded free list of reusable rendering buffers.
#[derive(Debug)]
pub struct BufferPool {
    free: Mutex<Vec<String>>,
    max_idle: usize,
}

impl BufferPool {
    /// Creates a pool keeping at most `max_idle` buffers.
    pub fn new(max_idle: usize) -> Self {
        BufferPool {
            free: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
        }
    }

    /// A pool that never retains buffers: every acquire allocates.
    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Takes a cleared buffer from the pool, allocating when empty.
    pub fn acquire(&self) -> PooledBuf<'_> {
        let buf = self.free.lock().pop().unwrap_or_default();
        PooledBuf { buf, pool: self }
    }

    /// Number of buffers currently idle in the pool.
    pub fn idle(&self) -> usize {
        self.free.lock().len()
    }

    fn release(&self, mut buf: String) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            trace!(capacity = buf.capacity(), "dropping oversized render buffer");
            return;
        }
        buf.clear();
        let mut free = self.free.lock();
        if free.len() < self.max_idle {
            free.push(buf);
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}

/// Process-wide pool used by [`Header::render`].
pub fn global_pool() -> &'static BufferPool {
    static POOL: OnceLock<BufferPool> = OnceLock::new();
    POOL.get_or_init(BufferPool::default)
}

/// A buffer on loan from a [`BufferPool`], returned when dropped.
#[derive(Debug)]
pub struct PooledBuf<'a> {
    buf: String,
    pool: &'a BufferPool,
}

impl PooledBuf<'_> {
    /// Returns the buffer early. Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Deref for PooledBuf<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuf<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledBuf<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

/// Writes `Name: value` into `out`, honouring compact naming.
pub fn write_header<H: Header + ?Sized>(out: &mut dyn fmt::Write, header: &H, opts: &RenderOptions) -> fmt::Result {
    let name = header.name();
    match header.compact_name().filter(|_| opts.compact) {
        Some(short) => out.write_str(short)?,
        None => out.write_str(name.as_str())?,
    }
    out.write_str(": ")?;
    write!(out, "{}", header)
}

/// Renders through the global pool. Returns the number of bytes written.
pub fn render_header<H: Header + ?Sized>(header: &H, w: &mut dyn io::Write, opts: &RenderOptions) -> Result<usize> {
    render_with_pool(global_pool(), header, w, opts)
}

/// Renders through `pool`. Output is identical for any pool.
pub fn render_with_pool<H: Header + ?Sized>(
    pool: &BufferPool,
    header: &H,
    w: &mut dyn io::Write,
    opts: &RenderOptions,
) -> Result<usize> {
    let mut buf = pool.acquire();
    write_header(&mut *buf, header, opts)?;
    w.write_all(buf.as_bytes())?;
    Ok(buf.len())
}

/// Renders an optional header. An absent header writes nothing.
pub fn render_optional<H: Header + ?Sized>(header: Option<&H>, w: &mut dyn io::Write, opts: &RenderOptions) -> Result<usize> {
    match header {
        Some(h) => render_header(h, w, opts),
        None => Ok(0),
    }
}

/// The full header line as a `String`.
pub fn header_to_string<H: Header + ?Sized>(header: &H, opts: &RenderOptions) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_header(&mut out, header, opts);
    out
}

/// Writes `items` joined by `sep`.
pub(crate) fn write_joined<T: fmt::Display>(f: &mut dyn fmt::Write, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
