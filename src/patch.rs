//! In-place binary writers.
//!
//! Every writer opens the target file without truncating it, seeks to the
//! requested offset, writes the encoded bytes, and releases the handle when
//! it returns. Nothing else in the file is touched. The target format is
//! never parsed or validated; offsets are the caller's contract.
//!
//! Writing at or past end-of-file is allowed where the platform extends the
//! file on write (Linux, macOS, and Windows all do, zero-filling the gap);
//! platforms that refuse surface the failure as [`HuepatchError::Io`].
//!
//! Concurrent writers to the same file are not coordinated; callers must
//! serialize their own patches.

use std::{
    fs::{File, OpenOptions},
    io::{Seek, SeekFrom, Write},
    path::Path,
};

use crate::{
    color::{ChannelOrder, Color, ComponentEncoding},
    curve::ColorCurve,
    error::{HuepatchError, HuepatchResult},
};

// Channel deltas of the split blueprint layout, relative to the base offset.
const SPLIT_DELTA_G: u64 = 0x35;
const SPLIT_DELTA_R: u64 = 0x6a;
const SPLIT_DELTA_A: u64 = 0x9f;

fn open_for_patch(path: &Path) -> HuepatchResult<File> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| HuepatchError::io(path, e))
}

fn write_at(file: &mut File, path: &Path, offset: u64, bytes: &[u8]) -> HuepatchResult<()> {
    file.seek(SeekFrom::Start(offset))
        .map_err(|e| HuepatchError::io(path, e))?;
    file.write_all(bytes).map_err(|e| HuepatchError::io(path, e))
}

/// Overwrite the bytes at `offset` with `color` encoded per `order` and
/// `encoding`. Bytes `[offset, offset + len)` end up holding the encoded
/// sequence; every other byte is untouched.
#[tracing::instrument(level = "trace", skip_all, fields(path = %path.as_ref().display(), offset))]
pub fn write_color(
    path: impl AsRef<Path>,
    offset: u64,
    color: Color,
    order: ChannelOrder,
    encoding: ComponentEncoding,
) -> HuepatchResult<()> {
    let path = path.as_ref();
    let bytes = color.encode(order, encoding);
    let mut file = open_for_patch(path)?;
    write_at(&mut file, path, offset, &bytes)
}

/// Patch one color into several locations of the same file, one write per
/// `(offset, order)` pair over a single open handle. Writes are applied in
/// order and stop at the first failure; earlier writes are not rolled back.
#[tracing::instrument(level = "trace", skip_all, fields(path = %path.as_ref().display(), targets = targets.len()))]
pub fn write_colors(
    path: impl AsRef<Path>,
    targets: &[(u64, ChannelOrder)],
    color: Color,
    encoding: ComponentEncoding,
) -> HuepatchResult<()> {
    let path = path.as_ref();
    let mut file = open_for_patch(path)?;
    for &(offset, order) in targets {
        write_at(&mut file, path, offset, &color.encode(order, encoding))?;
    }
    Ok(())
}

/// Overwrite 512 bytes at `offset` with the curve's 64-sample lookup table
/// (four little-endian halves per sample, R,G,B,A).
///
/// The curve is validated before the file is opened; an invalid curve
/// writes nothing.
#[tracing::instrument(level = "trace", skip_all, fields(path = %path.as_ref().display(), offset))]
pub fn write_color_curve(
    path: impl AsRef<Path>,
    offset: u64,
    curve: &ColorCurve,
) -> HuepatchResult<()> {
    let path = path.as_ref();
    curve.validate()?;
    let bytes = curve.encode();
    let mut file = open_for_patch(path)?;
    write_at(&mut file, path, offset, &bytes)
}

/// Overwrite the single byte at `offset`.
#[tracing::instrument(level = "trace", skip_all, fields(path = %path.as_ref().display(), offset))]
pub fn write_byte(path: impl AsRef<Path>, offset: u64, value: u8) -> HuepatchResult<()> {
    let path = path.as_ref();
    let mut file = open_for_patch(path)?;
    write_at(&mut file, path, offset, &[value])
}

/// Overwrite four bytes at `offset` with an IEEE-754 single in native byte
/// order.
#[tracing::instrument(level = "trace", skip_all, fields(path = %path.as_ref().display(), offset))]
pub fn write_float(path: impl AsRef<Path>, offset: u64, value: f32) -> HuepatchResult<()> {
    let path = path.as_ref();
    let mut file = open_for_patch(path)?;
    write_at(&mut file, path, offset, &value.to_ne_bytes())
}

/// Patch a color whose channels the blueprint layout scatters at fixed
/// deltas from a base offset: B at `+0x00`, G at `+0x35`, R at `+0x6A`, and
/// A at `+0x9F` when `order` is [`ChannelOrder::Bgra`]. Channels are always
/// raw bytes; only `Bgr` and `Bgra` are meaningful here, anything else is a
/// validation error and writes nothing.
#[tracing::instrument(level = "trace", skip_all, fields(path = %path.as_ref().display(), offset))]
pub fn write_blueprint_split_color(
    path: impl AsRef<Path>,
    offset: u64,
    color: Color,
    order: ChannelOrder,
) -> HuepatchResult<()> {
    if !matches!(order, ChannelOrder::Bgr | ChannelOrder::Bgra) {
        return Err(HuepatchError::validation(format!(
            "unsupported order for split color: {order:?} (blueprint colors are BGR or BGRA)"
        )));
    }

    let path = path.as_ref();
    let mut file = open_for_patch(path)?;
    write_at(&mut file, path, offset, &[color.b])?;
    write_at(&mut file, path, offset + SPLIT_DELTA_G, &[color.g])?;
    write_at(&mut file, path, offset + SPLIT_DELTA_R, &[color.r])?;
    if order == ChannelOrder::Bgra {
        write_at(&mut file, path, offset + SPLIT_DELTA_A, &[color.a])?;
    }
    Ok(())
}
