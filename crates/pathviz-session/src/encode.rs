//! Flat encodings for a rendering front end.
//!
//! - grid: one flag byte per cell, row-major (see [`pathviz_core::Flags`]);
//! - path: `(child_x, child_y, parent_x, parent_y)` `u32` quadruples, one per
//!   parent-map edge, in no particular order, so a reader can key a lookup
//!   table on the first pair and walk it back from the end;
//! - coordinates: `x << 32 | y` in a `u64`.

use pathviz_core::{Grid, Point};
use pathviz_paths::ParentMap;

use crate::error::SessionError;

/// Row-major flag bytes of every cell.
pub fn encode_grid(grid: &Grid) -> Vec<u8> {
    grid.nodes().iter().map(|n| n.bits()).collect()
}

/// Write the flag bytes of `grid` into `buf`, which must hold exactly one
/// byte per cell.
pub fn encode_into(grid: &Grid, buf: &mut [u8]) -> Result<(), SessionError> {
    if buf.len() != grid.len() {
        return Err(SessionError::BufferSize {
            expected: grid.len(),
            actual: buf.len(),
        });
    }
    for (b, n) in buf.iter_mut().zip(grid.nodes()) {
        *b = n.bits();
    }
    Ok(())
}

/// Flatten a parent map into child-first coordinate quadruples.
pub fn encode_path(parents: &ParentMap) -> Vec<u32> {
    let mut out = Vec::with_capacity(parents.len() * 4);
    for e in parents.edges() {
        out.extend([
            e.child.pos.x as u32,
            e.child.pos.y as u32,
            e.parent.pos.x as u32,
            e.parent.pos.y as u32,
        ]);
    }
    out
}

/// Pack a point as `x << 32 | y`.
#[inline]
pub fn pack_point(p: Point) -> u64 {
    (u64::from(p.x as u32) << 32) | u64::from(p.y as u32)
}

#[inline]
pub fn unpack_point(packed: u64) -> Point {
    Point::new((packed >> 32) as u32 as i32, packed as u32 as i32)
}
