//! Axial coordinates.

use std::fmt;

use crate::geo::Orientation;

/// Axial coordinates, the canonical coordinate system of this crate.
///
/// The components address a hexagon along the `q` (column) and `r`
/// (row) axes of the grid. The implicit third cube component is
/// `-q - r` and is derived where needed, so every pair of components
/// is a valid coordinate.
///
/// Guide: [Axial Coordinates]
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

/// Displacements to the neighbours of a pointy-top axial coordinate,
/// clockwise, aligned so that neighbour `k` lies across the side
/// between corners `k` and `k + 1` of the hexagon.
pub(crate) const POINTY_DIR_VECTORS: [[i32; 2]; 6] =
    [ [ 0,  1], [ 1,  0], [ 1, -1]
    , [ 0, -1], [-1,  0], [-1,  1]
    ];

/// Displacements to the neighbours of a flat-top axial coordinate,
/// with the same alignment as `POINTY_DIR_VECTORS`.
pub(crate) const FLAT_DIR_VECTORS: [[i32; 2]; 6] =
    [ [ 1, -1], [ 0, -1], [-1,  0]
    , [-1,  1], [ 0,  1], [ 1,  0]
    ];

impl Axial {
    pub fn new(q: i32, r: i32) -> Axial {
        Axial { q, r }
    }

    /// The implicit third cube component.
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The distance to another axial coordinate in adjacency steps.
    pub fn distance(&self, other: Axial) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        (dq.abs() as u32 + (dq + dr).abs() as u32 + dr.abs() as u32) / 2
    }

    /// Iterate over the neighbouring (adjacent) axial coordinates,
    /// in the winding of the direction table of the orientation.
    pub fn neighbours(&self, orientation: Orientation) -> impl Iterator<Item = Axial> {
        let dirs = match orientation {
            Orientation::PointyTop => &POINTY_DIR_VECTORS,
            Orientation::FlatTop => &FLAT_DIR_VECTORS,
        };
        let Axial { q, r } = *self;
        dirs.iter().map(move |&[dq, dr]| Axial::new(q + dq, r + dr))
    }

    /// Round fractional axial coordinates to the nearest hexagon.
    ///
    /// Both components are rounded and the one with the larger
    /// rounding remainder is then corrected by the remainders, which
    /// keeps the implicit cube components consistent and yields the
    /// hexagon containing the point.
    pub(crate) fn round(q: f32, r: f32) -> Axial {
        let (qg, rg) = (q.round(), r.round());
        let (qr, rr) = (q - qg, r - rg);
        if qr * qr >= rr * rr {
            Axial::new((qg + (qr + 0.5 * rr).round()) as i32, rg as i32)
        } else {
            Axial::new(qg as i32, (rg + (rr + 0.5 * qr).round()) as i32)
        }
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}
