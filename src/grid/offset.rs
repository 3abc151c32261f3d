//! Offset coordinates.
//!
//! Offset coordinates address hexagons by column and row of an
//! axis-aligned rectangle. The layouts in use are the "odd" ones:
//! with pointy-top hexagons the odd rows are shifted in the positive
//! `x` direction (odd-r), with flat-top hexagons the odd columns are
//! shifted in the positive `y` direction (odd-q).
//!
//! Guide: [Offset Coordinates]
//!
//! [Offset Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-offset

use crate::geo::Orientation;
use crate::grid::{ Axial, Coord };

/// Displacements to the neighbours of a pointy-top offset coordinate,
/// by row parity, in the direction order of
/// [`POINTY_DIR_VECTORS`](crate::grid::axial::POINTY_DIR_VECTORS).
pub(crate) static POINTY_PARITY_VECTORS: [[[i32; 2]; 6]; 2] =
    [ // Even rows.
      [ [ 0,  1], [ 1,  0], [ 0, -1]
      , [-1, -1], [-1,  0], [-1,  1]
      ]
    , // Odd rows.
      [ [ 1,  1], [ 1,  0], [ 1, -1]
      , [ 0, -1], [-1,  0], [ 0,  1]
      ]
    ];

/// Displacements to the neighbours of a flat-top offset coordinate,
/// by column parity, in the direction order of
/// [`FLAT_DIR_VECTORS`](crate::grid::axial::FLAT_DIR_VECTORS).
pub(crate) static FLAT_PARITY_VECTORS: [[[i32; 2]; 6]; 2] =
    [ // Even columns.
      [ [ 1, -1], [ 0, -1], [-1, -1]
      , [-1,  0], [ 0,  1], [ 1,  0]
      ]
    , // Odd columns.
      [ [ 1,  0], [ 0, -1], [-1,  0]
      , [-1,  1], [ 0,  1], [ 1,  1]
      ]
    ];

/// Convert offset to axial coordinates.
pub fn to_axial(c: Coord, orientation: Orientation) -> Axial {
    match orientation {
        Orientation::PointyTop => {
            let q = c.x - (c.y - (c.y & 1)) / 2;
            Axial::new(q, c.y)
        }
        Orientation::FlatTop => {
            let r = c.y - (c.x - (c.x & 1)) / 2;
            Axial::new(c.x, r)
        }
    }
}

/// Convert axial to offset coordinates.
pub fn from_axial(a: Axial, orientation: Orientation) -> Coord {
    match orientation {
        Orientation::PointyTop => {
            let x = a.q + (a.r - (a.r & 1)) / 2;
            Coord::new(x, a.r)
        }
        Orientation::FlatTop => {
            let y = a.r + (a.q - (a.q & 1)) / 2;
            Coord::new(a.q, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;

    #[test]
    fn prop_to_from_axial_identity() {
        fn prop(c: Coord, o: Orientation) -> bool {
            from_axial(to_axial(c, o), o) == c
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn prop_from_to_axial_identity() {
        fn prop(a: Axial, o: Orientation) -> bool {
            to_axial(from_axial(a, o), o) == a
        }
        quickcheck(prop as fn(_, _) -> _);
    }

    #[test]
    fn known_conversions() {
        // Odd rows are shifted towards positive x.
        assert_eq!(to_axial(Coord::new(0, 1), Orientation::PointyTop), Axial::new(0, 1));
        assert_eq!(to_axial(Coord::new(2, 3), Orientation::PointyTop), Axial::new(1, 3));
        assert_eq!(to_axial(Coord::new(2, -3), Orientation::PointyTop), Axial::new(4, -3));
        // Odd columns are shifted towards positive y.
        assert_eq!(to_axial(Coord::new(3, 2), Orientation::FlatTop), Axial::new(3, 1));
        assert_eq!(to_axial(Coord::new(-3, 2), Orientation::FlatTop), Axial::new(-3, 4));
    }

    #[test]
    fn prop_parity_tables_match_directions() {
        // The parity tables are the axial direction tables under
        // conversion, in the same order.
        fn prop(c: Coord, o: Orientation) -> bool {
            let via_axial = to_axial(c, o)
                .neighbours(o)
                .map(|n| from_axial(n, o))
                .collect::<Vec<Coord>>();
            let (axis, table) = match o {
                Orientation::PointyTop => (c.y, &POINTY_PARITY_VECTORS),
                Orientation::FlatTop => (c.x, &FLAT_PARITY_VECTORS),
            };
            let direct = table[(axis & 1) as usize]
                .iter()
                .map(|&[dx, dy]| Coord::new(c.x + dx, c.y + dy))
                .collect::<Vec<Coord>>();
            via_axial == direct
        }
        quickcheck(prop as fn(_, _) -> _);
    }
}
