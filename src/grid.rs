//! Hexagonal grids with overlaid coordinate systems.

pub mod axial;
pub mod offset;

pub use self::axial::Axial;

use nalgebra::Point2;
use num_derive::{ FromPrimitive, ToPrimitive };
use serde::{ Deserialize, Serialize };

use std::fmt;
use std::ops::{ Add, Sub };

use crate::geo::{ Hexagon, Orientation, Schema };

/// A coordinate pair on a grid, interpreted through the
/// [`CoordSystem`] of a [`Layout`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Coord {
        Coord::new(x, y)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}

/// The interpretation of the coordinate pairs addressing the hexagons
/// of a grid.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[derive(FromPrimitive, ToPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordSystem {
    /// Column and row in the "odd" rectangular layouts, see
    /// [`offset`].
    Offset,
    /// Axial `q` and `r`, see [`Axial`].
    Axial,
}

/// A fixed interpretation of grid coordinates: the hexagon schema,
/// the coordinate system and the world origin of the grid.
///
/// The world conversions [`world_to_hex`](Layout::world_to_hex) and
/// [`hex_to_world`](Layout::hex_to_world) operate on world-absolute
/// coordinates and ignore the origin. [`neighbours`](Layout::neighbours)
/// and [`distance`](Layout::distance) operate on grid-local
/// coordinates: with an offset system the parity of a coordinate axis,
/// and with it the adjacency, depends on where the grid sits in the
/// world, which is what the origin captures.
#[derive(Clone, Debug)]
pub struct Layout {
    schema: Schema,
    system: CoordSystem,
    origin: Coord,
}

impl Layout {
    pub fn new(schema: Schema, system: CoordSystem, origin: Coord) -> Layout {
        Layout { schema, system, origin }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn system(&self) -> CoordSystem {
        self.system
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.schema.orientation()
    }

    /// The coordinates of the hexagon containing the given point.
    ///
    /// The point is projected onto the fractional axial axes and
    /// rounded to the containing hexagon, then converted to the
    /// coordinate system of the layout.
    ///
    /// Guide: [Pixel to Hex]
    ///
    /// [Pixel to Hex]: https://www.redblobgames.com/grids/hexagons/#pixel-to-hex
    pub fn world_to_hex(&self, p: Point2<f32>) -> Coord {
        let size = self.schema.circumradius();
        let sqrt3 = f32::sqrt(3.0);
        let (qf, rf) = match self.schema.orientation() {
            Orientation::PointyTop => (
                (sqrt3 / 3.0 * p.x - p.y / 3.0) / size,
                (2.0 / 3.0 * p.y) / size,
            ),
            Orientation::FlatTop => (
                (2.0 / 3.0 * p.x) / size,
                (-p.x / 3.0 + sqrt3 / 3.0 * p.y) / size,
            ),
        };
        let a = Axial::round(qf, rf);
        match self.system {
            CoordSystem::Offset => offset::from_axial(a, self.schema.orientation()),
            CoordSystem::Axial => Coord::new(a.q, a.r),
        }
    }

    /// The world position of the center of the hexagon at the given
    /// world-absolute coordinates. The exact inverse of
    /// [`world_to_hex`](Layout::world_to_hex) on hexagon centers.
    pub fn hex_to_world(&self, c: Coord) -> Point2<f32> {
        let a = self.to_axial(c);
        let size = self.schema.circumradius();
        let (q, r) = (a.q as f32, a.r as f32);
        match self.schema.orientation() {
            Orientation::PointyTop => Point2::new(
                self.schema.short_diagonal() * q + self.schema.inradius() * r,
                1.5 * size * r,
            ),
            Orientation::FlatTop => Point2::new(
                1.5 * size * q,
                self.schema.short_diagonal() * r + self.schema.inradius() * q,
            ),
        }
    }

    /// The hexagon at the given world-absolute coordinates.
    pub fn hexagon(&self, c: Coord) -> Hexagon {
        self.schema.hexagon(self.hex_to_world(c))
    }

    /// Iterate over the six neighbours of the given grid-local
    /// coordinates, in the winding of the direction tables: neighbour
    /// `k` lies across the side between corners `k` and `k + 1` of
    /// the hexagon. No bounds are imposed.
    pub fn neighbours(&self, c: Coord) -> impl Iterator<Item = Coord> {
        let table = match self.system {
            CoordSystem::Axial => match self.orientation() {
                Orientation::PointyTop => &axial::POINTY_DIR_VECTORS,
                Orientation::FlatTop => &axial::FLAT_DIR_VECTORS,
            },
            CoordSystem::Offset => {
                let (axis, origin) = match self.orientation() {
                    Orientation::PointyTop => (c.y, self.origin.y),
                    Orientation::FlatTop => (c.x, self.origin.x),
                };
                let parity = ((axis + origin) & 1) as usize;
                match self.orientation() {
                    Orientation::PointyTop => &offset::POINTY_PARITY_VECTORS[parity],
                    Orientation::FlatTop => &offset::FLAT_PARITY_VECTORS[parity],
                }
            }
        };
        table.iter().map(move |&[dx, dy]| Coord::new(c.x + dx, c.y + dy))
    }

    /// The distance in adjacency steps between two grid-local
    /// coordinates.
    ///
    /// Offset coordinates are translated by the origin before
    /// canonicalizing, so that the metric agrees with
    /// [`neighbours`](Layout::neighbours) for every origin. Axial
    /// coordinates are translation-invariant.
    pub fn distance(&self, a: Coord, b: Coord) -> u32 {
        match self.system {
            CoordSystem::Axial => Axial::new(a.x, a.y).distance(Axial::new(b.x, b.y)),
            CoordSystem::Offset => {
                let o = self.orientation();
                offset::to_axial(a + self.origin, o)
                    .distance(offset::to_axial(b + self.origin, o))
            }
        }
    }

    /// Canonicalize world-absolute coordinates.
    fn to_axial(&self, c: Coord) -> Axial {
        match self.system {
            CoordSystem::Offset => offset::to_axial(c, self.schema.orientation()),
            CoordSystem::Axial => Axial::new(c.x, c.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{ center, distance };
    use quickcheck::*;

    impl Arbitrary for Coord {
        fn arbitrary(g: &mut Gen) -> Coord {
            Coord::new(i16::arbitrary(g) as i32, i16::arbitrary(g) as i32)
        }
    }

    impl Arbitrary for CoordSystem {
        fn arbitrary(g: &mut Gen) -> CoordSystem {
            *g.choose(&[CoordSystem::Offset, CoordSystem::Axial]).unwrap()
        }
    }

    fn layout(o: Orientation, s: CoordSystem, origin: Coord) -> Layout {
        Layout::new(Schema::new(2.0, o).unwrap(), s, origin)
    }

    #[test]
    fn prop_world_roundtrip() {
        // Small coordinates keep the world positions well within f32
        // precision.
        fn prop(x: i8, y: i8, o: Orientation, s: CoordSystem) -> bool {
            let l = layout(o, s, Coord::new(0, 0));
            let c = Coord::new(x as i32, y as i32);
            l.world_to_hex(l.hex_to_world(c)) == c
        }
        quickcheck(prop as fn(i8, i8, Orientation, CoordSystem) -> bool);
    }

    #[test]
    fn prop_neighbours_across_shared_sides() {
        // Neighbour k lies across the side between corners k and k+1:
        // the midpoint of that side is also the midpoint between the
        // two hexagon centers.
        fn prop(x: i8, y: i8, o: Orientation, s: CoordSystem) -> bool {
            let l = layout(o, s, Coord::new(0, 0));
            let c = Coord::new(x as i32, y as i32);
            let hex = l.hexagon(c);
            l.neighbours(c).enumerate().all(|(k, n)| {
                let side = center(&hex.corners()[k], &hex.corners()[(k + 1) % 6]);
                let between = center(&hex.center(), &l.hex_to_world(n));
                distance(&side, &between) < 1e-3
            })
        }
        quickcheck(prop as fn(i8, i8, Orientation, CoordSystem) -> bool);
    }

    #[test]
    fn prop_neighbours_symmetric() {
        fn prop(c: Coord, o: Orientation, s: CoordSystem, ox: i8, oy: i8) -> bool {
            let l = layout(o, s, Coord::new(ox as i32, oy as i32));
            l.neighbours(c).all(|n| l.neighbours(n).any(|m| m == c))
        }
        quickcheck(prop as fn(Coord, Orientation, CoordSystem, i8, i8) -> bool);
    }

    #[test]
    fn prop_neighbours_at_distance_one() {
        fn prop(c: Coord, o: Orientation, s: CoordSystem, ox: i8, oy: i8) -> bool {
            let l = layout(o, s, Coord::new(ox as i32, oy as i32));
            l.neighbours(c).all(|n| l.distance(c, n) == 1)
        }
        quickcheck(prop as fn(Coord, Orientation, CoordSystem, i8, i8) -> bool);
    }

    #[test]
    fn prop_distance_one_iff_neighbour() {
        fn prop(a: Coord, dx: i8, dy: i8, o: Orientation, s: CoordSystem, ox: i8, oy: i8) -> bool {
            let l = layout(o, s, Coord::new(ox as i32, oy as i32));
            let b = a + Coord::new(dx as i32 % 3, dy as i32 % 3);
            let adjacent = l.neighbours(a).any(|n| n == b);
            (l.distance(a, b) == 1) == adjacent
        }
        quickcheck(prop as fn(Coord, i8, i8, Orientation, CoordSystem, i8, i8) -> bool);
    }

    #[test]
    fn prop_distance_symmetric() {
        fn prop(a: Coord, b: Coord, o: Orientation, s: CoordSystem, ox: i8, oy: i8) -> bool {
            let l = layout(o, s, Coord::new(ox as i32, oy as i32));
            l.distance(a, b) == l.distance(b, a)
        }
        quickcheck(prop as fn(Coord, Coord, Orientation, CoordSystem, i8, i8) -> bool);
    }

    #[test]
    fn prop_distance_identity() {
        fn prop(a: Coord, b: Coord, o: Orientation, s: CoordSystem, ox: i8, oy: i8) -> bool {
            let l = layout(o, s, Coord::new(ox as i32, oy as i32));
            (l.distance(a, b) == 0) == (a == b)
        }
        quickcheck(prop as fn(Coord, Coord, Orientation, CoordSystem, i8, i8) -> bool);
    }

    #[test]
    fn prop_distance_triangle() {
        fn prop(a: Coord, b: Coord, c: Coord, o: Orientation, s: CoordSystem, ox: i8, oy: i8) -> bool {
            let l = layout(o, s, Coord::new(ox as i32, oy as i32));
            l.distance(a, c) <= l.distance(a, b) + l.distance(b, c)
        }
        quickcheck(prop as fn(Coord, Coord, Coord, Orientation, CoordSystem, i8, i8) -> bool);
    }

    #[test]
    fn known_world_positions_pointy() {
        // Diameter 2: circumradius 1, inradius sqrt(3)/2.
        let l = layout(Orientation::PointyTop, CoordSystem::Offset, Coord::new(0, 0));
        let d = f32::sqrt(3.0);
        let p = l.hex_to_world(Coord::new(0, 0));
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6);
        let p = l.hex_to_world(Coord::new(1, 0));
        assert!((p.x - d).abs() < 1e-5 && p.y.abs() < 1e-6);
        // Odd rows are shifted right by the inradius.
        let p = l.hex_to_world(Coord::new(0, 1));
        assert!((p.x - d / 2.0).abs() < 1e-5 && (p.y - 1.5).abs() < 1e-5);
        let p = l.hex_to_world(Coord::new(0, 2));
        assert!(p.x.abs() < 1e-5 && (p.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn known_world_positions_flat() {
        let l = layout(Orientation::FlatTop, CoordSystem::Offset, Coord::new(0, 0));
        let d = f32::sqrt(3.0);
        let p = l.hex_to_world(Coord::new(0, 1));
        assert!(p.x.abs() < 1e-6 && (p.y - d).abs() < 1e-5);
        // Odd columns are shifted up by the inradius.
        let p = l.hex_to_world(Coord::new(1, 0));
        assert!((p.x - 1.5).abs() < 1e-5 && (p.y - d / 2.0).abs() < 1e-5);
        let p = l.hex_to_world(Coord::new(2, 0));
        assert!((p.x - 3.0).abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn world_to_hex_near_centers() {
        for o in [Orientation::PointyTop, Orientation::FlatTop] {
            for s in [CoordSystem::Offset, CoordSystem::Axial] {
                let l = layout(o, s, Coord::new(0, 0));
                let c = Coord::new(3, -2);
                let p = l.hex_to_world(c);
                let inradius = l.schema().inradius();
                // Anywhere well inside the hexagon resolves to it.
                for (dx, dy) in [(0.0, 0.0), (0.6, 0.0), (-0.6, 0.0), (0.0, 0.6), (0.0, -0.6)] {
                    let sample = Point2::new(p.x + dx * inradius, p.y + dy * inradius);
                    assert_eq!(l.world_to_hex(sample), c);
                }
            }
        }
    }
}
