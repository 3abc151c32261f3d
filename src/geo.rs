//! Geometry of regular hexagons in a 2d cartesian coordinate system.

use either::Either;
use nalgebra::{ Point2, Vector2 };
use num_derive::{ FromPrimitive, ToPrimitive };
use serde::{ Deserialize, Serialize };

use std::f32::consts::FRAC_PI_2;
use std::iter;

use crate::error::{ Error, Result };

/// The angle (in radians) of the equilateral triangles that
/// a regular hexagon is composed of, i.e. 60 degrees in radians.
pub const ANGLE_RADIANS: f32 = 1.0471975512;

/// The orientation of the hexagons of a grid, i.e. whether a corner
/// (pointy) or an edge (flat) faces the positive `y` axis.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[derive(FromPrimitive, ToPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    FlatTop,
    PointyTop,
}

/// A schematic for a regular hexagon of a fixed orientation.
///
/// All metrics are derived from the long diagonal (corner to opposite
/// corner): the circumradius is half the long diagonal and equals the
/// side length, the short diagonal is `sqrt(3)` times the circumradius
/// and the inradius is half the short diagonal.
#[derive(Clone, Debug)]
pub struct Schema {
    diameter: f32,
    circumradius: f32,
    inradius: f32,
    short_diagonal: f32,
    orientation: Orientation,
    corners: [Vector2<f32>; 6],
    corner_uvs: [Point2<f32>; 7],
}

impl Schema {
    /// Create a schema from the long diagonal of the hexagons,
    /// which must be finite and positive.
    pub fn new(diameter: f32, orientation: Orientation) -> Result<Schema> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(Error::InvalidConfig {
                reason: format!("hexagon diameter must be positive, got {}", diameter),
            })
        }
        let circumradius = diameter / 2.0;
        let short_diagonal = f32::sqrt(3.0) * circumradius;
        let inradius = short_diagonal / 2.0;
        let corners = Self::unit_corners(circumradius, orientation);
        let corner_uvs = Self::unit_corner_uvs(&corners, circumradius, orientation);
        Ok(Schema {
            diameter,
            circumradius,
            inradius,
            short_diagonal,
            orientation,
            corners,
            corner_uvs,
        })
    }

    /// The long diagonal, from corner to opposite corner.
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// The distance from the center to any corner.
    /// Equal to the side length.
    pub fn circumradius(&self) -> f32 {
        self.circumradius
    }

    /// The distance from the center to the midpoint of any side.
    pub fn inradius(&self) -> f32 {
        self.inradius
    }

    /// The short diagonal, from side midpoint to opposite side midpoint.
    pub fn short_diagonal(&self) -> f32 {
        self.short_diagonal
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The offsets of the six corners from the center of a hexagon.
    ///
    /// The winding is a published contract: the first corner lies at
    /// 90 degrees (pointy-top) or 0 degrees (flat-top) from the
    /// center, with every following corner 60 degrees clockwise of
    /// its predecessor.
    pub fn corner_offsets(&self) -> &[Vector2<f32>; 6] {
        &self.corners
    }

    /// Texture coordinates in `[0,1]x[0,1]` for the center and the six
    /// corners of any hexagon: the center first, then the corners in
    /// the winding of [`corner_offsets`](Schema::corner_offsets).
    pub fn corner_uvs(&self) -> &[Point2<f32>; 7] {
        &self.corner_uvs
    }

    /// The hexagon with the given center.
    pub fn hexagon(&self, center: Point2<f32>) -> Hexagon {
        let mut corners = [center; 6];
        for (c, v) in corners.iter_mut().zip(self.corners.iter()) {
            *c += *v;
        }
        Hexagon { center, corners }
    }

    fn unit_corners(r: f32, orientation: Orientation) -> [Vector2<f32>; 6] {
        let start = match orientation {
            Orientation::PointyTop => FRAC_PI_2,
            Orientation::FlatTop => 0.0,
        };
        let mut corners = [Vector2::zeros(); 6];
        for (i, c) in corners.iter_mut().enumerate() {
            let angle_rad = start - ANGLE_RADIANS * i as f32;
            *c = Vector2::new(r * angle_rad.cos(), r * angle_rad.sin());
        }
        corners
    }

    /// The texture coordinates of the corners: each corner offset is
    /// rotated a further quarter turn (flat-top) or half turn
    /// (pointy-top) and normalized from `[-r,r]` into `[0,1]`.
    fn unit_corner_uvs(
        corners: &[Vector2<f32>; 6],
        r: f32,
        orientation: Orientation,
    ) -> [Point2<f32>; 7] {
        let mut uvs = [Point2::new(0.5, 0.5); 7];
        for (i, c) in corners.iter().enumerate() {
            let rotated = match orientation {
                Orientation::PointyTop => Vector2::new(-c.x, -c.y),
                Orientation::FlatTop => Vector2::new(c.y, -c.x),
            };
            uvs[i + 1] = Point2::new(
                (rotated.x / r + 1.0) * 0.5,
                (rotated.y / r + 1.0) * 0.5,
            );
        }
        uvs
    }
}

/// A hexagon positioned on a plane.
#[derive(Clone, Debug)]
pub struct Hexagon {
    pub(crate) center: Point2<f32>,
    pub(crate) corners: [Point2<f32>; 6],
}

impl Hexagon {
    pub fn center(&self) -> Point2<f32> {
        self.center
    }

    /// The corner points, in the winding of [`Schema::corner_offsets`].
    pub fn corners(&self) -> &[Point2<f32>; 6] {
        &self.corners
    }

    /// Iterate over the points of the hexagon, optionally preceded by
    /// the center, e.g. for building a triangle fan.
    pub fn points(&self, include_center: bool) -> impl Iterator<Item = Point2<f32>> + '_ {
        if include_center {
            Either::Left(iter::once(self.center).chain(self.corners.iter().copied()))
        } else {
            Either::Right(self.corners.iter().copied())
        }
    }
}
