//! Tiles and the tileset they are painted from.

use num_derive::{ FromPrimitive, ToPrimitive };
use serde::{ Deserialize, Serialize };

use crate::error::{ Error, Result };

/// An RGBA color with components in `[0,1]`.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color::new(r, g, b, 1.0)
    }

    /// The color as `0..=255` integer components, e.g. for vertex
    /// colors.
    pub fn to_bytes(self) -> [u8; 4] {
        [ (self.r * 255.0) as u8
        , (self.g * 255.0) as u8
        , (self.b * 255.0) as u8
        , (self.a * 255.0) as u8
        ]
    }
}

/// The classification of a tile, keying into a [`Tileset`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[derive(FromPrimitive, ToPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    None = 0,
    Start = 1,
    End = 2,
    Grass = 3,
    Mud = 4,
    Water = 5,
    Wall = 6,
}

impl TileKind {
    /// The kinds with a tileset entry, i.e. everything but `None`.
    pub const KINDS: [TileKind; 6] =
        [ TileKind::Start, TileKind::End, TileKind::Grass
        , TileKind::Mud, TileKind::Water, TileKind::Wall
        ];
}

/// The render color and traversal cost of a tile kind. A kind without
/// a cost is impassable.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TileSpec {
    pub color: Color,
    pub cost: Option<f32>,
}

impl TileSpec {
    pub const fn new(color: Color, cost: f32) -> TileSpec {
        TileSpec { color, cost: Some(cost) }
    }

    /// A spec for an impassable kind.
    pub const fn impassable(color: Color) -> TileSpec {
        TileSpec { color, cost: None }
    }
}

/// The tile table of a field: a spec for every paintable kind plus the
/// highlight color for tiles on the computed path.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Tileset {
    start: TileSpec,
    end: TileSpec,
    grass: TileSpec,
    mud: TileSpec,
    water: TileSpec,
    wall: TileSpec,
    path_color: Color,
}

impl Default for Tileset {
    fn default() -> Tileset {
        Tileset {
            start: TileSpec::new(Color::BLUE, 0.0),
            end: TileSpec::new(Color::MAGENTA, 0.0),
            grass: TileSpec::new(Color::GREEN, 1.0),
            mud: TileSpec::new(Color::RED, 2.0),
            water: TileSpec::new(Color::CYAN, 4.0),
            wall: TileSpec::impassable(Color::BLACK),
            path_color: Color::YELLOW,
        }
    }
}

impl Tileset {
    /// Look up the spec for a tile kind. `TileKind::None` has no entry
    /// and is reported as unknown.
    pub fn get(&self, kind: TileKind) -> Result<TileSpec> {
        match kind {
            TileKind::None => Err(Error::UnknownTile { kind }),
            TileKind::Start => Ok(self.start),
            TileKind::End => Ok(self.end),
            TileKind::Grass => Ok(self.grass),
            TileKind::Mud => Ok(self.mud),
            TileKind::Water => Ok(self.water),
            TileKind::Wall => Ok(self.wall),
        }
    }

    /// The color substituted for tiles on the computed path.
    pub fn path_color(&self) -> Color {
        self.path_color
    }

    /// Replace the spec of a tile kind.
    pub fn with_spec(mut self, kind: TileKind, spec: TileSpec) -> Result<Tileset> {
        match kind {
            TileKind::None => return Err(Error::UnknownTile { kind }),
            TileKind::Start => self.start = spec,
            TileKind::End => self.end = spec,
            TileKind::Grass => self.grass = spec,
            TileKind::Mud => self.mud = spec,
            TileKind::Water => self.water = spec,
            TileKind::Wall => self.wall = spec,
        }
        Ok(self)
    }

    /// Replace the path highlight color.
    pub fn with_path_color(mut self, color: Color) -> Tileset {
        self.path_color = color;
        self
    }

    /// Check the table for plausibility: all costs finite and
    /// non-negative, start and end free to enter, walls impassable.
    pub fn validate(&self) -> Result<()> {
        for kind in TileKind::KINDS {
            let spec = self.get(kind)?;
            if let Some(cost) = spec.cost {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(Error::InvalidConfig {
                        reason: format!("cost of {:?} tiles must be finite and non-negative, got {}", kind, cost),
                    })
                }
            }
        }
        if self.start.cost != Some(0.0) || self.end.cost != Some(0.0) {
            return Err(Error::InvalidConfig {
                reason: "start and end tiles must have cost 0".to_string(),
            })
        }
        if self.wall.cost.is_some() {
            return Err(Error::InvalidConfig {
                reason: "wall tiles must be impassable".to_string(),
            })
        }
        Ok(())
    }
}

/// A tile of a field.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Tile {
    kind: TileKind,
    color: Color,
    cost: Option<f32>,
    on_path: bool,
}

impl Tile {
    pub(crate) fn new(kind: TileKind, spec: TileSpec) -> Tile {
        Tile { kind, color: spec.color, cost: spec.cost, on_path: false }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// The intrinsic color of the tile, without the path highlight.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The cost of entering this tile, `None` if impassable.
    pub fn cost(&self) -> Option<f32> {
        self.cost
    }

    /// Whether the tile lies on the interior of the computed path.
    pub fn on_path(&self) -> bool {
        self.on_path
    }

    pub(crate) fn set_on_path(&mut self, on_path: bool) {
        self.on_path = on_path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::cast::FromPrimitive;
    use quickcheck::*;

    impl Arbitrary for TileKind {
        fn arbitrary(g: &mut Gen) -> TileKind {
            TileKind::from_u8(u8::arbitrary(g) % 7).unwrap()
        }
    }

    #[test]
    fn default_table() {
        let ts = Tileset::default();
        assert_eq!(ts.get(TileKind::Start).unwrap(), TileSpec::new(Color::BLUE, 0.0));
        assert_eq!(ts.get(TileKind::End).unwrap(), TileSpec::new(Color::MAGENTA, 0.0));
        assert_eq!(ts.get(TileKind::Grass).unwrap(), TileSpec::new(Color::GREEN, 1.0));
        assert_eq!(ts.get(TileKind::Mud).unwrap(), TileSpec::new(Color::RED, 2.0));
        assert_eq!(ts.get(TileKind::Water).unwrap(), TileSpec::new(Color::CYAN, 4.0));
        assert_eq!(ts.get(TileKind::Wall).unwrap(), TileSpec::impassable(Color::BLACK));
        assert_eq!(ts.path_color(), Color::YELLOW);
        assert!(ts.validate().is_ok());
    }

    #[test]
    fn none_has_no_entry() {
        let ts = Tileset::default();
        assert!(matches!(
            ts.get(TileKind::None),
            Err(Error::UnknownTile { kind: TileKind::None })
        ));
        assert!(ts.with_spec(TileKind::None, TileSpec::new(Color::WHITE, 1.0)).is_err());
    }

    #[test]
    fn with_spec_replaces() {
        let ts = Tileset::default()
            .with_spec(TileKind::Mud, TileSpec::new(Color::WHITE, 3.0))
            .unwrap();
        assert_eq!(ts.get(TileKind::Mud).unwrap(), TileSpec::new(Color::WHITE, 3.0));
        assert_eq!(ts.get(TileKind::Grass).unwrap(), TileSpec::new(Color::GREEN, 1.0));
    }

    #[test]
    fn validate_rejects_bad_costs() {
        for cost in [f32::NAN, f32::INFINITY, -1.0] {
            let ts = Tileset::default()
                .with_spec(TileKind::Water, TileSpec::new(Color::CYAN, cost))
                .unwrap();
            assert!(ts.validate().is_err());
        }
        let ts = Tileset::default()
            .with_spec(TileKind::Start, TileSpec::new(Color::BLUE, 1.0))
            .unwrap();
        assert!(ts.validate().is_err());
        let ts = Tileset::default()
            .with_spec(TileKind::Wall, TileSpec::new(Color::BLACK, 1.0))
            .unwrap();
        assert!(ts.validate().is_err());
    }

    #[test]
    fn color_bytes() {
        assert_eq!(Color::YELLOW.to_bytes(), [255, 255, 0, 255]);
        assert_eq!(Color::new(0.0, 0.5, 1.0, 1.0).to_bytes()[1], 127);
    }

    #[test]
    fn tileset_serde_roundtrip() {
        let ts = Tileset::default().with_path_color(Color::WHITE);
        let json = serde_json::to_string(&ts).unwrap();
        let back: Tileset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn tileset_serde_defaults() {
        let ts: Tileset = serde_json::from_str("{}").unwrap();
        assert_eq!(ts, Tileset::default());
    }
}
