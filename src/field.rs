//! Editable hexagonal fields with a maintained start-to-end path.

pub mod tile;

pub use self::tile::{ Color, Tile, TileKind, TileSpec, Tileset };

use log::{ debug, info };
use nalgebra::Point2;
use serde::{ Deserialize, Serialize };

use crate::error::{ Error, Result };
use crate::geo::{ Orientation, Schema };
use crate::grid::{ Coord, CoordSystem, Layout };
use crate::search::{ self, astar };

/// The construction parameters of a [`Field`].
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// The number of columns.
    pub width: u32,
    /// The number of rows.
    pub height: u32,
    /// The world coordinates of the tile at grid-local `(0,0)`,
    /// e.g. for centering the field around the world origin.
    pub origin: Coord,
    /// The long diagonal of every hexagon, in world units.
    pub scale: f32,
    pub orientation: Orientation,
    pub system: CoordSystem,
}

impl Default for FieldConfig {
    fn default() -> FieldConfig {
        FieldConfig {
            width: 5,
            height: 5,
            origin: Coord::new(0, 0),
            scale: 1.0,
            orientation: Orientation::PointyTop,
            system: CoordSystem::Offset,
        }
    }
}

impl FieldConfig {
    /// Check the parameters for plausibility.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig {
                reason: format!("field extent must be positive, got {}x{}", self.width, self.height),
            })
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig {
                reason: format!("hexagon scale must be positive, got {}", self.scale),
            })
        }
        Ok(())
    }

    /// The number of tiles, which exceeds `u32` for large extents.
    fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn layout(&self) -> Result<Layout> {
        let schema = Schema::new(self.scale, self.orientation)?;
        Ok(Layout::new(schema, self.system, self.origin))
    }
}

/// An editable rectangular field of hexagonal tiles with an optional
/// start and end designation and an automatically maintained
/// least-cost path between them.
///
/// Every mutation leaves the field consistent: there is at most one
/// start and one end tile, the two never coincide, and the path
/// marking is recomputed after each successful edit. An unreachable
/// end is not an error; it merely leaves no tile marked.
pub struct Field {
    config: FieldConfig,
    layout: Layout,
    tileset: Tileset,
    tiles: Vec<Tile>,
    start: Option<Coord>,
    end: Option<Coord>,
    hover: Option<Coord>,
}

impl Field {
    /// Create a field with every tile set to grass.
    pub fn new(config: FieldConfig, tileset: Tileset) -> Result<Field> {
        config.validate()?;
        tileset.validate()?;
        let layout = config.layout()?;
        let grass = tileset.get(TileKind::Grass)?;
        let len = config.area();
        info!("configured {}x{} hex field ({:?}, {:?})",
            config.width, config.height, config.orientation, config.system);
        Ok(Field {
            config,
            layout,
            tileset,
            tiles: vec![Tile::new(TileKind::Grass, grass); len],
            start: None,
            end: None,
            hover: None,
        })
    }

    /// Replace the configuration. The grid is rebuilt with every tile
    /// set to grass; start, end, hover and path are cleared. On error
    /// the field retains its previous state.
    pub fn reconfigure(&mut self, config: FieldConfig) -> Result<()> {
        config.validate()?;
        let layout = config.layout()?;
        let grass = self.tileset.get(TileKind::Grass)?;
        self.config = config;
        self.layout = layout;
        self.tiles = vec![Tile::new(TileKind::Grass, grass); config.area()];
        self.start = None;
        self.end = None;
        self.hover = None;
        info!("configured {}x{} hex field ({:?}, {:?})",
            config.width, config.height, config.orientation, config.system);
        Ok(())
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn tileset(&self) -> &Tileset {
        &self.tileset
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// The tile most recently resolved by [`hover`](Field::hover),
    /// if it was on the field.
    pub fn hovered(&self) -> Option<Coord> {
        self.hover
    }

    /// The tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The tile at the given grid-local coordinates.
    pub fn tile(&self, c: Coord) -> Option<&Tile> {
        self.index(c).map(|i| &self.tiles[i])
    }

    /// The render color of every tile in row-major order, with tiles
    /// on the computed path substituted by the path highlight color.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.tiles.iter().map(|tile| {
            if tile.on_path() {
                self.tileset.path_color()
            } else {
                tile.color()
            }
        })
    }

    /// Resolve a world position to the tile under it, remembering it
    /// as the hovered tile. Positions outside the field clear the
    /// hover state. Never an error and never a path recompute.
    pub fn hover(&mut self, p: Point2<f32>) -> Option<Coord> {
        let c = self.layout.world_to_hex(p) - self.config.origin;
        self.hover = self.index(c).map(|_| c);
        self.hover
    }

    /// Paint the tile at the given coordinates with a kind from the
    /// tileset.
    ///
    /// Painting `Start` or `End` moves the respective designation as
    /// in [`set_start`](Field::set_start) / [`set_end`](Field::set_end).
    /// Painting any other kind over the start or end tile removes that
    /// designation.
    pub fn paint(&mut self, c: Coord, kind: TileKind) -> Result<()> {
        match kind {
            TileKind::Start => return self.set_start(c),
            TileKind::End => return self.set_end(c),
            _ => {}
        }
        let i = self.checked_index(c)?;
        let spec = self.tileset.get(kind)?;
        self.tiles[i] = Tile::new(kind, spec);
        if self.start == Some(c) {
            self.start = None;
        }
        if self.end == Some(c) {
            self.end = None;
        }
        self.recompute_path();
        Ok(())
    }

    /// Reset the tile at the given coordinates to grass.
    pub fn erase(&mut self, c: Coord) -> Result<()> {
        self.paint(c, TileKind::Grass)
    }

    /// Designate the start tile. A start tile elsewhere reverts to
    /// grass; an end designation on the same coordinates is removed.
    pub fn set_start(&mut self, c: Coord) -> Result<()> {
        let i = self.checked_index(c)?;
        let start = self.tileset.get(TileKind::Start)?;
        let grass = self.tileset.get(TileKind::Grass)?;
        if let Some(old) = self.start.take() {
            if old != c {
                if let Some(j) = self.index(old) {
                    self.tiles[j] = Tile::new(TileKind::Grass, grass);
                }
            }
        }
        if self.end == Some(c) {
            self.end = None;
        }
        self.start = Some(c);
        self.tiles[i] = Tile::new(TileKind::Start, start);
        self.recompute_path();
        Ok(())
    }

    /// Designate the end tile. An end tile elsewhere reverts to
    /// grass; a start designation on the same coordinates is removed.
    pub fn set_end(&mut self, c: Coord) -> Result<()> {
        let i = self.checked_index(c)?;
        let end = self.tileset.get(TileKind::End)?;
        let grass = self.tileset.get(TileKind::Grass)?;
        if let Some(old) = self.end.take() {
            if old != c {
                if let Some(j) = self.index(old) {
                    self.tiles[j] = Tile::new(TileKind::Grass, grass);
                }
            }
        }
        if self.start == Some(c) {
            self.start = None;
        }
        self.end = Some(c);
        self.tiles[i] = Tile::new(TileKind::End, end);
        self.recompute_path();
        Ok(())
    }

    fn index(&self, c: Coord) -> Option<usize> {
        if c.x >= 0 && (c.x as u32) < self.config.width
            && c.y >= 0 && (c.y as u32) < self.config.height {
            Some(c.y as usize * self.config.width as usize + c.x as usize)
        } else {
            None
        }
    }

    fn checked_index(&self, c: Coord) -> Result<usize> {
        self.index(c).ok_or(Error::OutOfBounds {
            coord: c,
            width: self.config.width,
            height: self.config.height,
        })
    }

    /// Recompute the path marking from scratch. With both start and
    /// end designated, a least-cost path is searched and its interior
    /// tiles are marked; otherwise, or when the end is unreachable,
    /// no tile is marked.
    fn recompute_path(&mut self) {
        for tile in &mut self.tiles {
            tile.set_on_path(false);
        }
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return,
        };
        let path = {
            let mut ctx = FieldContext { field: self };
            astar::path(&self.layout, start, end, &mut ctx)
        };
        match path {
            Some(path) => {
                let interior = path.len().saturating_sub(2);
                for node in path.iter().skip(1).take(interior) {
                    if let Some(i) = self.index(node.coords) {
                        self.tiles[i].set_on_path(true);
                    }
                }
                if let Some(goal) = path.back() {
                    debug!("path found: cost {:.1}, {} tiles", goal.cost, path.len());
                }
            }
            None => debug!("no path between {} and {}", start, end),
        }
    }
}

/// The search context of a field: tile costs bound the search space,
/// the grid distance drives it towards the goal.
struct FieldContext<'a> {
    field: &'a Field,
}

impl search::Context for FieldContext<'_> {
    fn cost(&mut self, _from: Coord, to: Coord) -> Option<f32> {
        self.field.tile(to).and_then(|tile| tile.cost())
    }

    fn heuristic(&mut self, from: Coord, to: Coord) -> u32 {
        self.field.layout.distance(from, to)
    }
}
