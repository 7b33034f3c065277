use glam::Vec2;

/// Where an entity's base position sits on its rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the rect center (movable sprites, so scaling keeps them centered)
    Center,
    /// Position is the top-left corner (static blocks, so edges stay on the tile grid)
    TopLeft,
}

/// Immutable base-scale geometry that can be projected to any zoom level.
///
/// Implementors only hold their geometry; all screen rectangles are derived
/// from it on demand (see [`crate::view`]).
pub trait Scalable {
    /// Position in base-scale world pixels
    fn base_position(&self) -> Vec2;
    /// Size in base-scale world pixels
    fn base_size(&self) -> Vec2;
    fn anchor(&self) -> Anchor;
    /// Collision footprint if it differs from the visual size
    fn hit_size(&self) -> Option<Vec2> {
        None
    }
}

/// Sprite component - a movable, center-anchored image
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub position: Vec2,
    pub image_size: Vec2,
    pub hit_size: Option<Vec2>,
}

impl Sprite {
    pub fn new(position: Vec2, image_size: Vec2) -> Self {
        Self {
            position,
            image_size,
            hit_size: None,
        }
    }

    pub fn with_hit_size(mut self, hit_size: Vec2) -> Self {
        self.hit_size = Some(hit_size);
        self
    }
}

impl Scalable for Sprite {
    fn base_position(&self) -> Vec2 {
        self.position
    }

    fn base_size(&self) -> Vec2 {
        self.image_size
    }

    fn anchor(&self) -> Anchor {
        Anchor::Center
    }

    fn hit_size(&self) -> Option<Vec2> {
        self.hit_size
    }
}

/// Block component - a static, top-left anchored rectangle (walls)
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub position: Vec2,
    pub size: Vec2,
}

impl Block {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }
}

impl Scalable for Block {
    fn base_position(&self) -> Vec2 {
        self.position
    }

    fn base_size(&self) -> Vec2 {
        self.size
    }

    fn anchor(&self) -> Anchor {
        Anchor::TopLeft
    }
}

/// Which registered sprite image an entity draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteName(pub &'static str);

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Mob marker component
#[derive(Debug, Clone, Copy)]
pub struct Mob;

/// Obstacle marker component - blocks collide with hit rects
#[derive(Debug, Clone, Copy)]
pub struct Obstacle;

/// Pickup kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Health,
    Shotgun,
}

/// Item component
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub kind: ItemKind,
}
