//! Data-driven entity spawning from map placements.
//!
//! Each placement name maps to a spawn definition, so new object types only
//! need a table entry.

use crate::components::{Block, Item, ItemKind, Mob, Obstacle, Player, Sprite, SpriteName};
use crate::config::SpriteSizes;
use crate::map::PlacementRecord;
use glam::Vec2;
use hecs::World;

/// What a placement name turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Player,
    Mob,
    Item(ItemKind),
    /// Static wall using the placement's own width/height
    Obstacle,
}

/// Definition of a placement type
#[derive(Debug, Clone, Copy)]
pub struct SpawnDef {
    /// Placement name in the map's object layer
    pub name: &'static str,
    pub kind: SpawnKind,
}

pub const SPAWN_DEFS: &[SpawnDef] = &[
    SpawnDef { name: "player", kind: SpawnKind::Player },
    SpawnDef { name: "zombie", kind: SpawnKind::Mob },
    SpawnDef { name: "wall", kind: SpawnKind::Obstacle },
    SpawnDef { name: "health", kind: SpawnKind::Item(ItemKind::Health) },
    SpawnDef { name: "shotgun", kind: SpawnKind::Item(ItemKind::Shotgun) },
];

pub fn find_def(name: &str) -> Option<&'static SpawnDef> {
    SPAWN_DEFS.iter().find(|def| def.name == name)
}

impl SpawnDef {
    /// Spawn this type for one placement record
    pub fn spawn(&self, world: &mut World, record: &PlacementRecord, sizes: &SpriteSizes) -> hecs::Entity {
        let position = Vec2::new(record.x, record.y);
        let name = SpriteName(self.name);
        match self.kind {
            SpawnKind::Player => world.spawn((
                Sprite::new(position, sizes.player).with_hit_size(sizes.player_hit),
                name,
                Player,
            )),
            SpawnKind::Mob => world.spawn((
                Sprite::new(position, sizes.mob).with_hit_size(sizes.mob_hit),
                name,
                Mob,
            )),
            SpawnKind::Item(kind) => world.spawn((Sprite::new(position, sizes.item), name, Item { kind })),
            SpawnKind::Obstacle => world.spawn((
                Block::new(position, Vec2::new(record.width, record.height)),
                Obstacle,
            )),
        }
    }
}

/// Counts from one spawn pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSummary {
    pub players: usize,
    pub mobs: usize,
    pub items: usize,
    pub obstacles: usize,
    pub skipped: usize,
}

/// Spawn every placement with a known name; unknown names are skipped
pub fn spawn_placements(world: &mut World, records: &[PlacementRecord], sizes: &SpriteSizes) -> SpawnSummary {
    let mut summary = SpawnSummary::default();
    for record in records {
        let Some(def) = find_def(&record.name) else {
            tracing::warn!(name = %record.name, x = record.x, y = record.y, "unknown placement, skipping");
            summary.skipped += 1;
            continue;
        };
        def.spawn(world, record, sizes);
        match def.kind {
            SpawnKind::Player => summary.players += 1,
            SpawnKind::Mob => summary.mobs += 1,
            SpawnKind::Item(_) => summary.items += 1,
            SpawnKind::Obstacle => summary.obstacles += 1,
        }
    }
    tracing::info!(
        players = summary.players,
        mobs = summary.mobs,
        items = summary.items,
        obstacles = summary.obstacles,
        skipped = summary.skipped,
        "spawned placements"
    );
    summary
}
