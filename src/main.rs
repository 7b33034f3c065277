//! Headless replay: runs a scripted sequence of input frames against a map and
//! writes each rendered frame as a PNG.
//!
//! The script is a JSON array of frames, each
//! `{"zoom_events": [{"kind": "in", "anchor": [x, y]}], "pan": {"left": true}}`.

use std::path::{Path, PathBuf};

use clap::Parser;
use glam::Vec2;
use image::{imageops, Rgba, RgbaImage};
use tile_viewport::config::SpriteSizes;
use tile_viewport::input::viewport_center;
use tile_viewport::scale::round_px;
use tile_viewport::spawning::{SpawnKind, SPAWN_DEFS};
use tile_viewport::{EngineConfig, FrameInput, MapData, Rect, ViewportEngine, ZoomEvent};

const HIT_RECT_COLOR: Rgba<u8> = Rgba([0, 255, 255, 255]);
const GRID_COLOR: Rgba<u8> = Rgba([100, 100, 100, 255]);

#[derive(Parser, Debug)]
#[command(name = "tile-viewport", about = "Replay scripted zoom and pan input against a tile map")]
struct Cli {
    /// Map raster at base scale (PNG)
    map: PathBuf,
    /// Object placements exported next to the map (JSON)
    placements: PathBuf,
    /// Input frames to replay (JSON array)
    script: PathBuf,
    /// Directory the rendered frames are written to
    out_dir: PathBuf,

    /// Engine configuration (JSON); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record puffin profiling scopes
    #[arg(long, env = "TILE_VIEWPORT_PROFILE")]
    profile: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_target(false).init();
    puffin::set_scopes_on(cli.profile);

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let map = MapData::load(&cli.map, &cli.placements)?;
    let mut engine = ViewportEngine::new(config, map)?;
    register_placeholder_sprites(&mut engine);

    let script: Vec<FrameInput> = serde_json::from_str(&std::fs::read_to_string(&cli.script)?)?;
    std::fs::create_dir_all(&cli.out_dir)?;

    for (index, frame_input) in script.iter().enumerate() {
        puffin::GlobalProfiler::lock().new_frame();
        let frame_input = center_unanchored(&engine, frame_input);
        let rezooms = engine.handle_input(&frame_input);
        let canvas = render_frame(&mut engine);
        let path = cli.out_dir.join(format!("frame_{index:04}.png"));
        canvas.save(&path)?;
        tracing::info!(
            frame = index,
            rezooms,
            level = engine.zoom().level(),
            scale = engine.scale(),
            offset_x = engine.camera().offset().x,
            offset_y = engine.camera().offset().y,
            path = %path.display(),
            "wrote frame"
        );
    }

    write_summary(&engine, &cli.out_dir)?;
    Ok(())
}

/// Zoom events with a negative anchor came from a keyboard shortcut; anchor them at the viewport center.
fn center_unanchored(engine: &ViewportEngine, input: &FrameInput) -> FrameInput {
    let center = viewport_center(engine.camera());
    let zoom_events = input
        .zoom_events
        .iter()
        .map(|event| ZoomEvent {
            kind: event.kind,
            anchor: if event.anchor.x < 0.0 || event.anchor.y < 0.0 {
                center
            } else {
                event.anchor
            },
        })
        .collect();
    FrameInput {
        zoom_events,
        pan: input.pan,
    }
}

/// Flat-colored stand-ins sized like the real art, so sprites are visible in the output
fn register_placeholder_sprites(engine: &mut ViewportEngine) {
    let sizes: SpriteSizes = engine.config.sprites;
    for def in SPAWN_DEFS {
        let (size, color) = match def.kind {
            SpawnKind::Player => (sizes.player, Rgba([60, 120, 255, 255])),
            SpawnKind::Mob => (sizes.mob, Rgba([80, 200, 80, 255])),
            SpawnKind::Item(_) => (sizes.item, Rgba([255, 220, 60, 255])),
            SpawnKind::Obstacle => continue,
        };
        let image = RgbaImage::from_pixel(size.x.max(1.0) as u32, size.y.max(1.0) as u32, color);
        engine.register_sprite(def.name, image);
    }
}

/// Canvas dimensions for a viewport, rounded the same way the draw list culls
fn canvas_size(viewport: Vec2) -> (u32, u32) {
    (
        round_px(viewport.x).max(1) as u32,
        round_px(viewport.y).max(1) as u32,
    )
}

fn render_frame(engine: &mut ViewportEngine) -> RgbaImage {
    puffin::profile_function!();
    let (width, height) = canvas_size(engine.camera().viewport());
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));

    {
        let frame = engine.visible_sub_image();
        imageops::overlay(&mut canvas, frame.image, frame.dest.x as i64, frame.dest.y as i64);
    }

    let (cols, rows) = engine.camera().grid_lines(engine.zoom().tile_size());
    for x in cols {
        draw_outline(&mut canvas, Rect::new(x, 0, 1, height as i32), GRID_COLOR);
    }
    for y in rows {
        draw_outline(&mut canvas, Rect::new(0, y, width as i32, 1), GRID_COLOR);
    }

    for item in engine.draw_list() {
        if let Some(image) = item.sprite.and_then(|name| engine.sprite_image(name)) {
            imageops::overlay(&mut canvas, image, item.screen.x as i64, item.screen.y as i64);
        }
        draw_outline(&mut canvas, item.hit, HIT_RECT_COLOR);
    }
    canvas
}

/// One-pixel rectangle outline, clipped to the canvas
fn draw_outline(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let mut put = |x: i32, y: i32| {
        if x >= 0 && y >= 0 && x < width && y < height {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    };
    for x in rect.x..rect.right() {
        put(x, rect.y);
        put(x, rect.bottom() - 1);
    }
    for y in rect.y..rect.bottom() {
        put(rect.x, y);
        put(rect.right() - 1, y);
    }
}

fn write_summary(engine: &ViewportEngine, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let summary = engine.spawn_summary();
    let text = format!(
        "players: {}\nmobs: {}\nitems: {}\nobstacles: {}\nfinal level: {}\nfinal scale: {}\n",
        summary.players,
        summary.mobs,
        summary.items,
        summary.obstacles,
        engine.zoom().level(),
        engine.scale(),
    );
    std::fs::write(out_dir.join("summary.txt"), text)?;
    Ok(())
}
