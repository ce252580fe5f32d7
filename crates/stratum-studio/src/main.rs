//! Stratum studio: polygon triangulation editor and a bouncing-rectangle demo.
//!
//! Keys: `Tab` switches scene. Editor scene: click/drag to add vertices,
//! `Space` triangulates (again to clear), `W` wireframe, `C` clear, `Z` undo.
//! `Esc` quits.

mod editor;
mod world;

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use stratum_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use stratum_engine::device::GpuInit;
use stratum_engine::logging::{init_logging, LoggingConfig};
use stratum_engine::render::{Drawable, Renderer, RendererConfig, TextureId};
use stratum_engine::window::{Runtime, RuntimeConfig};
use stratum_engine::{Color, Point, VertexObject, Viewport};

use editor::Editor;
use world::{Simulation, World};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const BACKGROUND: Color = Color::new(0.95, 0.95, 0.95, 1.0);

const CHECKER_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Scene {
    Editor,
    Bounce,
}

struct Studio {
    renderer: Renderer,
    scene: Scene,
    cursor: Point,

    editor: Editor,

    world: Arc<Mutex<World>>,
    // Stops and joins the thread on drop.
    _simulation: Simulation,
    checker: Option<TextureId>,

    shown_fps: u32,
}

impl Studio {
    fn new() -> Result<Self> {
        let bounds = Viewport::new(WIDTH as f32, HEIGHT as f32);
        let world = Arc::new(Mutex::new(World::new(bounds, &mut rand::thread_rng())));
        let simulation = Simulation::spawn(Arc::clone(&world)).context("failed to start simulation thread")?;

        Ok(Self {
            renderer: Renderer::new(RendererConfig::default()),
            scene: Scene::Editor,
            cursor: Point::zero(),
            editor: Editor::new(),
            world,
            _simulation: simulation,
            checker: None,
            shown_fps: 0,
        })
    }

    fn on_key(&mut self, key: KeyCode, repeat: bool) -> AppControl {
        match (key, repeat) {
            (KeyCode::Escape, _) => return AppControl::Exit,
            (KeyCode::Tab, false) => {
                self.scene = match self.scene {
                    Scene::Editor => Scene::Bounce,
                    Scene::Bounce => Scene::Editor,
                };
            }
            (KeyCode::KeyZ, _) if self.scene == Scene::Editor => self.editor.undo(),
            (_, true) => {}
            (KeyCode::Space, _) if self.scene == Scene::Editor => {
                match self.editor.toggle_triangulation() {
                    Ok(Some(triangles)) => log::info!(
                        "{} vertices triangulated into {triangles} triangles",
                        self.editor.polygon.len()
                    ),
                    Ok(None) => {}
                    Err(e) => log::warn!("{e}"),
                }
            }
            (KeyCode::KeyW, _) => self.editor.toggle_wireframe(),
            (KeyCode::KeyC, _) => self.editor.clear(),
            _ => {}
        }
        AppControl::Continue
    }

    /// Copies the world, holding its lock only for the copy.
    fn bounce_snapshot(&self) -> Snapshot {
        let world = self.world.lock();
        Snapshot {
            rect: world.rect.clone(),
            color: world.color,
            texture_quad: world.texture_quad.clone(),
        }
    }
}

struct Snapshot {
    rect: VertexObject,
    color: Color,
    texture_quad: VertexObject,
}

impl App for Studio {
    fn on_window_event(&mut self, window: &WindowCtx<'_>, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = window.cursor_to_point(*position);
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } if self.scene == Scene::Editor => {
                match state {
                    ElementState::Pressed => self.editor.press(self.cursor),
                    ElementState::Released => self.editor.release(),
                }
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    return self.on_key(code, event.repeat);
                }
            }

            _ => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.time.fps != self.shown_fps {
            self.shown_fps = ctx.time.fps;
            ctx.window.set_title(&format!("stratum studio | {} fps", self.shown_fps));
        }

        let snapshot = match self.scene {
            Scene::Editor => {
                self.editor.drag_to(self.cursor);
                None
            }
            Scene::Bounce => Some(self.bounce_snapshot()),
        };

        let drawables = match &snapshot {
            None => self.editor.drawables(),
            Some(s) => vec![Drawable::polygon(s.rect.clone(), s.color)],
        };

        let renderer = &mut self.renderer;
        let checker = &mut self.checker;

        ctx.render(BACKGROUND, |rctx, target| {
            if checker.is_none() {
                match renderer.create_texture(rctx, CHECKER_SIZE, CHECKER_SIZE, &checkerboard()) {
                    Ok(id) => *checker = Some(id),
                    Err(e) => log::error!("checkerboard texture: {e}"),
                }
            }

            if let (Some(id), Some(s)) = (*checker, snapshot) {
                renderer.draw(rctx, target, &Drawable::texture(id, s.texture_quad));
            }
            renderer.render(rctx, target, &drawables);
        })
    }
}

/// Two-tone RGBA8 checkerboard, rows top first.
fn checkerboard() -> Vec<u8> {
    const LIGHT: [u8; 4] = [230, 230, 230, 255];
    const DARK: [u8; 4] = [40, 90, 160, 255];

    let mut pixels = Vec::with_capacity((CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
    for y in 0..CHECKER_SIZE {
        for x in 0..CHECKER_SIZE {
            let dark = (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0;
            pixels.extend_from_slice(if dark { &DARK } else { &LIGHT });
        }
    }
    pixels
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "stratum studio".to_string(),
        initial_size: LogicalSize::new(WIDTH, HEIGHT),
        resizable: false,
    };

    Runtime::run(config, GpuInit::default(), Studio::new()?)
}
