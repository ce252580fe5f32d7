//! Bouncing, rotating rectangle simulated on its own thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rand::Rng;

use stratum_engine::geometry::Result;
use stratum_engine::{Color, Point, Rect, VertexObject, Viewport};

/// Fixed simulation step.
pub const TICK: Duration = Duration::from_micros(32_768);

const RECT_SIZE: (f32, f32) = (200.0, 100.0);
const TEXTURE_SPIN_DEG: f32 = -0.2;

pub struct World {
    pub rect: VertexObject,
    pub color: Color,
    /// Quad the checkerboard texture is drawn on.
    pub texture_quad: VertexObject,

    velocity: Point,
    spin_deg: f32,
    bounds: Viewport,
}

impl World {
    pub fn new(bounds: Viewport, rng: &mut impl Rng) -> Self {
        Self {
            rect: VertexObject::rectangle_at(Point::new(300.0, 200.0), RECT_SIZE.0, RECT_SIZE.1),
            color: random_color(rng),
            texture_quad: VertexObject::rectangle(Rect::new(40.0, 40.0, 168.0, 168.0)),
            velocity: Point::new(1.2, 1.2),
            spin_deg: -0.3,
            bounds,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Advances one tick, bouncing off the bounds edges.
    ///
    /// Each bounce reverses the spin and picks a new color.
    pub fn step(&mut self, rng: &mut impl Rng) -> Result<()> {
        self.rect.move_by(self.velocity.x, self.velocity.y);
        self.rect.rotate_deg(self.spin_deg)?;
        self.texture_quad.rotate_deg(TEXTURE_SPIN_DEG)?;

        let b = self.rect.bounds();

        if (b.x2 >= self.bounds.width && self.velocity.x > 0.0) || (b.x1 <= 0.0 && self.velocity.x < 0.0) {
            self.velocity.x = -self.velocity.x;
            self.bounce(rng);
        }

        if (b.y2 >= self.bounds.height && self.velocity.y > 0.0) || (b.y1 <= 0.0 && self.velocity.y < 0.0) {
            self.velocity.y = -self.velocity.y;
            self.bounce(rng);
        }
        Ok(())
    }

    fn bounce(&mut self, rng: &mut impl Rng) {
        self.spin_deg = -self.spin_deg;
        self.color = random_color(rng);
    }
}

fn random_color(rng: &mut impl Rng) -> Color {
    Color::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), 0.9)
}

/// Background thread stepping a shared [`World`] every [`TICK`].
///
/// The lock is held for the whole step so a reader never sees a half-updated world.
pub struct Simulation {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Simulation {
    pub fn spawn(world: Arc<Mutex<World>>) -> std::io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = std::thread::Builder::new()
            .name("stratum-world".into())
            .spawn(move || run(world, flag))?;

        Ok(Self { running, handle: Some(handle) })
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("simulation thread panicked");
            }
        }
    }
}

fn run(world: Arc<Mutex<World>>, running: Arc<AtomicBool>) {
    let mut rng = rand::thread_rng();
    let mut next = Instant::now() + TICK;

    while running.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now < next {
            std::thread::sleep(next - now);
            continue;
        }

        if let Err(e) = world.lock().step(&mut rng) {
            log::error!("world step failed: {e}");
            return;
        }
        next += TICK;
    }
    log::debug!("simulation stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world() -> (World, StdRng) {
        let mut rng = StdRng::seed_from_u64(7);
        (World::new(Viewport::new(640.0, 480.0), &mut rng), rng)
    }

    #[test]
    fn step_moves_rect_by_velocity() {
        let (mut w, mut rng) = world();
        let before = w.rect.centroid().unwrap();
        w.step(&mut rng).unwrap();
        let after = w.rect.centroid().unwrap();
        assert!((after.x - before.x - 1.2).abs() < 1e-3);
        assert!((after.y - before.y - 1.2).abs() < 1e-3);
    }

    #[test]
    fn hitting_right_edge_bounces() {
        let (mut w, mut rng) = world();
        w.rect = VertexObject::rectangle(Rect::new(500.0, 200.0, 639.5, 260.0));
        let color = w.color;

        w.step(&mut rng).unwrap();

        assert!(w.velocity().x < 0.0);
        assert!(w.velocity().y > 0.0);
        assert_ne!(w.color, color);
    }

    #[test]
    fn rect_stays_near_bounds_over_many_steps() {
        let (mut w, mut rng) = world();
        for _ in 0..5_000 {
            w.step(&mut rng).unwrap();
        }
        let b = w.rect.bounds();
        // Rotation can push a corner a little past an edge before the bounce lands.
        assert!(b.x1 > -150.0 && b.x2 < 790.0, "{b:?}");
        assert!(b.y1 > -150.0 && b.y2 < 630.0, "{b:?}");
    }
}
