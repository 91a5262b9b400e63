// crates/swarm_game/src/plane.rs
//! Image-moving demo: steer a sprite around a fixed window and it blows up
//! when it leaves the screen.

use engine_shared::{
    ActionId, Canvas, GameLogic, HostError, HostInterface, Image, InputState, Rgb, WindowSpec,
    ACTION_NOT_FOUND,
};
use glam::IVec2;
use tracing::{debug, info, warn};

pub const PLANE_IMAGE: &str = "Resources/A.png";
pub const MUSIC: &str = "Resources/music.wav";
pub const EXPLOSION: &str = "Resources/explosion.wav";

const WINDOW: IVec2 = IVec2::new(1024, 768);
const START: IVec2 = IVec2::new(300, 300);
/// Pixels per second.
const MOVE_SPEED: f32 = 1000.0;
const ALPHA_CUTOFF: u8 = 210;
const BACKGROUND: Rgb = Rgb::new(0, 0, 255);

pub struct PlaneDemo {
    image: Option<Image>,
    pos: IVec2,
    actions: [ActionId; 4],
    explosions: u32,
}

impl Default for PlaneDemo {
    fn default() -> Self {
        Self {
            image: None,
            pos: START,
            actions: [ACTION_NOT_FOUND; 4],
            explosions: 0,
        }
    }
}

impl PlaneDemo {
    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn explosions(&self) -> u32 {
        self.explosions
    }

    fn image_size(&self) -> IVec2 {
        self.image
            .as_ref()
            .map_or(IVec2::ZERO, |img| IVec2::new(img.width() as i32, img.height() as i32))
    }
}

impl GameLogic for PlaneDemo {
    fn window(&self) -> WindowSpec {
        WindowSpec {
            width: WINDOW.x as u32,
            height: WINDOW.y as u32,
            title: "Example".to_string(),
        }
    }

    fn on_load(&mut self, host: &mut dyn HostInterface) -> Result<(), HostError> {
        self.actions = [
            host.action_id("MoveUp"),
            host.action_id("MoveDown"),
            host.action_id("MoveLeft"),
            host.action_id("MoveRight"),
        ];

        let image = host.load_image(PLANE_IMAGE)?;
        info!(width = image.width(), height = image.height(), "plane image loaded");
        self.image = Some(image);
        self.pos = START;

        // Audio is optional; a missing file only silences the demo.
        if let Err(err) = host.load_sound(EXPLOSION) {
            warn!(%err, "explosion sound unavailable");
        }
        host.play_music(MUSIC);
        Ok(())
    }

    fn update(&mut self, host: &mut dyn HostInterface, input: &InputState, dt: f32) {
        let [up, down, left, right] = self.actions;
        let step = ((MOVE_SPEED * dt) as i32).max(1);

        if input.is_active(up) { self.pos.y -= step; }
        if input.is_active(down) { self.pos.y += step; }
        if input.is_active(left) { self.pos.x -= step; }
        if input.is_active(right) { self.pos.x += step; }

        let limit = WINDOW - self.image_size();
        if self.pos.x < 0 || self.pos.y < 0 || self.pos.x > limit.x || self.pos.y > limit.y {
            host.play_sound(EXPLOSION);
            self.explosions += 1;
            self.pos = WINDOW / 2 - self.image_size() / 2;
            debug!(explosions = self.explosions, "plane left the window");
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill(BACKGROUND);
        let Some(image) = &self.image else {
            return;
        };

        for y in 0..image.height() {
            for x in 0..image.width() {
                if image.alpha_at(x, y) > ALPHA_CUTOFF {
                    canvas.draw(self.pos.x + x as i32, self.pos.y + y as i32, image.at(x, y));
                }
            }
        }
    }

    fn inspect(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", format!("{}", self.pos)),
            ("explosions", self.explosions.to_string()),
        ]
    }
}
