//! Host surface exported to JavaScript.

use wasm_bindgen::prelude::*;

use crate::codec::{self, Image};
use crate::error::DecodeError;
use crate::schedule::{self, PlayConfig, SystemClock};
use crate::world::World;

/// A loaded level plus play-mode state. The host drives it one tick or one
/// slice at a time and blits `render()` into a canvas between calls.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    world: World,
    level: World,
    config: PlayConfig,
    clock: SystemClock,
    running: bool,
}

#[wasm_bindgen]
impl Universe {
    /// Decode a level from RGBA8 pixel data of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, rgba: &[u8]) -> Result<Universe, JsError> {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);
        }
        Ok(Self::load(width as usize, height as usize, rgba)?)
    }

    /// Level width, without the wall ring.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.world.grid().interior_width() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.world.grid().interior_height() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn ball_count(&self) -> u32 {
        self.world.balls().len() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u64 {
        self.world.ticks()
    }

    pub fn tick(&mut self) {
        self.world.step();
    }

    /// Put the level back the way it was loaded and stop playing.
    pub fn reset(&mut self) {
        self.world = self.level.clone();
        self.running = false;
        log::info!("reset to loaded level, {} balls", self.world.balls().len());
    }

    /// RGBA8 pixels of the padded world, `(width + 2) x (height + 2)`.
    pub fn render(&self) -> Vec<u8> {
        codec::encode(&self.world).to_rgba8()
    }

    /// RGBA8 pixels at the level's own size.
    pub fn render_interior(&self) -> Vec<u8> {
        codec::encode_interior(&self.world).to_rgba8()
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one play-mode slice. Returns the number of ticks run, zero when
    /// paused.
    pub fn run_slice(&mut self) -> u32 {
        if !self.running {
            return 0;
        }
        let slice = schedule::run_slice(&mut self.world, &self.clock, &self.config, |_| true);
        slice.ticks
    }

    /// Replace the play-mode settings from a JSON object. Missing fields take
    /// their defaults.
    pub fn set_config(&mut self, json: &str) -> Result<(), JsError> {
        self.config = PlayConfig::from_json(json)?;
        Ok(())
    }
}

impl Universe {
    /// Wrap an already built world; it also becomes the reset target.
    #[must_use]
    pub fn from_world(world: World) -> Self {
        Self {
            level: world.clone(),
            world,
            config: PlayConfig::default(),
            clock: SystemClock::new(),
            running: false,
        }
    }

    pub fn load(width: usize, height: usize, rgba: &[u8]) -> Result<Self, DecodeError> {
        let image = Image::from_rgba8(width, height, rgba)?;
        Ok(Self::from_world(codec::decode(&image)?))
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }
}
