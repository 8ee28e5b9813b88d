//! Sprite animation state machine
//!
//! Each motion state owns a clip: the texture it draws from and the ordered
//! frame indices into that texture's sprite sheet.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Rect;

/// Discrete rocket mode, drives both physics and animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionState {
    #[default]
    Idle,
    Thrusting,
}

impl MotionState {
    pub const ALL: [MotionState; 2] = [MotionState::Idle, MotionState::Thrusting];
}

/// Frames played for one motion state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Key of the texture the frames index into
    pub texture: String,
    pub frames: Vec<u32>,
}

/// Motion state to clip table, plus the sprite sheet grid
///
/// Deserializing goes through the same checks as [`SpriteAtlas::try_new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AtlasFields")]
pub struct SpriteAtlas {
    idle: AnimationClip,
    thrusting: AnimationClip,
    pub rows: u32,
    pub cols: u32,
}

#[derive(Deserialize)]
struct AtlasFields {
    idle: AnimationClip,
    thrusting: AnimationClip,
    rows: u32,
    cols: u32,
}

impl TryFrom<AtlasFields> for SpriteAtlas {
    type Error = &'static str;

    fn try_from(fields: AtlasFields) -> Result<Self, Self::Error> {
        Self::try_new(fields.idle, fields.thrusting, fields.rows, fields.cols)
    }
}

impl SpriteAtlas {
    /// Build an atlas; panics if a clip has no frames
    pub fn new(idle: AnimationClip, thrusting: AnimationClip, rows: u32, cols: u32) -> Self {
        match Self::try_new(idle, thrusting, rows, cols) {
            Ok(atlas) => atlas,
            Err(reason) => panic!("{reason}"),
        }
    }

    /// Build an atlas, rejecting clips without frames
    pub fn try_new(
        idle: AnimationClip,
        thrusting: AnimationClip,
        rows: u32,
        cols: u32,
    ) -> Result<Self, &'static str> {
        if idle.frames.is_empty() {
            return Err("idle clip has no frames");
        }
        if thrusting.frames.is_empty() {
            return Err("thrusting clip has no frames");
        }
        Ok(Self {
            idle,
            thrusting,
            rows: rows.max(1),
            cols: cols.max(1),
        })
    }

    pub fn clip(&self, state: MotionState) -> &AnimationClip {
        match state {
            MotionState::Idle => &self.idle,
            MotionState::Thrusting => &self.thrusting,
        }
    }
}

/// Playback cursor over a [`SpriteAtlas`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    atlas: SpriteAtlas,
    state: MotionState,
    frame_index: usize,
    timer: f32,
    /// Frames per second; zero or less freezes playback
    pub frame_speed: f32,
}

impl Animator {
    pub fn new(atlas: SpriteAtlas, frame_speed: f32) -> Self {
        Self {
            atlas,
            state: MotionState::Idle,
            frame_index: 0,
            timer: 0.0,
            frame_speed,
        }
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }

    /// Switch clips; returns true if the state changed
    ///
    /// A change restarts playback from the first frame.
    pub fn transition(&mut self, to: MotionState) -> bool {
        if self.state == to {
            return false;
        }
        log::debug!("Rocket animation {:?} -> {:?}", self.state, to);
        self.state = to;
        self.frame_index = 0;
        self.timer = 0.0;
        true
    }

    /// Accumulate time and step to the next frame when one is due
    pub fn advance(&mut self, dt: f32) {
        if self.frame_speed <= 0.0 {
            return;
        }
        self.timer += dt;
        if self.timer >= 1.0 / self.frame_speed {
            self.timer = 0.0;
            self.frame_index = (self.frame_index + 1) % self.clip().frames.len();
        }
    }

    pub fn clip(&self) -> &AnimationClip {
        self.atlas.clip(self.state)
    }

    /// Texture bound to the current state
    pub fn texture(&self) -> &str {
        &self.clip().texture
    }

    /// Sprite sheet cell currently shown
    pub fn current_frame(&self) -> u32 {
        let frames = &self.clip().frames;
        frames[self.frame_index % frames.len()]
    }

    /// Source rectangle of the current frame in a texture of `texture_size`
    pub fn source_rect(&self, texture_size: Vec2) -> Rect {
        uv_rect(texture_size, self.current_frame(), self.atlas.rows, self.atlas.cols)
    }
}

/// Pixel rectangle of `frame` in a `rows` x `cols` sprite sheet (row-major)
pub fn uv_rect(texture_size: Vec2, frame: u32, rows: u32, cols: u32) -> Rect {
    let rows = rows.max(1);
    let cols = cols.max(1);
    let cell = Vec2::new(texture_size.x / cols as f32, texture_size.y / rows as f32);
    let col = frame % cols;
    let row = (frame / cols) % rows;
    Rect::new(col as f32 * cell.x, row as f32 * cell.y, cell.x, cell.y)
}
