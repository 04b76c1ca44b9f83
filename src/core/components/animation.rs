//=========================================================================
// Animation Tables
//
// Parsed form of an `.sganim` file:
//
// ```text
// <sprites/hero.png | persistent>     main block name = texture path
//     <idle | play>                   one sub-block per animation
//         frameWidth = 16
//         frameHeight = 16
//         numFrames = 4
//     </idle>
//     <run>                           unset fields inherit from `idle`
//         startY = 16
//         progression = leftToRight
//     </run>
// </sprites/hero.png>
// ```
//
// The `play` specifier marks the default animation; when several carry
// it, the last one wins.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::BTreeMap;

//=== External Crates =====================================================

use log::warn;

//=== Internal Modules ====================================================

use crate::core::parser::{Block, ParseError};

//=== Progression =========================================================

/// Direction the source rectangle moves between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progression {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Progression {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "leftToRight" => Some(Self::LeftToRight),
            "rightToLeft" => Some(Self::RightToLeft),
            "topToBottom" => Some(Self::TopToBottom),
            "bottomToTop" => Some(Self::BottomToTop),
            _ => None,
        }
    }
}

//=== Animation ===========================================================

/// One strip of frames inside a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub frame_count: i32,
    pub horizontal_spacing: i32,
    pub vertical_spacing: i32,
    pub frame_width: i32,
    pub frame_height: i32,
    pub start_x: i32,
    pub start_y: i32,
    /// Frames per second; independent of the engine tick rate.
    pub frame_rate: i32,
    pub progression: Progression,
}

impl Animation {
    /// Seconds each frame stays on screen.
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }

    /// Reads fields from `block`, inheriting unset ones from `self`.
    fn inherit(&self, block: &Block) -> Result<Self, ParseError> {
        let progression = match block.get("progression") {
            None => self.progression,
            Some(name) => Progression::from_name(name).unwrap_or_else(|| {
                warn!(
                    target: "components",
                    "Unknown progression `{}` in animation `{}`",
                    name,
                    block.name()
                );
                self.progression
            }),
        };

        Ok(Self {
            frame_count: block.get_int("numFrames", self.frame_count)?,
            horizontal_spacing: block.get_int("horizontalFrameSpacing", self.horizontal_spacing)?,
            vertical_spacing: block.get_int("verticalFrameSpacing", self.vertical_spacing)?,
            frame_width: block.get_int("frameWidth", self.frame_width)?,
            frame_height: block.get_int("frameHeight", self.frame_height)?,
            start_x: block.get_int("startX", self.start_x)?,
            start_y: block.get_int("startY", self.start_y)?,
            frame_rate: block.get_int("frameRate", self.frame_rate)?,
            progression,
        })
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            frame_count: 0,
            horizontal_spacing: 0,
            vertical_spacing: 0,
            frame_width: 0,
            frame_height: 0,
            start_x: 0,
            start_y: 0,
            frame_rate: 30,
            progression: Progression::LeftToRight,
        }
    }
}

//=== AnimationSet ========================================================

/// All animations declared by one animation file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationSet {
    texture: String,
    persistent: bool,
    animations: BTreeMap<String, Animation>,
    default: Option<String>,
}

impl AnimationSet {
    /// Reads the main block of an animation file.
    pub fn from_block(block: &Block) -> Result<Self, ParseError> {
        let mut animations = BTreeMap::new();
        let mut default = None;
        let mut previous = Animation::default();

        for sub_block in block.sub_blocks() {
            let animation = previous.inherit(sub_block)?;
            if sub_block.has("play") {
                default = Some(sub_block.name().to_string());
            }
            animations.insert(sub_block.name().to_string(), animation.clone());
            previous = animation;
        }

        Ok(Self {
            texture: block.name().to_string(),
            persistent: block.has("persistent"),
            animations,
            default,
        })
    }

    /// Resource-relative path of the texture the frames come from.
    pub fn texture(&self) -> &str {
        &self.texture
    }

    /// Whether the set should stay cached with no users.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    /// Name of the animation marked `play`.
    pub fn default_animation(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
