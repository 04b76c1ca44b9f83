//=========================================================================
// Animated Texture Component
//
// Plays frame animations out of a single texture. Animation tables come
// from `.sganim` files and are shared between components through the
// runtime's animation cache.
//
// Playback per update:
// ```text
// timer += dt
// timer ≥ 1 / frameRate  → advance one frame (wrap to frame 0), timer = 0
// timed playback expired → switch back to the default animation
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::Path;

//=== External Crates =====================================================

use log::warn;

//=== Internal Modules ====================================================

use super::animation::{Animation, Progression};
use super::{Capabilities, Component, ComponentError, DrawSource, Drawable, Flip};
use crate::core::blueprint::{ComponentInitData, ComponentType};
use crate::core::math::Rect;
use crate::core::resources::{AnimationHandle, Assets, TextureHandle};

/// Extension of animation table files.
pub const ANIMATION_EXTENSION: &str = "sganim";

//=== AnimatedTextureComponent ============================================

#[derive(Debug)]
pub struct AnimatedTextureComponent {
    drawable: Drawable,
    texture: Option<TextureHandle>,
    animations: Option<AnimationHandle>,
    current: Option<(String, Animation)>,
    current_frame: i32,
    next_frame_timer: f32,
    playing: bool,
    remaining: Option<f32>,
}

impl AnimatedTextureComponent {
    /// Loads the animation file named by `data.path` and its texture, then
    /// starts the default animation if one is marked.
    ///
    /// A path without the `.sganim` extension yields an inert component.
    pub fn new(data: &ComponentInitData, assets: &Assets) -> Result<Self, ComponentError> {
        let mut drawable = Drawable::from_data(data);
        drawable.region = Some(Rect::default());

        let mut component = Self {
            drawable,
            texture: None,
            animations: None,
            current: None,
            current_frame: 0,
            next_frame_timer: 0.0,
            playing: false,
            remaining: None,
        };

        let is_animation_file = Path::new(&data.path)
            .extension()
            .is_some_and(|extension| extension == ANIMATION_EXTENSION);

        if !is_animation_file {
            warn!(
                target: "components",
                "`{}` is not an .{} file, animated texture stays empty",
                data.path,
                ANIMATION_EXTENSION
            );
            return Ok(component);
        }

        let animations = assets.animations(&data.path)?;
        let texture = assets.texture(animations.texture())?;
        component.drawable.source = Some(DrawSource::Texture(texture.key().clone()));
        component.texture = Some(texture);

        let default = animations.default_animation().map(str::to_string);
        component.animations = Some(animations);
        if let Some(name) = default {
            component.play(&name);
        }

        Ok(component)
    }

    //--- Playback ---------------------------------------------------------

    /// Plays `name` from its first frame, looping, unflipped.
    pub fn play(&mut self, name: &str) -> bool {
        self.play_with(name, None, Some(Flip::None))
    }

    /// Plays `name` with optional duration and flip.
    ///
    /// With a duration, the default animation resumes once it elapses.
    /// A `None` flip keeps the current one. Returns `false` if the
    /// animation does not exist.
    pub fn play_with(&mut self, name: &str, duration: Option<f32>, flip: Option<Flip>) -> bool {
        let Some(animation) = self
            .animations
            .as_ref()
            .and_then(|set| set.get(name))
            .cloned()
        else {
            return false;
        };

        self.remaining = duration.filter(|seconds| *seconds >= 0.0);
        self.drawable.region = Some(Rect::new(
            animation.start_x,
            animation.start_y,
            animation.frame_width,
            animation.frame_height,
        ));
        if let Some(flip) = flip {
            self.drawable.flip = flip;
        }

        self.current = Some((name.to_string(), animation));
        self.reset();
        self.next_frame_timer = 0.0;
        self.playing = true;
        true
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_animation(&self) -> Option<&str> {
        self.current.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn current_frame(&self) -> i32 {
        self.current_frame
    }

    //--- Frames -----------------------------------------------------------

    fn reset(&mut self) {
        self.current_frame = 0;
        if let (Some((_, animation)), Some(region)) = (&self.current, &mut self.drawable.region) {
            region.x = animation.start_x;
            region.y = animation.start_y;
        }
    }

    fn next_frame(&mut self) {
        let Some((_, animation)) = &self.current else {
            return;
        };

        self.current_frame += 1;
        if self.current_frame >= animation.frame_count {
            self.reset();
            return;
        }

        let Some(region) = &mut self.drawable.region else {
            return;
        };
        let step_x = animation.frame_width + animation.horizontal_spacing;
        let step_y = animation.frame_height + animation.vertical_spacing;
        match animation.progression {
            Progression::LeftToRight => region.x += step_x,
            Progression::RightToLeft => region.x -= step_x,
            Progression::TopToBottom => region.y += step_y,
            Progression::BottomToTop => region.y -= step_y,
        }
    }

    fn return_to_default(&mut self) {
        let default = self
            .animations
            .as_ref()
            .and_then(|set| set.default_animation())
            .map(str::to_string);

        let resumed = default.is_some_and(|name| self.play_with(&name, None, None));
        if !resumed {
            self.remaining = None;
            self.playing = false;
        }
    }
}

impl Component for AnimatedTextureComponent {
    fn kind(&self) -> ComponentType {
        ComponentType::AnimatedTexture
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DRAW | Capabilities::UPDATE
    }

    fn update(&mut self, delta_seconds: f32) {
        if !self.playing {
            return;
        }
        let Some((_, animation)) = &self.current else {
            return;
        };

        if animation.frame_count > 1 {
            let frame_duration = animation.frame_duration();
            self.next_frame_timer += delta_seconds;
            if self.next_frame_timer >= frame_duration {
                self.next_frame();
                self.next_frame_timer = 0.0;
            }
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= delta_seconds;
            if *remaining < 0.0 {
                self.return_to_default();
            }
        }
    }

    fn drawable(&self) -> Option<&Drawable> {
        Some(&self.drawable)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::{MemoryLoader, ResourceRoot};
    use std::fs;

    const HERO: &str = "\
<hero.png>
    <idle | play>
        frameWidth = 10
        frameHeight = 10
        numFrames = 3
        frameRate = 10
    </idle>
    <wave>
        startY = 10
        numFrames = 2
        horizontalFrameSpacing = 2
    </wave>
</hero.png>
";

    struct Fixture {
        _dir: tempfile::TempDir,
        assets: Assets,
    }

    fn fixture(text: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hero.sganim"), text).unwrap();

        let loader = MemoryLoader::new().with_texture(dir.path().join("hero.png"), 64, 64);
        let assets = Assets::new(ResourceRoot::new(dir.path()), Box::new(loader));
        Fixture { _dir: dir, assets }
    }

    fn data() -> ComponentInitData {
        ComponentInitData::new(ComponentType::AnimatedTexture).with_path("hero.sganim")
    }

    fn region(component: &AnimatedTextureComponent) -> Rect {
        component.drawable().and_then(|d| d.region).unwrap()
    }

    #[test]
    fn auto_plays_default_animation() {
        let fixture = fixture(HERO);
        let component = AnimatedTextureComponent::new(&data(), &fixture.assets).unwrap();

        assert!(component.is_playing());
        assert_eq!(component.current_animation(), Some("idle"));
        assert_eq!(region(&component), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn frames_advance_and_wrap() {
        let fixture = fixture(HERO);
        let mut component = AnimatedTextureComponent::new(&data(), &fixture.assets).unwrap();

        component.update(0.05);
        assert_eq!(component.current_frame(), 0);

        component.update(0.06);
        assert_eq!(component.current_frame(), 1);
        assert_eq!(region(&component).x, 10);

        component.update(0.1);
        component.update(0.1);
        assert_eq!(component.current_frame(), 0);
        assert_eq!(region(&component).x, 0);
    }

    #[test]
    fn timed_animation_returns_to_default() {
        let fixture = fixture(HERO);
        let mut component = AnimatedTextureComponent::new(&data(), &fixture.assets).unwrap();

        assert!(component.play_with("wave", Some(0.15), Some(Flip::Horizontal)));
        assert_eq!(region(&component), Rect::new(0, 10, 10, 10));

        component.update(0.1);
        assert_eq!(component.current_animation(), Some("wave"));
        assert_eq!(region(&component).x, 12);

        component.update(0.1);
        assert_eq!(component.current_animation(), Some("idle"));
        assert_eq!(component.drawable().unwrap().flip, Flip::Horizontal);
    }

    #[test]
    fn unknown_animation_is_rejected() {
        let fixture = fixture(HERO);
        let mut component = AnimatedTextureComponent::new(&data(), &fixture.assets).unwrap();

        assert!(!component.play("fly"));
        assert_eq!(component.current_animation(), Some("idle"));
    }

    #[test]
    fn tables_are_shared_through_the_cache() {
        let fixture = fixture(HERO);
        let first = AnimatedTextureComponent::new(&data(), &fixture.assets).unwrap();
        let second = AnimatedTextureComponent::new(&data(), &fixture.assets).unwrap();

        assert_eq!(fixture.assets.animation_cache().len(), 1);
        drop(first);
        drop(second);
        assert!(fixture.assets.animation_cache().is_empty());
    }

    #[test]
    fn persistent_tables_stay_cached() {
        let fixture = fixture(&HERO.replace("<hero.png>", "<hero.png | persistent>"));
        drop(AnimatedTextureComponent::new(&data(), &fixture.assets).unwrap());

        assert_eq!(fixture.assets.animation_cache().len(), 1);
    }

    #[test]
    fn non_animation_path_is_inert() {
        let fixture = fixture(HERO);
        let data = data().with_path("hero.png");
        let mut component = AnimatedTextureComponent::new(&data, &fixture.assets).unwrap();

        assert!(!component.is_playing());
        assert!(!component.play("idle"));
        assert!(component.drawable().unwrap().source.is_none());
    }
}
