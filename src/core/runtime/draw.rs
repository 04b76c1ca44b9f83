//=========================================================================
// Draw List
//
// Flattens the visible part of the scene into commands for an external
// renderer. Visibility is decided at the orphan: a visible root draws its
// whole subtree.
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;

//=== Internal Modules ====================================================

use super::Runtime;
use crate::core::components::{Capabilities, DrawSource, Flip};
use crate::core::math::Rect;
use crate::core::object::ObjectId;

//=== DrawCommand =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub owner: ObjectId,

    /// Absolute position of the owner.
    pub position: Vec2,

    /// Absolute size of the owner, used as a scale on the source.
    pub size: Vec2,

    pub z_index: i32,
    pub source: DrawSource,

    /// `None` draws the full texture.
    pub region: Option<Rect>,

    pub flip: Flip,
    pub center_origin: bool,

    /// Position is in window pixels rather than world units.
    pub screen_space: bool,
}

impl DrawCommand {
    pub fn is_full_texture(&self) -> bool {
        self.region.is_none()
    }
}

//=== Collection ==========================================================

impl Runtime {
    /// Commands for every drawable component under a visible orphan,
    /// sorted by z-index (stable, so equal keys keep scene order).
    pub fn draw_list(&mut self) -> Vec<DrawCommand> {
        let mut owners = Vec::new();
        for root in self.orphan_objects().filter(|object| object.is_visible()) {
            self.collect_subtree(root.id(), &mut owners);
        }

        let mut commands = Vec::new();
        for owner in owners {
            let (Some(position), Some(size)) = (self.position(owner), self.size(owner)) else {
                continue;
            };
            let Some(object) = self.registry.get_mut(owner) else {
                continue;
            };
            let screen_space = object.is_screen_position();

            for component in object.components_mut() {
                if !component.has(Capabilities::DRAW) {
                    continue;
                }
                component.prepare_draw();

                let Some(drawable) = component.drawable() else {
                    continue;
                };
                let Some(source) = drawable.source.clone() else {
                    continue;
                };

                commands.push(DrawCommand {
                    owner,
                    position,
                    size,
                    z_index: drawable.z_index,
                    source,
                    region: drawable.region,
                    flip: drawable.flip,
                    center_origin: drawable.center_origin,
                    screen_space,
                });
            }
        }

        commands.sort_by_key(|command| command.z_index);
        commands
    }

    fn collect_subtree(&self, id: ObjectId, out: &mut Vec<ObjectId>) {
        out.push(id);
        for &child in self.children(id) {
            self.collect_subtree(child, out);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::blueprint::{ComponentInitData, ComponentType, ObjectBlueprint};
    use crate::core::object::ObjectData;
    use crate::core::resources::MemoryLoader;
    use crate::core::runtime::RuntimeConfig;

    fn runtime() -> Runtime {
        let loader = MemoryLoader::new()
            .with_texture("res/back.png", 64, 64)
            .with_texture("res/front.png", 8, 8)
            .with_font("res/mono.ttf");
        Runtime::with_loader(RuntimeConfig::new("res"), Box::new(loader))
    }

    fn texture(path: &str, z_index: i32) -> ComponentInitData {
        ComponentInitData::new(ComponentType::Texture)
            .with_path(path)
            .with_z_index(z_index)
    }

    #[test]
    fn sorted_by_z_index_across_the_subtree() {
        let mut runtime = runtime();
        let blueprint = ObjectBlueprint::from_data(ObjectData::new("Root", Vec2::new(5.0, 5.0)))
            .with_component(texture("front.png", 2))
            .with_child(
                ObjectBlueprint::from_data(ObjectData::new("Child", Vec2::new(1.0, 0.0)))
                    .with_component(texture("back.png", -1)),
            );
        let root = runtime.instantiate_blueprint(&blueprint).unwrap();

        let commands = runtime.draw_list();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].z_index, -1);
        assert_eq!(commands[0].position, Vec2::new(6.0, 5.0));
        assert_eq!(commands[1].owner, root);
        assert!(commands[1].is_full_texture());
    }

    #[test]
    fn hidden_roots_hide_their_subtree() {
        let mut runtime = runtime();
        let mut data = ObjectData::new("Hidden", Vec2::ZERO);
        data.visible = false;
        let blueprint = ObjectBlueprint::from_data(data).with_child(
            ObjectBlueprint::from_data(ObjectData::new("Child", Vec2::ZERO))
                .with_component(texture("back.png", 0)),
        );
        runtime.instantiate_blueprint(&blueprint).unwrap();

        assert!(runtime.draw_list().is_empty());
    }

    #[test]
    fn text_is_prepared_before_drawing() {
        let mut runtime = runtime();
        let blueprint = ObjectBlueprint::from_data(ObjectData::new("Label", Vec2::ZERO))
            .with_component(
                ComponentInitData::new(ComponentType::Text)
                    .with_path("mono.ttf")
                    .with_text("score", 12),
            );
        runtime.instantiate_blueprint(&blueprint).unwrap();

        let commands = runtime.draw_list();
        assert!(matches!(
            &commands[0].source,
            DrawSource::Text { text, pt_size: 12, .. } if text == "score"
        ));
    }
}
