//=========================================================================
// Runtime
//
// Owns the live scene: the object registry, pending destructions, the
// behavior table and the shared resources. Every scene operation goes
// through a `Runtime` value; nothing is global.
//
// Materialization of one blueprint:
// ```text
// insert object (attributes copied)
//   → construct components        (dispatch on ComponentType)
//   → resolve behavior names      (BehaviorTable, begin queued)
//   → materialize children        (recursively, then attach)
// ```
// A failure part-way leaves what was already built in the registry.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::Path;
use std::time::Instant;

//=== External Crates =====================================================

use glam::Vec2;
use log::{debug, warn};

//=== Internal Modules ====================================================

use super::destroy_queue::DestroyQueue;
use super::registry::Registry;
use super::{Result, RuntimeConfig};
use crate::core::audio::{AudioService, SilentAudio};
use crate::core::behavior::{Behavior, BehaviorTable};
use crate::core::blueprint::{ComponentType, ObjectBlueprint};
use crate::core::components::{self, Capabilities, Component, TextComponent};
use crate::core::input::{InputEvent, InputState};
use crate::core::object::{Object, ObjectData, ObjectError, ObjectId};
use crate::core::parser::Block;
use crate::core::resources::{Assets, FsResourceLoader, ResourceLoader, ResourceRoot};

//=== Runtime =============================================================

pub struct Runtime {
    pub(super) registry: Registry,
    pub(super) destroy_queue: DestroyQueue,
    behaviors: BehaviorTable,
    assets: Assets,
    input: InputState,
    audio: Box<dyn AudioService>,
    config: RuntimeConfig,
    pub(super) last_tick: Option<Instant>,
    pub(super) ticks: u64,
}

impl Runtime {
    //=====================================================================
    // Construction
    //=====================================================================

    /// Runtime reading resources from disk.
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_loader(config, Box::new(FsResourceLoader))
    }

    pub fn with_loader(config: RuntimeConfig, loader: Box<dyn ResourceLoader>) -> Self {
        debug!(
            target: "runtime",
            "Runtime created (resources: {})",
            config.resource_root.path().display()
        );

        Self {
            registry: Registry::new(),
            destroy_queue: DestroyQueue::new(),
            behaviors: BehaviorTable::new(),
            assets: Assets::new(config.resource_root.clone(), loader),
            input: InputState::new(),
            audio: Box::new(SilentAudio::new()),
            config,
            last_tick: None,
            ticks: 0,
        }
    }

    /// Replaces the audio backend.
    pub fn with_audio(mut self, audio: Box<dyn AudioService>) -> Self {
        self.audio = audio;
        self
    }

    //=====================================================================
    // Services
    //=====================================================================

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn resources(&self) -> &ResourceRoot {
        self.assets.root()
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn behaviors(&self) -> &BehaviorTable {
        &self.behaviors
    }

    /// Table consulted when a scene names a behavior.
    pub fn behaviors_mut(&mut self) -> &mut BehaviorTable {
        &mut self.behaviors
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Folds one tick worth of input batches into the input state.
    pub fn feed_input(&mut self, batches: &[Vec<InputEvent>]) {
        self.input.begin_frame();
        for batch in batches {
            self.input.apply(batch);
        }
        self.input.end_frame();
    }

    pub fn audio(&mut self) -> &mut dyn AudioService {
        self.audio.as_mut()
    }

    //=====================================================================
    // Instantiation
    //=====================================================================

    /// Creates an empty orphan object at `position`.
    ///
    /// Without a name, or with an empty one, the object is called `Object`,
    /// or `Object #N` when other objects exist (N counts live objects
    /// including this one).
    pub fn instantiate_at(&mut self, position: Vec2, name: Option<&str>) -> ObjectId {
        let name = name.filter(|name| !name.is_empty());
        let id = self
            .registry
            .insert_with(|id| Object::new(id, ObjectData::new(name.unwrap_or_default(), position)));

        if name.is_none() {
            let count = self.registry.len();
            let generated = if count == 1 {
                String::from("Object")
            } else {
                format!("Object #{}", count)
            };
            if let Some(object) = self.registry.get_mut(id) {
                object.set_name(generated);
            }
        }
        id
    }

    /// Materializes the object described by a resource-relative file.
    pub fn instantiate_file(&mut self, path: impl AsRef<Path>) -> Result<ObjectId> {
        let blueprint = ObjectBlueprint::from_file(path, self.assets.root())?;
        self.instantiate_blueprint(&blueprint)
    }

    /// Materializes the object described by a parsed block.
    pub fn instantiate_block(&mut self, block: &Block) -> Result<ObjectId> {
        let blueprint = ObjectBlueprint::from_block(block, self.assets.root())?;
        self.instantiate_blueprint(&blueprint)
    }

    /// Materializes a blueprint and its whole subtree.
    ///
    /// # Errors
    ///
    /// Stops at the first component that cannot be constructed. Objects
    /// created before the failure stay registered.
    pub fn instantiate_blueprint(&mut self, blueprint: &ObjectBlueprint) -> Result<ObjectId> {
        let id = self
            .registry
            .insert_with(|id| Object::new(id, blueprint.data().clone()));

        for data in blueprint.components() {
            let component = components::construct(data, &self.assets)?;
            self.require_object_mut(id)?.add_component(component);
        }

        for name in blueprint.behavior_names() {
            self.add_behavior_by_name(id, name)?;
        }

        for child in blueprint.children() {
            let child = self.instantiate_blueprint(child)?;
            self.attach(id, child)?;
        }

        debug!(
            target: "runtime",
            "Instantiated `{}` as {}",
            blueprint.name(),
            id
        );
        Ok(id)
    }

    /// Attaches the behavior registered under `name`.
    ///
    /// Returns `false`, after logging, when no behavior has that name.
    pub fn add_behavior_by_name(&mut self, id: ObjectId, name: &str) -> Result<bool> {
        let Some((behavior, updatable)) = self.behaviors.create(name, id) else {
            warn!(
                target: "runtime",
                "{}: unknown behavior `{}` ignored",
                self.name_of(id),
                name
            );
            return Ok(false);
        };

        self.require_object_mut(id)?
            .add_behavior(name, behavior, updatable);
        Ok(true)
    }

    //=====================================================================
    // Structure
    //=====================================================================

    /// Makes `child` a child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails if either object is gone, if `child` already has a parent,
    /// or if `child` is `parent` or one of its ancestors.
    pub fn attach(&mut self, parent: ObjectId, child: ObjectId) -> Result<()> {
        let child_object = self.require_object(child)?;
        let parent_object = self.require_object(parent)?;

        if child_object.parent().is_some() {
            return Err(ObjectError::AlreadyAttached {
                parent: parent_object.name().to_string(),
                child: child_object.name().to_string(),
            }
            .into());
        }
        if self.ancestors_and_self(parent).any(|id| id == child) {
            return Err(ObjectError::Cycle {
                parent: parent_object.name().to_string(),
                child: child_object.name().to_string(),
            }
            .into());
        }

        self.require_object_mut(child)?.set_parent(Some(parent));
        self.require_object_mut(parent)?.push_child(child);
        Ok(())
    }

    /// Removes `child` from `parent`, leaving it an orphan.
    pub fn detach(&mut self, parent: ObjectId, child: ObjectId) -> Result<()> {
        let child_object = self.require_object(child)?;
        let parent_object = self.require_object(parent)?;

        if child_object.parent() != Some(parent) {
            return Err(ObjectError::NotAChild {
                parent: parent_object.name().to_string(),
                child: child_object.name().to_string(),
            }
            .into());
        }

        self.require_object_mut(parent)?.remove_child(child);
        self.require_object_mut(child)?.set_parent(None);
        Ok(())
    }

    /// `attach` seen from the child.
    pub fn attach_to(&mut self, child: ObjectId, parent: ObjectId) -> Result<()> {
        self.attach(parent, child)
    }

    /// `detach` seen from the child.
    pub fn detach_from(&mut self, child: ObjectId, parent: ObjectId) -> Result<()> {
        self.detach(parent, child)
    }

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.registry.get(id)?.parent()
    }

    /// Direct children; empty for objects that are gone.
    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.registry.get(id).map(Object::children).unwrap_or_default()
    }

    /// Absolute position: the sum of relative positions up the parent chain.
    pub fn position(&self, id: ObjectId) -> Option<Vec2> {
        self.accumulate(id, Object::relative_position)
    }

    /// Absolute size: the sum of relative sizes up the parent chain.
    pub fn size(&self, id: ObjectId) -> Option<Vec2> {
        self.accumulate(id, Object::relative_size)
    }

    fn accumulate(&self, id: ObjectId, value: impl Fn(&Object) -> Vec2) -> Option<Vec2> {
        self.registry.get(id)?;
        Some(
            self.ancestors_and_self(id)
                .filter_map(|id| self.registry.get(id))
                .map(value)
                .sum(),
        )
    }

    fn ancestors_and_self(&self, id: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        std::iter::successors(Some(id), move |&current| self.parent(current))
    }

    //=====================================================================
    // Components & Behaviors
    //=====================================================================

    pub fn add_component(&mut self, id: ObjectId, component: Box<dyn Component>) -> Result<()> {
        self.require_object_mut(id)?.add_component(component);
        Ok(())
    }

    pub fn remove_component(&mut self, id: ObjectId, index: usize) -> Result<Box<dyn Component>> {
        Ok(self.require_object_mut(id)?.remove_component(index)?)
    }

    /// Attaches an already-built behavior; its begin runs on the next tick.
    pub fn add_behavior(
        &mut self,
        id: ObjectId,
        name: &str,
        behavior: Box<dyn Behavior>,
        updatable: bool,
    ) -> Result<()> {
        self.require_object_mut(id)?
            .add_behavior(name, behavior, updatable);
        Ok(())
    }

    pub fn remove_behavior(&mut self, id: ObjectId, name: &str) -> Result<()> {
        Ok(self.require_object_mut(id)?.remove_behavior(name)?)
    }

    //--- Capability Search ------------------------------------------------
    //
    // Search order: the object's own list, then each child's subtree in
    // child order. Parents are never searched.
    //

    /// Every component of the subtree rooted at `id`, in search order.
    pub fn subtree_components(&self, id: ObjectId) -> Vec<&(dyn Component + 'static)> {
        let mut found = Vec::new();
        self.collect_components(id, &mut |component| {
            found.push(component);
        });
        found
    }

    fn collect_components<'a>(
        &'a self,
        id: ObjectId,
        visit: &mut dyn FnMut(&'a (dyn Component + 'static)),
    ) {
        let Some(object) = self.registry.get(id) else {
            return;
        };
        for component in object.components() {
            visit(component);
        }
        for &child in object.children() {
            self.collect_components(child, visit);
        }
    }

    /// First component of type `kind`.
    pub fn find_component(
        &self,
        id: ObjectId,
        kind: ComponentType,
    ) -> Option<&(dyn Component + 'static)> {
        self.subtree_components(id)
            .into_iter()
            .find(|component| component.kind() == kind)
    }

    pub fn components_of_type(
        &self,
        id: ObjectId,
        kind: ComponentType,
    ) -> Vec<&(dyn Component + 'static)> {
        self.subtree_components(id)
            .into_iter()
            .filter(|component| component.kind() == kind)
            .collect()
    }

    /// Components exposing every capability in `capabilities`.
    pub fn components_with(
        &self,
        id: ObjectId,
        capabilities: Capabilities,
    ) -> Vec<&(dyn Component + 'static)> {
        self.subtree_components(id)
            .into_iter()
            .filter(|component| component.has(capabilities))
            .collect()
    }

    pub fn has_component(&self, id: ObjectId, kind: ComponentType) -> bool {
        self.find_component(id, kind).is_some()
    }

    pub fn require_component(
        &self,
        id: ObjectId,
        kind: ComponentType,
    ) -> Result<&(dyn Component + 'static)> {
        self.find_component(id, kind).ok_or_else(|| {
            ObjectError::MissingCapability {
                object: self.name_of(id),
                requested: kind.to_string(),
            }
            .into()
        })
    }

    /// First component of concrete type `T`.
    pub fn component<T: Component>(&self, id: ObjectId) -> Option<&T> {
        self.subtree_components(id)
            .into_iter()
            .find_map(|component| component.downcast_ref::<T>())
    }

    pub fn component_mut<T: Component>(&mut self, id: ObjectId) -> Option<&mut T> {
        let (owner, index) = self.locate(id, &|object: &Object| {
            object
                .components()
                .position(|component| component.downcast_ref::<T>().is_some())
        })?;
        self.registry
            .get_mut(owner)?
            .component_mut(index)?
            .downcast_mut::<T>()
    }

    /// Reopens the font of the first text component at `pt_size`.
    ///
    /// # Errors
    ///
    /// Fails when the subtree has no text component or the font cannot be
    /// opened at that size; the previous font then stays in use.
    pub fn set_text_font_size(&mut self, id: ObjectId, pt_size: i32) -> Result<()> {
        let text = self.component::<TextComponent>(id).ok_or_else(|| ObjectError::MissingCapability {
            object: self.name_of(id),
            requested: ComponentType::Text.to_string(),
        })?;
        let font = self.assets.font(text.font_path(), pt_size)?;

        if let Some(text) = self.component_mut::<TextComponent>(id) {
            text.set_font(font);
        }
        Ok(())
    }

    /// First behavior of concrete type `T`.
    pub fn behavior<T: Behavior>(&self, id: ObjectId) -> Option<&T> {
        let (owner, _) = self.locate(id, &|object: &Object| object.behavior::<T>().map(|_| 0))?;
        self.registry.get(owner)?.behavior::<T>()
    }

    pub fn behavior_mut<T: Behavior>(&mut self, id: ObjectId) -> Option<&mut T> {
        let (owner, _) = self.locate(id, &|object: &Object| object.behavior::<T>().map(|_| 0))?;
        self.registry.get_mut(owner)?.behavior_mut::<T>()
    }

    pub fn has_behavior<T: Behavior>(&self, id: ObjectId) -> bool {
        self.behavior::<T>(id).is_some()
    }

    pub fn require_behavior<T: Behavior>(&self, id: ObjectId) -> Result<&T> {
        self.behavior::<T>(id).ok_or_else(|| {
            ObjectError::MissingCapability {
                object: self.name_of(id),
                requested: short_type_name::<T>().to_string(),
            }
            .into()
        })
    }

    /// Finds the first object of the subtree, in search order, for which
    /// `position_of` reports a position.
    fn locate(
        &self,
        id: ObjectId,
        position_of: &dyn Fn(&Object) -> Option<usize>,
    ) -> Option<(ObjectId, usize)> {
        let object = self.registry.get(id)?;
        if let Some(index) = position_of(object) {
            return Some((id, index));
        }
        object
            .children()
            .iter()
            .find_map(|&child| self.locate(child, position_of))
    }

    //=====================================================================
    // Destruction
    //=====================================================================

    /// Requests destruction of `id` and of its current direct children.
    ///
    /// Nothing is freed until the end of the current (or next) tick.
    pub fn destroy(&mut self, id: ObjectId) -> Result<()> {
        let children = self.require_object(id)?.children().to_vec();
        if !self.destroy_queue.push(id, children) {
            debug!(target: "runtime", "{} already queued for destruction", id);
        }
        Ok(())
    }

    pub fn is_pending_destruction(&self, id: ObjectId) -> bool {
        self.destroy_queue.contains(id)
    }

    //=====================================================================
    // Queries
    //=====================================================================

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.registry.get(id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.registry.get_mut(id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.registry.contains(id)
    }

    /// Every live object in registration order.
    pub fn all_objects(&self) -> impl Iterator<Item = &Object> {
        self.registry.iter()
    }

    pub fn orphan_objects(&self) -> impl Iterator<Item = &Object> {
        self.registry.iter().filter(|object| object.is_orphan())
    }

    /// First object, in registration order, called `name`.
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.registry
            .iter()
            .find(|object| object.name() == name)
            .map(Object::id)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    //--- Internal Helpers -------------------------------------------------

    pub(crate) fn require_object(&self, id: ObjectId) -> std::result::Result<&Object, ObjectError> {
        self.registry.get(id).ok_or(ObjectError::NotFound(id))
    }

    pub(crate) fn require_object_mut(
        &mut self,
        id: ObjectId,
    ) -> std::result::Result<&mut Object, ObjectError> {
        self.registry.get_mut(id).ok_or(ObjectError::NotFound(id))
    }

    fn name_of(&self, id: ObjectId) -> String {
        self.registry
            .get(id)
            .map(|object| object.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("objects", &self.registry.len())
            .field("pending_destruction", &self.destroy_queue.len())
            .field("behaviors", &self.behaviors)
            .field("ticks", &self.ticks)
            .finish()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::blueprint::ComponentInitData;
    use crate::core::components::{BoxComponent, TextureComponent};
    use crate::core::resources::MemoryLoader;
    use crate::core::runtime::SceneError;

    fn runtime() -> Runtime {
        let loader = MemoryLoader::new().with_texture("res/hero.png", 32, 16);
        Runtime::with_loader(RuntimeConfig::new("res"), Box::new(loader))
    }

    fn boxed(runtime: &mut Runtime, name: &str) -> ObjectId {
        let id = runtime.instantiate_at(Vec2::ZERO, Some(name));
        runtime
            .add_component(id, Box::new(BoxComponent::new(&ComponentInitData::default())))
            .unwrap();
        id
    }

    //=====================================================================
    // Instantiation
    //=====================================================================

    #[test]
    fn generated_names_count_live_objects() {
        let mut runtime = runtime();
        let first = runtime.instantiate_at(Vec2::ZERO, None);
        assert_eq!(runtime.object(first).unwrap().name(), "Object");

        let second = runtime.instantiate_at(Vec2::new(1.0, 1.0), None);
        assert_eq!(runtime.object(second).unwrap().name(), "Object #2");

        let named = runtime.instantiate_at(Vec2::ZERO, Some("Player"));
        assert_eq!(runtime.find_by_name("Player"), Some(named));
    }

    #[test]
    fn empty_name_gets_a_generated_one() {
        let mut runtime = runtime();
        let only = runtime.instantiate_at(Vec2::ZERO, Some(""));
        assert_eq!(runtime.object(only).unwrap().name(), "Object");

        let next = runtime.instantiate_at(Vec2::ZERO, Some(""));
        assert_eq!(runtime.object(next).unwrap().name(), "Object #2");
        assert_eq!(runtime.find_by_name(""), None);
    }

    #[test]
    fn blueprint_registers_parent_before_children() {
        let mut runtime = runtime();
        let blueprint = ObjectBlueprint::from_data(ObjectData::new("Root", Vec2::ZERO))
            .with_component(ComponentInitData::new(ComponentType::Texture).with_path("hero.png"))
            .with_child(ObjectBlueprint::from_data(ObjectData::new("Child", Vec2::ONE)));

        let root = runtime.instantiate_blueprint(&blueprint).unwrap();

        let names: Vec<_> = runtime.all_objects().map(Object::name).collect();
        assert_eq!(names, ["Root", "Child"]);
        assert_eq!(runtime.children(root).len(), 1);
        assert!(runtime.has_component(root, ComponentType::Texture));
    }

    #[test]
    fn failed_component_keeps_partial_object() {
        let mut runtime = runtime();
        let blueprint = ObjectBlueprint::from_data(ObjectData::new("Broken", Vec2::ZERO))
            .with_component(ComponentInitData::new(ComponentType::Box))
            .with_component(ComponentInitData::new(ComponentType::Texture).with_path("gone.png"));

        let result = runtime.instantiate_blueprint(&blueprint);
        assert!(matches!(result, Err(SceneError::Component(_))));

        let broken = runtime.find_by_name("Broken").unwrap();
        assert_eq!(runtime.object(broken).unwrap().component_count(), 1);
    }

    #[test]
    fn unknown_behavior_names_are_skipped() {
        let mut runtime = runtime();
        let id = runtime.instantiate_at(Vec2::ZERO, None);
        assert!(!runtime.add_behavior_by_name(id, "Nobody").unwrap());
        assert_eq!(runtime.object(id).unwrap().behavior_count(), 0);
    }

    //=====================================================================
    // Structure
    //=====================================================================

    #[test]
    fn attach_refuses_cycles() {
        let mut runtime = runtime();
        let a = runtime.instantiate_at(Vec2::ZERO, Some("a"));
        let b = runtime.instantiate_at(Vec2::ZERO, Some("b"));
        runtime.attach(a, b).unwrap();

        assert!(matches!(
            runtime.attach(b, a),
            Err(SceneError::Object(ObjectError::Cycle { .. }))
        ));
        assert!(matches!(
            runtime.attach(a, a),
            Err(SceneError::Object(ObjectError::Cycle { .. }))
        ));
    }

    #[test]
    fn absolute_values_accumulate_up_the_chain() {
        let mut runtime = runtime();
        let root = runtime.instantiate_at(Vec2::new(10.0, 5.0), Some("root"));
        let mid = runtime.instantiate_at(Vec2::new(1.0, 1.0), Some("mid"));
        let leaf = runtime.instantiate_at(Vec2::new(0.5, 0.0), Some("leaf"));
        runtime.attach(root, mid).unwrap();
        runtime.attach_to(leaf, mid).unwrap();

        assert_eq!(runtime.position(leaf), Some(Vec2::new(11.5, 6.0)));
        assert_eq!(runtime.size(leaf), Some(Vec2::new(3.0, 3.0)));
        assert_eq!(runtime.position(root), Some(Vec2::new(10.0, 5.0)));
    }

    //=====================================================================
    // Capability Search
    //=====================================================================

    #[test]
    fn search_covers_own_list_then_children_never_parents() {
        let mut runtime = runtime();
        let parent = runtime.instantiate_at(Vec2::ZERO, Some("parent"));
        let child = boxed(&mut runtime, "child");
        runtime.attach(parent, child).unwrap();

        assert!(runtime.has_component(parent, ComponentType::Box));
        assert!(runtime.component::<BoxComponent>(parent).is_some());
        assert!(runtime.component::<TextureComponent>(parent).is_none());
        assert_eq!(runtime.components_with(parent, Capabilities::BOUNDS).len(), 1);

        let grandchild = runtime.instantiate_at(Vec2::ZERO, Some("grandchild"));
        runtime.attach(child, grandchild).unwrap();
        assert!(!runtime.has_component(grandchild, ComponentType::Box));
    }

    #[test]
    fn require_names_object_and_capability() {
        let mut runtime = runtime();
        let id = runtime.instantiate_at(Vec2::ZERO, Some("Hero"));

        let message = runtime
            .require_component(id, ComponentType::Tileset)
            .err()
            .unwrap()
            .to_string();
        assert!(message.contains("Hero"));
        assert!(message.contains("TilesetComponent"));
    }

    #[test]
    fn component_mut_reaches_into_children() {
        let mut runtime = runtime();
        let parent = runtime.instantiate_at(Vec2::ZERO, Some("parent"));
        let child = boxed(&mut runtime, "child");
        runtime.attach(parent, child).unwrap();

        runtime.component_mut::<BoxComponent>(parent).unwrap().active = false;
        assert!(!runtime.component::<BoxComponent>(child).unwrap().active);
    }

    #[test]
    fn text_font_size_changes_through_the_runtime() {
        let loader = MemoryLoader::new().with_font("res/mono.ttf");
        let mut runtime = Runtime::with_loader(RuntimeConfig::new("res"), Box::new(loader));
        let label = runtime.instantiate_at(Vec2::ZERO, Some("Label"));
        let data = ComponentInitData::new(ComponentType::Text)
            .with_path("mono.ttf")
            .with_text("Score", 12);
        let text = TextComponent::new(&data, runtime.assets()).unwrap();
        runtime.add_component(label, Box::new(text)).unwrap();

        runtime.set_text_font_size(label, 24).unwrap();
        assert_eq!(runtime.component::<TextComponent>(label).unwrap().pt_size(), 24);

        assert!(matches!(
            runtime.set_text_font_size(label, 0),
            Err(SceneError::Resource(_))
        ));
        assert_eq!(runtime.component::<TextComponent>(label).unwrap().pt_size(), 24);

        let bare = runtime.instantiate_at(Vec2::ZERO, Some("Bare"));
        assert!(matches!(
            runtime.set_text_font_size(bare, 24),
            Err(SceneError::Object(ObjectError::MissingCapability { .. }))
        ));
    }

    //=====================================================================
    // Management
    //=====================================================================

    #[test]
    fn operations_on_dead_objects_fail() {
        let mut runtime = runtime();
        let id = runtime.instantiate_at(Vec2::ZERO, None);
        runtime.destroy(id).unwrap();
        runtime.tick(0.0);

        assert!(matches!(
            runtime.destroy(id),
            Err(SceneError::Object(ObjectError::NotFound(_)))
        ));
        assert!(runtime.remove_component(id, 0).is_err());
        assert!(runtime.children(id).is_empty());
        assert_eq!(runtime.position(id), None);
    }
}
