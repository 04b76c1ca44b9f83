//=========================================================================
// Object Blueprint
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::debug;

//=== Internal Modules ====================================================

use super::{ComponentInitData, COMPONENTS_BLOCK, PATH_SPECIFIER, SCRIPTS_BLOCK};
use crate::core::object::ObjectData;
use crate::core::parser::{Block, ParseError, Parser};
use crate::core::resources::ResourceRoot;

//=== ObjectBlueprint =====================================================

/// Immutable tree describing an object and its descendants.
///
/// Children declared with the `path` specifier are read from their file
/// once, when the blueprint is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBlueprint {
    data: ObjectData,
    components: Vec<ComponentInitData>,
    behaviors: Vec<String>,
    children: Vec<ObjectBlueprint>,
}

impl ObjectBlueprint {
    //--- Construction -----------------------------------------------------

    /// Builds a blueprint from a resource-relative object file.
    ///
    /// # Errors
    ///
    /// Fails if any file in the tree cannot be read, holds no block,
    /// has a malformed attribute, or transcludes itself.
    pub fn from_file(
        path: impl AsRef<Path>,
        resources: &ResourceRoot,
    ) -> Result<Self, ParseError> {
        Self::load(path.as_ref(), resources, &mut Vec::new())
    }

    /// Builds a blueprint from an already-parsed object block.
    pub fn from_block(block: &Block, resources: &ResourceRoot) -> Result<Self, ParseError> {
        Self::build(block, resources, &mut Vec::new())
    }

    /// Builds a blueprint with no components, behaviors or children.
    pub fn from_data(data: ObjectData) -> Self {
        Self {
            data,
            components: Vec::new(),
            behaviors: Vec::new(),
            children: Vec::new(),
        }
    }

    fn load(
        relative: &Path,
        resources: &ResourceRoot,
        chain: &mut Vec<PathBuf>,
    ) -> Result<Self, ParseError> {
        let full = resources.path_to(relative);
        if chain.contains(&full) {
            return Err(ParseError::TransclusionCycle { path: full });
        }

        let block = Parser::from_file(&full)?.into_main_block()?;

        chain.push(full);
        let blueprint = Self::build(&block, resources, chain);
        chain.pop();
        blueprint
    }

    fn build(
        block: &Block,
        resources: &ResourceRoot,
        chain: &mut Vec<PathBuf>,
    ) -> Result<Self, ParseError> {
        let data = ObjectData::from_block(block)?;

        let components = match block.find_block(COMPONENTS_BLOCK) {
            Some(components) => components
                .sub_blocks()
                .iter()
                .map(ComponentInitData::from_block)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let behaviors: Vec<String> = block
            .find_block(SCRIPTS_BLOCK)
            .map(|scripts| scripts.other().iter().cloned().collect())
            .unwrap_or_default();

        let mut children = Vec::new();
        for child in block.blocks_not_of(&[COMPONENTS_BLOCK, SCRIPTS_BLOCK]) {
            let blueprint = if child.has(PATH_SPECIFIER) {
                Self::load(Path::new(child.name()), resources, chain)?
            } else {
                Self::build(child, resources, chain)?
            };
            children.push(blueprint);
        }

        debug!(
            target: "blueprint",
            "Built `{}`: {} components, {} behaviors, {} children",
            data.name,
            components.len(),
            behaviors.len(),
            children.len()
        );

        Ok(Self {
            data,
            components,
            behaviors,
            children,
        })
    }

    //--- Builders ---------------------------------------------------------

    pub fn with_component(mut self, component: ComponentInitData) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_behavior(mut self, name: impl Into<String>) -> Self {
        self.behaviors.push(name.into());
        self
    }

    pub fn with_child(mut self, child: ObjectBlueprint) -> Self {
        self.children.push(child);
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn data(&self) -> &ObjectData {
        &self.data
    }

    pub fn components(&self) -> &[ComponentInitData] {
        &self.components
    }

    pub fn behavior_names(&self) -> &[String] {
        &self.behaviors
    }

    pub fn children(&self) -> &[ObjectBlueprint] {
        &self.children
    }

    /// Number of objects this blueprint materializes into.
    pub fn object_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ObjectBlueprint::object_count)
            .sum::<usize>()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
