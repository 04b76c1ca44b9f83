//=========================================================================
// Blueprints
//
// Immutable descriptions of objects, built from parsed blocks and
// instantiable any number of times by the runtime.
//
// Object block layout:
// ```text
// <Player | flags>
//     position = 0, 0          → ObjectData
//     <Components>             → one ComponentInitData per sub-block
//         <TextureComponent>
//         </TextureComponent>
//     </Components>
//     <Scripts>                → one behavior name per free-form line
//         Movement
//     </Scripts>
//     <Weapon>                 → inline child
//     </Weapon>
//     <weapons/sword.sgo | path>  → child read from a resource file
//     </weapons/sword.sgo>
// </Player>
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod component_data;
mod object_blueprint;

//=== Public API ==========================================================

pub use component_data::{ComponentInitData, ComponentType};
pub use object_blueprint::ObjectBlueprint;

/// Reserved sub-block holding component records.
pub const COMPONENTS_BLOCK: &str = "Components";

/// Reserved sub-block holding behavior names.
pub const SCRIPTS_BLOCK: &str = "Scripts";

/// Specifier marking a block whose name is a resource file path.
pub const PATH_SPECIFIER: &str = "path";
