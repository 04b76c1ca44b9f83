//=========================================================================
// Block & Property
//
// Generic records produced by the parser. A `Block` is immutable once the
// parser hands it out; consumers only read from it.
//
// Accessor contract:
// - A missing key yields the caller's default.
// - A present key whose value does not parse is a `ParseError`.
// - `get_vec2` expects "x, y"; a value without a comma yields (0, 0).
//
//=========================================================================

//=== External Crates =====================================================

use glam::Vec2;
use indexmap::IndexSet;

//=== Internal Modules ====================================================

use super::{trim, ParseError};

//=== Property ============================================================

/// A `key = value` line inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parses the value as a signed integer.
    pub fn value_int(&self) -> Result<i32, ParseError> {
        trim(&self.value)
            .parse::<i32>()
            .map_err(|_| self.invalid("integer"))
    }

    /// Parses the value as a float.
    pub fn value_float(&self) -> Result<f32, ParseError> {
        parse_float(trim(&self.value)).ok_or_else(|| self.invalid("float"))
    }

    /// Parses the value as an `x, y` pair.
    ///
    /// Splits at the first comma. A value with no comma at all is read as
    /// the zero vector rather than an error.
    pub fn value_vec2(&self) -> Result<Vec2, ParseError> {
        let Some((x, y)) = self.value.split_once(',') else {
            return Ok(Vec2::ZERO);
        };

        match (parse_float(trim(x)), parse_float(trim(y))) {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(self.invalid("pair of floats")),
        }
    }

    fn invalid(&self, expected: &'static str) -> ParseError {
        ParseError::InvalidValue {
            key: self.name.clone(),
            value: self.value.clone(),
            expected,
        }
    }
}

fn parse_float(text: &str) -> Option<f32> {
    text.parse::<f32>().ok()
}

//=== Block ===============================================================

/// One `<Name | specifiers>` ... `</Name>` section of a block file.
///
/// Properties keep file order and the first occurrence of a key wins on
/// lookup. Specifiers and free-form tokens keep first-seen order with
/// duplicates collapsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub(super) name: String,
    pub(super) specifiers: IndexSet<String>,
    pub(super) properties: Vec<Property>,
    pub(super) other: IndexSet<String>,
    pub(super) sub_blocks: Vec<Block>,
}

impl Block {
    pub(super) fn new(name: String, specifiers: IndexSet<String>) -> Self {
        Self {
            name,
            specifiers,
            ..Self::default()
        }
    }

    //--- Raw Access -------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specifiers(&self) -> &IndexSet<String> {
        &self.specifiers
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Lines that are neither properties, comments nor blocks.
    pub fn other(&self) -> &IndexSet<String> {
        &self.other
    }

    pub fn sub_blocks(&self) -> &[Block] {
        &self.sub_blocks
    }

    //--- Lookup -----------------------------------------------------------

    /// Returns the first direct sub-block with the given name.
    pub fn find_block(&self, name: &str) -> Option<&Block> {
        self.sub_blocks.iter().find(|block| block.name == name)
    }

    /// Iterates direct sub-blocks whose name is not in `excluded`.
    pub fn blocks_not_of<'a>(
        &'a self,
        excluded: &'a [&'a str],
    ) -> impl Iterator<Item = &'a Block> + 'a {
        self.sub_blocks
            .iter()
            .filter(move |block| !excluded.contains(&block.name.as_str()))
    }

    /// Returns the first property with the given key.
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == key)
    }

    /// Returns `true` if the header carries the given specifier.
    pub fn has(&self, specifier: &str) -> bool {
        self.specifiers.contains(specifier)
    }

    //--- Typed Accessors --------------------------------------------------

    /// Returns the raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.property(key).map(Property::value)
    }

    /// Returns the raw value of `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn get_int(&self, key: &str, default: i32) -> Result<i32, ParseError> {
        self.property(key).map_or(Ok(default), Property::value_int)
    }

    pub fn get_float(&self, key: &str, default: f32) -> Result<f32, ParseError> {
        self.property(key).map_or(Ok(default), Property::value_float)
    }

    pub fn get_vec2(&self, key: &str, default: Vec2) -> Result<Vec2, ParseError> {
        self.property(key).map_or(Ok(default), Property::value_vec2)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn block_with(properties: &[(&str, &str)]) -> Block {
        let mut block = Block::new("Test".into(), IndexSet::new());
        block.properties = properties
            .iter()
            .map(|(key, value)| Property::new(*key, *value))
            .collect();
        block
    }

    //--- Property Parsing -------------------------------------------------

    #[test]
    fn int_accessor_uses_default_only_when_absent() {
        let block = block_with(&[("count", "42")]);
        assert_eq!(block.get_int("count", 0).unwrap(), 42);
        assert_eq!(block.get_int("missing", 7).unwrap(), 7);
    }

    #[test]
    fn malformed_int_is_an_error() {
        let block = block_with(&[("count", "forty-two")]);
        let error = block.get_int("count", 0).unwrap_err();
        assert!(matches!(
            error,
            ParseError::InvalidValue { ref key, expected: "integer", .. } if key == "count"
        ));
    }

    #[test]
    fn float_accessor_parses_and_rejects() {
        let block = block_with(&[("rate", "0.25"), ("bad", "fast")]);
        assert_eq!(block.get_float("rate", 1.0).unwrap(), 0.25);
        assert!(block.get_float("bad", 1.0).is_err());
        assert_eq!(block.get_float("absent", 1.5).unwrap(), 1.5);
    }

    #[test]
    fn vec2_without_comma_is_zero() {
        let block = block_with(&[("position", "12 34")]);
        assert_eq!(block.get_vec2("position", Vec2::ONE).unwrap(), Vec2::ZERO);
    }

    #[test]
    fn vec2_splits_at_first_comma_and_trims() {
        let block = block_with(&[("position", " 1.5 ,  -2 ")]);
        assert_eq!(
            block.get_vec2("position", Vec2::ZERO).unwrap(),
            Vec2::new(1.5, -2.0)
        );

        let extra = block_with(&[("position", "1, 2, 3")]);
        assert!(extra.get_vec2("position", Vec2::ZERO).is_err());
    }

    #[test]
    fn vec2_default_when_absent() {
        let block = block_with(&[]);
        assert_eq!(block.get_vec2("size", Vec2::ONE).unwrap(), Vec2::ONE);
    }

    #[test]
    fn first_property_wins() {
        let block = block_with(&[("a", "1"), ("a", "2")]);
        assert_eq!(block.get("a"), Some("1"));
        assert_eq!(block.get_or("b", "fallback"), "fallback");
    }

    //--- Sub-Blocks -------------------------------------------------------

    #[test]
    fn find_block_and_exclusion() {
        let mut root = Block::new("Root".into(), IndexSet::new());
        for name in ["Components", "Child", "Scripts", "Other"] {
            root.sub_blocks.push(Block::new(name.into(), IndexSet::new()));
        }

        assert!(root.find_block("Scripts").is_some());
        assert!(root.find_block("Nope").is_none());

        let names: Vec<&str> = root
            .blocks_not_of(&["Components", "Scripts"])
            .map(Block::name)
            .collect();
        assert_eq!(names, vec!["Child", "Other"]);
    }
}
