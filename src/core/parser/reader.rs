//=========================================================================
// Parser
//
// Line-oriented reader that turns block text into a list of top-level
// `Block` trees.
//
// Rules:
// - Lines outside any block are ignored unless they open one.
// - A header starts at column 0 (after leading whitespace) with `<` and
//   ends at the last `>` on the line.
// - A block still open at end of input is kept and a warning is logged.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::Path;

//=== External Crates =====================================================

use indexmap::IndexSet;
use log::{debug, warn};

//=== Internal Modules ====================================================

use super::{trim, trim_end, trim_start, Block, ParseError, Property};

//=== Parser ==============================================================

/// Parsed content of one block source.
#[derive(Debug, Clone)]
pub struct Parser {
    origin: String,
    blocks: Vec<Block>,
}

impl Parser {
    /// Reads and parses a file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Open`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        debug!(target: "parser", "Parsing {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| ParseError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let parser = Self::parse(&text, path.display().to_string());
        debug!(
            target: "parser",
            "Parsed {} ({} top-level blocks)",
            parser.origin,
            parser.blocks.len()
        );
        Ok(parser)
    }

    /// Parses in-memory text.
    pub fn parse_str(text: &str) -> Self {
        Self::parse(text, "<memory>".to_string())
    }

    //--- Accessors --------------------------------------------------------

    /// Where the text came from (a file path or `<memory>`).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Returns the first top-level block.
    pub fn main_block(&self) -> Result<&Block, ParseError> {
        self.blocks.first().ok_or_else(|| self.no_block())
    }

    /// Consumes the parser and returns its first top-level block.
    pub fn into_main_block(mut self) -> Result<Block, ParseError> {
        if self.blocks.is_empty() {
            return Err(self.no_block());
        }
        Ok(self.blocks.swap_remove(0))
    }

    pub fn main_block_name(&self) -> Result<&str, ParseError> {
        self.main_block().map(Block::name)
    }

    fn no_block(&self) -> ParseError {
        ParseError::NoBlock {
            origin: self.origin.clone(),
        }
    }

    //--- Parsing ----------------------------------------------------------

    fn parse(text: &str, origin: String) -> Self {
        let mut lines = text.lines();
        let mut blocks = Vec::new();

        while let Some(raw) = lines.next() {
            if let Some(header) = block_header(trim_start(raw)) {
                blocks.push(read_block(header, &mut lines, &origin));
            }
        }

        Self { origin, blocks }
    }
}

//=== Line Classification =================================================

/// Returns the header text if `line` opens a block.
fn block_header(line: &str) -> Option<&str> {
    if !line.starts_with('<') || line.starts_with("</") {
        return None;
    }
    let close = line.rfind('>')?;
    Some(trim(&line[1..close]))
}

fn is_block_end(line: &str) -> bool {
    line.starts_with("</") && line.contains('>')
}

/// Splits `name | a, b` into the name and its specifier set.
fn split_header(header: &str) -> (String, IndexSet<String>) {
    match header.rfind('|') {
        None => (header.to_string(), IndexSet::new()),
        Some(separator) => {
            let name = trim_end(&header[..separator]).to_string();
            let specifiers = header[separator + 1..]
                .split(',')
                .map(trim)
                .filter(|spec| !spec.is_empty())
                .map(str::to_string)
                .collect();
            (name, specifiers)
        }
    }
}

//=== Block Body ==========================================================

fn read_block<'a, I>(header: &str, lines: &mut I, origin: &str) -> Block
where
    I: Iterator<Item = &'a str>,
{
    let (name, specifiers) = split_header(header);
    let mut block = Block::new(name, specifiers);

    while let Some(raw) = lines.next() {
        let line = trim_start(raw);

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if let Some(child) = block_header(line) {
            let sub_block = read_block(child, lines, origin);
            block.sub_blocks.push(sub_block);
            continue;
        }

        if is_block_end(line) {
            return block;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                block
                    .properties
                    .push(Property::new(trim_end(key), trim(value)));
            }
            None => {
                block.other.insert(trim_end(line).to_string());
            }
        }
    }

    warn!(
        target: "parser",
        "{}: block `{}` is not closed before end of input",
        origin,
        block.name
    );
    block
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;
    use std::io::Write;

    const PLAYER: &str = "\
<Player | persistent, path>
    position = 10, 20
    // not a property = ignored
    hp = 3

    <Components>
        <Texture>
            path = player.png
            z-index = 2
        </Texture>
    </Components>
    <Scripts>
        Movement
        Health
    </Scripts>
</Player>
";

    //--- Headers ----------------------------------------------------------

    #[test]
    fn parses_header_with_specifiers() {
        let parser = Parser::parse_str("<Foo|bar>\nx=5\n</Foo>\n");
        let block = parser.main_block().unwrap();

        assert_eq!(block.name(), "Foo");
        assert!(block.has("bar"));
        assert_eq!(block.get_int("x", 0).unwrap(), 5);
        assert_eq!(block.get_int("y", 7).unwrap(), 7);
    }

    #[test]
    fn name_is_text_before_last_pipe() {
        let parser = Parser::parse_str("< a | b | c , d ,>\n</>");
        let block = parser.main_block().unwrap();

        assert_eq!(block.name(), "a | b");
        let specs: Vec<&str> = block.specifiers().iter().map(String::as_str).collect();
        assert_eq!(specs, vec!["c", "d"]);
    }

    #[test]
    fn header_closes_at_last_angle_bracket() {
        let parser = Parser::parse_str("<a>b> trailing\n</x>");
        assert_eq!(parser.main_block_name().unwrap(), "a>b");
    }

    #[test]
    fn indented_header_still_opens_block() {
        let parser = Parser::parse_str("   <Indented>\n   </Indented>");
        assert_eq!(parser.main_block_name().unwrap(), "Indented");
    }

    //--- Bodies -----------------------------------------------------------

    #[test]
    fn parses_nested_document() {
        let parser = Parser::parse_str(PLAYER);
        let player = parser.main_block().unwrap();

        assert!(player.has("persistent"));
        assert!(player.has("path"));
        assert_eq!(
            player.get_vec2("position", Vec2::ZERO).unwrap(),
            Vec2::new(10.0, 20.0)
        );
        assert_eq!(player.properties().len(), 2);

        let texture = player
            .find_block("Components")
            .and_then(|components| components.find_block("Texture"))
            .unwrap();
        assert_eq!(texture.get("path"), Some("player.png"));
        assert_eq!(texture.get_int("z-index", 0).unwrap(), 2);

        let scripts: Vec<&str> = player
            .find_block("Scripts")
            .unwrap()
            .other()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(scripts, vec!["Movement", "Health"]);
    }

    #[test]
    fn property_splits_at_first_equals() {
        let parser = Parser::parse_str("<A>\n  expr = a = b  \n</A>");
        let block = parser.main_block().unwrap();
        assert_eq!(block.get("expr"), Some("a = b"));
    }

    #[test]
    fn closing_label_is_not_checked() {
        let parser = Parser::parse_str("<Outer>\n<Inner>\n</Outer>\nx = 1\n</Inner>\n");
        let outer = parser.main_block().unwrap();

        // `</Outer>` closed Inner; `x` belongs to Outer.
        assert_eq!(outer.sub_blocks().len(), 1);
        assert_eq!(outer.get("x"), Some("1"));
    }

    #[test]
    fn same_named_children_are_kept_in_order() {
        let parser = Parser::parse_str("<R>\n<C>\nn=1\n</C>\n<C>\nn=2\n</C>\n</R>");
        let root = parser.main_block().unwrap();
        let values: Vec<i32> = root
            .sub_blocks()
            .iter()
            .map(|block| block.get_int("n", 0).unwrap())
            .collect();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(root.find_block("C").unwrap().get("n"), Some("1"));
    }

    #[test]
    fn top_level_noise_is_ignored() {
        let parser = Parser::parse_str("garbage\nkey = value\n<A>\n</A>\n\n<B>\n</B>\n");
        let names: Vec<&str> = parser.blocks().iter().map(Block::name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn unterminated_block_is_kept() {
        let parser = Parser::parse_str("<Open>\nvalue = 1\n");
        assert_eq!(parser.main_block().unwrap().get("value"), Some("1"));
    }

    #[test]
    fn crlf_line_endings() {
        let parser = Parser::parse_str("<A|s>\r\nk = v\r\n</A>\r\n");
        let block = parser.main_block().unwrap();
        assert!(block.has("s"));
        assert_eq!(block.get("k"), Some("v"));
    }

    //--- Sources ----------------------------------------------------------

    #[test]
    fn empty_source_has_no_main_block() {
        let parser = Parser::parse_str("// nothing here\n");
        assert!(matches!(
            parser.main_block(),
            Err(ParseError::NoBlock { .. })
        ));
        assert!(parser.into_main_block().is_err());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = Parser::from_file(dir.path().join("absent.sgo")).unwrap_err();
        assert!(matches!(error, ParseError::Open { .. }));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.sgo");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(PLAYER.as_bytes()).unwrap();

        let parser = Parser::from_file(&path).unwrap();
        assert_eq!(parser.main_block_name().unwrap(), "Player");
        assert!(parser.origin().ends_with("player.sgo"));
    }

    //--- Properties -------------------------------------------------------

    proptest! {
        #[test]
        fn property_lines_survive_parsing(
            key in "[a-zA-Z][a-zA-Z0-9_-]{0,12}",
            value in "[a-zA-Z0-9.,_ -]{0,16}",
        ) {
            let text = format!("<Block>\n\t{key} =  {value}\n</Block>\n");
            let parser = Parser::parse_str(&text);
            let block = parser.main_block().unwrap();
            prop_assert_eq!(block.get(&key), Some(trim(&value)));
        }
    }
}
