//! Syntax support (in-process): one tree-sitter parser per language-support entry.

use crate::kernel::language::LanguageId;
use ropey::Rope;
use tree_sitter::{Language, Parser, Tree};

/// Descriptor handed out by the language registry. Cheap to copy; builds parsers on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxSupport {
    language: LanguageId,
}

impl SyntaxSupport {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    pub fn language(self) -> LanguageId {
        self.language
    }

    pub fn grammar(self) -> Language {
        match self.language {
            LanguageId::Python => tree_sitter_python::language(),
            LanguageId::Java => tree_sitter_java::language(),
            LanguageId::Cpp => tree_sitter_cpp::language(),
            LanguageId::C => tree_sitter_c::language(),
            LanguageId::JavaScript => tree_sitter_javascript::language(),
            LanguageId::Rust => tree_sitter_rust::language(),
            LanguageId::Go => tree_sitter_go::language(),
        }
    }

    pub fn parse(self, rope: &Rope) -> Option<SyntaxDocument> {
        SyntaxDocument::new(self, rope)
    }
}

impl From<LanguageId> for SyntaxSupport {
    fn from(language: LanguageId) -> Self {
        Self::new(language)
    }
}

pub struct SyntaxDocument {
    support: SyntaxSupport,
    parser: Parser,
    tree: Tree,
}

impl std::fmt::Debug for SyntaxDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxDocument")
            .field("language", &self.support.language())
            .field("root", &self.tree.root_node().kind())
            .finish()
    }
}

impl SyntaxDocument {
    fn new(support: SyntaxSupport, rope: &Rope) -> Option<Self> {
        let mut parser = Parser::new();
        parser.set_language(support.grammar()).ok()?;
        let tree = parse_rope(&mut parser, rope)?;
        Some(Self {
            support,
            parser,
            tree,
        })
    }

    pub fn support(&self) -> SyntaxSupport {
        self.support
    }

    pub fn language(&self) -> LanguageId {
        self.support.language()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn reparse(&mut self, rope: &Rope) {
        if let Some(tree) = parse_rope(&mut self.parser, rope) {
            self.tree = tree;
        }
    }
}

fn parse_rope(parser: &mut Parser, rope: &Rope) -> Option<Tree> {
    let mut cache = RopeChunkCache::new(rope);
    parser.parse_with(&mut |byte_offset, _| cache.bytes_from(byte_offset), None)
}

struct RopeChunkCache<'a> {
    rope: &'a Rope,
    chunk: &'a str,
    start: usize,
    end: usize,
}

impl<'a> RopeChunkCache<'a> {
    fn new(rope: &'a Rope) -> Self {
        Self {
            rope,
            chunk: "",
            start: 0,
            end: 0,
        }
    }

    fn bytes_from(&mut self, byte_offset: usize) -> &'a [u8] {
        if byte_offset >= self.rope.len_bytes() {
            return &[];
        }

        if byte_offset < self.start || byte_offset >= self.end {
            let (chunk, chunk_start, _, _) = self.rope.chunk_at_byte(byte_offset);
            self.chunk = chunk;
            self.start = chunk_start;
            self.end = chunk_start + chunk.len();
        }

        let rel = byte_offset.saturating_sub(self.start);
        &self.chunk.as_bytes()[rel..]
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/syntax.rs"]
mod tests;
