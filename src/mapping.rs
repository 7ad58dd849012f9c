//! Files of expected rewrites.
//!
//! Each non-blank line that isn't a `#` comment pairs a source identifier with
//! the identifier it is expected to rewrite to:
//!
//! ```text
//! # columns
//! UserId1   = USER_ID_1
//! XMLParser = XML_PARSER  # acronym
//! ```

use std::{
    collections::HashMap,
    io,
    ops::Range,
    path::{Path, PathBuf},
};

use crate::rewriter::NameRewriter;

pub struct MappingFile {
    pub path: PathBuf,
    content: String,
    lines: Vec<Line>,
}

impl MappingFile {
    pub fn read(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(path, content))
    }

    pub fn parse(path: &Path, content: String) -> Self {
        let parser = Parser::new();
        let mut lines = vec![];
        let mut seen: HashMap<String, Range<usize>> = HashMap::new();
        let mut byte_offset = 0;
        for line in content.split_inclusive('\n') {
            let text = line.trim_end_matches(['\n', '\r']);
            if let Some(mut parsed) = parser.parse_line(byte_offset, text) {
                if let Ok(mapping) = &parsed.mapping {
                    match seen.get(&mapping.source) {
                        Some(first) => {
                            parsed.mapping = Err(ParseError::Duplicate {
                                first: first.clone(),
                            })
                        }
                        None => {
                            seen.insert(mapping.source.clone(), mapping.source_span.clone());
                        }
                    }
                }
                lines.push(parsed);
            }
            byte_offset += line.len();
        }
        tracing::debug!(path = %path.display(), lines = lines.len(), "parsed mapping file");
        Self {
            path: path.to_path_buf(),
            content,
            lines,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Iterator over all well-formed mappings
    pub fn valid(&self) -> impl Iterator<Item = &Mapping> + '_ {
        self.lines.iter().filter_map(|l| l.mapping.as_ref().ok())
    }

    /// Iterator over all lines that failed to parse
    pub fn invalid(&self) -> impl Iterator<Item = InvalidLine> + '_ {
        self.lines.iter().filter_map(|l| match &l.mapping {
            Ok(_) => None,
            Err(error) => Some(InvalidLine {
                error: error.clone(),
                span: l.span.clone(),
            }),
        })
    }

    /// Well-formed mappings whose expected value differs from what `rewriter`
    /// produces.
    pub fn mismatches<'a>(
        &'a self,
        rewriter: &'a dyn NameRewriter,
    ) -> impl Iterator<Item = Mismatch<'a>> + 'a {
        self.valid().filter_map(move |mapping| {
            let actual = rewriter.rewrite(&mapping.source);
            (actual != mapping.expected).then_some(Mismatch { mapping, actual })
        })
    }
}

#[derive(Debug)]
struct Line {
    mapping: Result<Mapping, ParseError>,
    /// Byte range of the line in the file, without the line terminator
    span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub source: String,
    pub expected: String,
    source_span: Range<usize>,
    expected_span: Range<usize>,
}

impl Mapping {
    pub fn source_span(&self) -> Range<usize> {
        self.source_span.clone()
    }

    pub fn expected_span(&self) -> Range<usize> {
        self.expected_span.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed mapping line")]
    Malformed,
    #[error("identifier is already mapped")]
    Duplicate { first: Range<usize> },
}

/// A line that failed to parse
#[derive(Debug)]
pub struct InvalidLine {
    pub error: ParseError,
    pub span: Range<usize>,
}

/// A mapping that doesn't hold under some rewriter
#[derive(Debug)]
pub struct Mismatch<'a> {
    pub mapping: &'a Mapping,
    pub actual: String,
}

struct Parser {
    re: regex::Regex,
}

impl Parser {
    fn new() -> Parser {
        const LINE_REGEX: &str = r"^\s*([^\s=#]+)\s*=\s*([^\s=#]+)\s*(?:#.*)?$";
        Parser {
            re: regex::Regex::new(LINE_REGEX).expect("mapping regex is valid"),
        }
    }

    /// Returns `None` for blank and comment lines.
    fn parse_line(&self, byte_offset: usize, line: &str) -> Option<Line> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let span = byte_offset..byte_offset + line.len();
        let Some(captures) = self.re.captures(line) else {
            return Some(Line {
                mapping: Err(ParseError::Malformed),
                span,
            });
        };
        let (source, expected) = (captures.get(1)?, captures.get(2)?);
        Some(Line {
            mapping: Ok(Mapping {
                source: source.as_str().to_string(),
                expected: expected.as_str().to_string(),
                source_span: byte_offset + source.start()..byte_offset + source.end(),
                expected_span: byte_offset + expected.start()..byte_offset + expected.end(),
            }),
            span,
        })
    }
}
