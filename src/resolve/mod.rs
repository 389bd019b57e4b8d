//! Token-position resolver.
//!
//! Replays the YAML event stream of a freshly marshalled file with a stack of
//! path segments that mirrors mapping nesting. Every mapping key that can be
//! addressed by a logical path is reported with the line it sits on and the
//! column it starts at, which is where its comment block must be indented to.
//!
//! YAML events do not tell keys from values, so each open mapping also keeps
//! track of whether its next node is a key or a value.


use crate::comments::CommentMap;
use crate::error::{ConfigError, Result};
use saphyr_parser::{Event, Parser, ScanError, Span};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A mapping key and where it was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPosition {
    /// Dot-joined logical path of the key.
    pub path: String,
    /// 1-indexed source line.
    pub line: usize,
    /// 0-indexed column of the key's first character.
    pub column: usize,
}

/// Comment block to emit above one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComments {
    pub comments: Vec<String>,
    /// Indentation width in spaces.
    pub indent: usize,
}

/// 1-indexed source line to the comments emitted above it.
pub type LineMetadata = BTreeMap<usize, LineComments>;

/// Streams the YAML file at `path` and locates every key in `comments`.
pub fn resolve_positions(path: &Path, comments: &CommentMap) -> Result<LineMetadata> {
    let metadata = metadata_for(scan_file(path)?, comments);

    debug!(
        path = %path.display(),
        commented_paths = comments.len(),
        annotated_lines = metadata.len(),
        "resolved comment positions"
    );
    Ok(metadata)
}

/// Lists every addressable mapping key of the YAML file at `path`.
pub fn scan_file(path: &Path) -> Result<Vec<KeyPosition>> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::io("read config file", path, e))?;

    scan_keys(&source).map_err(|source| ConfigError::Scan {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds line metadata for a YAML document held in memory.
pub fn line_metadata(
    source: &str,
    comments: &CommentMap,
) -> std::result::Result<LineMetadata, ScanError> {
    Ok(metadata_for(scan_keys(source)?, comments))
}

fn metadata_for(keys: Vec<KeyPosition>, comments: &CommentMap) -> LineMetadata {
    let mut metadata = LineMetadata::new();

    for key in keys {
        if let Some(lines) = comments.get(&key.path) {
            metadata.insert(
                key.line,
                LineComments {
                    comments: lines.to_vec(),
                    indent: key.column,
                },
            );
        }
    }

    metadata
}

/// Lists every addressable mapping key in document order.
///
/// Keys inside sequences and below non-scalar keys have no logical path and
/// are left out.
pub fn scan_keys(source: &str) -> std::result::Result<Vec<KeyPosition>, ScanError> {
    let mut tracker = PathTracker::default();
    let mut keys = Vec::new();

    for item in Parser::new_from_str(source) {
        let (event, span) = item?;
        if let Some(key) = tracker.advance(&event, span) {
            keys.push(key);
        }
    }

    Ok(keys)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    /// Key with no logical name (alias or complex key).
    Opaque,
    Mapping,
    Sequence,
}

impl Segment {
    fn is_marker(&self) -> bool {
        matches!(self, Segment::Mapping | Segment::Sequence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Mapping { expect_key: bool },
    Sequence,
}

#[derive(Debug, Default)]
struct PathTracker {
    /// Open collections, document root included.
    frames: Vec<Frame>,
    /// Path segments. The document root has no marker.
    segments: Vec<Segment>,
}

impl PathTracker {
    fn advance(&mut self, event: &Event<'_>, span: Span) -> Option<KeyPosition> {
        match event {
            Event::DocumentStart(..) | Event::DocumentEnd => {
                self.frames.clear();
                self.segments.clear();
                None
            }
            Event::Scalar(value, ..) => self.on_node(Some(&**value), span),
            Event::Alias(..) => self.on_node(None, span),
            Event::MappingStart(..) => {
                self.open(Frame::Mapping { expect_key: true }, Segment::Mapping);
                None
            }
            Event::SequenceStart(..) => {
                self.open(Frame::Sequence, Segment::Sequence);
                None
            }
            Event::MappingEnd | Event::SequenceEnd => {
                self.close();
                None
            }
            _ => None,
        }
    }

    /// A scalar or alias node. Returns the key position when it is a key.
    fn on_node(&mut self, text: Option<&str>, span: Span) -> Option<KeyPosition> {
        let Some(Frame::Mapping { expect_key }) = self.frames.last_mut() else {
            return None;
        };

        if !*expect_key {
            *expect_key = true;
            return None;
        }
        *expect_key = false;

        self.pop_sibling_key();
        let Some(text) = text else {
            self.segments.push(Segment::Opaque);
            return None;
        };
        self.segments.push(Segment::Key(text.to_string()));

        self.current_path().map(|path| KeyPosition {
            path,
            line: span.start.line(),
            column: span.start.col(),
        })
    }

    fn open(&mut self, frame: Frame, marker: Segment) {
        if let Some(Frame::Mapping { expect_key: true }) = self.frames.last() {
            // Collection used as a key; nothing below it has a logical path.
            self.pop_sibling_key();
            self.segments.push(Segment::Opaque);
        }
        if !self.frames.is_empty() {
            self.segments.push(marker);
        }
        self.frames.push(frame);
    }

    fn close(&mut self) {
        self.frames.pop();
        if self.frames.is_empty() {
            self.segments.clear();
            return;
        }

        // Trailing sibling key, then the marker itself.
        while let Some(segment) = self.segments.pop() {
            if segment.is_marker() {
                break;
            }
        }

        if let Some(Frame::Mapping { expect_key }) = self.frames.last_mut() {
            if *expect_key {
                // A complex key just ended; its value comes next under the
                // opaque segment.
                *expect_key = false;
            } else {
                *expect_key = true;
                self.pop_sibling_key();
            }
        }
    }

    fn pop_sibling_key(&mut self) {
        if matches!(
            self.segments.last(),
            Some(Segment::Key(_) | Segment::Opaque)
        ) {
            self.segments.pop();
        }
    }

    fn current_path(&self) -> Option<String> {
        if self.frames.contains(&Frame::Sequence) {
            return None;
        }

        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Key(name) => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(name);
                }
                Segment::Mapping => {}
                Segment::Opaque | Segment::Sequence => return None,
            }
        }
        Some(path)
    }
}
