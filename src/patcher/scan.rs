// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented scan that adds `x-kubernetes-map-type: atomic` to claims items

use crate::constants::markers::{
    CLAIMS_KEY, LIST_TYPE_SET, MAP_TYPE_ATOMIC, MAP_TYPE_KEY, TYPE_ARRAY, TYPE_OBJECT,
};
use crate::constants::window::{INDENT_TOLERANCE, LOOKAHEAD_LINES, NEIGHBOURHOOD_LINES};

/// A map-type line added after a `type: object` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// 1-based input line number of the `type: object` line
    pub line: usize,
    /// Indentation shared by both lines
    pub indent: usize,
}

/// Result of a single pass over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedDocument {
    pub content: String,
    pub insertions: Vec<Insertion>,
}

impl PatchedDocument {
    pub fn is_changed(&self) -> bool {
        !self.insertions.is_empty()
    }
}

/// Number of leading whitespace characters in a raw line
pub fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Scan `content` and insert the atomic map-type annotation after every
/// qualifying `type: object` line found while inside a claims block.
///
/// The line that leaves a claims block is still checked before the block is
/// considered closed. Line terminators are kept as they are, and an inserted
/// line reuses the terminator of the `type: object` line it follows.
pub fn patch_claims(content: &str) -> PatchedDocument {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut output = String::with_capacity(content.len());
    let mut insertions = Vec::new();

    let mut in_claims_items = false;
    let mut claims_indent = 0;

    for (i, line) in lines.iter().enumerate() {
        if !in_claims_items && line.contains(CLAIMS_KEY) {
            in_claims_items = true;
            claims_indent = indentation(line);
            output.push_str(line);
            continue;
        }

        output.push_str(line);

        if !in_claims_items {
            continue;
        }

        if !line.trim().is_empty() && indentation(line) <= claims_indent {
            in_claims_items = false;
        }

        if line.trim() == TYPE_OBJECT
            && closes_set_array(&lines, i)
            && !has_map_type_nearby(&lines, i)
        {
            let indent = indentation(line);
            output.push_str(&" ".repeat(indent));
            output.push_str(MAP_TYPE_ATOMIC);
            output.push_str(line_terminator(line));
            insertions.push(Insertion { line: i + 1, indent });
        }
    }

    PatchedDocument {
        content: output,
        insertions,
    }
}

/// Terminator of a qualifying line, which always has lines after it
fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Both `type: array` and `x-kubernetes-list-type: set` follow within the lookahead
fn closes_set_array(lines: &[&str], i: usize) -> bool {
    let end = lines.len().min(i + 1 + LOOKAHEAD_LINES);
    let mut found_array = false;

    for line in &lines[i + 1..end] {
        if line.contains(TYPE_ARRAY) {
            found_array = true;
        }
        if line.contains(LIST_TYPE_SET) {
            return found_array;
        }
    }

    false
}

/// A map-type annotation at roughly the same indentation already sits near line `i`
fn has_map_type_nearby(lines: &[&str], i: usize) -> bool {
    let indent = indentation(lines[i]);
    let start = i.saturating_sub(NEIGHBOURHOOD_LINES);
    let end = lines.len().min(i + NEIGHBOURHOOD_LINES);

    (start..end)
        .filter(|&k| k != i)
        .map(|k| lines[k])
        .any(|line| {
            line.contains(MAP_TYPE_KEY) && indentation(line).abs_diff(indent) < INDENT_TOLERANCE
        })
}
