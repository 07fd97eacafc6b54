// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Text markers the scanner looks for in the generated CRD
pub mod markers {
    /// Substring that opens a claims block
    pub const CLAIMS_KEY: &str = "claims:";
    /// Exact (trimmed) content of the items schema type line
    pub const TYPE_OBJECT: &str = "type: object";
    pub const TYPE_ARRAY: &str = "type: array";
    pub const LIST_TYPE_SET: &str = "x-kubernetes-list-type: set";
    /// Any map-type annotation, whatever its value
    pub const MAP_TYPE_KEY: &str = "x-kubernetes-map-type";
    /// The annotation inserted after a qualifying `type: object` line
    pub const MAP_TYPE_ATOMIC: &str = "x-kubernetes-map-type: atomic";
}

/// Window sizes used around a `type: object` line
pub mod window {
    /// Lines scanned after `type: object` for the array and list-type markers
    pub const LOOKAHEAD_LINES: usize = 4;
    /// Lines searched on either side for an existing map-type annotation
    pub const NEIGHBOURHOOD_LINES: usize = 5;
    /// An existing annotation counts when its indentation differs by less than this
    pub const INDENT_TOLERANCE: usize = 2;
}

/// Values used by the CRD verification pass
pub mod schema {
    pub const CLAIMS_PROPERTY: &str = "claims";
    pub const ARRAY: &str = "array";
    pub const OBJECT: &str = "object";
    pub const LIST_TYPE_SET: &str = "set";
    pub const MAP_TYPE_ATOMIC: &str = "atomic";
}

/// The CRD patched when no `CRD_PATH` is given
pub const DEFAULT_CRD_PATH: &str =
    "config/crd/bases/observability.kontroloop.ai_vectorsidecars.yaml";
