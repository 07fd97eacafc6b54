// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD fixtures shared by the unit tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Schema path of the claims array inside [`unpatched_crd`]
pub const CLAIMS_PATH: &str = "v1alpha1:.spec.resources.claims";

/// A bare claims block as controller-gen emits it for `ResourceRequirements`
pub fn claims_block() -> &'static str {
    "  claims:
    items:
      properties:
        name:
          type: string
      required:
      - name
      type: object
    type: array
    x-kubernetes-list-type: set
"
}

/// Build a VectorSidecar CRD whose `spec.resources.properties` holds `properties`.
/// `properties` must already be indented by 18 spaces.
pub fn make_crd(properties: &str) -> String {
    format!(
        "---
apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  annotations:
    controller-gen.kubebuilder.io/version: v0.14.0
  name: vectorsidecars.observability.kontroloop.ai
spec:
  group: observability.kontroloop.ai
  names:
    kind: VectorSidecar
    listKind: VectorSidecarList
    plural: vectorsidecars
    shortNames:
    - vs
    singular: vectorsidecar
  scope: Namespaced
  versions:
  - name: v1alpha1
    schema:
      openAPIV3Schema:
        properties:
          spec:
            properties:
              resources:
                properties:
{}                  limits:
                    additionalProperties:
                      type: string
                    type: object
                type: object
            type: object
        type: object
    served: true
    storage: true
    subresources:
      status: {{}}
",
        properties
    )
}

/// The VectorSidecar CRD before any patching
pub fn unpatched_crd() -> &'static str {
    static CRD: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    CRD.get_or_init(|| {
        make_crd(
            "                  claims:
                    items:
                      properties:
                        name:
                          type: string
                      required:
                      - name
                      type: object
                    type: array
                    x-kubernetes-list-type: set
",
        )
    })
}

/// Write `content` to a CRD file in a fresh temporary directory
pub fn write_temp_crd(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("observability.kontroloop.ai_vectorsidecars.yaml");
    fs::write(&path, content).unwrap();
    (dir, path)
}
