// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Structural check that every claims set carries an atomic map type

use crate::constants::schema::{ARRAY, CLAIMS_PROPERTY, LIST_TYPE_SET, MAP_TYPE_ATOMIC, OBJECT};
use crate::error::{PatcherError, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceDefinition, JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};
use serde::Deserialize;
use tracing::{debug, warn};

/// Parse every CRD document in `content` and list the claims schemas that
/// still lack `x-kubernetes-map-type: atomic` on their items.
///
/// Paths look like `v1alpha1:.spec.resources.claims`.
pub fn find_unpatched_claims(content: &str) -> Result<Vec<String>> {
    let mut unpatched = Vec::new();

    for document in serde_yaml::Deserializer::from_str(content) {
        let crd = CustomResourceDefinition::deserialize(document)?;
        debug!(
            "Checking {} versions of CRD {}",
            crd.spec.versions.len(),
            crd.spec.names.kind
        );

        for version in &crd.spec.versions {
            let schema = version
                .schema
                .as_ref()
                .and_then(|s| s.open_api_v3_schema.as_ref());
            if let Some(schema) = schema {
                collect_unpatched(schema, &format!("{}:", version.name), &mut unpatched);
            }
        }
    }

    Ok(unpatched)
}

/// Fail when any claims schema in `content` lacks the atomic map type
pub fn verify_claims(content: &str) -> Result<()> {
    let unpatched = find_unpatched_claims(content)?;
    if unpatched.is_empty() {
        return Ok(());
    }

    for path in &unpatched {
        warn!("Claims schema {} is missing x-kubernetes-map-type: atomic", path);
    }
    Err(PatcherError::VerificationError(unpatched.join(", ")))
}

fn collect_unpatched(schema: &JSONSchemaProps, path: &str, out: &mut Vec<String>) {
    if let Some(properties) = &schema.properties {
        for (name, child) in properties {
            let child_path = format!("{}.{}", path, name);
            if name == CLAIMS_PROPERTY && is_unpatched_claims(child) {
                out.push(child_path.clone());
            }
            collect_unpatched(child, &child_path, out);
        }
    }

    match &schema.items {
        Some(JSONSchemaPropsOrArray::Schema(item)) => {
            collect_unpatched(item, &format!("{}[]", path), out);
        }
        Some(JSONSchemaPropsOrArray::Schemas(items)) => {
            for item in items {
                collect_unpatched(item, &format!("{}[]", path), out);
            }
        }
        None => {}
    }

    if let Some(JSONSchemaPropsOrBool::Schema(extra)) = &schema.additional_properties {
        collect_unpatched(extra, &format!("{}.*", path), out);
    }
}

/// A set-typed array of objects whose items are not marked atomic
fn is_unpatched_claims(schema: &JSONSchemaProps) -> bool {
    if schema.type_.as_deref() != Some(ARRAY)
        || schema.x_kubernetes_list_type.as_deref() != Some(LIST_TYPE_SET)
    {
        return false;
    }

    match &schema.items {
        Some(JSONSchemaPropsOrArray::Schema(item)) => {
            item.type_.as_deref() == Some(OBJECT)
                && item.x_kubernetes_map_type.as_deref() != Some(MAP_TYPE_ATOMIC)
        }
        _ => false,
    }
}
