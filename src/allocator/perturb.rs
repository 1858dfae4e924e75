// Version perturbation
// Adds per-identifier diversity to version fields while keeping the template
// recognizable. Output depends only on the template, the class and the digest.

use super::MaterializedProfile;
use crate::catalog::classify::ModelClass;
use crate::catalog::{Category, ProfileTemplate};
use crate::constants::{ANDROID_PATCH_CHUNK, APP_PATCH_CHUNK, IOS_PATCH_CHUNK, PATCH_MODULUS};
use crate::hash::IdentifierDigest;

/// Copy `template` into a materialized profile with patched version fields
pub fn perturb(
    template: &ProfileTemplate,
    category: Category,
    class: ModelClass,
    digest: &IdentifierDigest,
) -> MaterializedProfile {
    let system_version = match class {
        ModelClass::Android => {
            android_system_version(&template.system_version, patch_digit(digest, ANDROID_PATCH_CHUNK))
        }
        ModelClass::Ios => replace_third_component(
            &template.system_version,
            patch_digit(digest, IOS_PATCH_CHUNK),
        ),
        ModelClass::Desktop | ModelClass::Unknown => None,
    }
    .unwrap_or_else(|| template.system_version.clone());

    let app_version = replace_third_component(&template.app_version, patch_digit(digest, APP_PATCH_CHUNK))
        .unwrap_or_else(|| template.app_version.clone());

    MaterializedProfile {
        device_model: template.device_model.clone(),
        system_version,
        app_version,
        lang_code: template.lang_code.clone(),
        system_lang_code: template.system_lang_code.clone(),
        category: Some(category),
    }
}

fn patch_digit(digest: &IdentifierDigest, chunk: usize) -> u16 {
    digest.chunk(chunk) % PATCH_MODULUS
}

/// "14" -> "14.<patch>". Anything that is not a bare integer is left alone.
fn android_system_version(version: &str, patch: u16) -> Option<String> {
    let base: u64 = version.trim().parse().ok()?;
    Some(format!("{}.{}", base, patch))
}

/// "17.2.1" -> "17.2.<patch>", "10.14" -> "10.14.<patch>". Needs two components.
fn replace_third_component(version: &str, patch: u16) -> Option<String> {
    let mut parts = version.split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => Some(format!("{}.{}.{}", major, minor, patch)),
        _ => None,
    }
}
