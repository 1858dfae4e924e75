// Device profile allocator
// Maps an opaque identifier to a stable device profile. Once an identifier is
// resolved its profile is cached and returned unchanged until released.
//
// The allocator is a plain single-threaded value. Hosts that share it across
// threads must serialize access themselves (resolve is read-then-write).

pub mod filter;
pub mod perturb;
pub mod summary;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::classify::{classify_for_patch, classify_model, ModelClass};
use crate::catalog::{Catalog, Category};
use crate::constants::{
    DEFAULT_WEIGHT_ANDROID, DEFAULT_WEIGHT_DESKTOP, DEFAULT_WEIGHT_IOS, WEIGHT_BUCKETS,
};
use crate::error::{DevprofError, Result};
use crate::hash::{digest_identifier, DigestAlgorithm};
use crate::store::TextStore;

pub use filter::AssignmentFilter;
pub use summary::Summary;

/// Share of new identifiers sent to each category, out of `WEIGHT_BUCKETS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWeights {
    pub desktop: u32,
    pub mobile_android: u32,
    pub mobile_ios: u32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            desktop: DEFAULT_WEIGHT_DESKTOP,
            mobile_android: DEFAULT_WEIGHT_ANDROID,
            mobile_ios: DEFAULT_WEIGHT_IOS,
        }
    }
}

impl CategoryWeights {
    pub fn validate(&self) -> Result<()> {
        let sum = u64::from(self.desktop) + u64::from(self.mobile_android) + u64::from(self.mobile_ios);
        if sum != u64::from(WEIGHT_BUCKETS) {
            return Err(DevprofError::InvalidWeights(format!(
                "weights sum to {}, expected {}",
                sum, WEIGHT_BUCKETS
            )));
        }
        Ok(())
    }

    /// Cumulative bucket split in the order desktop, android, ios
    pub fn pick(&self, roll: u32) -> Category {
        if roll < self.desktop {
            Category::Desktop
        } else if roll < self.desktop + self.mobile_android {
            Category::MobileAndroid
        } else {
            Category::MobileIos
        }
    }
}

/// How a profile's device class is decided for perturbation and summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationMode {
    /// Keyword match on `device_model`, matching existing assignment files.
    /// Perturbation uses the narrow patch keyword set, summaries the full one.
    #[default]
    ModelName,
    /// The category the template was drawn from
    StoredCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocatorConfig {
    pub weights: CategoryWeights,
    pub digest: DigestAlgorithm,
    pub classification: ClassificationMode,
}

/// A template copy with per-identifier version fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedProfile {
    pub device_model: String,
    pub system_version: String,
    pub app_version: String,
    pub lang_code: String,
    pub system_lang_code: String,
    /// Category the template was drawn from. Absent in older files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Identifier -> profile allocator over an owned catalog
#[derive(Debug, Clone)]
pub struct DeviceProfileAllocator {
    catalog: Catalog,
    config: AllocatorConfig,
    assignments: BTreeMap<String, MaterializedProfile>,
}

impl DeviceProfileAllocator {
    pub fn new(catalog: Catalog, config: AllocatorConfig) -> Result<Self> {
        config.weights.validate()?;
        Ok(Self {
            catalog,
            config,
            assignments: BTreeMap::new(),
        })
    }

    /// Built-in catalog with default weights and digest
    pub fn with_builtin_catalog() -> Self {
        Self {
            catalog: Catalog::builtin(),
            config: AllocatorConfig::default(),
            assignments: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Template edits only affect identifiers resolved afterwards
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Return the identifier's profile, allocating and caching one if needed
    pub fn resolve(
        &mut self,
        identifier: &str,
        preferred_category: Option<Category>,
    ) -> Result<MaterializedProfile> {
        if let Some(existing) = self.assignments.get(identifier) {
            return Ok(existing.clone());
        }

        let profile = self.preview(identifier, preferred_category)?;
        self.assignments.insert(identifier.to_string(), profile.clone());
        Ok(profile)
    }

    /// Compute the profile `resolve` would allocate, without storing it
    pub fn preview(
        &self,
        identifier: &str,
        preferred_category: Option<Category>,
    ) -> Result<MaterializedProfile> {
        let digest = digest_identifier(self.config.digest, identifier);
        let category = preferred_category
            .unwrap_or_else(|| self.config.weights.pick(digest.category_roll(WEIGHT_BUCKETS)));

        let templates = self.catalog.templates(category);
        if templates.is_empty() {
            return Err(DevprofError::EmptyCategory(category));
        }
        let template = &templates[digest.template_roll(templates.len())];

        let class = match self.config.classification {
            ClassificationMode::ModelName => classify_for_patch(&template.device_model),
            ClassificationMode::StoredCategory => ModelClass::from_category(category),
        };
        Ok(perturb::perturb(template, category, class, &digest))
    }

    pub fn get(&self, identifier: &str) -> Option<&MaterializedProfile> {
        self.assignments.get(identifier)
    }

    /// Drop the identifier's profile. Returns whether one existed.
    pub fn release(&mut self, identifier: &str) -> bool {
        self.assignments.remove(identifier).is_some()
    }

    /// Release then resolve again
    pub fn reassign(
        &mut self,
        identifier: &str,
        preferred_category: Option<Category>,
    ) -> Result<MaterializedProfile> {
        self.release(identifier);
        self.resolve(identifier, preferred_category)
    }

    /// Clear every assignment, returning the identifiers that were assigned
    pub fn reset(&mut self) -> Vec<String> {
        std::mem::take(&mut self.assignments).into_keys().collect()
    }

    /// Assignments ordered by identifier
    pub fn assignments(&self) -> impl Iterator<Item = (&str, &MaterializedProfile)> {
        self.assignments.iter().map(|(id, profile)| (id.as_str(), profile))
    }

    /// Assignments accepted by `filter`, ordered by identifier
    pub fn search<'a>(
        &'a self,
        filter: &'a AssignmentFilter,
    ) -> impl Iterator<Item = (&'a str, &'a MaterializedProfile)> + 'a {
        self.assignments()
            .filter(move |(id, profile)| filter.matches(id, profile, self.class_of(profile)))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Device class of an assigned profile under the configured mode
    pub fn class_of(&self, profile: &MaterializedProfile) -> ModelClass {
        match (self.config.classification, profile.category) {
            (ClassificationMode::StoredCategory, Some(category)) => ModelClass::from_category(category),
            _ => classify_model(&profile.device_model),
        }
    }

    pub fn summarize(&self) -> Summary {
        let mut summary = Summary::default();
        for profile in self.assignments.values() {
            summary.record(self.class_of(profile), &profile.device_model);
        }
        summary
    }

    /// Write all assignments as a JSON object keyed by identifier
    pub fn persist(&self, store: &dyn TextStore, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.assignments)?;
        store
            .write_text(path, &json)
            .map_err(|source| DevprofError::PersistenceWrite { path: path.to_path_buf(), source })
    }

    /// Replace the in-memory assignments with the file's contents.
    ///
    /// Returns `Ok(false)` when the file does not exist. Any read or parse
    /// failure leaves the allocator with no assignments and is returned;
    /// a file is never partially adopted.
    ///
    /// The map is cleared before reading. A transient read error (such as a
    /// permission error) emptying it is intentional.
    pub fn load(&mut self, store: &dyn TextStore, path: &Path) -> Result<bool> {
        self.assignments.clear();

        let content = match store.read_text(path) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(false),
            Err(source) => {
                return Err(DevprofError::PersistenceRead { path: path.to_path_buf(), source });
            }
        };

        let assignments: BTreeMap<String, MaterializedProfile> = serde_json::from_str(&content)
            .map_err(|e| DevprofError::MalformedAssignmentData {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        self.assignments = assignments;
        Ok(true)
    }
}
