// Assignment summary

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::classify::ModelClass;

/// Aggregate view of the current assignments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub android: usize,
    pub ios: usize,
    pub desktop: usize,
    pub unknown: usize,
    /// device_model -> number of identifiers using it
    pub models: BTreeMap<String, usize>,
}

impl Summary {
    pub(crate) fn record(&mut self, class: ModelClass, device_model: &str) {
        self.total += 1;
        match class {
            ModelClass::Android => self.android += 1,
            ModelClass::Ios => self.ios += 1,
            ModelClass::Desktop => self.desktop += 1,
            ModelClass::Unknown => self.unknown += 1,
        }
        *self.models.entry(device_model.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, class: ModelClass) -> usize {
        match class {
            ModelClass::Android => self.android,
            ModelClass::Ios => self.ios,
            ModelClass::Desktop => self.desktop,
            ModelClass::Unknown => self.unknown,
        }
    }

    /// Models sorted by descending count, ties broken by name
    pub fn models_by_frequency(&self) -> Vec<(&str, usize)> {
        let mut models: Vec<(&str, usize)> =
            self.models.iter().map(|(m, c)| (m.as_str(), *c)).collect();
        models.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        models
    }
}
