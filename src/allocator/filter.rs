// Assignment search
// Case-insensitive literal text match on identifier or device model, plus an
// optional device-class restriction.

use regex::{Regex, RegexBuilder};

use super::MaterializedProfile;
use crate::catalog::classify::ModelClass;
use crate::error::{DevprofError, Result};

#[derive(Debug, Clone, Default)]
pub struct AssignmentFilter {
    text: Option<Regex>,
    class: Option<ModelClass>,
}

impl AssignmentFilter {
    /// `text` is matched literally; regex metacharacters have no meaning.
    pub fn new(text: Option<&str>, class: Option<ModelClass>) -> Result<Self> {
        let text = text
            .filter(|t| !t.is_empty())
            .map(|t| {
                RegexBuilder::new(&regex::escape(t))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| DevprofError::InvalidFilter(e.to_string()))
            })
            .transpose()?;
        Ok(Self { text, class })
    }

    pub fn matches(&self, identifier: &str, profile: &MaterializedProfile, class: ModelClass) -> bool {
        if self.class.is_some_and(|c| c != class) {
            return false;
        }
        match &self.text {
            Some(re) => re.is_match(identifier) || re.is_match(&profile.device_model),
            None => true,
        }
    }
}
