// Device template catalog

mod builtin;
pub mod bundled;
pub mod classify;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DevprofError, Result};

/// Device category a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "desktop")]
    Desktop,
    #[serde(rename = "mobile-android", alias = "android")]
    MobileAndroid,
    #[serde(rename = "mobile-ios", alias = "ios")]
    MobileIos,
}

impl Category {
    /// Fixed order used by the weighted split and by reports
    pub const ALL: [Category; 3] = [Category::Desktop, Category::MobileAndroid, Category::MobileIos];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Desktop => "desktop",
            Category::MobileAndroid => "mobile-android",
            Category::MobileIos => "mobile-ios",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DevprofError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Category::Desktop),
            "mobile-android" | "android" => Ok(Category::MobileAndroid),
            "mobile-ios" | "ios" => Ok(Category::MobileIos),
            other => Err(DevprofError::UnknownCategory(other.to_string())),
        }
    }
}

/// One device archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTemplate {
    pub device_model: String,
    pub system_version: String,
    pub app_version: String,
    pub lang_code: String,
    pub system_lang_code: String,
}

impl ProfileTemplate {
    pub fn new(
        device_model: &str,
        system_version: &str,
        app_version: &str,
        lang_code: &str,
        system_lang_code: &str,
    ) -> Self {
        Self {
            device_model: device_model.to_string(),
            system_version: system_version.to_string(),
            app_version: app_version.to_string(),
            lang_code: lang_code.to_string(),
            system_lang_code: system_lang_code.to_string(),
        }
    }

    /// Reject templates the allocator could not turn into a usable profile
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("device_model", &self.device_model),
            ("system_version", &self.system_version),
            ("app_version", &self.app_version),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DevprofError::InvalidTemplate(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

/// Ordered templates grouped by category.
///
/// Template management goes through `add_template`, `edit_template` and
/// `delete_template`; callers never reach into the sequences directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    templates: BTreeMap<Category, Vec<ProfileTemplate>>,
}

impl Catalog {
    /// Catalog with every category empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog populated with the bundled template table
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let tables: [(Category, &[builtin::TemplateRow]); 3] = [
            (Category::Desktop, &builtin::DESKTOP),
            (Category::MobileAndroid, &builtin::MOBILE_ANDROID),
            (Category::MobileIos, &builtin::MOBILE_IOS),
        ];
        for (category, rows) in tables {
            let templates = rows
                .iter()
                .map(|&(model, system, app, lang, system_lang)| {
                    ProfileTemplate::new(model, system, app, lang, system_lang)
                })
                .collect();
            catalog.templates.insert(category, templates);
        }
        catalog
    }

    /// Build from pre-grouped templates. Invalid templates are rejected.
    pub fn from_templates(templates: BTreeMap<Category, Vec<ProfileTemplate>>) -> Result<Self> {
        for template in templates.values().flatten() {
            template.validate()?;
        }
        Ok(Self { templates })
    }

    pub fn templates(&self, category: Category) -> &[ProfileTemplate] {
        self.templates.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, category: Category) -> usize {
        self.templates(category).len()
    }

    /// True when no category has any template
    pub fn is_empty(&self) -> bool {
        self.templates.values().all(Vec::is_empty)
    }

    pub fn total(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    /// Append a template; returns its index within the category
    pub fn add_template(&mut self, category: Category, template: ProfileTemplate) -> Result<usize> {
        template.validate()?;
        let templates = self.templates.entry(category).or_default();
        templates.push(template);
        Ok(templates.len() - 1)
    }

    /// Replace the template at `index`, returning the previous one
    pub fn edit_template(
        &mut self,
        category: Category,
        index: usize,
        template: ProfileTemplate,
    ) -> Result<ProfileTemplate> {
        template.validate()?;
        let slot = self
            .templates
            .get_mut(&category)
            .and_then(|templates| templates.get_mut(index))
            .ok_or(DevprofError::TemplateNotFound { category, index })?;
        Ok(std::mem::replace(slot, template))
    }

    pub fn delete_template(&mut self, category: Category, index: usize) -> Result<ProfileTemplate> {
        match self.templates.get_mut(&category) {
            Some(templates) if index < templates.len() => Ok(templates.remove(index)),
            _ => Err(DevprofError::TemplateNotFound { category, index }),
        }
    }

    pub(crate) fn grouped(&self) -> &BTreeMap<Category, Vec<ProfileTemplate>> {
        &self.templates
    }
}
