// Model-name classification
// Guesses a device class from the marketing name alone. Used for perturbation
// branching and summaries when the stored category is not trusted.
// The two uses match different keyword sets, so existing assignment files
// keep their versions while summaries still count every Android brand.

use serde::{Deserialize, Serialize};

use super::Category;
use crate::constants::{ANDROID_KEYWORDS, ANDROID_PATCH_KEYWORDS, DESKTOP_KEYWORDS, IOS_KEYWORDS};

/// Device class inferred from a `device_model` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelClass {
    Android,
    Ios,
    Desktop,
    Unknown,
}

impl ModelClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelClass::Android => "android",
            ModelClass::Ios => "ios",
            ModelClass::Desktop => "desktop",
            ModelClass::Unknown => "unknown",
        }
    }

    pub fn from_category(category: Category) -> Self {
        match category {
            Category::Desktop => ModelClass::Desktop,
            Category::MobileAndroid => ModelClass::Android,
            Category::MobileIos => ModelClass::Ios,
        }
    }
}

impl std::fmt::Display for ModelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(ModelClass::Android),
            "ios" => Ok(ModelClass::Ios),
            "desktop" => Ok(ModelClass::Desktop),
            "unknown" => Ok(ModelClass::Unknown),
            other => Err(format!("unknown device class: {}", other)),
        }
    }
}

fn contains_any(model: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| model.contains(k))
}

/// Case-insensitive keyword match. Android wins over iOS, iOS over desktop.
pub fn classify_model(device_model: &str) -> ModelClass {
    let model = device_model.to_lowercase();

    if contains_any(&model, &ANDROID_KEYWORDS) {
        ModelClass::Android
    } else if contains_any(&model, &IOS_KEYWORDS) {
        ModelClass::Ios
    } else if contains_any(&model, &DESKTOP_KEYWORDS) {
        ModelClass::Desktop
    } else {
        ModelClass::Unknown
    }
}

/// Class that decides which version field gets patched.
///
/// Only `ANDROID_PATCH_KEYWORDS` names take the Android branch; every other
/// name that is not an iPhone or iPad comes back `Unknown` and keeps its
/// system version.
pub fn classify_for_patch(device_model: &str) -> ModelClass {
    let model = device_model.to_lowercase();

    if contains_any(&model, &ANDROID_PATCH_KEYWORDS) {
        ModelClass::Android
    } else if contains_any(&model, &IOS_KEYWORDS) {
        ModelClass::Ios
    } else {
        ModelClass::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_names() {
        assert_eq!(classify_model("Samsung Galaxy S23"), ModelClass::Android);
        assert_eq!(classify_model("Xiaomi 14 Pro"), ModelClass::Android);
        assert_eq!(classify_model("Google Pixel 8"), ModelClass::Android);
        assert_eq!(classify_model("iPhone 15 Pro Max"), ModelClass::Ios);
        assert_eq!(classify_model("iPad Air (5th generation)"), ModelClass::Ios);
        assert_eq!(classify_model("Custom Desktop PC"), ModelClass::Desktop);
    }

    #[test]
    fn test_unrecognized_desktop_names() {
        assert_eq!(classify_model("MS-7B86"), ModelClass::Unknown);
        assert_eq!(classify_model("iMac10,2"), ModelClass::Unknown);
    }

    #[test]
    fn test_desktop_name_with_brand_substring() {
        // Desktop laptop whose name contains a phone brand
        assert_eq!(classify_model("VivoBook S14 S4300"), ModelClass::Android);
    }

    #[test]
    fn test_patch_class_is_narrower() {
        assert_eq!(classify_for_patch("Samsung Galaxy S23"), ModelClass::Android);
        assert_eq!(classify_for_patch("Xiaomi 14 Pro"), ModelClass::Android);
        assert_eq!(classify_for_patch("iPad Air (5th generation)"), ModelClass::Ios);

        for model in ["OPPO Reno10 Pro", "OnePlus 12", "Pixel 8 Pro", "HUAWEI P60", "VivoBook S14 S4300"] {
            assert_eq!(classify_for_patch(model), ModelClass::Unknown, "{}", model);
            assert_eq!(classify_model(model), ModelClass::Android, "{}", model);
        }
    }

    #[test]
    fn test_parse_class() {
        assert_eq!("iOS".parse::<ModelClass>().unwrap(), ModelClass::Ios);
        assert!("phone".parse::<ModelClass>().is_err());
    }
}
