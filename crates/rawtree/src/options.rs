//! Configuration options for child normalization

use indexmap::IndexMap;
use rawtree_core::Primitive;
use serde::{Deserialize, Serialize};

const CONCAT_TEXT_CONTENT: &str = "concatTextContent";
const CONVERT_TO_STRING: &str = "convertToString";
const CONVERT_MULTIPLE_RAW_TO_STRINGS: &str = "convertMultipleRawToStrings";

/// Options controlling how `get_children` normalizes child lists
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Join all primitive children into a single string
    pub concat_text_content: bool,

    /// Drop null children and stringify every other primitive child
    pub convert_to_string: bool,

    /// Drop null children and stringify primitives when more than one remains
    pub convert_multiple_raw_to_strings: bool,

    /// Keys this adapter does not interpret, kept for callers that read them back
    #[serde(flatten)]
    pub custom: IndexMap<String, Primitive>,
}

impl Options {
    /// Return a copy of these options with `update` applied.
    ///
    /// Keys absent from `update` keep their current value. A recognized key
    /// found among the custom entries sets its typed field instead; an
    /// explicitly set typed field wins over it.
    pub fn merged(&self, update: &OptionsUpdate) -> Options {
        let mut merged = self.clone();
        for (key, value) in &update.custom {
            merged.set_by_name(key, value);
        }

        if let Some(value) = update.concat_text_content {
            merged.concat_text_content = value;
        }
        if let Some(value) = update.convert_to_string {
            merged.convert_to_string = value;
        }
        if let Some(value) = update.convert_multiple_raw_to_strings {
            merged.convert_multiple_raw_to_strings = value;
        }
        merged
    }

    fn set_by_name(&mut self, key: &str, value: &Primitive) {
        match key {
            CONCAT_TEXT_CONTENT => self.concat_text_content = value.is_truthy(),
            CONVERT_TO_STRING => self.convert_to_string = value.is_truthy(),
            CONVERT_MULTIPLE_RAW_TO_STRINGS => {
                self.convert_multiple_raw_to_strings = value.is_truthy()
            }
            _ => {
                self.custom.insert(key.to_string(), value.clone());
            }
        }
    }

    /// Look up a custom option
    pub fn custom(&self, key: &str) -> Option<&Primitive> {
        self.custom.get(key)
    }
}

/// A partial set of options, merged into the current ones by `set_options`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concat_text_content: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_to_string: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_multiple_raw_to_strings: Option<bool>,

    #[serde(flatten)]
    pub custom: IndexMap<String, Primitive>,
}

impl OptionsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concat_text_content(mut self, value: bool) -> Self {
        self.concat_text_content = Some(value);
        self
    }

    pub fn convert_to_string(mut self, value: bool) -> Self {
        self.convert_to_string = Some(value);
        self
    }

    pub fn convert_multiple_raw_to_strings(mut self, value: bool) -> Self {
        self.convert_multiple_raw_to_strings = Some(value);
        self
    }

    /// Set an option by name. Recognized names set their typed field by
    /// truthiness; other keys are kept as custom options.
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<Primitive>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            CONCAT_TEXT_CONTENT => self.concat_text_content = Some(value.is_truthy()),
            CONVERT_TO_STRING => self.convert_to_string = Some(value.is_truthy()),
            CONVERT_MULTIPLE_RAW_TO_STRINGS => {
                self.convert_multiple_raw_to_strings = Some(value.is_truthy())
            }
            _ => {
                self.custom.insert(key, value);
            }
        }
        self
    }
}
