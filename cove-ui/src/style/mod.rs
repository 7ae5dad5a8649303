//! Style declarations and scoped stylesheets

mod scoped;

pub use scoped::{ScopedCss, ScopedRule};

use std::fmt;

/// An ordered list of CSS declarations
///
/// Setting a property that is already present replaces its value in place, so
/// declaration order is the order properties were first set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`
    pub fn set(mut self, property: &str, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set `property` only when a value is given
    pub fn set_opt(mut self, property: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.insert(property, value);
        }
        self
    }

    pub fn insert(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property.to_string(), value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Overlay `other` on top of this style; `other` wins on conflicts
    pub fn merge(mut self, other: &Style) -> Self {
        for (property, value) in &other.declarations {
            self.insert(property, value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
