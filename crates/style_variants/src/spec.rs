//! Variant specifications and caller selections.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while declaring a [`VariantSpec`].
///
/// These surface once, when a component kind defines its spec. Resolution
/// itself has no failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Axis name was empty or whitespace.
    #[error("variant axis name must not be empty")]
    EmptyAxisName,
    /// Two axes share a name.
    #[error("variant axis `{axis}` is declared more than once")]
    DuplicateAxis {
        /// Repeated axis name.
        axis: String,
    },
    /// Axis declared without any values.
    #[error("variant axis `{axis}` declares no values")]
    NoValues {
        /// Offending axis.
        axis: String,
    },
    /// Two values on one axis share a name.
    #[error("variant axis `{axis}` declares value `{value}` more than once")]
    DuplicateValue {
        /// Offending axis.
        axis: String,
        /// Repeated value name.
        value: String,
    },
    /// Default value is not one of the declared values.
    #[error("variant axis `{axis}` defaults to undeclared value `{default}`")]
    UnknownDefault {
        /// Offending axis.
        axis: String,
        /// Declared default.
        default: String,
    },
}

/// Result alias for spec construction.
pub type SpecResult<T> = Result<T, SpecError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One named dimension of visual choice with its enumerated values.
pub struct VariantAxis {
    name: String,
    values: Vec<(String, String)>,
    default: String,
}

impl VariantAxis {
    /// Axis name, e.g. `variant` or `size`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared default value name.
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// Declared value names in declaration order.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    /// Returns true when `value` is declared on this axis.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|(name, _)| name == value)
    }

    /// Value actually applied for a requested value.
    pub fn value_for<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(value) if self.contains(value) => value,
            _ => &self.default,
        }
    }

    /// Style tokens for a requested value, falling back to the default.
    pub fn tokens_for(&self, requested: Option<&str>) -> &str {
        let value = self.value_for(requested);
        self.values
            .iter()
            .find(|(name, _)| name == value)
            .map(|(_, tokens)| tokens.as_str())
            .unwrap_or_default()
    }

    fn validate(&self) -> SpecResult<()> {
        if self.name.trim().is_empty() {
            return Err(SpecError::EmptyAxisName);
        }
        if self.values.is_empty() {
            return Err(SpecError::NoValues {
                axis: self.name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for (value, _) in &self.values {
            if !seen.insert(value.as_str()) {
                return Err(SpecError::DuplicateValue {
                    axis: self.name.clone(),
                    value: value.clone(),
                });
            }
        }
        if !self.contains(&self.default) {
            return Err(SpecError::UnknownDefault {
                axis: self.name.clone(),
                default: self.default.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawVariantSpec", into = "RawVariantSpec")]
/// Immutable per-component-kind declaration of variant axes.
///
/// Axis order is declaration order and is the order resolved tokens are
/// emitted in.
pub struct VariantSpec {
    axes: Vec<VariantAxis>,
}

impl VariantSpec {
    /// Start declaring a spec.
    pub fn builder() -> VariantSpecBuilder {
        VariantSpecBuilder::default()
    }

    /// Declared axes in merge order.
    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Value applied for `axis` under `selection`, or `None` for undeclared axes.
    pub fn resolved_value<'a>(&'a self, axis: &str, selection: &'a Selection) -> Option<&'a str> {
        self.axis(axis)
            .map(|declared| declared.value_for(selection.get(axis)))
    }

    /// Selection naming every axis default explicitly.
    pub fn default_selection(&self) -> Selection {
        self.axes
            .iter()
            .map(|axis| (axis.name.clone(), axis.default.clone()))
            .collect()
    }

    fn validate(&self) -> SpecResult<()> {
        let mut seen = HashSet::new();
        for axis in &self.axes {
            axis.validate()?;
            if !seen.insert(axis.name.as_str()) {
                return Err(SpecError::DuplicateAxis {
                    axis: axis.name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
/// Builder for [`VariantSpec`]; validation happens in [`VariantSpecBuilder::build`].
pub struct VariantSpecBuilder {
    axes: Vec<VariantAxis>,
}

impl VariantSpecBuilder {
    /// Declare an axis with `(value, tokens)` pairs and its default value.
    pub fn axis<N, V, T>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = (N, T)>,
        default: V,
    ) -> Self
    where
        N: Into<String>,
        T: Into<String>,
        V: Into<String>,
    {
        self.axes.push(VariantAxis {
            name: name.into(),
            values: values
                .into_iter()
                .map(|(value, tokens)| (value.into(), tokens.into()))
                .collect(),
            default: default.into(),
        });
        self
    }

    /// Validate and freeze the spec.
    pub fn build(self) -> SpecResult<VariantSpec> {
        let spec = VariantSpec { axes: self.axes };
        spec.validate()?;
        Ok(spec)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Caller-chosen axis values for one render. Any axis may be omitted.
pub struct Selection {
    values: BTreeMap<String, String>,
}

impl Selection {
    /// Empty selection; every axis resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(axis, value);
        self
    }

    /// Set or replace the value for an axis.
    pub fn set(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        self.values.insert(axis.into(), value.into());
    }

    /// Requested value for an axis.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    /// Returns true when no axis was selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(axis, value)| (axis.into(), value.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawVariantSpec {
    #[serde(default)]
    axes: Vec<RawVariantAxis>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawVariantAxis {
    name: String,
    default: String,
    values: Vec<RawVariantValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawVariantValue {
    name: String,
    #[serde(default)]
    tokens: String,
}

impl TryFrom<RawVariantSpec> for VariantSpec {
    type Error = SpecError;

    fn try_from(raw: RawVariantSpec) -> SpecResult<Self> {
        raw.axes
            .into_iter()
            .fold(VariantSpec::builder(), |builder, axis| {
                builder.axis(
                    axis.name,
                    axis.values.into_iter().map(|value| (value.name, value.tokens)),
                    axis.default,
                )
            })
            .build()
    }
}

impl From<VariantSpec> for RawVariantSpec {
    fn from(spec: VariantSpec) -> Self {
        Self {
            axes: spec
                .axes
                .into_iter()
                .map(|axis| RawVariantAxis {
                    name: axis.name,
                    default: axis.default,
                    values: axis
                        .values
                        .into_iter()
                        .map(|(name, tokens)| RawVariantValue { name, tokens })
                        .collect(),
                })
                .collect(),
        }
    }
}
