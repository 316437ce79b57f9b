//! Record shapes: the ordered fields a record type exposes.
//!
//! A shape is an accessor table built once per record type. Each entry
//! pairs a field name with a getter that renders the field as text, so the
//! checks can read any column by name without knowing the concrete type.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;

type Getter<R> = dyn for<'a> Fn(&'a R) -> Option<Cow<'a, str>> + Send + Sync;

/// A named field plus its getter.
pub struct FieldAccessor<R> {
    name: String,
    getter: Arc<Getter<R>>,
}

impl<R> FieldAccessor<R> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text value of this field on `record`; `None` when the field is null.
    pub fn value<'a>(&self, record: &'a R) -> Option<Cow<'a, str>> {
        (self.getter)(record)
    }
}

impl<R> Clone for FieldAccessor<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            getter: Arc::clone(&self.getter),
        }
    }
}

impl<R> fmt::Debug for FieldAccessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered field accessors for record type `R`.
///
/// Field order is the canonical column order.
pub struct RecordShape<R> {
    fields: Vec<FieldAccessor<R>>,
}

impl<R> RecordShape<R> {
    /// Create an empty shape.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field.
    #[must_use]
    pub fn field<F>(mut self, name: impl Into<String>, getter: F) -> Self
    where
        F: for<'a> Fn(&'a R) -> Option<Cow<'a, str>> + Send + Sync + 'static,
    {
        self.fields.push(FieldAccessor {
            name: name.into(),
            getter: Arc::new(getter),
        });
        self
    }

    /// Field names in canonical order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldAccessor::name).collect()
    }

    /// All accessors in canonical order.
    pub fn fields(&self) -> &[FieldAccessor<R>] {
        &self.fields
    }

    /// Look up an accessor by name, ignoring case.
    pub fn accessor(&self, name: &str) -> Option<&FieldAccessor<R>> {
        let lowered = name.to_lowercase();
        self.fields
            .iter()
            .find(|field| field.name.to_lowercase() == lowered)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<R> Default for RecordShape<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RecordShape<R> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<R> fmt::Debug for RecordShape<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// A record type with a fixed shape.
///
/// Field names in the shape must match the names serde uses to decode the
/// type (use `#[serde(rename = "...")]` where they differ).
pub trait Record: DeserializeOwned {
    fn shape() -> RecordShape<Self>;
}

/// Render a field value as text for validation.
pub trait FieldValue {
    fn to_field(&self) -> Option<Cow<'_, str>>;
}

impl FieldValue for String {
    fn to_field(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl FieldValue for str {
    fn to_field(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_field(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(FieldValue::to_field)
    }
}

macro_rules! display_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn to_field(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

display_field_value!(bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

/// A dynamically shaped record: column name to raw value.
///
/// Keys are the canonical field names when the row was decoded against a
/// shape; columns outside the shape keep their header spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, String>);

impl Row {
    /// Value of a column by exact name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl RecordShape<Row> {
    /// Shape over dynamic rows from an ordered list of column names.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        columns.into_iter().fold(Self::new(), |shape, column| {
            let name: String = column.into();
            let key = name.clone();
            shape.field(name, move |row: &Row| row.get(&key).map(Cow::Borrowed))
        })
    }
}
