//! Recursive comparison of two document trees.
//!
//! The top-level dispatch sends two arrays to [`Differ::compare_arrays`] and
//! everything else to [`Differ::compare_objects`]. Arrays nested under object
//! fields are compared atomically: one record carrying both canonical forms.
//! Only the top-level array comparison walks elements positionally.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::canonical::canonicalize_array;
use crate::difference::{DiffReport, DifferenceKind};
use crate::error::{DiffError, DiffResult};

/// Nesting depth at which a comparison gives up unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Maximum recursion depth, or `None` for no limit.
    pub max_depth: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl DiffOptions {
    /// Options without a depth limit.
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Options that give up below `max_depth` levels of nesting.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

/// Computes difference reports between two documents.
///
/// A `Differ` holds only its options, so one instance can be shared freely
/// across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    /// Create a differ with the given options.
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare two documents from the root.
    pub fn compare(&self, left: &Value, right: &Value) -> DiffResult<DiffReport> {
        debug!(
            left = kind_name(left),
            right = kind_name(right),
            "comparing documents"
        );
        let report = match (left, right) {
            (Value::Array(l), Value::Array(r)) => self.compare_arrays(l, r, "")?,
            _ => self.compare_objects(left, right, "")?,
        };
        debug!(differences = report.len(), "comparison finished");
        Ok(report)
    }

    /// Compare two values as objects at `path`.
    ///
    /// A side that is not an object has no fields. When the sides are not both
    /// objects and the field walk found nothing, a single value record is
    /// emitted at `path`.
    pub fn compare_objects(
        &self,
        left: &Value,
        right: &Value,
        path: &str,
    ) -> DiffResult<DiffReport> {
        self.objects_at(left, right, path, 0)
    }

    /// Compare two arrays element by element after canonical sorting.
    pub fn compare_arrays(
        &self,
        left: &[Value],
        right: &[Value],
        path: &str,
    ) -> DiffResult<DiffReport> {
        self.arrays_at(left, right, path, 0)
    }

    fn objects_at(
        &self,
        left: &Value,
        right: &Value,
        path: &str,
        depth: usize,
    ) -> DiffResult<DiffReport> {
        let mut report = DiffReport::new();
        if left == right {
            return Ok(report);
        }
        self.check_depth(path, depth)?;

        let left_fields = left.as_object();
        let right_fields = right.as_object();
        let names: BTreeSet<&str> = left_fields
            .into_iter()
            .chain(right_fields)
            .flat_map(|fields| fields.keys())
            .map(String::as_str)
            .collect();

        for name in names {
            let field_path = join_field(path, name);
            let lv = left_fields.and_then(|fields| fields.get(name));
            let rv = right_fields.and_then(|fields| fields.get(name));

            match (lv, rv) {
                (None, _) => report.push(field_path, DifferenceKind::MissingLeft),
                (_, None) => report.push(field_path, DifferenceKind::MissingRight),
                (Some(l @ Value::Object(_)), Some(r @ Value::Object(_))) => {
                    report.extend(self.objects_at(l, r, &field_path, depth + 1)?);
                }
                (Some(Value::Array(l)), Some(Value::Array(r))) => {
                    let left_sorted = canonicalize_array(l);
                    let right_sorted = canonicalize_array(r);
                    if left_sorted != right_sorted {
                        report.push(
                            field_path,
                            DifferenceKind::ArrayDiffers {
                                left: left_sorted.into_iter().cloned().collect(),
                                right: right_sorted.into_iter().cloned().collect(),
                            },
                        );
                    }
                }
                (Some(l), Some(r)) => {
                    if l != r {
                        report.push(
                            field_path,
                            DifferenceKind::ValueDiffers {
                                left: l.clone(),
                                right: r.clone(),
                            },
                        );
                    }
                }
            }
        }

        // Shape mismatch with no enumerable fields, e.g. `{}` against `1`.
        // Two objects can come back empty here when they differ only in array order.
        let same_shape = left_fields.is_some() && right_fields.is_some();
        if !same_shape && report.is_empty() {
            report.push(
                path,
                DifferenceKind::ValueDiffers {
                    left: left.clone(),
                    right: right.clone(),
                },
            );
        }

        Ok(report)
    }

    fn arrays_at(
        &self,
        left: &[Value],
        right: &[Value],
        path: &str,
        depth: usize,
    ) -> DiffResult<DiffReport> {
        self.check_depth(path, depth)?;
        let mut report = DiffReport::new();

        let left_sorted = canonicalize_array(left);
        let right_sorted = canonicalize_array(right);

        if left_sorted.len() != right_sorted.len() {
            report.push(
                path,
                DifferenceKind::ArrayLength {
                    left: left_sorted.len(),
                    right: right_sorted.len(),
                },
            );
        }

        for (i, (l, r)) in left_sorted.iter().zip(&right_sorted).enumerate() {
            let item_path = join_index(path, i);
            match (l, r) {
                (Value::Object(_), Value::Object(_)) => {
                    report.extend(self.objects_at(l, r, &item_path, depth + 1)?);
                }
                _ if l != r => report.push(
                    item_path,
                    DifferenceKind::ValueDiffers {
                        left: (*l).clone(),
                        right: (*r).clone(),
                    },
                ),
                _ => {}
            }
        }

        Ok(report)
    }

    fn check_depth(&self, path: &str, depth: usize) -> DiffResult<()> {
        match self.options.max_depth {
            Some(max_depth) if depth > max_depth => Err(DiffError::DepthExceeded {
                path: path.to_string(),
                max_depth,
            }),
            _ => Ok(()),
        }
    }
}

/// Compare two documents with default options.
pub fn diff_documents(left: &Value, right: &Value) -> DiffResult<DiffReport> {
    Differ::default().compare(left, right)
}

fn join_field(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn join_index(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
