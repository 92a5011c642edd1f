//! Difference records and the ordered report produced by a comparison.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// The ordered result of comparing two documents.
///
/// Records appear in the order the traversal discovered them: sorted field
/// names within an object, ascending canonical index within an array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// The list of differences.
    pub differences: Vec<Difference>,
}

impl DiffReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the documents were found equal.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.differences.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Difference> {
        self.differences.iter()
    }

    /// The formatted message of every record, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.differences.iter().map(ToString::to_string).collect()
    }

    /// Number of fields present only on the right.
    pub fn missing_left(&self) -> usize {
        self.count(|k| matches!(k, DifferenceKind::MissingLeft))
    }

    /// Number of fields present only on the left.
    pub fn missing_right(&self) -> usize {
        self.count(|k| matches!(k, DifferenceKind::MissingRight))
    }

    /// Number of array-level records (content or length).
    pub fn array_changes(&self) -> usize {
        self.count(|k| {
            matches!(
                k,
                DifferenceKind::ArrayDiffers { .. } | DifferenceKind::ArrayLength { .. }
            )
        })
    }

    /// Number of scalar or shape mismatches.
    pub fn value_changes(&self) -> usize {
        self.count(|k| matches!(k, DifferenceKind::ValueDiffers { .. }))
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, kind: DifferenceKind) {
        self.differences.push(Difference {
            path: path.into(),
            kind,
        });
    }

    pub(crate) fn extend(&mut self, other: DiffReport) {
        self.differences.extend(other.differences);
    }

    fn count(&self, pred: impl Fn(&DifferenceKind) -> bool) -> usize {
        self.differences.iter().filter(|d| pred(&d.kind)).count()
    }
}

impl IntoIterator for DiffReport {
    type Item = Difference;
    type IntoIter = std::vec::IntoIter<Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.differences.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffReport {
    type Item = &'a Difference;
    type IntoIter = std::slice::Iter<'a, Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.differences.iter()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for difference in &self.differences {
            writeln!(f, "{difference}")?;
        }
        Ok(())
    }
}

/// A single divergence between the two documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difference {
    /// Dot/bracket path of the divergence, empty for the document root.
    pub path: String,
    /// What diverged.
    pub kind: DifferenceKind,
}

/// The kind of a [`Difference`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DifferenceKind {
    /// The field exists only in the right document.
    MissingLeft,
    /// The field exists only in the left document.
    MissingRight,
    /// A nested array differs. Holds the canonical (sorted) elements of each side.
    ArrayDiffers { left: Vec<Value>, right: Vec<Value> },
    /// A top-level array comparison found different lengths.
    ArrayLength { left: usize, right: usize },
    /// Two values differ, either in content or in shape.
    ValueDiffers { left: Value, right: Value },
}

impl DifferenceKind {
    /// Stable snake_case name used in serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingLeft => "missing_left",
            Self::MissingRight => "missing_right",
            Self::ArrayDiffers { .. } => "array_differs",
            Self::ArrayLength { .. } => "array_length",
            Self::ValueDiffers { .. } => "value_differs",
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.path;
        match &self.kind {
            DifferenceKind::MissingLeft => write!(f, "field '{path}' absent in left"),
            DifferenceKind::MissingRight => write!(f, "field '{path}' absent in right"),
            DifferenceKind::ArrayDiffers { left, right } => write!(
                f,
                "array '{path}' differs: {} vs {}",
                render_sequence(left),
                render_sequence(right)
            ),
            DifferenceKind::ArrayLength { left, right } => {
                write!(f, "array '{path}' length differs: {left} vs {right}")
            }
            DifferenceKind::ValueDiffers { left, right } => {
                write!(f, "value '{path}' differs: {left} vs {right}")
            }
        }
    }
}

impl Serialize for Difference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Difference", 3)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("kind", self.kind.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

fn render_sequence(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(","))
}
