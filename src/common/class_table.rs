use std::ops::Index;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DetectError;
use crate::utils;
use crate::Result;

/// Ordered class names, index-aligned with the score columns of the output
/// tensor. The table length is the `C` the tensor's last axis is validated
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTable {
    names: Vec<String>,
}

impl ClassTable {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(DetectError::EmptyClassTable);
        }
        Ok(Self { names })
    }

    /// Loads one label per line, ignoring blank lines.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(utils::file_to_vec(path)?)
    }

    /// The lesion classes of the bundled acne detector, in score-column
    /// order.
    pub fn acne() -> Self {
        Self {
            names: ["comedone", "nodule", "pustule", "papule", "cyst"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Index<usize> for ClassTable {
    type Output = str;

    fn index(&self, class_id: usize) -> &Self::Output {
        &self.names[class_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acne_table_is_score_column_ordered() {
        let classes = ClassTable::acne();
        assert_eq!(classes.len(), 5);
        assert_eq!(&classes[0], "comedone");
        assert_eq!(&classes[3], "papule");
        assert_eq!(classes.name(4), Some("cyst"));
        assert_eq!(classes.name(5), None);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            ClassTable::new(vec![]),
            Err(DetectError::EmptyClassTable)
        ));
    }

    #[test]
    fn from_file_reads_one_label_per_line() {
        let path = std::env::temp_dir().join("derma_detect_labels_test.txt");
        std::fs::write(&path, "comedone\nnodule\n\npustule\n").unwrap();
        let classes = ClassTable::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(classes.names(), &["comedone", "nodule", "pustule"]);
    }
}
