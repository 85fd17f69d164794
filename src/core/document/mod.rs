use std::fmt::{Display, Formatter};
use serde::{Serialize, Deserialize};

/// A named unit of print work
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    file_name: String,
    page_count: u32,
}

impl Document {
    pub fn new(file_name: impl Into<String>, page_count: u32) -> Self {
        Self { file_name: file_name.into(), page_count }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document: {} ({} pages)", self.file_name, self.page_count)
    }
}
