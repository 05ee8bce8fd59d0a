use serde::{Deserialize, Serialize};

/// One page together with its distinct problem labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProblems {
    pub page: String,
    pub problems: Vec<String>,
}

/// The result envelope of one find request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindReport {
    /// The requested root category, in display form.
    pub category: String,
    pub pages: Vec<PageProblems>,
    /// Whether more pages were found than returned.
    pub more: bool,
}

impl FindReport {
    pub fn new(category: String) -> Self {
        Self {
            category,
            pages: Vec::new(),
            more: false,
        }
    }
}
