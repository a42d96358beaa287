//! Paged listing envelope used by the administration endpoints

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageResult<T> {
    pub total: i64,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
