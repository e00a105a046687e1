//! Header row indexing

use csv::StringRecord;

/// Column position to column name, taken verbatim from the header row
///
/// Duplicate and empty names are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    names: Vec<String>,
}

impl HeaderIndex {
    /// Index every cell of the header row by its position
    pub fn from_record(record: &StringRecord) -> Self {
        Self {
            names: record.iter().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// (position, name) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_by_position() {
        let header = StringRecord::from(vec!["Day", "Time", "Metric"]);
        let index = HeaderIndex::from_record(&header);

        assert_eq!(index.len(), 3);
        assert_eq!(index.iter().nth(2), Some((2, "Metric")));
        assert_eq!(index.iter().nth(3), None);
    }

    #[test]
    fn test_keeps_duplicates_and_empty_names() {
        let header = StringRecord::from(vec!["Amount", "", "Amount"]);
        let index = HeaderIndex::from_record(&header);

        let names: Vec<_> = index.iter().collect();
        assert_eq!(names, vec![(0, "Amount"), (1, ""), (2, "Amount")]);
    }

    #[test]
    fn test_empty_header() {
        let index = HeaderIndex::from_record(&StringRecord::new());
        assert!(index.is_empty());
    }
}
