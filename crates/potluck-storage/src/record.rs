//! Field-name keyed rows returned by [`Store::read_rows`](crate::Store::read_rows).

/// One data row zipped with its collection's header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Zips a header with a row. Extra values beyond the header are dropped;
    /// missing trailing values are simply absent.
    pub fn from_row(header: &[String], values: Vec<String>) -> Self {
        let fields = header.iter().cloned().zip(values).collect();
        Self { fields }
    }

    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Field values in header order.
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|(_, v)| v.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
