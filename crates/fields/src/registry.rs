use crate::{AnalyticField, Error, catalog::FIELDS};

/// The fixed catalog of fields, addressed by id.
///
/// Build one with [`Registry::new`] at startup and share it by reference.
/// Nothing in a registry changes after construction, so it is safe to read
/// from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct Registry {
    fields: [AnalyticField; 5],
}

impl Registry {
    /// Creates the registry holding every catalog field.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: FIELDS }
    }

    /// Returns the field registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunctionId`] if no field has this id.
    pub fn get(&self, id: u32) -> Result<&AnalyticField, Error> {
        self.fields
            .iter()
            .find(|field| field.id() == id)
            .ok_or(Error::UnknownFunctionId { id })
    }

    /// Iterates over all fields in ascending id order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &AnalyticField> {
        self.fields.iter()
    }

    /// Iterates over all registered ids in ascending order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.fields.iter().map(AnalyticField::id)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a AnalyticField;
    type IntoIter = std::slice::Iter<'a, AnalyticField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
