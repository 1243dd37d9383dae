use crate::util::num::f64_to_index;

/// Append-only list of the results completed so far in a batch.
///
/// Entries are 1-indexed for the `$` back-reference: `$1` is the first result
/// ever committed. Results are only added through a [`Transaction`], so a
/// failing expression never leaves anything behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRegistry {
    values: Vec<f64>,
}

impl ResultRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the number of committed results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns all committed results in order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Opens a transaction that stages new results on top of this registry.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::registry::ResultRegistry;
    ///
    /// let mut registry = ResultRegistry::new();
    ///
    /// let mut tx = registry.transaction();
    /// tx.push(7.0);
    /// assert_eq!(tx.get(1.0), Some(7.0));
    /// drop(tx);
    /// assert!(registry.is_empty());
    ///
    /// let mut tx = registry.transaction();
    /// tx.push(7.0);
    /// assert_eq!(tx.commit(), vec![7.0]);
    /// assert_eq!(registry.as_slice(), &[7.0]);
    /// ```
    pub fn transaction(&mut self) -> Transaction<'_> {
        Transaction { registry: self,
                      staged:   Vec::new() }
    }
}

/// Results staged by one input string.
///
/// Lookups see the committed results followed by the staged ones. Dropping the
/// transaction without calling [`Transaction::commit`] discards everything it
/// staged.
#[derive(Debug)]
pub struct Transaction<'a> {
    registry: &'a mut ResultRegistry,
    staged:   Vec<f64>,
}

impl Transaction<'_> {
    /// Returns the number of results visible to a back-reference.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len() + self.staged.len()
    }

    /// Returns `true` if no result is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a 1-based index stored as an `f64`.
    ///
    /// Returns `None` unless `index` is an integer in `1..=len()`.
    #[must_use]
    pub fn get(&self, index: f64) -> Option<f64> {
        let index = f64_to_index(index, self.len())?;
        let committed = self.registry.as_slice();
        committed.get(index)
                 .or_else(|| self.staged.get(index - committed.len()))
                 .copied()
    }

    /// Stages a completed result.
    pub fn push(&mut self, value: f64) {
        self.staged.push(value);
    }

    /// Appends the staged results to the registry and returns them.
    pub fn commit(self) -> Vec<f64> {
        self.registry.values.extend_from_slice(&self.staged);
        self.staged
    }
}
