use std::collections::HashMap;

/// The variable store shared by every statement of a session.
///
/// Maps each variable name to the value of its most recent assignment and
/// remembers the order in which names were first bound, which is the order
/// the store is listed in. A name that was never assigned is simply absent:
/// lookups return `None` rather than a default value.
///
/// ## Usage
///
/// A `Store` is created once per session and lent to each evaluation, so a
/// statement on one line can read variables assigned on an earlier one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Store {
    slots:   HashMap<String, usize>,
    entries: Vec<(String, i64)>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of `name`.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::store::Store;
    ///
    /// let mut store = Store::new();
    /// assert_eq!(store.get("x"), None);
    ///
    /// store.assign("x", 0);
    /// assert_eq!(store.get("x"), Some(0));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.slots.get(name).map(|&slot| self.entries[slot].1)
    }

    /// Binds `name` to `value`, overwriting any previous binding in place.
    ///
    /// # Returns
    /// The previous value, if `name` was already bound.
    pub fn assign(&mut self, name: &str, value: i64) -> Option<i64> {
        if let Some(&slot) = self.slots.get(name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }

        self.slots.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), value));
        None
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in first-assignment order.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::store::Store;
    ///
    /// let mut store = Store::new();
    /// store.assign("b", 2);
    /// store.assign("a", 1);
    /// store.assign("b", 3);
    ///
    /// let listed: Vec<_> = store.iter().collect();
    /// assert_eq!(listed, vec![("b", 3), ("a", 1)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }
}

/// Lists every binding as `name = value`, one per line.
impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
