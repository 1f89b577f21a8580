//! Composable query filtering for management listings.
//!
//! This module defines the predicate-based query values callers build to
//! narrow listing results. A query owns its predicates and a pagination
//! window; running it against a snapshot is a pure function that preserves
//! the snapshot's order.

use std::fmt;

/// A composable filter over a listing snapshot.
///
/// Predicates are AND-composed: an item must satisfy every predicate to be
/// kept. After filtering, the pagination window is applied (offset first,
/// then limit). Running a query never reorders items and never touches the
/// underlying store, and the same query value can be reused across calls.
///
/// # Example
///
/// ```
/// use courier_management_shared::Query;
///
/// let query = Query::matching(|name: &String| name.starts_with("team-")).with_limit(10);
/// let names = vec![
///     "team-a".to_string(),
///     "other".to_string(),
///     "team-b".to_string(),
/// ];
/// assert_eq!(
///     query.filter(names),
///     vec!["team-a".to_string(), "team-b".to_string()]
/// );
/// ```
pub struct Query<T> {
    predicates: Vec<Box<dyn Fn(&T) -> bool + Send + Sync>>,
    offset: usize,
    limit: Option<usize>,
}

impl<T> Query<T> {
    /// Create a query that matches every item.
    pub fn all() -> Self {
        Self {
            predicates: Vec::new(),
            offset: 0,
            limit: None,
        }
    }

    /// Create a query with a single predicate.
    pub fn matching(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::all().and(predicate)
    }

    /// Add a further predicate. Every predicate must hold for an item to match.
    pub fn and(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Skip the first `offset` matching items.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Keep at most `limit` matching items after the offset.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if `item` satisfies every predicate.
    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(item))
    }

    /// Run the query against a snapshot, preserving the snapshot's order.
    pub fn filter(&self, items: Vec<T>) -> Vec<T> {
        let matched = items.into_iter().filter(|item| self.matches(item));
        match self.limit {
            Some(limit) => matched.skip(self.offset).take(limit).collect(),
            None => matched.skip(self.offset).collect(),
        }
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("predicates", &self.predicates.len())
            .field("offset", &self.offset)
            .field("limit", &self.limit)
            .finish()
    }
}
