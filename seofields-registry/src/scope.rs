//! Scoped narrowing of the shared content query.

use seofields_host::{ContentQuery, QueryScope};
use std::ops::Deref;
use tracing::debug;

/// Narrows a content query for as long as the guard lives.
///
/// The scope active before [`ScopedQuery::narrow`] is put back on drop,
/// including when the holder returns early with an error or unwinds.
pub struct ScopedQuery<'q, Q: ContentQuery + ?Sized> {
    query: &'q mut Q,
    saved: Option<QueryScope>,
}

impl<'q, Q: ContentQuery + ?Sized> ScopedQuery<'q, Q> {
    pub fn narrow(query: &'q mut Q, scope: QueryScope) -> Self {
        let saved = query.scope();
        debug!(?scope, ?saved, "narrowing content query");
        query.set_scope(Some(scope));
        Self { query, saved }
    }
}

impl<Q: ContentQuery + ?Sized> Deref for ScopedQuery<'_, Q> {
    type Target = Q;

    fn deref(&self) -> &Q {
        &*self.query
    }
}

impl<Q: ContentQuery + ?Sized> Drop for ScopedQuery<'_, Q> {
    fn drop(&mut self) {
        self.query.set_scope(self.saved.take());
    }
}
