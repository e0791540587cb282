//! Cursor-following pagination.
//!
//! List endpoints return one page plus a `next` link whose `start` query
//! parameter is the cursor for the following page. [`Pager`] wraps a
//! page-fetching closure and walks that chain, hiding cursor management
//! from callers.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

use wml_common::ResourceCollection;

use crate::error::{Result, WmlError};

/// Boxed page-fetch future, used by the `*_pager` client constructors.
pub type BoxPageFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<ResourceCollection<T>>> + Send + 'a>>;

/// The pager type returned by the `*_pager` client constructors.
pub type BoxPager<'a, T> =
    Pager<T, Box<dyn FnMut(Option<String>) -> BoxPageFuture<'a, T> + Send + 'a>, BoxPageFuture<'a, T>>;

/// Walks a paginated listing by repeatedly invoking a fetcher with the
/// cursor extracted from the previous page's `next` link.
///
/// The first [`get_next`](Pager::get_next) always fetches (with no cursor);
/// iteration ends when a page carries no usable `next` link. Calling
/// `get_next` after exhaustion is an error.
pub struct Pager<T, F, Fut>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ResourceCollection<T>>>,
{
    fetch: F,
    next: Option<String>,
    exhausted: bool,
    _items: PhantomData<fn() -> T>,
}

impl<T, F, Fut> Pager<T, F, Fut>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ResourceCollection<T>>>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            next: None,
            exhausted: false,
            _items: PhantomData,
        }
    }

    /// Whether another page can be requested.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Fetch the next page of resources.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        if self.exhausted {
            return Err(WmlError::PagerExhausted);
        }
        let page = (self.fetch)(self.next.take()).await?;
        self.next = page.next_start();
        if self.next.is_none() {
            self.exhausted = true;
        }
        Ok(page.resources)
    }

    /// Drain every remaining page into one vector.
    pub async fn get_all(mut self) -> Result<Vec<T>> {
        let mut all = Vec::new();
        while self.has_next() {
            all.extend(self.get_next().await?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wml_common::PaginationLink;

    fn page(items: &[u32], next_cursor: Option<&str>) -> ResourceCollection<u32> {
        ResourceCollection {
            total_count: None,
            limit: Some(items.len() as u32),
            first: Some(PaginationLink {
                href: "https://host/ml/v4/things?limit=2".to_string(),
            }),
            next: next_cursor.map(|c| PaginationLink {
                href: format!("https://host/ml/v4/things?limit=2&start={c}"),
            }),
            resources: items.to_vec(),
        }
    }

    #[tokio::test]
    async fn pager_follows_cursors_in_order() {
        let mut pager = Pager::new(|start: Option<String>| async move {
            Ok(match start.as_deref() {
                None => page(&[1, 2], Some("c2")),
                Some("c2") => page(&[3, 4], Some("c3")),
                Some("c3") => page(&[5], None),
                other => panic!("unexpected cursor {other:?}"),
            })
        });

        assert!(pager.has_next());
        assert_eq!(pager.get_next().await.unwrap(), vec![1, 2]);
        assert!(pager.has_next());
        assert_eq!(pager.get_next().await.unwrap(), vec![3, 4]);
        assert_eq!(pager.get_next().await.unwrap(), vec![5]);
        assert!(!pager.has_next());
        assert!(matches!(
            pager.get_next().await,
            Err(WmlError::PagerExhausted)
        ));
    }

    #[tokio::test]
    async fn get_all_collects_every_page() {
        let pager = Pager::new(|start: Option<String>| async move {
            Ok(match start.as_deref() {
                None => page(&[10, 20], Some("n")),
                Some(_) => page(&[30], None),
            })
        });
        assert_eq!(pager.get_all().await.unwrap(), vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn single_page_listing_exhausts_immediately() {
        let mut pager =
            Pager::new(|_start: Option<String>| async move { Ok(page(&[7], None)) });
        assert_eq!(pager.get_next().await.unwrap(), vec![7]);
        assert!(!pager.has_next());
    }

    #[tokio::test]
    async fn fetch_error_is_propagated() {
        let mut pager = Pager::new(|_start: Option<String>| async move {
            Err::<ResourceCollection<u32>, _>(WmlError::Configuration("boom".into()))
        });
        assert!(pager.get_next().await.is_err());
        // An error does not mark the pager exhausted; the caller may retry.
        assert!(pager.has_next());
    }
}
