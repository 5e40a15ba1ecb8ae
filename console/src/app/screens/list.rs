//! # List Screens
//!
//! Every catalog screen is the same loop: fetch the whole list, show a filtered
//! view of it, mutate one entity through the API, then fetch the whole list
//! again. [`ListScreen`] implements that loop once; each screen plugs in a
//! [`ListResource`] (and [`CrudResource`] when it is editable).
//!
//! ## Busy Markers
//!
//! A mutation marks its row ([`RowKey::Entity`], or [`RowKey::New`] for a
//! create) as in flight until it finishes. With [`LockPolicy::PerRow`] only that
//! row is locked; with [`LockPolicy::Global`] any in-flight mutation locks the
//! whole screen. Markers are RAII guards, so every exit path clears them.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::app::state::Notice;
use crate::core::error::{AppError, Result};
use crate::core::service::AdminApi;

/// A remotely stored list of entities
#[async_trait]
pub trait ListResource: Send + Sync + 'static {
    type Entity: Clone + Send + Sync + 'static;

    /// Singular display noun ("Category", "Blog")
    fn noun(&self) -> &'static str;

    async fn fetch_all(&self, api: &dyn AdminApi) -> Result<Vec<Self::Entity>>;
}

/// A list the console can edit
#[async_trait]
pub trait CrudResource: ListResource {
    /// Form input for create and update
    type Fields: Send + Sync + 'static;

    fn entity_id(entity: &Self::Entity) -> i64;

    fn lock_policy(&self) -> LockPolicy {
        LockPolicy::PerRow
    }

    fn validate_create(&self, fields: &Self::Fields) -> Result<()>;

    fn validate_update(&self, fields: &Self::Fields) -> Result<()>;

    async fn create(&self, api: &dyn AdminApi, fields: Self::Fields) -> Result<()>;

    async fn update(&self, api: &dyn AdminApi, id: i64, fields: Self::Fields) -> Result<()>;

    async fn delete(&self, api: &dyn AdminApi, id: i64) -> Result<()>;
}

/// Client-side filtering of a fetched list
pub trait Searchable {
    /// `query` is already lowercased and non-empty.
    fn matches(&self, query: &str) -> bool;

    fn created_on(&self, _date: NaiveDate) -> bool {
        true
    }
}

/// Case-insensitive substring match.
pub(crate) fn contains_ci(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPolicy {
    PerRow,
    Global,
}

/// In-flight marker key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    New,
    Entity(i64),
}

/// Screen state
#[derive(Debug, Clone)]
pub struct ListState<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub in_flight: HashSet<RowKey>,
    pub query: String,
    pub date: Option<NaiveDate>,
    /// Last fetch error
    pub error: Option<String>,
    pub notices: Vec<Notice>,
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            in_flight: HashSet::new(),
            query: String::new(),
            date: None,
            error: None,
            notices: Vec::new(),
        }
    }
}

struct LoadingGuard<E> {
    state: Arc<RwLock<ListState<E>>>,
}

impl<E> Drop for LoadingGuard<E> {
    fn drop(&mut self) {
        self.state.write().loading = false;
    }
}

struct RowGuard<E> {
    state: Arc<RwLock<ListState<E>>>,
    key: RowKey,
}

impl<E> Drop for RowGuard<E> {
    fn drop(&mut self) {
        self.state.write().in_flight.remove(&self.key);
    }
}

/// Generic fetch / filter / mutate / re-fetch screen
pub struct ListScreen<R: ListResource> {
    resource: R,
    api: Arc<dyn AdminApi>,
    state: Arc<RwLock<ListState<R::Entity>>>,
}

impl<R: ListResource> ListScreen<R> {
    pub fn new(resource: R, api: Arc<dyn AdminApi>) -> Self {
        Self {
            resource,
            api,
            state: Arc::new(RwLock::new(ListState::default())),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> ListState<R::Entity> {
        self.state.read().clone()
    }

    pub fn items(&self) -> Vec<R::Entity> {
        self.state.read().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.write().notices)
    }

    /// Replace the list with the server's current contents.
    pub async fn refresh(&self) -> Result<()> {
        let noun = self.resource.noun();
        {
            let mut state = self.state.write();
            state.loading = true;
        }
        let _loading = LoadingGuard {
            state: self.state.clone(),
        };

        let start = std::time::Instant::now();
        match self.resource.fetch_all(self.api.as_ref()).await {
            Ok(items) => {
                tracing::debug!(
                    resource = noun,
                    count = items.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "List fetched"
                );
                let mut state = self.state.write();
                state.items = items;
                state.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = noun, error = %e, "Failed to fetch list");
                let mut state = self.state.write();
                state.error = Some(e.to_string());
                state
                    .notices
                    .push(Notice::error(format!("Failed to fetch {} list", noun.to_lowercase())));
                Err(e)
            }
        }
    }
}

impl<R> ListScreen<R>
where
    R: ListResource,
    R::Entity: Searchable,
{
    pub fn set_query(&self, query: impl Into<String>) {
        self.state.write().query = query.into();
    }

    pub fn set_date(&self, date: Option<NaiveDate>) {
        self.state.write().date = date;
    }

    /// Items matching the current search text and date filter.
    pub fn visible(&self) -> Vec<R::Entity> {
        let state = self.state.read();
        let query = state.query.trim().to_lowercase();
        state
            .items
            .iter()
            .filter(|item| query.is_empty() || item.matches(&query))
            .filter(|item| state.date.map_or(true, |date| item.created_on(date)))
            .cloned()
            .collect()
    }
}

impl<R: CrudResource> ListScreen<R> {
    pub fn find(&self, id: i64) -> Option<R::Entity> {
        self.state
            .read()
            .items
            .iter()
            .find(|item| R::entity_id(item) == id)
            .cloned()
    }

    /// Whether a mutation on `key` would be rejected right now.
    pub fn is_busy(&self, key: RowKey) -> bool {
        let state = self.state.read();
        match self.resource.lock_policy() {
            LockPolicy::PerRow => state.in_flight.contains(&key),
            LockPolicy::Global => !state.in_flight.is_empty(),
        }
    }

    fn lock_row(&self, key: RowKey) -> Result<RowGuard<R::Entity>> {
        let mut state = self.state.write();
        let busy = match self.resource.lock_policy() {
            LockPolicy::PerRow => state.in_flight.contains(&key),
            LockPolicy::Global => !state.in_flight.is_empty(),
        };
        if busy {
            tracing::debug!(resource = self.resource.noun(), ?key, "Mutation rejected: row busy");
            return Err(AppError::State(format!(
                "Another {} change is still in progress",
                self.resource.noun().to_lowercase()
            )));
        }
        state.in_flight.insert(key);
        Ok(RowGuard {
            state: self.state.clone(),
            key,
        })
    }

    fn reject(&self, err: AppError) -> AppError {
        self.state.write().notices.push(Notice::error(err.to_string()));
        err
    }

    /// Run one mutation, then re-fetch on success.
    async fn mutate<F>(&self, key: RowKey, kind: Mutation, call: F) -> Result<()>
    where
        F: std::future::Future<Output = Result<()>> + Send,
    {
        let noun = self.resource.noun();
        let _row = self.lock_row(key)?;

        match call.await {
            Ok(()) => {
                tracing::info!(resource = noun, ?key, "{} {}", noun, kind.past());
                self.state
                    .write()
                    .notices
                    .push(Notice::success(format!("{} {}", noun, kind.past())));
                if let Err(e) = self.refresh().await {
                    tracing::warn!(resource = noun, error = %e, "Re-fetch failed after mutation");
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = noun, ?key, error = %e, "Mutation failed");
                self.state.write().notices.push(Notice::error(format!(
                    "Failed to {} {}: {}",
                    kind.verb(),
                    noun.to_lowercase(),
                    e
                )));
                Err(e)
            }
        }
    }

    pub async fn create(&self, fields: R::Fields) -> Result<()> {
        if let Err(e) = self.resource.validate_create(&fields) {
            return Err(self.reject(e));
        }
        let api = self.api.clone();
        self.mutate(RowKey::New, Mutation::Create, async move {
            self.resource.create(api.as_ref(), fields).await
        })
        .await
    }

    pub async fn update(&self, id: i64, fields: R::Fields) -> Result<()> {
        if let Err(e) = self.resource.validate_update(&fields) {
            return Err(self.reject(e));
        }
        let api = self.api.clone();
        self.mutate(RowKey::Entity(id), Mutation::Update, async move {
            self.resource.update(api.as_ref(), id, fields).await
        })
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let api = self.api.clone();
        self.mutate(RowKey::Entity(id), Mutation::Delete, async move {
            self.resource.delete(api.as_ref(), id).await
        })
        .await
    }
}

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn verb(self) -> &'static str {
        match self {
            Mutation::Create => "add",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Mutation::Create => "added",
            Mutation::Update => "updated",
            Mutation::Delete => "deleted",
        }
    }
}
