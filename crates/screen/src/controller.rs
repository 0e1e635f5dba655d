//! The screen controller: owns the entity store and the view state for one
//! list screen, runs the filter → sort → paginate pipeline, and reconciles
//! the store after create/update/delete round-trips.

use backend::{DataSource, RequestError};
use model::Entity;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    filter::filter,
    notify::{Observers, ScreenEvent, Severity},
    page::{paginate, Page},
    sort::{sort, Direction},
    store::{EntityStore, Mutation, StoreError},
    view::ViewState,
};

/// The blocking yes/no decision required before a delete request is issued.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything. For flows (and tests) that have already asked.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

pub struct Screen<T: Entity, D: DataSource<T>> {
    source: D,
    store: EntityStore<T>,
    view: ViewState,
    observers: Observers,
    /// Reload the whole collection after create/update instead of patching
    /// the store. Reservation rows are server-enriched with nested user and
    /// station records the client cannot synthesize locally.
    refresh_on_write: bool,
}

impl<T, D> Screen<T, D>
where
    T: Entity,
    D: DataSource<T>,
{
    pub fn new(source: D) -> Self {
        Self {
            source,
            store: EntityStore::new(),
            view: ViewState::default(),
            observers: Observers::default(),
            refresh_on_write: false,
        }
    }

    pub fn with_refresh_on_write(mut self) -> Self {
        self.refresh_on_write = true;
        self
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<ScreenEvent> {
        self.observers.subscribe()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn total(&self) -> usize {
        self.store.len()
    }

    /// Full fetch; replaces the canonical collection wholesale and jumps
    /// back to the first page. On failure the store is left as it was.
    pub async fn load(&mut self) -> bool {
        match self.source.fetch_all().await {
            Ok(records) => {
                log::debug!("loaded {} {} records", records.len(), T::label());
                self.store.load(records);
                self.view.page_index = 0;
                self.observers.changed();
                true
            }
            Err(why) => {
                log::error!("loading {} records failed: {}", T::label(), why);
                self.observers
                    .notice(Severity::Error, why.notice("Error while loading data"));
                false
            }
        }
    }

    /// The current page: canonical order, filtered, sorted, sliced. Always
    /// recomputed from current state, never cached across mutations.
    pub fn page(&self) -> Page<T> {
        let mut records = filter(self.store.records(), &self.view.query);
        if let Some((column, direction)) = &self.view.sort {
            sort(&mut records, column, *direction);
        }
        paginate(&records, self.view.page_index, self.view.page_size)
    }

    pub fn set_query(&mut self, raw: &str) {
        self.view.set_query(raw);
        self.observers.changed();
    }

    pub fn set_sort(&mut self, column: &str, direction: Option<Direction>) {
        self.view.set_sort(column, direction);
        self.observers.changed();
    }

    pub fn set_page(&mut self, index: usize, size: usize) {
        self.view.set_page(index, size);
        self.observers.changed();
    }

    /// Sends the new record to the data source and, on success, appends the
    /// server-returned record (which carries the server-assigned identity).
    pub async fn create(&mut self, record: T) -> bool {
        match self.source.create(&record).await {
            Ok(created) => {
                if self.refresh_on_write {
                    if !self.reload_after_write().await {
                        return false;
                    }
                } else {
                    // Insert appends; it cannot miss a key.
                    self.store.apply(Mutation::Insert(created)).ok();
                }
                self.observers.notice(
                    Severity::Success,
                    format!("{} created successfully", T::label()),
                );
                self.observers.changed();
                true
            }
            Err(why) => {
                self.notify_failure("Error while creating", &why);
                false
            }
        }
    }

    /// Sends the changed record and, on success, replaces it at its key,
    /// preserving its position in the collection. A record whose key cannot
    /// be derived is rejected before any network call.
    pub async fn update(&mut self, record: T) -> bool {
        let key = match record.key() {
            Some(key) => key,
            None => {
                self.reject_missing_key();
                return false;
            }
        };
        match self.source.update(&key, &record).await {
            Ok(updated) => {
                if self.refresh_on_write {
                    if !self.reload_after_write().await {
                        return false;
                    }
                } else if let Err(StoreError::NotFound) =
                    self.store.apply(Mutation::Replace(key, updated))
                {
                    // The target vanished locally in the meantime. Non-fatal:
                    // the next recompute simply omits the stale row.
                    log::warn!("updated {} is no longer in the store", T::label());
                }
                self.observers.notice(
                    Severity::Success,
                    format!("{} updated successfully", T::label()),
                );
                self.observers.changed();
                true
            }
            Err(why) => {
                self.notify_failure("Error while saving changes", &why);
                false
            }
        }
    }

    /// Deletes after an explicit confirmation. Declining aborts with no side
    /// effects and no notice. If the removal empties the current page and it
    /// is not the first one, the view steps back one page.
    pub async fn delete(&mut self, record: &T, confirm: &dyn Confirm) -> bool {
        let key = match record.key() {
            Some(key) => key,
            None => {
                self.reject_missing_key();
                return false;
            }
        };
        if !confirm.confirm(&format!("Really delete this {}?", T::label())) {
            return false;
        }
        match self.source.delete(&key).await {
            Ok(()) => {
                if let Err(StoreError::NotFound) = self.store.apply(Mutation::Remove(key)) {
                    log::warn!("deleted {} was no longer in the store", T::label());
                }
                if self.page().items.is_empty() && self.view.page_index > 0 {
                    self.view.page_index -= 1;
                }
                self.observers.notice(
                    Severity::Success,
                    format!("{} deleted successfully", T::label()),
                );
                self.observers.changed();
                true
            }
            Err(why) => {
                self.notify_failure("Error while deleting", &why);
                false
            }
        }
    }

    async fn reload_after_write(&mut self) -> bool {
        self.load().await
    }

    fn reject_missing_key(&mut self) {
        let why = RequestError::Validation(format!(
            "invalid {}: missing identifying fields",
            T::label()
        ));
        log::warn!("{}", why);
        self.observers
            .notice(Severity::Error, why.notice("Invalid record"));
    }

    fn notify_failure(&mut self, fallback: &str, why: &RequestError) {
        log::error!("{} mutation failed: {}", T::label(), why);
        self.observers.notice(Severity::Error, why.notice(fallback));
    }
}
