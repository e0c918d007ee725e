//! Client-side gallery core: one-shot fetch of the post collection, a
//! soft-delete store, and page navigation intents. The presentation layer
//! owns a [`GalleryClient`], reads [`GallerySnapshot`]s, and feeds
//! [`GalleryIntent`]s back in; it never touches the store directly.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use shared::{
    domain::{FetchState, Post, PostId},
    error::FetchError,
    protocol::{GalleryIntent, GallerySnapshot},
};
use tokio::{sync::broadcast, task::JoinHandle};
use tracing::{debug, info, warn};

pub mod pagination;
pub mod store;

use store::PostStore;

pub const DEFAULT_PAGE_SIZE: usize = 6;
/// Minimum visible-loading duration. A deliberate UX delay, not a network
/// timeout; tests set it to zero via [`GalleryOptions`].
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Where the post collection comes from. One call per session; the trait
/// seam exists so tests can swap the HTTP source for an in-process fake.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// Production source: a single GET against a JSON-array posts endpoint.
pub struct HttpPostSource {
    http: Client,
    endpoint: String,
}

impl HttpPostSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpPostSource {
    fn default() -> Self {
        Self::new(DEFAULT_POSTS_ENDPOINT)
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|err| FetchError::InvalidBody(err.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GalleryOptions {
    /// Posts per page. Must be non-zero; it is a system constant, not user
    /// input.
    pub page_size: usize,
    pub loading_delay: Duration,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            loading_delay: DEFAULT_LOADING_DELAY,
        }
    }
}

/// Broadcast to subscribed presentation layers after a state change, so they
/// can re-read the snapshot instead of polling. Receivers that lag or drop
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    PostsLoaded { count: usize },
    FetchFailed { message: String },
    PostDeleted { id: PostId },
    PageChanged { page: usize },
}

struct GalleryState {
    store: PostStore,
    fetch_state: FetchState,
    current_page: usize,
}

/// Lifecycle controller. All intent methods are synchronous transitions; the
/// only suspension points live on the spawned fetch task.
pub struct GalleryClient {
    source: Arc<dyn PostSource>,
    options: GalleryOptions,
    inner: Mutex<GalleryState>,
    fetch_task: Mutex<Option<JoinHandle<()>>>,
    events: broadcast::Sender<GalleryEvent>,
}

impl GalleryClient {
    pub fn new(source: Arc<dyn PostSource>, options: GalleryOptions) -> Arc<Self> {
        debug_assert!(options.page_size > 0);
        let (events, _) = broadcast::channel(1024);
        Arc::new(Self {
            source,
            options,
            inner: Mutex::new(GalleryState {
                store: PostStore::default(),
                fetch_state: FetchState::Loading,
                current_page: 1,
            }),
            fetch_task: Mutex::new(None),
            events,
        })
    }

    /// Kicks off the one-shot fetch. The source call and the minimum
    /// visible-loading delay run concurrently; the outcome is applied once
    /// both finish. Calling again is a no-op.
    pub fn start(self: &Arc<Self>) {
        let mut task = self.fetch_task.lock();
        if task.is_some() {
            debug!("gallery: fetch already started; ignoring duplicate start");
            return;
        }
        let client = Arc::clone(self);
        *task = Some(tokio::spawn(async move {
            let (_, outcome) = tokio::join!(
                tokio::time::sleep(client.options.loading_delay),
                client.source.fetch_posts(),
            );
            client.apply_fetch_outcome(outcome);
        }));
    }

    /// Tears the controller down. An in-flight fetch is aborted before it can
    /// mutate state or emit events.
    pub fn shutdown(&self) {
        if let Some(task) = self.fetch_task.lock().take() {
            task.abort();
        }
    }

    fn apply_fetch_outcome(&self, outcome: Result<Vec<Post>, FetchError>) {
        let event = {
            let mut state = self.inner.lock();
            if state.fetch_state.is_terminal() {
                warn!("gallery: fetch outcome arrived after terminal state; discarding");
                return;
            }
            match outcome {
                Ok(posts) => {
                    let count = posts.len();
                    state.store.set_all(posts);
                    state.fetch_state = FetchState::Ready;
                    info!(count, "gallery: post collection loaded");
                    GalleryEvent::PostsLoaded { count }
                }
                Err(err) => {
                    let message = err.to_string();
                    state.fetch_state = FetchState::Error(message.clone());
                    warn!(%message, "gallery: fetch failed; surfacing terminal error");
                    GalleryEvent::FetchFailed { message }
                }
            }
        };
        let _ = self.events.send(event);
    }

    /// Soft-deletes a post and renormalizes the page index: when the current
    /// page falls beyond the new page count it is clamped down to it. When
    /// nothing is left the index keeps its last value and the snapshot goes
    /// through the empty-state path. Unknown ids are ignored.
    pub fn delete(&self, id: PostId) {
        let events = {
            let mut state = self.inner.lock();
            if !state.store.remove(id) {
                debug!(post_id = id.0, "gallery: delete ignored for unknown post");
                return;
            }
            let page_count =
                pagination::page_count(state.store.visible_count(), self.options.page_size);
            debug!(post_id = id.0, page_count, "gallery: post deleted");
            let mut events = vec![GalleryEvent::PostDeleted { id }];
            if page_count > 0 && state.current_page > page_count {
                state.current_page = page_count;
                events.push(GalleryEvent::PageChanged { page: page_count });
            }
            events
        };
        for event in events {
            let _ = self.events.send(event);
        }
    }

    /// Jumps to `page` when it is within `1..=page_count`; anything else is
    /// a no-op rather than an error.
    pub fn go_to_page(&self, page: usize) {
        {
            let mut state = self.inner.lock();
            let page_count =
                pagination::page_count(state.store.visible_count(), self.options.page_size);
            if page < 1 || page > page_count || page == state.current_page {
                return;
            }
            state.current_page = page;
        }
        let _ = self.events.send(GalleryEvent::PageChanged { page });
    }

    pub fn next_page(&self) {
        let target = self.inner.lock().current_page.saturating_add(1);
        self.go_to_page(target);
    }

    pub fn previous_page(&self) {
        let target = self.inner.lock().current_page.saturating_sub(1);
        self.go_to_page(target);
    }

    /// Single entry point for the presentation boundary.
    pub fn apply(&self, intent: GalleryIntent) {
        match intent {
            GalleryIntent::Delete(id) => self.delete(id),
            GalleryIntent::GoToPage(page) => self.go_to_page(page),
            GalleryIntent::NextPage => self.next_page(),
            GalleryIntent::PreviousPage => self.previous_page(),
        }
    }

    /// Derives everything the presentation layer renders from the current
    /// state.
    pub fn snapshot(&self) -> GallerySnapshot {
        let state = self.inner.lock();
        let visible = state.store.visible_posts();
        let page_count = pagination::page_count(visible.len(), self.options.page_size);
        let items =
            pagination::page_items(&visible, state.current_page, self.options.page_size).to_vec();
        GallerySnapshot {
            items,
            current_page: state.current_page,
            page_count,
            page_window: pagination::page_window(state.current_page, page_count),
            fetch_state: state.fetch_state.clone(),
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<GalleryEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
