use serde::{Deserialize, Serialize};

use crate::domain::{FetchState, Post, PostId};

/// User intents the presentation layer feeds back into the gallery client.
/// Out-of-range navigation and unknown ids are defined no-ops, never errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum GalleryIntent {
    Delete(PostId),
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

/// One entry of the page-number strip: either a jumpable page label or an
/// ellipsis placeholder standing in for a gap of more than one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Everything the presentation layer needs to render one frame of the
/// gallery. `items` is already sliced to the current page; when `page_count`
/// is 0 it is empty and the empty-state message is the only thing to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySnapshot {
    pub items: Vec<Post>,
    pub current_page: usize,
    pub page_count: usize,
    pub page_window: Vec<PageLabel>,
    pub fetch_state: FetchState,
}
