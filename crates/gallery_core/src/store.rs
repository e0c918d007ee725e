//! Soft-delete post store: the fetched collection plus the set of ids the
//! user removed this session. Deletions never reach the source API and are
//! gone on the next fetch lifecycle.

use std::collections::HashSet;

use shared::domain::{Post, PostId};

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    deleted: HashSet<PostId>,
}

impl PostStore {
    /// Replaces the whole collection and forgets prior deletions. The
    /// controller calls this at most once per fetch lifecycle.
    pub fn set_all(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.deleted.clear();
    }

    /// Marks the post with `id` deleted. Returns whether anything changed;
    /// unknown or already-deleted ids are a no-op, not an error.
    pub fn remove(&mut self, id: PostId) -> bool {
        if !self.posts.iter().any(|post| post.id == id) {
            return false;
        }
        self.deleted.insert(id)
    }

    /// The collection minus deletions, in original API response order.
    pub fn visible_posts(&self) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| !self.deleted.contains(&post.id))
            .cloned()
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.posts
            .iter()
            .filter(|post| !self.deleted.contains(&post.id))
            .count()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
