//! Community forum: browse with category filter and sort, view a
//! thread, create posts, and toggle session likes.

use crate::error::{EduError, FieldError, Result};
use crate::model::{Category, ForumPost, PostStats, PostStatus};
use crate::query::{self, FieldFilter, ForumSort, QueryState};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;

/// Query-string keys the forum recognizes.
pub const QUERY_KEYS: &[&str] = &["search", "categoria", "orden"];

/// Matching posts plus the sidebar data: every category with its post
/// count and the forum-wide header stats. Counts and stats cover the
/// whole collection regardless of the active filter.
#[derive(Debug, Clone, Serialize)]
pub struct ForumListing {
    pub rows: Vec<ForumPost>,
    pub total: usize,
    pub sort: &'static str,
    pub categories: Vec<Category>,
    pub post_counts: Vec<CategoryCount>,
    pub total_posts: usize,
    pub total_replies: u64,
    pub open_posts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub id: u64,
    pub name: String,
    pub count: usize,
}

pub fn browse(posts: &[ForumPost], categories: &[Category], state: &QueryState) -> ForumListing {
    let filters = [FieldFilter::eq("categoria", state.get("categoria"))];
    let mut hits = query::select(posts, &filters, state.search());
    let sort = ForumSort::from_key(state.sort());
    query::sort_posts(&mut hits, sort);

    let post_counts = categories
        .iter()
        .map(|c| CategoryCount {
            id: c.id,
            name: c.name.clone(),
            count: posts.iter().filter(|p| p.category_id == c.id).count(),
        })
        .collect();

    ForumListing {
        total: hits.len(),
        rows: hits.into_iter().cloned().collect(),
        sort: sort.key(),
        categories: categories.to_vec(),
        post_counts,
        total_posts: posts.len(),
        total_replies: posts.iter().map(|p| p.stats.replies).sum(),
        open_posts: posts
            .iter()
            .filter(|p| p.status == PostStatus::Open)
            .count(),
    }
}

/// A thread with its replies; unknown ids are an error.
pub fn view(posts: &[ForumPost], id: u64) -> Result<ForumPost> {
    posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or(EduError::PostNotFound(id))
}

/// A new thread as the author fills it in. `tags` is the raw
/// comma-separated input; `university` and `career` fall back to their
/// defaults when left empty.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub category_id: Option<u64>,
    pub content: String,
    pub tags: String,
    pub subject: String,
    pub university: String,
    pub career: String,
}

/// Validate a draft and prepend the new thread to the collection.
///
/// The new post gets `max(existing ids) + 1` (1 when the forum is
/// empty), open status, zeroed stats, and the current timestamp. Tags
/// are comma-split, trimmed, lowercased, with empties dropped.
pub fn create(
    posts: &mut Vec<ForumPost>,
    categories: &[Category],
    draft: &PostDraft,
) -> Result<ForumPost> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(FieldError::new("title", "El título es requerido"));
    } else if draft.title.chars().count() < 10 {
        errors.push(FieldError::new(
            "title",
            "El título debe tener al menos 10 caracteres",
        ));
    }

    if draft.category_id.is_none() {
        errors.push(FieldError::new("category", "Selecciona una categoría"));
    }

    if draft.content.trim().is_empty() {
        errors.push(FieldError::new("content", "El contenido es requerido"));
    } else if draft.content.chars().count() < 20 {
        errors.push(FieldError::new(
            "content",
            "El contenido debe tener al menos 20 caracteres",
        ));
    }

    if !errors.is_empty() {
        return Err(EduError::Validation(errors));
    }

    let category_id = draft.category_id.ok_or_else(|| {
        EduError::Validation(vec![FieldError::new("category", "Selecciona una categoría")])
    })?;
    if !categories.iter().any(|c| c.id == category_id) {
        return Err(EduError::CategoryNotFound(category_id));
    }

    let tags: Vec<String> = draft
        .tags
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let subject = draft.subject.trim();
    let post = ForumPost {
        id: next_id,
        title: draft.title.trim().to_string(),
        content: draft.content.trim().to_string(),
        // The session user; there is no real auth behind this.
        author_id: 0,
        author_name: "Usuario Actual".to_string(),
        university_code: if draft.university.is_empty() {
            "UTP".to_string()
        } else {
            draft.university.clone()
        },
        career: if draft.career.is_empty() {
            "General".to_string()
        } else {
            draft.career.clone()
        },
        category_id,
        subject: if subject.is_empty() {
            None
        } else {
            Some(subject.to_string())
        },
        date: Utc::now(),
        stats: PostStats::default(),
        tags,
        status: PostStatus::Open,
        replies: Vec::new(),
    };

    posts.insert(0, post.clone());
    Ok(post)
}

/// Result of a like toggle: the new count and whether the session now
/// likes the post.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikeOutcome {
    pub post_id: u64,
    pub likes: u64,
    pub liked: bool,
}

/// Toggle the session's like on a post. The first toggle increments the
/// count, the second takes it back; nothing persists beyond the session.
pub fn toggle_like(
    posts: &mut [ForumPost],
    liked: &mut HashSet<u64>,
    id: u64,
) -> Result<LikeOutcome> {
    let post = posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(EduError::PostNotFound(id))?;

    if liked.remove(&id) {
        post.stats.likes = post.stats.likes.saturating_sub(1);
        Ok(LikeOutcome {
            post_id: id,
            likes: post.stats.likes,
            liked: false,
        })
    } else {
        liked.insert(id);
        post.stats.likes += 1;
        Ok(LikeOutcome {
            post_id: id,
            likes: post.stats.likes,
            liked: true,
        })
    }
}

/// Shape of a reply submission. The thread view renders a reply box but
/// nothing consumes it yet; the write path lands together with the
/// collaborator accounts work.
#[derive(Debug, Clone, Default)]
pub struct ReplyDraft {
    pub post_id: u64,
    pub content: String,
}
