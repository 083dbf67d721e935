//! Sort comparators, one set per collection.
//!
//! Keys are the raw query-string values (`fecha`, `rating`, `recent`, ...).
//! Unknown keys fall back to the default for the collection, so a stale
//! or hand-edited query string never breaks a listing. All sorts use the
//! standard library's stable sort, so records that compare equal keep
//! their dataset order.

use crate::model::{ForumPost, Resource};

/// Sort modes for the resource catalog. Default: most recent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceSort {
    #[default]
    Date,
    Rating,
    Downloads,
    Likes,
}

impl ResourceSort {
    pub fn from_key(key: &str) -> Self {
        match key {
            "rating" => ResourceSort::Rating,
            "descargas" => ResourceSort::Downloads,
            "likes" => ResourceSort::Likes,
            _ => ResourceSort::Date,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ResourceSort::Date => "fecha",
            ResourceSort::Rating => "rating",
            ResourceSort::Downloads => "descargas",
            ResourceSort::Likes => "likes",
        }
    }
}

/// Sort modes for the forum. Default: most recent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForumSort {
    #[default]
    Recent,
    Popular,
    Unanswered,
}

impl ForumSort {
    pub fn from_key(key: &str) -> Self {
        match key {
            "popular" => ForumSort::Popular,
            "unanswered" => ForumSort::Unanswered,
            _ => ForumSort::Recent,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ForumSort::Recent => "recent",
            ForumSort::Popular => "popular",
            ForumSort::Unanswered => "unanswered",
        }
    }
}

/// Order filtered resources in place. All modes are descending.
pub fn sort_resources(rows: &mut [&Resource], sort: ResourceSort) {
    match sort {
        ResourceSort::Date => rows.sort_by(|a, b| b.date.cmp(&a.date)),
        ResourceSort::Rating => rows.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ResourceSort::Downloads => rows.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        ResourceSort::Likes => rows.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
}

/// Order filtered forum posts in place. `Unanswered` puts the least
/// answered first and breaks ties with the most recent date.
pub fn sort_posts(rows: &mut [&ForumPost], sort: ForumSort) {
    match sort {
        ForumSort::Recent => rows.sort_by(|a, b| b.date.cmp(&a.date)),
        ForumSort::Popular => rows.sort_by(|a, b| b.stats.likes.cmp(&a.stats.likes)),
        ForumSort::Unanswered => rows.sort_by(|a, b| {
            a.stats
                .replies
                .cmp(&b.stats.replies)
                .then_with(|| b.date.cmp(&a.date))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn resource(id: u64, date: (i32, u32, u32), rating: u8, downloads: u64, likes: u64) -> Resource {
        let json = format!(
            r#"{{"id":{},"titulo":"r{}","descripcion":"d","tipo":"PDF","universidadSigla":"UTP","universidadNombre":"n","carrera":"c","materia":"m","autor":"a","fecha":"{:04}-{:02}-{:02}","rating":{},"descargas":{},"likes":{},"tags":[]}}"#,
            id, id, date.0, date.1, date.2, rating, downloads, likes
        );
        serde_json::from_str(&json).unwrap()
    }

    fn post(id: u64, day: u32, likes: u64, replies: u64) -> ForumPost {
        let json = format!(
            r#"{{"id":{},"title":"p{}","content":"c","authorId":1,"authorName":"a","universidadSigla":"UTP","carrera":"g","categoryId":1,"date":"2026-06-{:02}T12:00:00Z","stats":{{"views":0,"likes":{},"replies":{}}}}}"#,
            id, id, day, likes, replies
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_unknown_keys_fall_back_to_default() {
        assert_eq!(ResourceSort::from_key("nope"), ResourceSort::Date);
        assert_eq!(ResourceSort::from_key(""), ResourceSort::Date);
        assert_eq!(ForumSort::from_key("zzz"), ForumSort::Recent);
    }

    #[test]
    fn test_resources_sort_by_date_descending() {
        let a = resource(1, (2026, 1, 10), 50, 0, 0);
        let b = resource(2, (2026, 3, 5), 50, 0, 0);
        let c = resource(3, (2025, 12, 1), 50, 0, 0);
        let mut rows = vec![&a, &b, &c];
        sort_resources(&mut rows, ResourceSort::Date);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
    }

    #[test]
    fn test_resources_sort_by_rating_is_monotonic() {
        let a = resource(1, (2026, 1, 1), 70, 0, 0);
        let b = resource(2, (2026, 1, 1), 95, 0, 0);
        let c = resource(3, (2026, 1, 1), 84, 0, 0);
        let mut rows = vec![&a, &b, &c];
        sort_resources(&mut rows, ResourceSort::Rating);
        for pair in rows.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_resources_downloads_and_likes_descending() {
        let a = resource(1, (2026, 1, 1), 50, 10, 5);
        let b = resource(2, (2026, 1, 1), 50, 40, 1);
        let mut rows = vec![&a, &b];
        sort_resources(&mut rows, ResourceSort::Downloads);
        assert_eq!(rows[0].id, 2);
        let mut rows = vec![&a, &b];
        sort_resources(&mut rows, ResourceSort::Likes);
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let a = resource(1, (2026, 1, 1), 80, 0, 0);
        let b = resource(2, (2026, 1, 1), 80, 0, 0);
        let mut rows = vec![&a, &b];
        sort_resources(&mut rows, ResourceSort::Rating);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_forum_unanswered_orders_zero_reply_posts_first() {
        // Reply counts [3, 0, 0, 5] on dates D1 < D2 < D3 < D4: both
        // zero-reply posts lead, more recent one first, then by count.
        let p1 = post(1, 1, 0, 3);
        let p2 = post(2, 2, 0, 0);
        let p3 = post(3, 3, 0, 0);
        let p4 = post(4, 4, 0, 5);
        let mut rows = vec![&p1, &p2, &p3, &p4];
        sort_posts(&mut rows, ForumSort::Unanswered);
        let ids: Vec<u64> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_forum_popular_sorts_by_likes() {
        let p1 = post(1, 1, 4, 0);
        let p2 = post(2, 2, 30, 0);
        let p3 = post(3, 3, 11, 0);
        let mut rows = vec![&p1, &p2, &p3];
        sort_posts(&mut rows, ForumSort::Popular);
        let ids: Vec<u64> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_forum_recent_uses_full_timestamps() {
        let early = post(1, 10, 0, 0);
        let mut late = post(2, 10, 0, 0);
        late.date = Utc.with_ymd_and_hms(2026, 6, 10, 18, 30, 0).unwrap();
        let mut rows = vec![&early, &late];
        sort_posts(&mut rows, ForumSort::Recent);
        assert_eq!(rows[0].id, 2);
    }
}
