//! Aggregate statistics over a collection of posts.
//!
//! Every "best of" reduction is a left fold in input order that replaces its
//! running best only on a strictly greater value, so the first candidate wins
//! a tie. Keep it that way; sorting would make tie outcomes depend on the
//! sort's stability.

use std::collections::HashMap;

use serde::Serialize;

use super::Post;

/// The fields of a post reported by [`favorite_post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub title: Option<String>,
    pub author: Option<String>,
    pub likes: u64,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            likes: post.likes,
        }
    }
}

/// Per-author rollup produced by [`group_by_author`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorGroup {
    /// Exact author text; posts without an author share the `None` group.
    pub author: Option<String>,
    pub posts: usize,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorPostCount {
    pub author: Option<String>,
    pub posts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: u64,
}

/// Every statistic at once, as served by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogStats {
    pub total_likes: u64,
    pub favorite: Option<PostSummary>,
    pub most_posts: Option<AuthorPostCount>,
    pub most_likes: Option<AuthorLikes>,
    pub authors: Vec<AuthorGroup>,
}

impl BlogStats {
    pub fn from_posts(posts: &[Post]) -> Self {
        Self {
            total_likes: total_likes(posts),
            favorite: favorite_post(posts),
            most_posts: most_prolific_author(posts),
            most_likes: most_liked_author(posts),
            authors: group_by_author(posts),
        }
    }
}

/// Sum of likes; zero for no posts. Saturates at `u64::MAX`.
pub fn total_likes(posts: &[Post]) -> u64 {
    posts
        .iter()
        .fold(0u64, |sum, post| sum.saturating_add(post.likes))
}

/// The post with the most likes, earliest one on a tie.
pub fn favorite_post(posts: &[Post]) -> Option<PostSummary> {
    first_strict_max(posts.iter(), |post| post.likes).map(PostSummary::from)
}

/// Partition posts by literal author value.
///
/// Groups come out in order of each author's first appearance. Author text is
/// compared as-is: no case folding, no trimming.
pub fn group_by_author(posts: &[Post]) -> Vec<AuthorGroup> {
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut groups: Vec<AuthorGroup> = Vec::new();

    for post in posts {
        let key = post.author.as_deref();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(AuthorGroup {
                author: post.author.clone(),
                posts: 0,
                likes: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.posts += 1;
        group.likes = group.likes.saturating_add(post.likes);
    }

    groups
}

/// Author with the most posts, first group on a tie.
pub fn most_prolific_author(posts: &[Post]) -> Option<AuthorPostCount> {
    let groups = group_by_author(posts);
    first_strict_max(groups.iter(), |group| group.posts as u64).map(|group| AuthorPostCount {
        author: group.author.clone(),
        posts: group.posts,
    })
}

/// Author with the most summed likes, first group on a tie.
pub fn most_liked_author(posts: &[Post]) -> Option<AuthorLikes> {
    let groups = group_by_author(posts);
    first_strict_max(groups.iter(), |group| group.likes).map(|group| AuthorLikes {
        author: group.author.clone(),
        likes: group.likes,
    })
}

/// Fold seeded with the first item that only moves on a strictly larger key.
fn first_strict_max<'a, T, I, F>(items: I, key: F) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> u64,
{
    let mut items = items.into_iter();
    let first = items.next()?;
    Some(items.fold(first, |best, item| {
        if key(item) > key(best) { item } else { best }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn post(title: &str, author: &str, likes: u64) -> Post {
        Post {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            url: Some(format!("http://example.com/{title}")),
            likes,
            comments: Vec::new(),
        }
    }

    fn blogs() -> Vec<Post> {
        vec![
            post("React patterns", "Michael Chan", 7),
            post("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            post("Canonical string reduction", "Edsger W. Dijkstra", 12),
            post("First class tests", "Robert C. Martin", 10),
            post("TDD harms architecture", "Robert C. Martin", 0),
            post("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&[]), 0);
        assert_eq!(total_likes(&blogs()[..1]), 7);
        assert_eq!(total_likes(&blogs()), 36);
    }

    #[test]
    fn test_total_likes_ignores_order() {
        let mut posts = blogs();
        posts.reverse();
        assert_eq!(total_likes(&posts), 36);
        posts.rotate_left(2);
        assert_eq!(total_likes(&posts), 36);
    }

    #[test]
    fn test_favorite_post() {
        assert_eq!(favorite_post(&[]), None);
        assert_eq!(
            favorite_post(&blogs()),
            Some(PostSummary {
                title: Some("Canonical string reduction".to_string()),
                author: Some("Edsger W. Dijkstra".to_string()),
                likes: 12,
            })
        );
    }

    #[test]
    fn test_favorite_post_tie_keeps_earliest() {
        let posts = vec![post("a", "x", 1), post("b", "y", 9), post("c", "z", 9)];
        let favorite = favorite_post(&posts).unwrap();
        assert_eq!(favorite.title.as_deref(), Some("b"));
        assert_eq!(favorite.likes, 9);
    }

    #[test]
    fn test_group_by_author_partitions_every_post() {
        let posts = blogs();
        let groups = group_by_author(&posts);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.iter().map(|g| g.posts).sum::<usize>(), posts.len());
        assert_eq!(groups.iter().map(|g| g.likes).sum::<u64>(), total_likes(&posts));

        let martin = groups
            .iter()
            .find(|g| g.author.as_deref() == Some("Robert C. Martin"))
            .unwrap();
        assert_eq!(martin.posts, 3);
        assert_eq!(martin.likes, 12);
    }

    #[test]
    fn test_group_by_author_is_literal() {
        let posts = vec![
            post("a", "Ann", 1),
            post("b", "ann", 1),
            post("c", "Ann ", 1),
        ];
        assert_eq!(group_by_author(&posts).len(), 3);
    }

    #[test]
    fn test_group_by_author_missing_author() {
        let mut anonymous = post("a", "", 4);
        anonymous.author = None;
        let posts = vec![anonymous, post("b", "", 1)];

        let groups = group_by_author(&posts);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].author, None);
        assert_eq!(groups[1].author.as_deref(), Some(""));
    }

    #[test]
    fn test_most_prolific_author() {
        assert_eq!(most_prolific_author(&[]), None);
        assert_eq!(
            most_prolific_author(&blogs()),
            Some(AuthorPostCount {
                author: Some("Robert C. Martin".to_string()),
                posts: 3,
            })
        );
    }

    #[test]
    fn test_most_liked_author() {
        assert_eq!(most_liked_author(&[]), None);
        assert_eq!(
            most_liked_author(&blogs()),
            Some(AuthorLikes {
                author: Some("Edsger W. Dijkstra".to_string()),
                likes: 17,
            })
        );
    }

    #[test]
    fn test_single_author() {
        let posts = vec![post("a", "Solo", 3), post("b", "Solo", 4)];
        assert_eq!(most_prolific_author(&posts).unwrap().author.as_deref(), Some("Solo"));
        assert_eq!(most_liked_author(&posts).unwrap().likes, 7);
    }

    #[test]
    fn test_author_ties_keep_first_group() {
        let posts = vec![
            post("a", "Ann", 5),
            post("b", "Bob", 5),
            post("c", "Bob", 0),
            post("d", "Ann", 0),
        ];
        // Both have two posts and five likes; Ann appears first.
        assert_eq!(most_prolific_author(&posts).unwrap().author.as_deref(), Some("Ann"));
        assert_eq!(most_liked_author(&posts).unwrap().author.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_huge_like_counts_saturate() {
        let posts = vec![
            post("a", "Ann", u64::MAX),
            post("b", "Ann", 1),
            post("c", "Bob", 2),
        ];

        assert_eq!(total_likes(&posts), u64::MAX);

        let groups = group_by_author(&posts);
        assert_eq!(groups[0].likes, u64::MAX);
        assert_eq!(groups[1].likes, 2);

        let stats = BlogStats::from_posts(&posts);
        assert_eq!(stats.total_likes, u64::MAX);
        assert_eq!(stats.most_likes.unwrap().author.as_deref(), Some("Ann"));
    }
}
