use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const POST_TITLE_MAX_LEN: usize = 128;

// 게시글 모델
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub title: String,
    pub contents: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// 수정 API 응답용 게시글
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub user_id: i64,
    pub title: String,
    pub contents: String,
    pub created: String,
    pub modified: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            title: post.title.clone(),
            contents: post.contents.clone(),
            created: display_time(&post.created),
            modified: display_time(&post.modified),
        }
    }
}

/// "Jan. 05, 2021, 03:04 p.m." 형식
pub fn display_time(time: &DateTime<Utc>) -> String {
    time.format("%b. %d, %Y, %I:%M %p")
        .to_string()
        .replace("AM", "a.m.")
        .replace("PM", "p.m.")
}

// 새 게시글 폼
#[derive(Debug, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

// 게시글 수정 요청 (JSON)
#[derive(Debug, Deserialize)]
pub struct EditPostBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_like_the_post_page() {
        let afternoon = Utc.with_ymd_and_hms(2021, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(display_time(&afternoon), "Jan. 05, 2021, 03:04 p.m.");
        let morning = Utc.with_ymd_and_hms(2021, 12, 25, 9, 30, 0).unwrap();
        assert_eq!(display_time(&morning), "Dec. 25, 2021, 09:30 a.m.");
    }
}
