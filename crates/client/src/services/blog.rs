use std::sync::Arc;

use courtbook_core::errors::BookingResult;
use courtbook_core::models::blog::BlogPost;

use crate::http::HttpClient;

pub struct BlogService {
    http: Arc<HttpClient>,
}

impl BlogService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list_posts(&self) -> BookingResult<Vec<BlogPost>> {
        self.http.get("/blogs").await
    }

    /// Newest `count` posts, for the landing page carousel.
    pub async fn latest_posts(&self, count: usize) -> BookingResult<Vec<BlogPost>> {
        let mut posts = self.list_posts().await?;
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts.truncate(count);
        Ok(posts)
    }

    pub async fn get_post(&self, slug: &str) -> BookingResult<BlogPost> {
        self.http.get(&format!("/blogs/{slug}")).await
    }
}
