pub mod news_queries;
pub mod product_queries;
pub mod video_queries;
