pub mod s_posts;
