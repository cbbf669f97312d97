pub mod r_posts;
