pub mod c_posts;
