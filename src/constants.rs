/// Port the API listens on. The service takes no runtime configuration.
pub const BLOG_API_PORT: u16 = 3000;

/// Storage document holding the whole post collection.
pub const BLOG_DATA_FILE: &str = "./data.json";
