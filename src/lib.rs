pub mod config;
pub mod logger;
pub mod server;
mod content;
mod post_store;
mod test_data;
mod text_utils;
mod view;
