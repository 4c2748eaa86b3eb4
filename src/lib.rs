pub mod config;
pub mod db;
pub mod error;
pub mod images;
pub mod server;

pub use error::BazaarError;
pub use images::ImageStore;
