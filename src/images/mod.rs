mod store;

pub use store::ImageStore;
