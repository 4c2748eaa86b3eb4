pub mod catalog;
pub mod hello;

pub use catalog::{AddItemResponse, ItemList, ItemPayload};
pub use hello::HelloResponse;
