pub mod hello;
pub mod images;
pub mod items;
