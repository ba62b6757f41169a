pub mod art;
pub mod layout;
pub mod render;
pub mod sink;
