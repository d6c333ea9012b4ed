pub mod clubs;
pub mod posts;
