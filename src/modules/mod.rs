pub mod export;
pub mod group;
pub mod navigate;
