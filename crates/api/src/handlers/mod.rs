pub mod brands;
pub mod extraction;
pub mod themes;
