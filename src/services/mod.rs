pub mod provider;
pub mod youtube;
