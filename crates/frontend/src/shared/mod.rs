pub mod components;
pub mod storage;
