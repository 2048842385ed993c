// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_store;
pub mod time;

pub use article_store::InMemoryArticleStore;
pub use time::{DummyClock, SteppingClock, fixed_now};
