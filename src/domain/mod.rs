// src/domain/mod.rs
pub mod admin;
pub mod article;
pub mod category;
pub mod comment;
pub mod errors;
