pub mod analytics;
pub mod components;
pub mod export;
pub mod home;
pub mod homework;
pub mod layout;
pub mod quizzes;
pub mod survey;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
