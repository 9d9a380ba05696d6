pub mod app;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod scoring;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::PrakritiApp;
pub use engine::{QuizEngine, QuizState};
