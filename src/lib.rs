pub mod answer;
pub mod app;
pub mod data;
pub mod feed;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
