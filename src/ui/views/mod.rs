pub mod card;
pub mod failed;
pub mod filter;
pub mod loading;
pub mod questions;
