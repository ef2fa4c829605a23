pub mod client;
pub mod collector;
pub mod explorer;
pub mod formatting;
pub mod loading;
pub mod panels;
pub mod render;
pub mod sequencer;
