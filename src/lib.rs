pub mod board;
pub mod game;
pub mod input_handler;
pub mod searcher;
pub mod t3_search;
