pub mod clipboard;
pub mod output;
