pub mod interactive;
pub mod tui_events;
pub mod tui_render;
pub mod tui_state;

// Re-export the TUI entrypoint function
pub use interactive::run_form;
