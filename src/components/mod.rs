pub mod app;
pub mod board;
pub mod connection_banner;
pub mod controls_panel;
pub mod history_panel;
pub mod status_panel;
