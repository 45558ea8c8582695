// src/gui/components/mod.rs
pub mod header;
pub mod pick_panel;
pub mod saved_panel;
