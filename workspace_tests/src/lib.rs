#![cfg(test)]

mod engine_collapse_expand;
mod layout_bridge;
mod orchestrator;
mod render_bridge;
mod state;

mod fixtures;
