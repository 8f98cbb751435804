//! Pages and components of the dashboard.

pub mod chat;        // Chat with one collection (public for routing)
mod chat_input;      // Message box with send button
pub mod create;      // New collection form (public for routing)
pub mod home;        // Collection list (public for routing)
mod message;         // One transcript entry
pub mod shell;       // Header and footer around every page

#[cfg(test)]
mod harness;         // Headless page driver for tests
