pub mod config;
pub mod error;
pub mod groq;
pub mod handlers;
pub mod prompts;
pub mod routes;
pub mod state;
