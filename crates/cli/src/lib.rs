pub mod cli;
pub mod docs;
pub mod exit;
pub mod inputs;
pub mod project;
pub mod prompts;
