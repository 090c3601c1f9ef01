//! Bounded-size context pack assembly.
//!
//! Sections are collected from an instruction, optional selection/diff
//! text and project documents, trimmed against an approximate unit budget,
//! and rendered in a fixed order with header/footer framing.

pub mod budget;
pub mod builder;
pub mod collect;
pub mod estimate;
pub mod extract;
pub mod render;
pub mod report;
pub mod section;
pub mod truncation;

pub use builder::ContextPackBuilder;
pub use collect::{DocSource, PackInputs};
pub use report::{ContextReport, SectionReport};
pub use section::{Section, SectionKind};
