//! Music theory knowledge base: static tables, key relationships and chord tones

pub mod chord_tones;
pub mod relationships;
pub mod tables;

pub use chord_tones::{chord_info, ChordInfo};
pub use relationships::{KeyRelation, KeyRelationships};
pub use tables::{enharmonic_equivalent, interval_pattern, supported_qualities};
