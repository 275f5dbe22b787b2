//! Static bilingual content tables. Populated at compile time, read-only
//! for the life of the process; renderers derive everything they show from
//! these plus the language flag.

pub mod awards;
pub mod jobs;
pub mod news;
pub mod plants;
pub mod search;
