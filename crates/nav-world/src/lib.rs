//! `nav-world` — the world model the router reads.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`landmark`] | `Landmark`, `LandmarkKind`                                 |
//! | [`registry`] | `LandmarkRegistry` — coordinate-keyed landmark set         |
//! | [`role`]     | `Role` — agent role classification                         |
//! | [`shaft`]    | `ShaftSite`, `ShaftLevel` — vertical-shaft work structures |
//!
//! # Design notes
//!
//! Everything here is **read-only from the router's perspective**.  The
//! registry may be mutated by unrelated systems between ticks; the router
//! only ever iterates it within a single call, so a landmark removed between
//! ticks simply stops being a candidate at the next queue rebuild.

pub mod landmark;
pub mod registry;
pub mod role;
pub mod shaft;


pub use landmark::{Landmark, LandmarkKind};
pub use registry::LandmarkRegistry;
pub use role::Role;
pub use shaft::{ShaftLevel, ShaftSite};
