//! Podium Core - Contest domain model
//!
//! This crate provides the read-only input graph the scheduler works on:
//! - Identifiers for periods, rooms, schools, categories and people
//! - Contest, Category, School, Period and Room entities
//! - Person records tagged with their contest role
//! - Projected duration arithmetic
//! - [`ContestBuilder`] for assembling a validated contest

pub mod domain;
pub mod error;

pub use domain::{
    category_duration, slot_duration, Category, CategoryId, CategoryKey, Contest, ContestBuilder,
    Period, PeriodId, Person, PersonId, Role, Room, RoomId, School, SchoolId, Transitions,
};
pub use error::{PodiumError, Result};
