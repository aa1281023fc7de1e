//! Contest domain types.
//!
//! The contest graph is built once by [`ContestBuilder`] and is read-only
//! afterwards. All cross references are plain index ids into the owning
//! [`Contest`].

mod builder;
mod category;
mod contest;
mod duration;
mod ids;
mod person;
mod school;
mod venue;


pub use builder::ContestBuilder;
pub use category::{Category, CategoryKey};
pub use contest::Contest;
pub use duration::{category_duration, slot_duration, Transitions};
pub use ids::{CategoryId, PeriodId, PersonId, RoomId, SchoolId};
pub use person::{Person, Role};
pub use school::School;
pub use venue::{Period, Room};
