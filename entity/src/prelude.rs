pub use super::event::Entity as Event;
pub use super::marine::Entity as Marine;
pub use super::piratecrew::Entity as PirateCrew;
pub use super::piratemember::Entity as PirateMember;
