pub mod track;
pub mod organizer;
pub mod event;

pub use track::Entity as Track;
pub use organizer::Entity as Organizer;
pub use event::Entity as Event;
