pub mod participants;

pub use participants::{ParticipantDocument, ParticipantRecord};
