// Service exports
pub mod collaboration;

pub use collaboration::{CollaborationDataSource, PlaceholderCollaborationData};
