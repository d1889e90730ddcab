pub mod data_uri;
pub mod error;

pub use error::{EnhancementError, StudioError, StudioResult};
