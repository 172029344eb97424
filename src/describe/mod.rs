pub mod client;
pub mod traits;
pub mod types;

pub use client::HttpDescriptionGenerator;
pub use traits::DescriptionGenerator;
pub use types::{build_prompt, AdDraft};
