pub mod json_file;
pub mod memory;
pub mod seed;
pub mod traits;
pub mod types;

pub use json_file::JsonFileListingRepository;
pub use memory::InMemoryListingRepository;
pub use traits::ListingRepository;
pub use types::RepositoryError;
