//! Application Layer

pub mod create_posting;
pub mod list_postings;

pub use create_posting::{CreatePostingInput, CreatePostingUseCase};
pub use list_postings::ListPostingsUseCase;
