//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod connections;
pub mod ficha_query;
pub mod login;
pub mod paths;
pub mod register;
pub mod spend_point;
pub mod update_ficha;

// Re-exports
pub use config::AccountConfig;
pub use connections::SaveConnectionsUseCase;
pub use ficha_query::FichaQueryUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use paths::ReplacePathsUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use spend_point::SpendPointUseCase;
pub use update_ficha::UpdateFichaUseCase;
