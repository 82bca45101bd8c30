pub mod account_query;
pub mod account_repository;
pub mod password_hasher;
pub mod token_provider;
pub mod token_repository;

pub use account_query::{AccountQuery, AccountStoreError};
pub use account_repository::AccountRepository;
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};
pub use token_repository::{TokenRepository, TokenRepositoryError};
