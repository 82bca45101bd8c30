pub mod token_hasher;
