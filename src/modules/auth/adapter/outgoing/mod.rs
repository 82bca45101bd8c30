pub mod account_store_postgres;
pub mod account_store_static;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod token_repository_memory;
pub mod token_repository_redis;
