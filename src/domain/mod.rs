// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of the registry transport

pub mod prompt;
pub mod repositories;
