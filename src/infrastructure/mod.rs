// Infrastructure layer module
// Contains adapters for the external prompt registry
// Follows Hexagonal Architecture

pub mod registry;
