// Composition root for the activities service.
//
// - Read config from the environment.
// - Seed the in-memory directory and wire it into the use case handlers.
// - Assemble the HTTP, GraphQL and static frontend routes.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
