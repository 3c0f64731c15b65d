// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Open and recover the event stores before anything can reach them.
// - Wire stores and the classifier into handlers, then expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
