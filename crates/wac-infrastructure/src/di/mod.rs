//! Dependency Injection - Composition Root
//!
//! Explicit constructor injection, no container: services receive their
//! collaborators as `Arc<dyn Trait>` built here. The only registration
//! machinery is the linkme registrar slice declared in `wac-application`,
//! which stands in for the host application's plugin-initialization
//! sequence.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
