//! Application layer - Command and query handlers.
//!
//! Handlers orchestrate domain logic against the ports; they hold no
//! business rules of their own beyond sequencing and error translation.

pub mod handlers;
