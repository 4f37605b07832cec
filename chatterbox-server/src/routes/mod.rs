//! HTTP routes: `/messages` resource and `/health`.

mod health;
mod messages;

pub use health::{health_routes, HealthResponse};
pub use messages::{message_routes, CreateMessageRequest, UpdateMessageRequest};
