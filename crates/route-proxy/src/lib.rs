//! Route proxy: relays the directions service as a flat waypoint list.

pub mod directions;
pub mod ranges;
pub mod server;
#[cfg(test)]
mod test_support;

pub use directions::DirectionsClient;
pub use server::router;
