pub mod auth_routes;
pub mod booking_routes;
pub mod client_routes;
pub mod vehicle_routes;
