pub mod route_planner;
pub mod shipping;

pub use route_planner::RoutePlannerPage;
pub use shipping::ShippingPage;
