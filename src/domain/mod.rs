//! Distance, pricing and route logic, plus the per-session input state.

pub mod distance;
pub mod entities;
pub mod postal;
pub mod route;
pub mod session;
pub mod shipping;

#[allow(unused_imports)]
pub use distance::{distance_km, haversine_km};
#[allow(unused_imports)]
pub use entities::{Field, GeoPoint, Location, Positioned};
#[allow(unused_imports)]
pub use postal::{is_postal_code, normalize_postal_code};
#[allow(unused_imports)]
pub use route::{optimize_route, plan_route, OptimizedRoute, RouteLeg, RoutePlan};
#[allow(unused_imports)]
pub use session::{FieldState, InputHandler, LookupTicket, Session, StopSet};
#[allow(unused_imports)]
pub use shipping::{
    estimate_shipment, parse_weight, DeliveryWindow, EstimateError, RateCard, ShippingEstimate,
    ShippingTier,
};
