//! Resource DTOs for the FastShip API

pub mod partner;
pub mod review;
pub mod seller;
pub mod shipment;

pub use partner::{DeliveryPartnerCreate, DeliveryPartnerRead, DeliveryPartnerUpdate};
pub use review::ReviewCreate;
pub use seller::{SellerCreate, SellerRead};
pub use shipment::{ShipmentCreate, ShipmentEvent, ShipmentRead, ShipmentUpdate, TagRead};
