//! Endpoint methods
//!
//! One module per resource family; each method is a single HTTP call
//! dispatched through [`CampaignClient::execute`](crate::CampaignClient).

pub mod metadata;
pub mod privacy;
pub mod profiles;
pub mod services;
pub mod transactional;
pub mod workflows;
