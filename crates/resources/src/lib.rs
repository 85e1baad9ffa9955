//! Resource and embedded types of the AdGrid API schema.
//!
//! These mirror the platform's published JSON representation: optional
//! scalars are `Option`, repeated fields are `Vec`, enum values are
//! SCREAMING_SNAKE_CASE strings and field names are camelCase. The
//! platform owns the schema; this crate only reproduces the fields the
//! client surface populates.

pub mod ad_group;
pub mod campaign;
pub mod common;
pub mod customizer;
pub mod enums;
pub mod geo;

pub use ad_group::{Ad, AdGroup, AdGroupAd, AdGroupCriterion};
pub use campaign::{Campaign, CampaignBudget, CampaignCriterion};
pub use common::{
    AdTextAsset, AddressInfo, KeywordInfo, LocationInfo, NetworkSettings, ProximityInfo,
    ResponsiveSearchAdInfo, TargetSpend,
};
pub use customizer::{CustomerCustomizer, CustomizerAttribute, CustomizerValue};
pub use enums::*;
pub use geo::GeoTargetConstant;
