#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Regional band-plan definitions for a LoRaWAN network-server stack.
//!
//! A [`BandPlan`] bundles the radio parameters of one regulatory region:
//! permitted uplink/downlink channels, data rates, RX1/RX2 timing and
//! frequency derivation rules, transmit-power offsets and maximum payload
//! sizes per protocol revision. Plans are built once by a feature-gated
//! constructor, validated against the regulatory table invariants, and
//! afterwards only queried; every operation is a pure lookup, so a plan
//! can be shared by reference across any number of schedulers.
//!
//! ```
//! let plan = lorawan_band::kg866_custom(false).unwrap();
//! assert_eq!(plan.name(), "KG866CUSTOM");
//! assert_eq!(plan.get_defaults().rx2_frequency, 865_525_000);
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

#[macro_use]
mod fmt;

pub mod band;

pub use band::{
    BandPlan, Channel, ConstructionError, DataRate, Defaults, Direction, Error, MacVersion,
    MaxPayloadSize, Modulation, PingSlotFrequency, Revision, Rx1Channel, Rx1Frequency,
};

#[cfg(feature = "plan-kg866-custom")]
pub use band::kg866_custom::kg866_custom;

#[cfg(not(any(feature = "plan-kg866-custom")))]
compile_error!("You must enable at least one band plan! eg: `plan-kg866-custom`");
