#![allow(dead_code)]
use core::time::Duration;

pub(crate) const RECEIVE_DELAY1: Duration = Duration::from_secs(1);
pub(crate) const RECEIVE_DELAY2: Duration = Duration::from_secs(2); // must be RECEIVE_DELAY1 + 1 s
pub(crate) const JOIN_ACCEPT_DELAY1: Duration = Duration::from_secs(5);
pub(crate) const JOIN_ACCEPT_DELAY2: Duration = Duration::from_secs(6);

/// Class-B beacons are broadcast every 128 s; ping-slot hashing plans
/// fold the beacon time onto this period.
pub(crate) const BEACON_PERIOD: Duration = Duration::from_secs(128);

pub(crate) const MAX_CHANNELS: usize = 16;
pub(crate) const RX1_DR_OFFSETS: usize = 6;
