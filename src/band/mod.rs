//! Band-plan tables and the lookup logic over them.
//!
//! Regional variation lives in the data, not in types: every region is
//! one [`BandPlan`] value built from `&'static` tables by its
//! constructor (eg: [`kg866_custom`](crate::kg866_custom)). Behavior
//! that genuinely differs between regions (RX1 frequency and channel
//! derivation, ping-slot frequency selection, per-frequency downlink
//! power) is captured by small strategy values stored in the plan.
//!
//! A plan is validated once at construction and never mutated; all
//! operations are read-only and complete in bounded time. Out-of-range
//! arguments surface as [`Error`], never as a substituted default.

use core::time::Duration;

use heapless::Vec;
use lora_modulation::{Bandwidth, SpreadingFactor};
use lorawan::parser::DevAddr;

pub(crate) mod constants;
mod payload;

#[cfg(feature = "plan-kg866-custom")]
pub mod kg866_custom;

use constants::*;
pub use payload::{MacVersion, MaxPayloadSize, MaxPayloadTable, Revision};

/// Transfer direction of a channel or data-rate entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Direction {
    Uplink,
    Downlink,
}

/// Modulation parameters behind one data-rate index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Modulation {
    Lora { spreading_factor: SpreadingFactor, bandwidth: Bandwidth },
    /// Some sibling plans carry an FSK rate at the top of the table.
    Fsk { bit_rate: u32 },
}

/// One entry of the data-rate table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct DataRate {
    pub modulation: Modulation,
    pub uplink: bool,
    pub downlink: bool,
}

/// One uplink or downlink channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    /// Center frequency in Hz.
    pub frequency: u32,
    pub min_dr: u8,
    pub max_dr: u8,
    pub enabled: bool,
}

/// Fixed RX2 and timing parameters of a plan. Returned by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defaults {
    pub rx2_frequency: u32,
    pub rx2_data_rate: u8,
    pub receive_delay1: Duration,
    pub receive_delay2: Duration,
    pub join_accept_delay1: Duration,
    pub join_accept_delay2: Duration,
}

/// How the RX1 downlink frequency is derived from the uplink frequency.
#[derive(Debug, Clone, Copy)]
pub enum Rx1Frequency {
    /// Collocated plans answer on the uplink frequency itself.
    SameAsUplink,
    /// Plans with a separate downlink sub-band shift by a fixed amount (Hz).
    Shifted(i32),
}

/// How the RX1 channel index is derived from the uplink channel index.
#[derive(Debug, Clone, Copy)]
pub enum Rx1Channel {
    /// Symmetric plans answer on the matching downlink channel.
    SameAsUplink,
    /// Fixed plans fold the uplink index onto a smaller downlink grid.
    Modulo(usize),
}

/// How the class-B ping-slot frequency is selected.
#[derive(Debug, Clone, Copy)]
pub enum PingSlotFrequency {
    /// Every device pings on one fixed frequency.
    Fixed(u32),
    /// The device address and beacon period are hashed across a grid of
    /// `count` channels spaced `step` Hz starting at `base`.
    Hashed { base: u32, step: u32, count: u32 },
}

/// Lookup failure: the argument lies outside the plan's defined set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// No data-rate entry matches the requested parameters.
    DataRateNotFound,
    DataRateOutOfRange(u8),
    Rx1DataRateOffsetOutOfRange(usize),
    TxPowerOutOfRange(usize),
    UplinkChannelOutOfRange(usize),
    DownlinkChannelOutOfRange(usize),
    /// No enabled channel uses this frequency.
    FrequencyNotFound(u32),
    /// Frequency derivation left the representable range.
    FrequencyOutOfRange(u32),
    /// The payload-size table has no entry for this data rate.
    MaxPayloadSizeUndefined(u8),
}

/// Table invariant violated; the constructor refuses the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ConstructionError {
    EmptyDataRateTable,
    /// A data rate with both directions disabled can never be used.
    DataRateUnusable(u8),
    InvalidChannelDataRateRange { frequency: u32, min_dr: u8, max_dr: u8 },
    TooManyChannels,
    /// The RX1 channel strategy cannot map every uplink channel onto the
    /// downlink list.
    AsymmetricChannelPlan { uplink: usize, downlink: usize },
    Rx1TableShape { rows: usize, expected: usize },
    /// Offset 0 must leave the uplink data rate unchanged.
    Rx1OffsetZeroChangesDataRate { data_rate: u8 },
    /// An RX1 entry above its row index would answer faster than the
    /// uplink was able to transmit.
    Rx1DataRateRaised { data_rate: u8, offset: usize },
    TxPowerTableEmpty,
    NonZeroFirstTxPowerOffset(i8),
    PositiveTxPowerOffset { index: usize, offset: i8 },
    /// A channel-reachable data rate has no payload-size entry.
    MaxPayloadSizeMissing { data_rate: u8 },
    InvalidMaxPayloadSize { m: u8, n: u8 },
    /// No `(Latest, Latest)` row; sentinel resolution could fail.
    MaxPayloadTableMissingLatest,
    InvalidRx2DataRate(u8),
}

/// Immutable radio-parameter profile of one regulatory region.
///
/// Built once by a plan constructor, then shared by reference; every
/// method is a pure function of its arguments and the tables.
#[derive(Debug, Clone)]
pub struct BandPlan {
    name: &'static str,
    data_rates: &'static [DataRate],
    /// Row per uplink data rate, column per RX1 offset 0..=5.
    rx1_data_rate_table: &'static [[u8; RX1_DR_OFFSETS]],
    tx_power_offsets: &'static [i8],
    uplink_channels: Vec<Channel, MAX_CHANNELS>,
    downlink_channels: Vec<Channel, MAX_CHANNELS>,
    max_payload_sizes: MaxPayloadTable,
    defaults: Defaults,
    max_uplink_eirp: f32,
    downlink_tx_power: fn(u32) -> i8,
    rx1_frequency: Rx1Frequency,
    rx1_channel: Rx1Channel,
    ping_slot_frequency: PingSlotFrequency,
    implements_tx_param_setup: fn(&str) -> bool,
    supports_extra_channels: bool,
    cflist_min_dr: u8,
    cflist_max_dr: u8,
}

impl BandPlan {
    /// Identifier the caller's plan registry selects this plan by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fixed RX2 and receive-window timing parameters.
    pub fn get_defaults(&self) -> Defaults {
        self.defaults
    }

    /// Maximum downlink EIRP (dBm) for a transmit frequency. Plans with
    /// a single sub-band return one value for every frequency; the
    /// argument exists for interface uniformity with plans that do not.
    pub fn get_downlink_tx_power(&self, frequency: u32) -> i8 {
        (self.downlink_tx_power)(frequency)
    }

    /// Maximum uplink EIRP (dBm) devices may assume before TXParamSetup.
    pub fn get_default_max_uplink_eirp(&self) -> f32 {
        self.max_uplink_eirp
    }

    /// Class-B ping-slot frequency for a device at a beacon time.
    pub fn get_ping_slot_frequency(
        &self,
        dev_addr: DevAddr<[u8; 4]>,
        beacon_time: Duration,
    ) -> Result<u32, Error> {
        match self.ping_slot_frequency {
            PingSlotFrequency::Fixed(frequency) => Ok(frequency),
            PingSlotFrequency::Hashed { base, step, count } => {
                let addr = dev_addr.as_ref();
                let addr = u32::from_be_bytes([addr[0], addr[1], addr[2], addr[3]]);
                let period = (beacon_time.as_secs() / BEACON_PERIOD.as_secs()) as u32;
                let channel = addr.wrapping_add(period) % count;
                Ok(base + channel * step)
            }
        }
    }

    /// Downlink channel index answering the given uplink channel index.
    pub fn get_rx1_channel_index_for_uplink_channel_index(
        &self,
        uplink_channel: usize,
    ) -> Result<usize, Error> {
        if uplink_channel >= self.uplink_channels.len() {
            warn!("uplink channel {} out of range", uplink_channel);
            return Err(Error::UplinkChannelOutOfRange(uplink_channel));
        }
        match self.rx1_channel {
            Rx1Channel::SameAsUplink => Ok(uplink_channel),
            Rx1Channel::Modulo(grid) => Ok(uplink_channel % grid),
        }
    }

    /// RX1 downlink frequency answering the given uplink frequency.
    pub fn get_rx1_frequency_for_uplink_frequency(
        &self,
        uplink_frequency: u32,
    ) -> Result<u32, Error> {
        match self.rx1_frequency {
            Rx1Frequency::SameAsUplink => Ok(uplink_frequency),
            Rx1Frequency::Shifted(shift) => {
                u32::try_from(i64::from(uplink_frequency) + i64::from(shift))
                    .map_err(|_| Error::FrequencyOutOfRange(uplink_frequency))
            }
        }
    }

    /// Whether this plan negotiates the TXParamSetup MAC command for the
    /// given protocol version.
    pub fn implements_tx_param_setup(&self, protocol_version: &str) -> bool {
        (self.implements_tx_param_setup)(protocol_version)
    }

    pub fn get_data_rate(&self, dr: u8) -> Result<&DataRate, Error> {
        self.data_rates.get(dr as usize).ok_or(Error::DataRateOutOfRange(dr))
    }

    /// Reverse lookup: index of the entry with these modulation
    /// parameters that is enabled for `direction`.
    pub fn get_data_rate_index(
        &self,
        direction: Direction,
        modulation: &Modulation,
    ) -> Result<u8, Error> {
        self.data_rates
            .iter()
            .position(|dr| {
                let enabled = match direction {
                    Direction::Uplink => dr.uplink,
                    Direction::Downlink => dr.downlink,
                };
                enabled && dr.modulation == *modulation
            })
            .map(|index| index as u8)
            .ok_or(Error::DataRateNotFound)
    }

    /// RX1 data rate answering an uplink sent at `uplink_dr` with the
    /// session's RX1 offset. The pre-computed entries step down by the
    /// offset and clamp at DR0.
    pub fn get_rx1_data_rate_index(
        &self,
        uplink_dr: u8,
        rx1_dr_offset: usize,
    ) -> Result<u8, Error> {
        let row = self
            .rx1_data_rate_table
            .get(uplink_dr as usize)
            .ok_or(Error::DataRateOutOfRange(uplink_dr))?;
        row.get(rx1_dr_offset).copied().ok_or(Error::Rx1DataRateOffsetOutOfRange(rx1_dr_offset))
    }

    /// Payload ceilings for a data rate under the given protocol version
    /// and regional-parameters revision (`Latest` resolves either axis).
    pub fn get_max_payload_size(
        &self,
        mac_version: MacVersion,
        revision: Revision,
        dr: u8,
    ) -> Result<MaxPayloadSize, Error> {
        self.max_payload_sizes
            .get(mac_version, revision, dr)
            .ok_or(Error::MaxPayloadSizeUndefined(dr))
    }

    /// Attenuation (dB, <= 0) for a TXPower index.
    pub fn get_tx_power_offset(&self, tx_power: usize) -> Result<i8, Error> {
        self.tx_power_offsets.get(tx_power).copied().ok_or(Error::TxPowerOutOfRange(tx_power))
    }

    pub fn tx_power_offsets(&self) -> &[i8] {
        self.tx_power_offsets
    }

    pub fn get_uplink_channel(&self, index: usize) -> Result<&Channel, Error> {
        self.uplink_channels.get(index).ok_or(Error::UplinkChannelOutOfRange(index))
    }

    pub fn get_downlink_channel(&self, index: usize) -> Result<&Channel, Error> {
        self.downlink_channels.get(index).ok_or(Error::DownlinkChannelOutOfRange(index))
    }

    /// Index of the enabled uplink channel at `frequency`.
    pub fn get_uplink_channel_index(&self, frequency: u32) -> Result<usize, Error> {
        self.uplink_channels
            .iter()
            .position(|channel| channel.enabled && channel.frequency == frequency)
            .ok_or(Error::FrequencyNotFound(frequency))
    }

    pub fn enabled_uplink_channels(&self) -> impl Iterator<Item = (usize, &Channel)> + '_ {
        self.uplink_channels.iter().enumerate().filter(|(_, channel)| channel.enabled)
    }

    pub fn num_uplink_channels(&self) -> usize {
        self.uplink_channels.len()
    }

    pub fn num_downlink_channels(&self) -> usize {
        self.downlink_channels.len()
    }

    /// Whether extra channels may be distributed to devices (CFList).
    pub fn supports_extra_channels(&self) -> bool {
        self.supports_extra_channels
    }

    /// Inclusive data-rate range CFList channels are announced with.
    pub fn cflist_data_rate_range(&self) -> (u8, u8) {
        (self.cflist_min_dr, self.cflist_max_dr)
    }

    /// One-time invariant check; plan constructors call this before
    /// handing the plan out.
    pub(crate) fn validated(self) -> Result<Self, ConstructionError> {
        if self.data_rates.is_empty() {
            return Err(ConstructionError::EmptyDataRateTable);
        }
        for (index, dr) in self.data_rates.iter().enumerate() {
            if !dr.uplink && !dr.downlink {
                return Err(ConstructionError::DataRateUnusable(index as u8));
            }
        }

        let num_drs = self.data_rates.len() as u8;
        for channel in self.uplink_channels.iter().chain(self.downlink_channels.iter()) {
            if channel.min_dr > channel.max_dr || channel.max_dr >= num_drs {
                return Err(ConstructionError::InvalidChannelDataRateRange {
                    frequency: channel.frequency,
                    min_dr: channel.min_dr,
                    max_dr: channel.max_dr,
                });
            }
        }
        let mappable = match self.rx1_channel {
            Rx1Channel::SameAsUplink => self.downlink_channels.len() >= self.uplink_channels.len(),
            Rx1Channel::Modulo(grid) => grid > 0 && grid <= self.downlink_channels.len(),
        };
        if !mappable {
            return Err(ConstructionError::AsymmetricChannelPlan {
                uplink: self.uplink_channels.len(),
                downlink: self.downlink_channels.len(),
            });
        }

        if self.rx1_data_rate_table.len() != self.data_rates.len() {
            return Err(ConstructionError::Rx1TableShape {
                rows: self.rx1_data_rate_table.len(),
                expected: self.data_rates.len(),
            });
        }
        for (dr, row) in self.rx1_data_rate_table.iter().enumerate() {
            let dr = dr as u8;
            if row[0] != dr {
                return Err(ConstructionError::Rx1OffsetZeroChangesDataRate { data_rate: dr });
            }
            for (offset, &entry) in row.iter().enumerate() {
                if entry > dr {
                    return Err(ConstructionError::Rx1DataRateRaised { data_rate: dr, offset });
                }
            }
        }

        match self.tx_power_offsets.first() {
            None => return Err(ConstructionError::TxPowerTableEmpty),
            Some(&first) if first != 0 => {
                return Err(ConstructionError::NonZeroFirstTxPowerOffset(first))
            }
            Some(_) => {}
        }
        for (index, &offset) in self.tx_power_offsets.iter().enumerate() {
            if offset > 0 {
                return Err(ConstructionError::PositiveTxPowerOffset { index, offset });
            }
        }

        if !self.max_payload_sizes.has_latest() {
            return Err(ConstructionError::MaxPayloadTableMissingLatest);
        }
        let reachable_max_dr = self
            .uplink_channels
            .iter()
            .chain(self.downlink_channels.iter())
            .map(|channel| channel.max_dr)
            .max()
            .unwrap_or(0);
        for row in self.max_payload_sizes.rows() {
            if row.len() <= reachable_max_dr as usize {
                return Err(ConstructionError::MaxPayloadSizeMissing {
                    data_rate: reachable_max_dr,
                });
            }
            for size in row {
                if size.m < size.n {
                    return Err(ConstructionError::InvalidMaxPayloadSize {
                        m: size.m,
                        n: size.n,
                    });
                }
            }
        }

        let rx2 = self.defaults.rx2_data_rate;
        match self.data_rates.get(rx2 as usize) {
            Some(dr) if dr.downlink => {}
            _ => return Err(ConstructionError::InvalidRx2DataRate(rx2)),
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATARATES: [DataRate; 2] = [
        DataRate {
            modulation: Modulation::Lora {
                spreading_factor: SpreadingFactor::_12,
                bandwidth: Bandwidth::_125KHz,
            },
            uplink: true,
            downlink: true,
        },
        DataRate {
            modulation: Modulation::Lora {
                spreading_factor: SpreadingFactor::_11,
                bandwidth: Bandwidth::_125KHz,
            },
            uplink: true,
            downlink: true,
        },
    ];
    const RX1_TABLE: [[u8; RX1_DR_OFFSETS]; 2] = [[0; 6], [1, 0, 0, 0, 0, 0]];
    const TX_POWER_OFFSETS: [i8; 3] = [0, -2, -4];
    const SIZES: [MaxPayloadSize; 2] =
        [MaxPayloadSize { m: 59, n: 51 }, MaxPayloadSize { m: 59, n: 51 }];
    const PAYLOAD: [((MacVersion, Revision), &[MaxPayloadSize]); 1] =
        [((MacVersion::Latest, Revision::Latest), &SIZES)];
    const CHANNEL: Channel =
        Channel { frequency: 868_100_000, min_dr: 0, max_dr: 1, enabled: true };

    fn plan() -> BandPlan {
        BandPlan {
            name: "TEST",
            data_rates: &DATARATES,
            rx1_data_rate_table: &RX1_TABLE,
            tx_power_offsets: &TX_POWER_OFFSETS,
            uplink_channels: Vec::from_slice(&[CHANNEL]).unwrap(),
            downlink_channels: Vec::from_slice(&[CHANNEL]).unwrap(),
            max_payload_sizes: MaxPayloadTable::new(&PAYLOAD),
            defaults: Defaults {
                rx2_frequency: 869_525_000,
                rx2_data_rate: 0,
                receive_delay1: RECEIVE_DELAY1,
                receive_delay2: RECEIVE_DELAY2,
                join_accept_delay1: JOIN_ACCEPT_DELAY1,
                join_accept_delay2: JOIN_ACCEPT_DELAY2,
            },
            max_uplink_eirp: 16.0,
            downlink_tx_power: |_| 14,
            rx1_frequency: Rx1Frequency::SameAsUplink,
            rx1_channel: Rx1Channel::SameAsUplink,
            ping_slot_frequency: PingSlotFrequency::Fixed(869_525_000),
            implements_tx_param_setup: |_| false,
            supports_extra_channels: false,
            cflist_min_dr: 0,
            cflist_max_dr: 1,
        }
    }

    #[test]
    fn valid_plan_passes() {
        assert!(plan().validated().is_ok());
    }

    #[test]
    fn rejects_unusable_data_rate() {
        static BAD: [DataRate; 1] = [DataRate {
            modulation: Modulation::Fsk { bit_rate: 50_000 },
            uplink: false,
            downlink: false,
        }];
        let mut plan = plan();
        plan.data_rates = &BAD;
        // rx1 table no longer matches either, but the data-rate check fires first
        assert_eq!(plan.validated().unwrap_err(), ConstructionError::DataRateUnusable(0));
    }

    #[test]
    fn rejects_inverted_channel_range() {
        let mut plan = plan();
        plan.uplink_channels[0].min_dr = 1;
        plan.uplink_channels[0].max_dr = 0;
        assert_eq!(
            plan.validated().unwrap_err(),
            ConstructionError::InvalidChannelDataRateRange {
                frequency: 868_100_000,
                min_dr: 1,
                max_dr: 0
            }
        );
    }

    #[test]
    fn rejects_rx1_entry_above_row() {
        static BAD: [[u8; RX1_DR_OFFSETS]; 2] = [[0, 1, 0, 0, 0, 0], [1, 0, 0, 0, 0, 0]];
        let mut plan = plan();
        plan.rx1_data_rate_table = &BAD;
        assert_eq!(
            plan.validated().unwrap_err(),
            ConstructionError::Rx1DataRateRaised { data_rate: 0, offset: 1 }
        );
    }

    #[test]
    fn rejects_rx1_offset_zero_downgrade() {
        static BAD: [[u8; RX1_DR_OFFSETS]; 2] = [[0; 6], [0; 6]];
        let mut plan = plan();
        plan.rx1_data_rate_table = &BAD;
        assert_eq!(
            plan.validated().unwrap_err(),
            ConstructionError::Rx1OffsetZeroChangesDataRate { data_rate: 1 }
        );
    }

    #[test]
    fn rejects_nonzero_first_tx_power_offset() {
        static BAD: [i8; 2] = [-2, -4];
        let mut plan = plan();
        plan.tx_power_offsets = &BAD;
        assert_eq!(
            plan.validated().unwrap_err(),
            ConstructionError::NonZeroFirstTxPowerOffset(-2)
        );
    }

    #[test]
    fn rejects_payload_size_m_below_n() {
        static BAD_SIZES: [MaxPayloadSize; 2] =
            [MaxPayloadSize { m: 59, n: 51 }, MaxPayloadSize { m: 51, n: 59 }];
        static BAD: [((MacVersion, Revision), &[MaxPayloadSize]); 1] =
            [((MacVersion::Latest, Revision::Latest), &BAD_SIZES)];
        let mut plan = plan();
        plan.max_payload_sizes = MaxPayloadTable::new(&BAD);
        assert_eq!(
            plan.validated().unwrap_err(),
            ConstructionError::InvalidMaxPayloadSize { m: 51, n: 59 }
        );
    }

    #[test]
    fn rejects_missing_latest_payload_row() {
        static BAD: [((MacVersion, Revision), &[MaxPayloadSize]); 1] =
            [((MacVersion::V1_0_2, Revision::Latest), &SIZES)];
        let mut plan = plan();
        plan.max_payload_sizes = MaxPayloadTable::new(&BAD);
        assert_eq!(
            plan.validated().unwrap_err(),
            ConstructionError::MaxPayloadTableMissingLatest
        );
    }

    #[test]
    fn rejects_rx2_data_rate_outside_table() {
        let mut plan = plan();
        plan.defaults.rx2_data_rate = 2;
        assert_eq!(plan.validated().unwrap_err(), ConstructionError::InvalidRx2DataRate(2));
    }

    #[test]
    fn shifted_rx1_frequency() {
        let mut plan = plan().validated().unwrap();
        plan.rx1_frequency = Rx1Frequency::Shifted(-500_000_000);
        assert_eq!(plan.get_rx1_frequency_for_uplink_frequency(902_300_000), Ok(402_300_000));
        // shifting below zero is an error, not a wrap-around
        assert_eq!(
            plan.get_rx1_frequency_for_uplink_frequency(400_000_000),
            Err(Error::FrequencyOutOfRange(400_000_000))
        );
    }

    #[test]
    fn modulo_rx1_channel() {
        let mut plan = plan();
        let channels = [CHANNEL; 8];
        plan.uplink_channels = Vec::from_slice(&channels).unwrap();
        plan.downlink_channels = Vec::from_slice(&channels[..4]).unwrap();
        plan.rx1_channel = Rx1Channel::Modulo(4);
        let plan = plan.validated().unwrap();
        assert_eq!(plan.get_rx1_channel_index_for_uplink_channel_index(6), Ok(2));
        assert_eq!(
            plan.get_rx1_channel_index_for_uplink_channel_index(8),
            Err(Error::UplinkChannelOutOfRange(8))
        );
    }

    #[test]
    fn hashed_ping_slot_walks_the_grid() {
        let mut plan = plan().validated().unwrap();
        plan.ping_slot_frequency =
            PingSlotFrequency::Hashed { base: 923_300_000, step: 600_000, count: 8 };
        let addr = DevAddr::new([0, 0, 0, 3]).unwrap();
        // beacon period 128 s: 3 + 0 = channel 3
        assert_eq!(
            plan.get_ping_slot_frequency(addr, Duration::from_secs(0)),
            Ok(923_300_000 + 3 * 600_000)
        );
        // one beacon period later the channel advances by one
        assert_eq!(
            plan.get_ping_slot_frequency(addr, Duration::from_secs(128)),
            Ok(923_300_000 + 4 * 600_000)
        );
        // and wraps at the top of the grid
        assert_eq!(
            plan.get_ping_slot_frequency(addr, Duration::from_secs(128 * 5)),
            Ok(923_300_000)
        );
    }
}
