//! KG866CUSTOM band plan (865..867 MHz custom profile).
//!
//! Initialization channels are 866.2 and 866.4 MHz, RX and TX collocated
//! (the 866 MHz analogue of the Russian 868.9/869.1 pairing). Additional
//! frequencies at 865.1/865.3/865.5 MHz may later be distributed to
//! devices after registration via CFList. RX2 stays at 865.525 MHz,
//! SF9BW125.
use super::*;

const MAX_EIRP: f32 = 16.0;
const DOWNLINK_TX_POWER: i8 = 24;
const PING_SLOT_FREQUENCY: u32 = 866_200_000;

const DATARATES: [DataRate; 7] = [
    // DR0
    DataRate {
        modulation: Modulation::Lora {
            spreading_factor: SpreadingFactor::_12,
            bandwidth: Bandwidth::_125KHz,
        },
        uplink: true,
        downlink: true,
    },
    // DR1
    DataRate {
        modulation: Modulation::Lora {
            spreading_factor: SpreadingFactor::_11,
            bandwidth: Bandwidth::_125KHz,
        },
        uplink: true,
        downlink: true,
    },
    // DR2
    DataRate {
        modulation: Modulation::Lora {
            spreading_factor: SpreadingFactor::_10,
            bandwidth: Bandwidth::_125KHz,
        },
        uplink: true,
        downlink: true,
    },
    // DR3
    DataRate {
        modulation: Modulation::Lora {
            spreading_factor: SpreadingFactor::_9,
            bandwidth: Bandwidth::_125KHz,
        },
        uplink: true,
        downlink: true,
    },
    // DR4
    DataRate {
        modulation: Modulation::Lora {
            spreading_factor: SpreadingFactor::_8,
            bandwidth: Bandwidth::_125KHz,
        },
        uplink: true,
        downlink: true,
    },
    // DR5
    DataRate {
        modulation: Modulation::Lora {
            spreading_factor: SpreadingFactor::_7,
            bandwidth: Bandwidth::_125KHz,
        },
        uplink: true,
        downlink: true,
    },
    // DR6
    DataRate {
        modulation: Modulation::Lora {
            spreading_factor: SpreadingFactor::_7,
            bandwidth: Bandwidth::_250KHz,
        },
        uplink: true,
        downlink: true,
    },
];

// Published regional table: offset k steps the uplink DR down by k,
// clamped at DR0.
const RX1_DATA_RATE_TABLE: [[u8; RX1_DR_OFFSETS]; 7] = [
    [0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0],
    [2, 1, 0, 0, 0, 0],
    [3, 2, 1, 0, 0, 0],
    [4, 3, 2, 1, 0, 0],
    [5, 4, 3, 2, 1, 0],
    [6, 5, 4, 3, 2, 1],
];

const TX_POWER_OFFSETS: [i8; 8] = [0, -2, -4, -6, -8, -10, -12, -14];

// Uplink and downlink are collocated in this plan.
const CHANNELS: [Channel; 2] = [
    Channel { frequency: 866_200_000, min_dr: 0, max_dr: 5, enabled: true },
    Channel { frequency: 866_400_000, min_dr: 0, max_dr: 5, enabled: true },
];

const MAX_PAYLOAD_SIZES: [MaxPayloadSize; 6] = [
    MaxPayloadSize { m: 59, n: 51 },   // DR0
    MaxPayloadSize { m: 59, n: 51 },   // DR1
    MaxPayloadSize { m: 59, n: 51 },   // DR2
    MaxPayloadSize { m: 123, n: 115 }, // DR3
    MaxPayloadSize { m: 250, n: 242 }, // DR4
    MaxPayloadSize { m: 250, n: 242 }, // DR5
];

const MAX_PAYLOAD_SIZES_REPEATER: [MaxPayloadSize; 6] = [
    MaxPayloadSize { m: 59, n: 51 },   // DR0
    MaxPayloadSize { m: 59, n: 51 },   // DR1
    MaxPayloadSize { m: 59, n: 51 },   // DR2
    MaxPayloadSize { m: 123, n: 115 }, // DR3
    MaxPayloadSize { m: 230, n: 222 }, // DR4
    MaxPayloadSize { m: 230, n: 222 }, // DR5
];

// Every published revision of this band shares one ceiling set, so each
// version row carries only a `Latest` entry (plus the RP002-1.0.0 pin on
// the `Latest` row).
const MAX_PAYLOAD_TABLE: [((MacVersion, Revision), &[MaxPayloadSize]); 5] = [
    ((MacVersion::V1_0_2, Revision::Latest), &MAX_PAYLOAD_SIZES), // 1.0.2B
    ((MacVersion::V1_0_3, Revision::Latest), &MAX_PAYLOAD_SIZES), // 1.0.3A
    ((MacVersion::V1_1_0, Revision::Latest), &MAX_PAYLOAD_SIZES), // 1.1.0A, 1.1.0B
    ((MacVersion::Latest, Revision::RP002_1_0_0), &MAX_PAYLOAD_SIZES), // RP002-1.0.0
    ((MacVersion::Latest, Revision::Latest), &MAX_PAYLOAD_SIZES), // RP002-1.0.1..3
];

const MAX_PAYLOAD_TABLE_REPEATER: [((MacVersion, Revision), &[MaxPayloadSize]); 5] = [
    ((MacVersion::V1_0_2, Revision::Latest), &MAX_PAYLOAD_SIZES_REPEATER),
    ((MacVersion::V1_0_3, Revision::Latest), &MAX_PAYLOAD_SIZES_REPEATER),
    ((MacVersion::V1_1_0, Revision::Latest), &MAX_PAYLOAD_SIZES_REPEATER),
    ((MacVersion::Latest, Revision::RP002_1_0_0), &MAX_PAYLOAD_SIZES_REPEATER),
    ((MacVersion::Latest, Revision::Latest), &MAX_PAYLOAD_SIZES_REPEATER),
];

/// Builds the KG866CUSTOM plan. `repeater_compatible` selects the
/// payload ceilings for traffic that may traverse a repeater.
pub fn kg866_custom(repeater_compatible: bool) -> Result<BandPlan, ConstructionError> {
    let max_payload_sizes = MaxPayloadTable::new(if repeater_compatible {
        &MAX_PAYLOAD_TABLE_REPEATER
    } else {
        &MAX_PAYLOAD_TABLE
    });
    let plan = BandPlan {
        name: "KG866CUSTOM",
        data_rates: &DATARATES,
        rx1_data_rate_table: &RX1_DATA_RATE_TABLE,
        tx_power_offsets: &TX_POWER_OFFSETS,
        uplink_channels: Vec::from_slice(&CHANNELS)
            .map_err(|_| ConstructionError::TooManyChannels)?,
        downlink_channels: Vec::from_slice(&CHANNELS)
            .map_err(|_| ConstructionError::TooManyChannels)?,
        max_payload_sizes,
        defaults: Defaults {
            rx2_frequency: 865_525_000,
            rx2_data_rate: 3,
            receive_delay1: RECEIVE_DELAY1,
            receive_delay2: RECEIVE_DELAY2,
            join_accept_delay1: JOIN_ACCEPT_DELAY1,
            join_accept_delay2: JOIN_ACCEPT_DELAY2,
        },
        max_uplink_eirp: MAX_EIRP,
        downlink_tx_power: |_frequency| DOWNLINK_TX_POWER,
        rx1_frequency: Rx1Frequency::SameAsUplink,
        rx1_channel: Rx1Channel::SameAsUplink,
        ping_slot_frequency: PingSlotFrequency::Fixed(PING_SLOT_FREQUENCY),
        implements_tx_param_setup: |_protocol_version| false,
        supports_extra_channels: true,
        cflist_min_dr: 0,
        cflist_max_dr: 5,
    };
    let plan = plan.validated()?;
    debug!("KG866CUSTOM band plan built, repeater_compatible: {}", repeater_compatible);
    Ok(plan)
}
