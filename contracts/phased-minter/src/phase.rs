use cosmwasm_std::{Timestamp, Uint128};
use sg_phased_mint::{Phase, FCFS_DURATION_SECONDS, OG_DURATION_SECONDS};

use crate::state::Config;

/// Resolves the active phase. Each phase is the half-open interval
/// `[begin, end)`; public mint has no end.
pub fn current_phase(now: Timestamp, start_time: Option<Timestamp>) -> Phase {
    let start = match start_time {
        Some(start) if now >= start => start,
        _ => return Phase::NotStarted,
    };

    let fcfs_start = start.plus_seconds(OG_DURATION_SECONDS);
    let public_start = fcfs_start.plus_seconds(FCFS_DURATION_SECONDS);

    if now < fcfs_start {
        Phase::Og
    } else if now < public_start {
        Phase::Fcfs
    } else {
        Phase::Public
    }
}

pub fn phase_price(config: &Config, phase: Phase) -> Uint128 {
    match phase {
        Phase::NotStarted | Phase::Og => Uint128::zero(),
        Phase::Fcfs => config.fcfs_price,
        Phase::Public => config.public_price,
    }
}
