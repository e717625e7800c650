use swap_layer_messages::types::{GasDropoff, GasPrice, OutputToken, SwapType, Uint48};

use crate::{
    config::EvmGasOverheads,
    error::{Result, SwapLayerError},
    state::{ExecutionParams, RelayParams},
};

// 1 ETH in WEI.
const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

fn compound(percentage: u32, base: u64) -> Option<u64> {
    if percentage == 0 {
        Some(base)
    } else {
        let base = u128::from(base);

        base.checked_add(base.checked_mul(percentage.into())? / u128::from(crate::MAX_BPS))?
            .try_into()
            .ok()
    }
}

fn calculate_evm_swap_overhead(overheads: &EvmGasOverheads, swap_type: &SwapType) -> Result<u64> {
    let (venue, num_swaps) = match swap_type {
        SwapType::UniswapV3(params) => (overheads.uniswap_v3, params.num_swaps()),
        SwapType::TraderJoe(params) => (overheads.trader_joe, params.num_swaps()),
        SwapType::JupiterV6(_) => return Err(SwapLayerError::UnsupportedSwapType),
    };

    u64::try_from(num_swaps)
        .ok()
        .and_then(|num_swaps| venue.per_swap.checked_mul(num_swaps))
        .and_then(|swap_gas| venue.overhead.checked_add(swap_gas))
        .ok_or(SwapLayerError::U64Overflow)
}

fn calculate_evm_gas_cost(
    gas_price: GasPrice,
    gas_price_margin: u32,
    total_gas: u64,
    native_token_price: u64,
) -> Option<u64> {
    // If this overflows 128 bits, one of the inputs is grossly misconfigured.
    let gas_cost = u128::from(total_gas)
        .checked_mul(u128::from(gas_price.denormalize()))?
        .checked_mul(u128::from(native_token_price))?
        / ONE_ETHER;

    compound(gas_price_margin, u64::try_from(gas_cost).ok()?)
}

fn calculate_gas_dropoff_cost(
    gas_dropoff: GasDropoff,
    gas_dropoff_margin: u32,
    native_token_price: u64,
) -> Option<u64> {
    let dropoff_cost = gas_dropoff
        .denormalize()
        .checked_mul(u128::from(native_token_price))?
        / ONE_ETHER;

    compound(gas_dropoff_margin, u64::try_from(dropoff_cost).ok()?)
}

/// Relayer fee in USDC smallest units for delivering `output_token` with `gas_dropoff` to a peer
/// priced by `relay_params`. Depends on nothing else, so relayers can quote it off-chain.
pub fn calculate_relayer_fee(
    overheads: &EvmGasOverheads,
    relay_params: &RelayParams,
    gas_dropoff: GasDropoff,
    output_token: &OutputToken,
) -> Result<u64> {
    require!(
        !relay_params.is_relaying_disabled(),
        SwapLayerError::RelayingDisabled
    );

    // Running sum of the relayer fee (USDC).
    let mut relayer_fee = u64::from(relay_params.base_fee);

    if !gas_dropoff.is_zero() {
        require!(
            gas_dropoff <= relay_params.max_gas_dropoff,
            SwapLayerError::GasDropoffTooHigh
        );

        let gas_dropoff_cost = calculate_gas_dropoff_cost(
            gas_dropoff,
            relay_params.gas_dropoff_margin,
            relay_params.native_token_price,
        )
        .ok_or(SwapLayerError::U64Overflow)?;

        relayer_fee = relayer_fee
            .checked_add(gas_dropoff_cost)
            .ok_or(SwapLayerError::U64Overflow)?;
    }

    // Cost of the relay in the target execution environment's gas units, converted to USDC.
    match relay_params.execution_params {
        ExecutionParams::Evm {
            gas_price,
            gas_price_margin,
        } => {
            let mut total_gas = overheads.base;
            if !gas_dropoff.is_zero() {
                total_gas = total_gas
                    .checked_add(overheads.dropoff)
                    .ok_or(SwapLayerError::U64Overflow)?;
            }
            if let Some(swap) = output_token.swap() {
                total_gas = total_gas
                    .checked_add(calculate_evm_swap_overhead(overheads, &swap.swap_type)?)
                    .ok_or(SwapLayerError::U64Overflow)?;
            }

            let evm_gas_cost = calculate_evm_gas_cost(
                gas_price,
                gas_price_margin,
                total_gas,
                relay_params.native_token_price,
            )
            .ok_or(SwapLayerError::U64Overflow)?;

            relayer_fee = relayer_fee
                .checked_add(evm_gas_cost)
                .ok_or(SwapLayerError::U64Overflow)?;
        }
        ExecutionParams::None => return Err(SwapLayerError::UnsupportedExecutionEnvironment),
    }

    // Relaying fee cannot exceed uint48.
    Uint48::try_from(relayer_fee).map_err(|_| SwapLayerError::RelayerFeeOverflow)?;

    Ok(relayer_fee)
}
