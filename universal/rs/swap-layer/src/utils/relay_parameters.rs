use swap_layer_messages::{
    messages::{FeeParamUpdate, FeeParams},
    types::{GasPrice, Percentage},
};

use crate::{
    error::{Result, SwapLayerError},
    state::{ExecutionParams, RelayParams, SwapTimeLimit},
    MAX_BPS,
};

pub fn verify_relay_params(params: &RelayParams) -> Result<()> {
    require!(params.base_fee > 0, SwapLayerError::InvalidBaseFee);
    require!(
        params.native_token_price > 0,
        SwapLayerError::InvalidNativeTokenPrice
    );
    require!(
        params.gas_dropoff_margin <= MAX_BPS,
        SwapLayerError::InvalidMargin
    );

    match params.execution_params {
        ExecutionParams::Evm {
            gas_price,
            gas_price_margin,
        } => {
            require!(gas_price.get() > 0, SwapLayerError::InvalidGasPrice);
            require!(gas_price_margin <= MAX_BPS, SwapLayerError::InvalidMargin);
        }
        ExecutionParams::None => {}
    }

    Ok(())
}

fn percentage_to_bps(percentage: Percentage) -> u32 {
    // At most 100% of MAX_BPS.
    u32::try_from(percentage.scale(MAX_BPS.into())).unwrap_or(MAX_BPS)
}

fn bps_to_percentage(bps: u32) -> Result<Percentage> {
    Percentage::from_ratio(bps.into(), MAX_BPS.into()).map_err(|_| SwapLayerError::InvalidMargin)
}

/// Relay parameters described by a governance fee record. Time limits are not part of the record.
pub fn relay_params_from_fee_params(
    fee_params: &FeeParams,
    swap_time_limit: SwapTimeLimit,
) -> RelayParams {
    RelayParams {
        base_fee: fee_params.base_fee,
        native_token_price: fee_params.gas_token_price,
        max_gas_dropoff: fee_params.max_gas_dropoff,
        gas_dropoff_margin: percentage_to_bps(fee_params.gas_dropoff_margin),
        execution_params: ExecutionParams::Evm {
            gas_price: fee_params.gas_price,
            gas_price_margin: percentage_to_bps(fee_params.gas_price_margin),
        },
        swap_time_limit,
    }
}

/// Fee record reported for a peer. Fields this program does not track are zero.
pub fn fee_params_from_relay_params(params: &RelayParams) -> Result<FeeParams> {
    let (gas_price, gas_price_margin) = match params.execution_params {
        ExecutionParams::Evm {
            gas_price,
            gas_price_margin,
        } => (gas_price, bps_to_percentage(gas_price_margin)?),
        ExecutionParams::None => (GasPrice::default(), Percentage::ZERO),
    };

    Ok(FeeParams {
        base_fee: params.base_fee,
        gas_price,
        gas_price_margin,
        gas_price_timestamp: 0,
        gas_price_update_threshold: Percentage::ZERO,
        max_gas_dropoff: params.max_gas_dropoff,
        gas_dropoff_margin: bps_to_percentage(params.gas_dropoff_margin)?,
        gas_token_price: params.native_token_price,
    })
}

/// Apply one fee update. The result still has to pass [verify_relay_params].
pub fn apply_fee_param_update(params: &mut RelayParams, update: FeeParamUpdate) -> Result<()> {
    match update {
        FeeParamUpdate::BaseFee(base_fee) => params.base_fee = base_fee,
        FeeParamUpdate::GasTokenPrice(price) => params.native_token_price = price,
        FeeParamUpdate::MaxGasDropoff(max_gas_dropoff) => params.max_gas_dropoff = max_gas_dropoff,
        FeeParamUpdate::GasDropoffMargin(margin) => {
            params.gas_dropoff_margin = percentage_to_bps(margin)
        }
        FeeParamUpdate::GasPrice {
            gas_price: new_gas_price,
            ..
        } => match &mut params.execution_params {
            ExecutionParams::Evm { gas_price, .. } => *gas_price = new_gas_price,
            ExecutionParams::None => return Err(SwapLayerError::UnsupportedExecutionEnvironment),
        },
        FeeParamUpdate::GasPriceMargin(margin) => match &mut params.execution_params {
            ExecutionParams::Evm {
                gas_price_margin, ..
            } => *gas_price_margin = percentage_to_bps(margin),
            ExecutionParams::None => return Err(SwapLayerError::UnsupportedExecutionEnvironment),
        },
        // Relay params keep no update threshold.
        FeeParamUpdate::GasPriceUpdateThreshold(_) => {
            return Err(SwapLayerError::UnsupportedFeeParamUpdate)
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use swap_layer_messages::types::GasDropoff;

    use super::*;

    fn relay_params() -> RelayParams {
        RelayParams {
            base_fee: 1_500_000,
            native_token_price: 200_000_000,
            max_gas_dropoff: GasDropoff::new(500_000),
            gas_dropoff_margin: 500_000,
            execution_params: ExecutionParams::Evm {
                gas_price: GasPrice::new(10_000),
                gas_price_margin: 250_000,
            },
            swap_time_limit: SwapTimeLimit {
                fast_limit: 10,
                finalized_limit: 30,
            },
        }
    }

    #[test]
    fn valid_params() {
        assert_eq!(verify_relay_params(&relay_params()), Ok(()));

        // Disabled sentinel is still a valid base fee.
        let disabled = RelayParams {
            base_fee: RelayParams::DISABLED_BASE_FEE,
            ..relay_params()
        };
        assert_eq!(verify_relay_params(&disabled), Ok(()));
    }

    #[test]
    fn invalid_params() {
        let cases = [
            (
                RelayParams {
                    base_fee: 0,
                    ..relay_params()
                },
                SwapLayerError::InvalidBaseFee,
            ),
            (
                RelayParams {
                    native_token_price: 0,
                    ..relay_params()
                },
                SwapLayerError::InvalidNativeTokenPrice,
            ),
            (
                RelayParams {
                    gas_dropoff_margin: MAX_BPS + 1,
                    ..relay_params()
                },
                SwapLayerError::InvalidMargin,
            ),
            (
                RelayParams {
                    execution_params: ExecutionParams::Evm {
                        gas_price: GasPrice::new(0),
                        gas_price_margin: 0,
                    },
                    ..relay_params()
                },
                SwapLayerError::InvalidGasPrice,
            ),
            (
                RelayParams {
                    execution_params: ExecutionParams::Evm {
                        gas_price: GasPrice::new(1),
                        gas_price_margin: MAX_BPS + 1,
                    },
                    ..relay_params()
                },
                SwapLayerError::InvalidMargin,
            ),
        ];

        for (params, expected) in cases {
            assert_eq!(verify_relay_params(&params), Err(expected));
        }
    }

    #[test]
    fn fee_params_round_trip() {
        let params = relay_params();
        let fee_params = fee_params_from_relay_params(&params).unwrap();
        assert_eq!(fee_params.gas_dropoff_margin, Percentage::from_f64(50.).unwrap());
        assert_eq!(fee_params.gas_price_margin, Percentage::from_f64(25.).unwrap());

        assert_eq!(
            relay_params_from_fee_params(&fee_params, params.swap_time_limit),
            params
        );
    }

    #[test]
    fn updates() {
        let mut params = relay_params();
        apply_fee_param_update(&mut params, FeeParamUpdate::BaseFee(2_000_000)).unwrap();
        apply_fee_param_update(
            &mut params,
            FeeParamUpdate::GasPriceMargin(Percentage::from_f64(10.).unwrap()),
        )
        .unwrap();
        apply_fee_param_update(
            &mut params,
            FeeParamUpdate::GasPrice {
                timestamp: 1_700_000_000,
                gas_price: GasPrice::new(12_000),
            },
        )
        .unwrap();

        assert_eq!(params.base_fee, 2_000_000);
        assert_eq!(
            params.execution_params,
            ExecutionParams::Evm {
                gas_price: GasPrice::new(12_000),
                gas_price_margin: 100_000,
            }
        );

        assert_eq!(
            apply_fee_param_update(
                &mut params,
                FeeParamUpdate::GasPriceUpdateThreshold(Percentage::from_f64(5.).unwrap())
            ),
            Err(SwapLayerError::UnsupportedFeeParamUpdate)
        );

        let mut params = RelayParams {
            execution_params: ExecutionParams::None,
            ..relay_params()
        };
        assert_eq!(
            apply_fee_param_update(
                &mut params,
                FeeParamUpdate::GasPrice {
                    timestamp: 0,
                    gas_price: GasPrice::new(1),
                }
            ),
            Err(SwapLayerError::UnsupportedExecutionEnvironment)
        );
    }
}
