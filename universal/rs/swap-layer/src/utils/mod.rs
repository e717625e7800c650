pub mod relay_parameters;
pub mod relayer_fees;
