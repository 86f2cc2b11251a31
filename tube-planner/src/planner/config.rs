//! Route weighting configuration.

/// Error returned when a weighting constant is unusable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The distance weight is negative or not finite
    #[error("distance weight must be a finite non-negative number, got {0}")]
    DistanceWeight(f64),

    /// The transfer penalty is negative or not finite
    #[error("transfer penalty must be a finite non-negative number, got {0}")]
    TransferPenalty(f64),
}

/// Constants that turn a route into a cost.
///
/// Cost is measured in kilometre-equivalents: each kilometre ridden costs
/// `distance_weight`, and each change of line adds `transfer_penalty`.
/// With the defaults a change costs as much as riding 5 km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConfig {
    /// Cost per kilometre travelled.
    pub distance_weight: f64,

    /// Fixed cost added when boarding a different line from the one the
    /// rider arrived on. Not charged on the first ride.
    pub transfer_penalty: f64,
}

impl RouteConfig {
    /// Default cost per kilometre.
    pub const DEFAULT_DISTANCE_WEIGHT: f64 = 1.0;

    /// Default cost of a change of line, in kilometre-equivalents.
    pub const DEFAULT_TRANSFER_PENALTY: f64 = 5.0;

    /// Create a configuration, rejecting negative or non-finite values.
    pub fn new(distance_weight: f64, transfer_penalty: f64) -> Result<Self, ConfigError> {
        if !distance_weight.is_finite() || distance_weight < 0.0 {
            return Err(ConfigError::DistanceWeight(distance_weight));
        }
        if !transfer_penalty.is_finite() || transfer_penalty < 0.0 {
            return Err(ConfigError::TransferPenalty(transfer_penalty));
        }
        Ok(Self {
            distance_weight,
            transfer_penalty,
        })
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            distance_weight: Self::DEFAULT_DISTANCE_WEIGHT,
            transfer_penalty: Self::DEFAULT_TRANSFER_PENALTY,
        }
    }
}
