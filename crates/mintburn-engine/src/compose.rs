use mintburn_core::constants::{BURN_DESTROY_SHARE, BURN_REDISTRIBUTE_SHARE};
use mintburn_core::results::{
    AssumptionsBreakdown, Breakdown, BurnBreakdown, Interpretation, MintBreakdown, Results,
};
use mintburn_core::types::{MarketAssumptions, SystemParams, Tokens, UserInputs};
use mintburn_core::EngineConfig;
use tracing::debug;

use crate::burn::compute_burned_tokens;
use crate::formula::token_price;
use crate::market::{market_burned_this_year, new_global_total_minted};
use crate::mint::compute_minted_tokens;

/// Tokenomics engine with its parameter set fixed at construction.
///
/// Holds no mutable state; `compute` can be called from any number of
/// threads and returns identical results for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenomicsEngine {
    params: SystemParams,
    market: MarketAssumptions,
}

impl TokenomicsEngine {
    pub fn new(params: SystemParams, market: MarketAssumptions) -> Self {
        Self { params, market }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.params, config.market)
    }

    pub fn params(&self) -> &SystemParams {
        &self.params
    }

    pub fn market(&self) -> &MarketAssumptions {
        &self.market
    }

    pub fn compute(&self, inputs: &UserInputs) -> Results {
        compute_with_market(inputs, &self.params, &self.market)
    }
}

impl Default for TokenomicsEngine {
    fn default() -> Self {
        Self::new(SystemParams::default(), MarketAssumptions::default())
    }
}

/// Run the full simulation against the default market assumptions.
pub fn compute(inputs: &UserInputs, params: &SystemParams) -> Results {
    compute_with_market(inputs, params, &MarketAssumptions::default())
}

/// Run the full simulation.
///
/// 1. Mint loop starting from `market.initial_global_minted`.
/// 2. Post-session price on the approximated global supply.
/// 3. Burn at that price, with discount degraded by the assumed market burn.
/// 4. Split the burn 70/30 into destroyed and redistributed.
pub fn compute_with_market(
    inputs: &UserInputs,
    params: &SystemParams,
    market: &MarketAssumptions,
) -> Results {
    let mint = compute_minted_tokens(inputs, params, market.initial_global_minted);
    let total_minted_user = mint.total_minted_user;

    let new_global = new_global_total_minted(total_minted_user, market);
    let price = token_price(new_global, params);

    let market_burned = market_burned_this_year(total_minted_user, market);
    let burn = compute_burned_tokens(inputs, params, market_burned, price);
    let total_burned = burn.total_burned;

    let (burn_destroyed, burn_redistributed) = split_burn(total_burned);
    let net_tokens = total_minted_user - total_burned;

    debug!(
        purchases = inputs.number_of_purchases,
        minted = total_minted_user,
        burned = total_burned,
        price,
        net = net_tokens,
        "tokenomics computed"
    );

    let gross_spend = inputs.gross_spend();
    let minted_value = total_minted_user * price;
    let interpretation = Interpretation {
        gross_spend,
        effective_spend: gross_spend - burn.discount_in_currency,
        minted_value,
        burned_value: total_burned * price,
        net_value: net_tokens * price,
        effective_cashback_percent: if gross_spend > 0.0 {
            minted_value / gross_spend
        } else {
            0.0
        },
    };

    let breakdown = Breakdown {
        mint: MintBreakdown {
            cashback_percent: mint.cashback_percent,
            quality_factor: mint.quality_factor,
            df_at_first_purchase: mint.df_at_first_purchase,
            df_at_last_purchase: mint.df_at_last_purchase,
            minted_per_purchase_average: mint.minted_per_purchase_average,
            cap_usage: total_minted_user / params.user_cap,
            session_global_minted: mint.new_global_total_minted,
            purchases: mint.purchases,
            purchases_omitted: mint.purchases_omitted,
        },
        burn: BurnBreakdown {
            discount_percent: burn.discount_percent,
            discount_in_currency: burn.discount_in_currency,
            burn_for_discount: burn.burn_for_discount,
            access_fee_tokens: burn.access_fee_tokens,
        },
        interpretation,
        assumptions: AssumptionsBreakdown {
            assumed_users: market.assumed_users,
            assumed_burn_rate: market.assumed_burn_rate,
            initial_global_minted: market.initial_global_minted,
            new_global_total_minted: new_global,
            market_burned_this_year: market_burned,
        },
    };

    Results {
        total_minted_user,
        token_price: price,
        total_burned,
        burn_destroyed,
        burn_redistributed,
        net_tokens,
        breakdown,
    }
}

/// Split a burn into (destroyed, redistributed to sellers).
pub fn split_burn(total_burned: Tokens) -> (Tokens, Tokens) {
    (
        total_burned * BURN_DESTROY_SHARE,
        total_burned * BURN_REDISTRIBUTE_SHARE,
    )
}
