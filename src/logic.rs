//! Energy Rush core transitions — pure functions, fully testable.
//!
//! Every mutation of `GameState` happens here: the passive tick, the
//! manual click, the upgrade purchase and the prestige reset. Each
//! function reads the state it is given, applies one transition to
//! completion and returns; callers serialize invocations.

use crate::error::EngineError;
use crate::rng::RollSource;
use crate::state::{GameState, PurchaseBonus, UpgradeKind, BASE_CRITICAL_CHANCE};

/// Cost ratio between consecutive units of the same upgrade.
pub const COST_GROWTH: f64 = 1.15;
/// Gain multiplier applied on a successful critical roll.
pub const CRITICAL_FACTOR: f64 = 3.0;
/// Critical chance cap, in percent.
pub const MAX_CRITICAL_CHANCE: f64 = 100.0;
/// Energy required to prestige.
pub const PRESTIGE_THRESHOLD: f64 = 10_000.0;
/// Factor applied to the global multiplier on each prestige.
/// Repeated prestige compounds the multiplier; it is never reset to 1.
pub const PRESTIGE_MULTIPLIER_FACTOR: f64 = 2.0;

/// Result of one manual click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOutcome {
    pub gain: f64,
    pub critical: bool,
}

/// Result of a successful purchase.
#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseReceipt {
    pub kind: UpgradeKind,
    pub cost: f64,
    /// Owned count after the purchase.
    pub count: u32,
}

/// Result of a successful prestige.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrestigeReceipt {
    pub level: u32,
    pub multiplier: f64,
}

/// Price of the next unit of `kind` once `owned` units are held.
/// Integral, strictly increasing, uncapped.
pub fn cost(kind: &UpgradeKind, owned: u32) -> f64 {
    (kind.base_cost() * COST_GROWTH.powi(owned as i32)).floor()
}

/// Apply one passive production step (one 100 ms tick).
pub fn tick(state: &mut GameState) {
    let energy = state.energy_per_tick();
    state.energy += energy;
    state.energy_all_time += energy;
    state.gold += state.gold_per_tick();
    state.gems += state.gems_per_tick();
    state.total_ticks += 1;
}

/// Apply one manual click, rolling for a critical strike.
pub fn click<R: RollSource>(state: &mut GameState, rng: &mut R) -> ClickOutcome {
    let mut gain = state.click_gain();
    let critical = rng.roll() * 100.0 < state.critical_chance;
    if critical {
        gain *= CRITICAL_FACTOR;
    }
    state.energy += gain;
    state.energy_all_time += gain;
    state.total_clicks += 1;
    ClickOutcome { gain, critical }
}

/// Try to buy one unit of `kind`. All-or-nothing: on insufficient
/// energy nothing changes and the rejection is returned.
pub fn purchase(
    state: &mut GameState,
    kind: &UpgradeKind,
) -> Result<PurchaseReceipt, EngineError> {
    let price = cost(kind, state.owned(kind));
    if state.energy < price {
        return Err(EngineError::InsufficientFunds {
            cost: price,
            energy: state.energy,
        });
    }

    state.energy -= price;
    *state.owned_mut(kind) += 1;
    match kind.purchase_bonus() {
        PurchaseBonus::None => {}
        PurchaseBonus::MultiplyGlobal { factor } => {
            state.multiplier *= factor;
        }
        PurchaseBonus::RaiseCritical { percent } => {
            state.critical_chance = (state.critical_chance + percent).min(MAX_CRITICAL_CHANCE);
        }
    }

    let count = state.owned(kind);
    state.add_log(&format!("{} を購入！ (Lv.{})", kind.name(), count), false);
    Ok(PurchaseReceipt {
        kind: kind.clone(),
        cost: price,
        count,
    })
}

/// Try to prestige. Requires `PRESTIGE_THRESHOLD` energy; below it the
/// call is a no-op reporting failure.
///
/// On success the prestige level rises, the global multiplier doubles,
/// and energy, gold, gems, all unit counts and the critical chance are
/// reset. All-time counters and the prestige level itself survive.
pub fn prestige(state: &mut GameState) -> Result<PrestigeReceipt, EngineError> {
    if state.energy < PRESTIGE_THRESHOLD {
        return Err(EngineError::InsufficientFunds {
            cost: PRESTIGE_THRESHOLD,
            energy: state.energy,
        });
    }

    state.prestige += 1;
    state.multiplier *= PRESTIGE_MULTIPLIER_FACTOR;
    for owned in &mut state.upgrades {
        owned.count = 0;
    }
    state.energy = 0.0;
    state.gold = 0.0;
    state.gems = 0.0;
    state.critical_chance = BASE_CRITICAL_CHANCE;

    state.add_log(
        &format!(
            "🌟 プレステージ！ Lv.{} 倍率×{}",
            state.prestige,
            format_number(state.multiplier)
        ),
        true,
    );
    Ok(PrestigeReceipt {
        level: state.prestige,
        multiplier: state.multiplier,
    })
}

/// Format a number with thousands separators (e.g. 1234567 → "1,234,567").
pub fn format_number(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    let int_part = n.floor() as u64;
    let frac = n - int_part as f64;

    let digits = int_part.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if frac > 0.05 {
        format!("{}.{}", grouped, (frac * 10.0).round() as u8)
    } else {
        grouped
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::rng::FixedRolls;
    use proptest::prelude::*;

    fn arb_upgrade_kind() -> impl Strategy<Value = UpgradeKind> {
        prop_oneof![
            Just(UpgradeKind::AutoClicker),
            Just(UpgradeKind::Multiplier),
            Just(UpgradeKind::CriticalStrike),
            Just(UpgradeKind::EnergyCore),
            Just(UpgradeKind::GoldRig),
            Just(UpgradeKind::GemLab),
        ]
    }

    proptest! {
        #[test]
        fn prop_cost_strictly_increases(
            kind in arb_upgrade_kind(),
            owned in 0u32..150,
        ) {
            prop_assert!(cost(&kind, owned) < cost(&kind, owned + 1));
        }

        #[test]
        fn prop_cost_is_integral_and_positive(
            kind in arb_upgrade_kind(),
            owned in 0u32..150,
        ) {
            let c = cost(&kind, owned);
            prop_assert!(c > 0.0);
            prop_assert_eq!(c, c.floor());
        }

        #[test]
        fn prop_purchase_deducts_exact_cost(
            kind in arb_upgrade_kind(),
            extra in 0.0f64..1000.0,
        ) {
            let mut state = GameState::new();
            let price = cost(&kind, 0);
            state.energy = price + extra;
            let receipt = purchase(&mut state, &kind).unwrap();
            prop_assert_eq!(receipt.cost, price);
            prop_assert!((state.energy - extra).abs() < 1e-9);
            prop_assert_eq!(state.owned(&kind), 1);
        }

        #[test]
        fn prop_purchase_without_funds_rejected(
            kind in arb_upgrade_kind(),
        ) {
            let mut state = GameState::new();
            state.energy = cost(&kind, 0) - 1.0;
            let before_energy = state.energy;
            prop_assert!(purchase(&mut state, &kind).is_err());
            prop_assert_eq!(state.energy, before_energy);
            prop_assert_eq!(state.owned(&kind), 0);
        }

        #[test]
        fn prop_click_always_increments_counter(
            clicks in 1usize..200,
            roll in 0.0f64..1.0,
        ) {
            let mut state = GameState::new();
            let mut rng = FixedRolls::new(vec![roll]);
            for _ in 0..clicks {
                click(&mut state, &mut rng);
            }
            prop_assert_eq!(state.total_clicks, clicks as u64);
        }

        #[test]
        fn prop_click_gain_is_base_or_tripled(
            multiplier in 1.0f64..100.0,
            prestige in 0u32..20,
            roll in 0.0f64..1.0,
        ) {
            let mut state = GameState::new();
            state.multiplier = multiplier;
            state.prestige = prestige;
            let base = state.click_gain();
            let outcome = click(&mut state, &mut FixedRolls::new(vec![roll]));
            let expected = if outcome.critical { base * CRITICAL_FACTOR } else { base };
            prop_assert!((outcome.gain - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_ticks_are_linear_in_count(
            units in 1u32..100,
            ticks in 1u64..200,
        ) {
            let mut state = GameState::new();
            *state.owned_mut(&UpgradeKind::AutoClicker) = units;
            let per_tick = state.energy_per_tick();
            for _ in 0..ticks {
                tick(&mut state);
            }
            prop_assert!((state.energy - per_tick * ticks as f64).abs() < 1e-6);
        }

        #[test]
        fn prop_tick_never_reduces_resources(
            units in 0u32..50,
            rigs in 0u32..50,
        ) {
            let mut state = GameState::new();
            *state.owned_mut(&UpgradeKind::AutoClicker) = units;
            *state.owned_mut(&UpgradeKind::GoldRig) = rigs;
            state.energy = 5.0;
            state.gold = 2.0;
            tick(&mut state);
            prop_assert!(state.energy >= 5.0);
            prop_assert!(state.gold >= 2.0);
        }

        #[test]
        fn prop_format_number_commas_strip_clean(n in 0u64..1_000_000_000) {
            let s = format_number(n as f64);
            let stripped: String = s.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, n.to_string());
        }
    }
}
