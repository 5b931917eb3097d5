//! Energy Rush game state definitions.

use serde::{Deserialize, Serialize};

/// Critical chance every session starts with, in percent.
/// Prestige resets back to this value.
pub const BASE_CRITICAL_CHANCE: f64 = 5.0;

/// Which resource a producing upgrade accrues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Energy,
    Gold,
    Gems,
}

/// Permanent side effect applied when one unit of an upgrade is bought.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PurchaseBonus {
    /// No effect beyond the owned count itself.
    None,
    /// Global multiplier is multiplied by `factor`.
    MultiplyGlobal { factor: f64 },
    /// Critical chance rises by `percent`, clamped to 100.
    RaiseCritical { percent: f64 },
}

/// Kinds of purchasable upgrades.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    AutoClicker,
    Multiplier,
    CriticalStrike,
    EnergyCore,
    GoldRig,
    GemLab,
}

impl UpgradeKind {
    /// All upgrade kinds in display order.
    pub fn all() -> &'static [UpgradeKind] {
        &[
            UpgradeKind::AutoClicker,
            UpgradeKind::Multiplier,
            UpgradeKind::CriticalStrike,
            UpgradeKind::EnergyCore,
            UpgradeKind::GoldRig,
            UpgradeKind::GemLab,
        ]
    }

    /// Stable id used at the host boundary.
    pub fn id(&self) -> &'static str {
        match self {
            UpgradeKind::AutoClicker => "autoClicker",
            UpgradeKind::Multiplier => "multiplier",
            UpgradeKind::CriticalStrike => "criticalChance",
            UpgradeKind::EnergyCore => "energyCore",
            UpgradeKind::GoldRig => "goldRig",
            UpgradeKind::GemLab => "gemLab",
        }
    }

    /// Resolve a host-supplied id. Unknown ids are a caller bug,
    /// surfaced as `EngineError::UnknownUpgrade` at the session layer.
    pub fn from_id(id: &str) -> Option<UpgradeKind> {
        UpgradeKind::all().iter().find(|k| k.id() == id).cloned()
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::AutoClicker => "オートクリッカー",
            UpgradeKind::Multiplier => "エナジー増幅器",
            UpgradeKind::CriticalStrike => "クリティカル強化",
            UpgradeKind::EnergyCore => "エナジーコア",
            UpgradeKind::GoldRig => "ゴールド採掘機",
            UpgradeKind::GemLab => "ジェム合成炉",
        }
    }

    /// Short description for shop listings.
    pub fn description(&self) -> &'static str {
        match self {
            UpgradeKind::AutoClicker => "エナジーを自動で生成する",
            UpgradeKind::Multiplier => "エナジー生成 1.5倍",
            UpgradeKind::CriticalStrike => "クリティカル率 +2%",
            UpgradeKind::EnergyCore => "オートクリッカー効率 +20%",
            UpgradeKind::GoldRig => "ゴールドを自動で採掘する",
            UpgradeKind::GemLab => "ジェムを自動で合成する",
        }
    }

    /// Cost of the first unit, in energy. Every purchase is paid in
    /// energy, including the gold and gem producers.
    pub fn base_cost(&self) -> f64 {
        match self {
            UpgradeKind::AutoClicker => 10.0,
            UpgradeKind::Multiplier => 50.0,
            UpgradeKind::CriticalStrike => 100.0,
            UpgradeKind::EnergyCore => 500.0,
            UpgradeKind::GoldRig => 200.0,
            UpgradeKind::GemLab => 2_000.0,
        }
    }

    /// Production per unit per tick, for producing kinds.
    pub fn base_rate(&self) -> f64 {
        match self {
            UpgradeKind::AutoClicker => 0.1,
            UpgradeKind::GoldRig => 0.05,
            UpgradeKind::GemLab => 0.01,
            _ => 0.0,
        }
    }

    /// Which resource this kind produces each tick, if any.
    pub fn produces(&self) -> Option<Resource> {
        match self {
            UpgradeKind::AutoClicker => Some(Resource::Energy),
            UpgradeKind::GoldRig => Some(Resource::Gold),
            UpgradeKind::GemLab => Some(Resource::Gems),
            _ => None,
        }
    }

    /// Side effect applied on purchase, beyond incrementing the count.
    pub fn purchase_bonus(&self) -> PurchaseBonus {
        match self {
            UpgradeKind::Multiplier => PurchaseBonus::MultiplyGlobal { factor: 1.5 },
            UpgradeKind::CriticalStrike => PurchaseBonus::RaiseCritical { percent: 2.0 },
            _ => PurchaseBonus::None,
        }
    }

    /// Position in `all()`, used to index `GameState::upgrades`.
    pub fn index(&self) -> usize {
        match self {
            UpgradeKind::AutoClicker => 0,
            UpgradeKind::Multiplier => 1,
            UpgradeKind::CriticalStrike => 2,
            UpgradeKind::EnergyCore => 3,
            UpgradeKind::GoldRig => 4,
            UpgradeKind::GemLab => 5,
        }
    }
}

/// Owned units of a single upgrade kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OwnedUpgrade {
    pub kind: UpgradeKind,
    pub count: u32,
}

impl OwnedUpgrade {
    pub fn new(kind: UpgradeKind) -> Self {
        Self { kind, count: 0 }
    }
}

/// Message log entry, rendered by the host.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of an Energy Rush session.
///
/// Mutated only by the transitions in `logic` (tick, click, purchase,
/// prestige); everything else reads it as a snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Primary resource.
    pub energy: f64,
    /// Secondary currency from gold rigs.
    pub gold: f64,
    /// Secondary currency from gem labs.
    pub gems: f64,
    /// Energy earned all-time. Never decreases, survives prestige.
    pub energy_all_time: f64,
    /// Global production multiplier (starts at 1.0).
    pub multiplier: f64,
    /// Critical strike chance in percent, within [0, 100].
    pub critical_chance: f64,
    /// Owned units per upgrade kind, in `UpgradeKind::all()` order.
    pub upgrades: Vec<OwnedUpgrade>,
    /// Manual clicks all-time.
    pub total_clicks: u64,
    /// Prestige level. Only ever incremented.
    pub prestige: u32,
    /// Passive ticks applied all-time.
    pub total_ticks: u64,
    /// Relic bonus folded into every gain formula (1.0 = neutral).
    /// Host-visible hook; no core transition mutates it.
    pub relic_bonus: f64,
    /// Combo multiplier folded into every gain formula (1.0 = neutral).
    /// Host-visible hook; no core transition mutates it.
    pub combo_multiplier: f64,
    /// Message log.
    pub log: Vec<LogEntry>,
}

impl GameState {
    pub fn new() -> Self {
        let upgrades = UpgradeKind::all()
            .iter()
            .map(|k| OwnedUpgrade::new(k.clone()))
            .collect();

        let mut state = Self {
            energy: 0.0,
            gold: 0.0,
            gems: 0.0,
            energy_all_time: 0.0,
            multiplier: 1.0,
            critical_chance: BASE_CRITICAL_CHANCE,
            upgrades,
            total_clicks: 0,
            prestige: 0,
            total_ticks: 0,
            relic_bonus: 1.0,
            combo_multiplier: 1.0,
            log: Vec::new(),
        };
        state.add_log("エナジーラッシュへようこそ！", true);
        state
    }

    /// Owned units of `kind`.
    pub fn owned(&self, kind: &UpgradeKind) -> u32 {
        self.upgrades[kind.index()].count
    }

    pub(crate) fn owned_mut(&mut self, kind: &UpgradeKind) -> &mut u32 {
        &mut self.upgrades[kind.index()].count
    }

    /// Permanent bonus from prestige levels: +10% per level.
    pub fn prestige_bonus(&self) -> f64 {
        1.0 + self.prestige as f64 * 0.1
    }

    /// Energy core amplifier on auto-clicker output: +20% per core.
    pub fn core_bonus(&self) -> f64 {
        1.0 + self.owned(&UpgradeKind::EnergyCore) as f64 * 0.2
    }

    /// Passive energy produced by one tick.
    ///
    /// Zero owned units yields exactly 0.0, never NaN.
    pub fn energy_per_tick(&self) -> f64 {
        let base: f64 = UpgradeKind::all()
            .iter()
            .filter(|k| k.produces() == Some(Resource::Energy))
            .map(|k| self.owned(k) as f64 * k.base_rate())
            .sum();
        base * self.multiplier
            * self.prestige_bonus()
            * self.core_bonus()
            * self.relic_bonus
            * self.combo_multiplier
    }

    /// Gold produced by one tick. Flat per-unit rate; the energy
    /// multiplier stack does not apply to secondary resources.
    pub fn gold_per_tick(&self) -> f64 {
        UpgradeKind::all()
            .iter()
            .filter(|k| k.produces() == Some(Resource::Gold))
            .map(|k| self.owned(k) as f64 * k.base_rate())
            .sum()
    }

    /// Gems produced by one tick. Flat per-unit rate, as with gold.
    pub fn gems_per_tick(&self) -> f64 {
        UpgradeKind::all()
            .iter()
            .filter(|k| k.produces() == Some(Resource::Gems))
            .map(|k| self.owned(k) as f64 * k.base_rate())
            .sum()
    }

    /// Energy gained by one non-critical manual click.
    pub fn click_gain(&self) -> f64 {
        self.multiplier * self.prestige_bonus() * self.relic_bonus * self.combo_multiplier
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_round_trips() {
        for kind in UpgradeKind::all() {
            assert_eq!(UpgradeKind::from_id(kind.id()).as_ref(), Some(kind));
        }
        assert_eq!(UpgradeKind::from_id("warpDrive"), None);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, kind) in UpgradeKind::all().iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn new_state_defaults() {
        let state = GameState::new();
        assert_eq!(state.energy, 0.0);
        assert_eq!(state.multiplier, 1.0);
        assert_eq!(state.critical_chance, BASE_CRITICAL_CHANCE);
        assert_eq!(state.prestige, 0);
        for owned in &state.upgrades {
            assert_eq!(owned.count, 0);
        }
    }

    #[test]
    fn zero_units_zero_production() {
        let state = GameState::new();
        assert_eq!(state.energy_per_tick(), 0.0);
        assert_eq!(state.gold_per_tick(), 0.0);
        assert_eq!(state.gems_per_tick(), 0.0);
        assert!(!state.energy_per_tick().is_nan());
    }

    #[test]
    fn energy_per_tick_scales_with_units() {
        let mut state = GameState::new();
        *state.owned_mut(&UpgradeKind::AutoClicker) = 4;
        // 4 units * 0.1/tick, neutral multipliers
        assert!((state.energy_per_tick() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn energy_per_tick_applies_full_stack() {
        let mut state = GameState::new();
        *state.owned_mut(&UpgradeKind::AutoClicker) = 10;
        *state.owned_mut(&UpgradeKind::EnergyCore) = 2;
        state.multiplier = 3.0;
        state.prestige = 2;
        // 10 * 0.1 * 3.0 * 1.2 * 1.4 = 5.04
        assert!((state.energy_per_tick() - 5.04).abs() < 1e-9);
    }

    #[test]
    fn relic_and_combo_scale_gains() {
        let mut state = GameState::new();
        *state.owned_mut(&UpgradeKind::AutoClicker) = 10;
        state.relic_bonus = 2.0;
        state.combo_multiplier = 1.5;
        assert!((state.energy_per_tick() - 3.0).abs() < 1e-9);
        assert!((state.click_gain() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn secondary_rates_ignore_multiplier_stack() {
        let mut state = GameState::new();
        *state.owned_mut(&UpgradeKind::GoldRig) = 2;
        *state.owned_mut(&UpgradeKind::GemLab) = 3;
        state.multiplier = 100.0;
        state.prestige = 10;
        assert!((state.gold_per_tick() - 0.1).abs() < 1e-12);
        assert!((state.gems_per_tick() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn click_gain_formula() {
        let mut state = GameState::new();
        state.multiplier = 2.0;
        state.prestige = 3;
        // 2.0 * (1 + 0.3) = 2.6
        assert!((state.click_gain() - 2.6).abs() < 1e-9);
    }

    #[test]
    fn log_truncation() {
        let mut state = GameState::new();
        for i in 0..60 {
            state.add_log(&format!("msg {}", i), false);
        }
        assert!(state.log.len() <= 50);
    }
}
