//! Achievement catalog and evaluator.
//!
//! Each achievement is a pure predicate over a `GameState` snapshot.
//! Evaluation alone never unlocks anything; the session unions every
//! evaluation into its persistent unlocked set, so an achievement whose
//! predicate later turns false (spent resources) stays unlocked.

use crate::state::{GameState, UpgradeKind};

/// Static description of a single achievement.
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub predicate: fn(&GameState) -> bool,
}

/// All achievements, defined statically.
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_spark",
        name: "最初の火花",
        description: "初めてクリックする",
        predicate: |s| s.total_clicks >= 1,
    },
    Achievement {
        id: "click_apprentice",
        name: "クリック見習い",
        description: "100回クリックする",
        predicate: |s| s.total_clicks >= 100,
    },
    Achievement {
        id: "click_marathon",
        name: "クリックマラソン",
        description: "1,000回クリックする",
        predicate: |s| s.total_clicks >= 1_000,
    },
    Achievement {
        id: "fully_charged",
        name: "フル充電",
        description: "エナジーを500貯める",
        predicate: |s| s.energy >= 500.0,
    },
    Achievement {
        id: "kilowatt",
        name: "キロワット",
        description: "累計エナジー1,000を生成する",
        predicate: |s| s.energy_all_time >= 1_000.0,
    },
    Achievement {
        id: "megawatt",
        name: "メガワット",
        description: "累計エナジー100,000を生成する",
        predicate: |s| s.energy_all_time >= 100_000.0,
    },
    Achievement {
        id: "automated",
        name: "自動化の始まり",
        description: "オートクリッカーを1台所有する",
        predicate: |s| s.owned(&UpgradeKind::AutoClicker) >= 1,
    },
    Achievement {
        id: "click_army",
        name: "クリック軍団",
        description: "オートクリッカーを25台所有する",
        predicate: |s| s.owned(&UpgradeKind::AutoClicker) >= 25,
    },
    Achievement {
        id: "amplified",
        name: "増幅回路",
        description: "倍率を10倍にする",
        predicate: |s| s.multiplier >= 10.0,
    },
    Achievement {
        id: "eagle_eye",
        name: "鷹の目",
        description: "クリティカル率25%に到達する",
        predicate: |s| s.critical_chance >= 25.0,
    },
    Achievement {
        id: "gold_rush",
        name: "ゴールドラッシュ",
        description: "ゴールドを100貯める",
        predicate: |s| s.gold >= 100.0,
    },
    Achievement {
        id: "gem_hoard",
        name: "ジェムの山",
        description: "ジェムを10貯める",
        predicate: |s| s.gems >= 10.0,
    },
    Achievement {
        id: "reborn",
        name: "転生者",
        description: "プレステージする",
        predicate: |s| s.prestige >= 1,
    },
    Achievement {
        id: "ascendant",
        name: "超越者",
        description: "プレステージLv.5に到達する",
        predicate: |s| s.prestige >= 5,
    },
];

/// Ids whose predicate holds for this snapshot. Pure; the monotonic
/// unlocked set lives in the session.
pub fn evaluate(state: &GameState) -> impl Iterator<Item = &'static str> + '_ {
    ACHIEVEMENTS
        .iter()
        .filter(|a| (a.predicate)(state))
        .map(|a| a.id)
}

/// Look up a catalog entry by id.
pub fn by_id(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}
