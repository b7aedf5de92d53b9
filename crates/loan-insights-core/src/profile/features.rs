//! Simulated alternative-data signals.
//!
//! Each signal is a normalised score in [0, 1]. Every occupation starts from
//! the neutral baseline of 0.5 and a static table overrides the signals that
//! the occupation is known to move. The values are illustrative constants,
//! not fitted or fetched.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::occupation::Occupation;

/// Neutral value used for every signal an occupation does not override.
pub const BASELINE_SIGNAL: Decimal = dec!(0.5);

/// Heuristic, non-bureau proxies for creditworthiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltSignal {
    /// Regularity of income streams.
    IncomeStabilityProxy,
    /// Use of digital payments.
    DigitalTransactionVolume,
    /// Ratings, reviews and community standing.
    SocialReputationProxy,
    /// Vehicles, equipment, land.
    AssetOwnershipProxy,
    /// Ability to move between kinds of work.
    SkillVersatilityProxy,
}

impl AltSignal {
    pub const ALL: [AltSignal; 5] = [
        AltSignal::IncomeStabilityProxy,
        AltSignal::DigitalTransactionVolume,
        AltSignal::SocialReputationProxy,
        AltSignal::AssetOwnershipProxy,
        AltSignal::SkillVersatilityProxy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AltSignal::IncomeStabilityProxy => "income_stability_proxy",
            AltSignal::DigitalTransactionVolume => "digital_transaction_volume",
            AltSignal::SocialReputationProxy => "social_reputation_proxy",
            AltSignal::AssetOwnershipProxy => "asset_ownership_proxy",
            AltSignal::SkillVersatilityProxy => "skill_versatility_proxy",
        }
    }
}

impl std::fmt::Display for AltSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Signal scores for one applicant. Values are clamped into [0, 1] on the
/// way in, including when deserialised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<AltSignal, Decimal>", into = "BTreeMap<AltSignal, Decimal>")]
pub struct FeatureSet {
    signals: BTreeMap<AltSignal, Decimal>,
}

impl FeatureSet {
    pub fn get(&self, signal: AltSignal) -> Option<Decimal> {
        self.signals.get(&signal).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AltSignal, Decimal)> + '_ {
        self.signals.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Arithmetic mean of the signal values; `None` for an empty set.
    pub fn mean(&self) -> Option<Decimal> {
        if self.signals.is_empty() {
            return None;
        }
        let total: Decimal = self.signals.values().copied().sum();
        Some(total / Decimal::from(self.signals.len() as u64))
    }
}

impl FromIterator<(AltSignal, Decimal)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (AltSignal, Decimal)>>(iter: I) -> Self {
        let signals = iter
            .into_iter()
            .map(|(signal, value)| (signal, value.clamp(Decimal::ZERO, Decimal::ONE)))
            .collect();
        FeatureSet { signals }
    }
}

impl From<BTreeMap<AltSignal, Decimal>> for FeatureSet {
    fn from(map: BTreeMap<AltSignal, Decimal>) -> Self {
        map.into_iter().collect()
    }
}

impl From<FeatureSet> for BTreeMap<AltSignal, Decimal> {
    fn from(set: FeatureSet) -> Self {
        set.signals
    }
}

// ---------------------------------------------------------------------------
// Occupation override table
// ---------------------------------------------------------------------------

type Overrides = &'static [(AltSignal, Decimal)];

const GIG_WORKER: Overrides = &[
    (AltSignal::IncomeStabilityProxy, dec!(0.6)),
    (AltSignal::DigitalTransactionVolume, dec!(0.7)),
    // platform ratings
    (AltSignal::SocialReputationProxy, dec!(0.65)),
    (AltSignal::SkillVersatilityProxy, dec!(0.7)),
];

const FARMER: Overrides = &[
    // seasonal income
    (AltSignal::IncomeStabilityProxy, dec!(0.4)),
    (AltSignal::AssetOwnershipProxy, dec!(0.7)),
    (AltSignal::SocialReputationProxy, dec!(0.6)),
    (AltSignal::DigitalTransactionVolume, dec!(0.3)),
];

const SHOP_OWNER: Overrides = &[
    (AltSignal::IncomeStabilityProxy, dec!(0.65)),
    (AltSignal::DigitalTransactionVolume, dec!(0.75)),
    (AltSignal::SocialReputationProxy, dec!(0.7)),
    (AltSignal::AssetOwnershipProxy, dec!(0.6)),
];

const SALARIED: Overrides = &[
    (AltSignal::IncomeStabilityProxy, dec!(0.9)),
    (AltSignal::DigitalTransactionVolume, dec!(0.8)),
    (AltSignal::AssetOwnershipProxy, dec!(0.6)),
    (AltSignal::SkillVersatilityProxy, dec!(0.7)),
];

const FREELANCER: Overrides = &[
    (AltSignal::IncomeStabilityProxy, dec!(0.55)),
    (AltSignal::DigitalTransactionVolume, dec!(0.85)),
    // portfolio and client testimonials
    (AltSignal::SocialReputationProxy, dec!(0.75)),
    (AltSignal::SkillVersatilityProxy, dec!(0.8)),
];

fn overrides_for(occupation: Occupation) -> Overrides {
    match occupation {
        Occupation::GigWorker => GIG_WORKER,
        Occupation::Farmer => FARMER,
        Occupation::ShopOwner => SHOP_OWNER,
        Occupation::Salaried => SALARIED,
        Occupation::Freelancer => FREELANCER,
        Occupation::Other => &[],
    }
}

/// Simulate the alternative-data profile for an occupation.
///
/// Always returns all five signals.
pub fn simulate_features(occupation: Occupation) -> FeatureSet {
    let mut signals: BTreeMap<AltSignal, Decimal> = AltSignal::ALL
        .iter()
        .map(|s| (*s, BASELINE_SIGNAL))
        .collect();
    for (signal, value) in overrides_for(occupation) {
        signals.insert(*signal, *value);
    }
    FeatureSet::from(signals)
}
