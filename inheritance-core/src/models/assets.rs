use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::saturating_sum;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RealEstateAssets {
    pub residential: Decimal,
    pub commercial: Decimal,
    pub land: Decimal,
    pub other: Decimal,
}

impl RealEstateAssets {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.residential, self.commercial, self.land, self.other])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialAssets {
    pub deposits: Decimal,
    pub securities: Decimal,
    pub bonds: Decimal,
    pub funds: Decimal,
    pub other: Decimal,
}

impl FinancialAssets {
    pub fn total(&self) -> Decimal {
        saturating_sum([
            self.deposits,
            self.securities,
            self.bonds,
            self.funds,
            self.other,
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsuranceAssets {
    pub life: Decimal,
    pub annuity: Decimal,
    pub other: Decimal,
}

impl InsuranceAssets {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.life, self.annuity, self.other])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessAssets {
    pub unlisted_shares: Decimal,
    pub partnership_interest: Decimal,
    pub operating_assets: Decimal,
}

impl BusinessAssets {
    pub fn total(&self) -> Decimal {
        saturating_sum([
            self.unlisted_shares,
            self.partnership_interest,
            self.operating_assets,
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovableAssets {
    pub vehicles: Decimal,
    pub art: Decimal,
    pub jewelry: Decimal,
    pub other: Decimal,
}

impl MovableAssets {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.vehicles, self.art, self.jewelry, self.other])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OtherAssets {
    pub receivables: Decimal,
    pub intellectual_property: Decimal,
    pub other: Decimal,
}

impl OtherAssets {
    pub fn total(&self) -> Decimal {
        saturating_sum([self.receivables, self.intellectual_property, self.other])
    }
}

/// Everything the decedent left behind, in whole won.
///
/// Every bucket defaults to zero so partially filled forms deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assets {
    pub real_estate: RealEstateAssets,
    pub financial: FinancialAssets,
    pub insurance: InsuranceAssets,
    pub business: BusinessAssets,
    pub movables: MovableAssets,
    pub other: OtherAssets,
}

impl Assets {
    pub fn total(&self) -> Decimal {
        saturating_sum([
            self.real_estate.total(),
            self.financial.total(),
            self.insurance.total(),
            self.business.total(),
            self.movables.total(),
            self.other.total(),
        ])
    }

    /// Every bucket as `(path, value)`, used by input validation to name the
    /// offending field.
    pub fn buckets(&self) -> [(&'static str, Decimal); 22] {
        [
            ("assets.realEstate.residential", self.real_estate.residential),
            ("assets.realEstate.commercial", self.real_estate.commercial),
            ("assets.realEstate.land", self.real_estate.land),
            ("assets.realEstate.other", self.real_estate.other),
            ("assets.financial.deposits", self.financial.deposits),
            ("assets.financial.securities", self.financial.securities),
            ("assets.financial.bonds", self.financial.bonds),
            ("assets.financial.funds", self.financial.funds),
            ("assets.financial.other", self.financial.other),
            ("assets.insurance.life", self.insurance.life),
            ("assets.insurance.annuity", self.insurance.annuity),
            ("assets.insurance.other", self.insurance.other),
            ("assets.business.unlistedShares", self.business.unlisted_shares),
            (
                "assets.business.partnershipInterest",
                self.business.partnership_interest,
            ),
            ("assets.business.operatingAssets", self.business.operating_assets),
            ("assets.movables.vehicles", self.movables.vehicles),
            ("assets.movables.art", self.movables.art),
            ("assets.movables.jewelry", self.movables.jewelry),
            ("assets.movables.other", self.movables.other),
            ("assets.other.receivables", self.other.receivables),
            (
                "assets.other.intellectualProperty",
                self.other.intellectual_property,
            ),
            ("assets.other.other", self.other.other),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_assets_total_zero() {
        assert_eq!(Assets::default().total(), dec!(0));
    }

    #[test]
    fn total_folds_every_category() {
        let assets = Assets {
            real_estate: RealEstateAssets {
                residential: dec!(300000000),
                land: dec!(50000000),
                ..Default::default()
            },
            financial: FinancialAssets {
                deposits: dec!(20000000),
                securities: dec!(10000000),
                ..Default::default()
            },
            insurance: InsuranceAssets {
                life: dec!(5000000),
                ..Default::default()
            },
            business: BusinessAssets {
                unlisted_shares: dec!(4000000),
                ..Default::default()
            },
            movables: MovableAssets {
                vehicles: dec!(3000000),
                ..Default::default()
            },
            other: OtherAssets {
                receivables: dec!(1000000),
                ..Default::default()
            },
        };

        assert_eq!(assets.total(), dec!(393000000));
    }

    #[test]
    fn buckets_sum_matches_total() {
        let assets = Assets {
            movables: MovableAssets {
                art: dec!(7),
                jewelry: dec!(11),
                ..Default::default()
            },
            other: OtherAssets {
                intellectual_property: dec!(13),
                ..Default::default()
            },
            ..Default::default()
        };

        let sum: Decimal = assets.buckets().iter().map(|(_, v)| *v).sum();

        assert_eq!(sum, assets.total());
    }

    #[test]
    fn missing_json_fields_default_to_zero() {
        let json = r#"{"realEstate":{"residential":450000000}}"#;

        let assets: Assets = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(assets.real_estate.residential, dec!(450000000));
        assert_eq!(assets.financial, FinancialAssets::default());
        assert_eq!(assets.total(), dec!(450000000));
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let assets = Assets {
            real_estate: RealEstateAssets {
                residential: Decimal::MAX,
                land: Decimal::MAX,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(assets.total(), Decimal::MAX);
    }
}
