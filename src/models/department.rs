use std::fmt;
use std::str::FromStr;

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Department a user belongs to.
///
/// The set is closed: the string values below are the only ones accepted at
/// registration and the only ones the `users.department` column decodes.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Department {
    #[sea_orm(string_value = "Marketing")]
    Marketing,
    #[sea_orm(string_value = "Sales department Training")]
    SalesTraining,
    #[sea_orm(string_value = "Client")]
    Client,
    #[sea_orm(string_value = "HR")]
    Hr,
    #[sea_orm(string_value = "B2B")]
    B2b,
    #[sea_orm(string_value = "Business")]
    Business,
    #[sea_orm(string_value = "IT & Development")]
    ItDevelopment,
    #[sea_orm(string_value = "IT,Software & Technology")]
    ItSoftwareTechnology,
    #[sea_orm(string_value = "Language")]
    Language,
    #[sea_orm(string_value = "Employability")]
    Employability,
    #[sea_orm(string_value = "Web Development")]
    WebDevelopment,
    #[sea_orm(string_value = "Healthcare, Safety & Fitness")]
    HealthcareSafetyFitness,
    #[sea_orm(string_value = "Accounting & Finance")]
    AccountingFinance,
    #[sea_orm(string_value = "Personal Development")]
    PersonalDevelopment,
    #[sea_orm(string_value = "Health & Fitness")]
    HealthFitness,
    #[sea_orm(string_value = "Career Bundles")]
    CareerBundles,
    #[sea_orm(string_value = "Teaching & Education")]
    TeachingEducation,
    #[sea_orm(string_value = "Beauty & Wellness")]
    BeautyWellness,
    #[sea_orm(string_value = "HR & Leadership")]
    HrLeadership,
    #[sea_orm(string_value = "Marketing & Advertising")]
    MarketingAdvertising,
    #[sea_orm(string_value = "Business & Management")]
    BusinessManagement,
    #[sea_orm(string_value = "Sports")]
    Sports,
    #[sea_orm(string_value = "Animal Care")]
    AnimalCare,
    #[sea_orm(string_value = "lifestyle")]
    Lifestyle,
    #[sea_orm(string_value = "Psychology")]
    Psychology,
    #[sea_orm(string_value = "Security")]
    Security,
    #[sea_orm(string_value = "Therapy")]
    Therapy,
    #[sea_orm(string_value = "Photography & Video")]
    PhotographyVideo,
    #[sea_orm(string_value = "Management")]
    Management,
    #[sea_orm(string_value = "Project Management")]
    ProjectManagement,
    #[sea_orm(string_value = "Hospitality")]
    Hospitality,
    #[sea_orm(string_value = "Computers & IT")]
    ComputersIt,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl Department {
    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_value(&s.to_string()).map_err(|_| UnknownDepartment(s.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_value())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_set_has_unique_values() {
        let all = Department::all();
        assert_eq!(all.len(), 32);

        let mut values: Vec<String> = all.iter().map(ToString::to_string).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), 32);
    }

    #[test]
    fn every_variant_parses_back_from_its_label() {
        for department in Department::all() {
            let parsed: Department = department.to_string().parse().unwrap();
            assert_eq!(parsed, department);
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert_eq!(
            "IT,Software & Technology".parse::<Department>(),
            Ok(Department::ItSoftwareTechnology)
        );
        assert_eq!("lifestyle".parse::<Department>(), Ok(Department::Lifestyle));
        assert!("Lifestyle".parse::<Department>().is_err());
        assert!("marketing".parse::<Department>().is_err());
        assert!(" HR".parse::<Department>().is_err());
        assert!("Engineering".parse::<Department>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Department::HealthcareSafetyFitness).unwrap();
        assert_eq!(json, "\"Healthcare, Safety & Fitness\"");

        let back: Department = serde_json::from_str("\"Computers & IT\"").unwrap();
        assert_eq!(back, Department::ComputersIt);
        assert!(serde_json::from_str::<Department>("\"Astronomy\"").is_err());
    }
}
