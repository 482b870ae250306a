//! Statistical analyses over the earnings dataset.

mod earnings;

pub use earnings::{
    CategoryLeaders, CohortStats, CryptoComparison, CryptoPaymentReport, DataAnalyzer,
    EarningsRange, ExperienceRatesReport, ExpertProjectsReport, MarketLeaders, PercentileSet,
    PlatformReport, RegionalIncomeReport, SkillPremium, SpecializationReport, SummaryReport,
};

use crate::error::Result;

/// The named analyses the tool can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisKind {
    /// Crypto vs other payment methods.
    CryptoPayment,
    /// Income distribution by client region.
    RegionalIncome,
    /// Project completion patterns of expert-level freelancers.
    ExpertProjects,
    /// Experience level vs hourly rates.
    ExperienceRates,
    /// Earnings by job category.
    SpecializationEarnings,
    /// Performance across platforms.
    PlatformPerformance,
    /// Comprehensive dataset summary.
    #[default]
    Summary,
}

impl AnalysisKind {
    /// All kinds, in menu order.
    pub fn all() -> &'static [AnalysisKind] {
        &[
            AnalysisKind::CryptoPayment,
            AnalysisKind::RegionalIncome,
            AnalysisKind::ExpertProjects,
            AnalysisKind::ExperienceRates,
            AnalysisKind::SpecializationEarnings,
            AnalysisKind::PlatformPerformance,
            AnalysisKind::Summary,
        ]
    }

    /// Short human description for menus.
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisKind::CryptoPayment => "Earnings of crypto-paid freelancers vs other methods",
            AnalysisKind::RegionalIncome => "Income distribution by client region",
            AnalysisKind::ExpertProjects => "Project completion patterns of experts",
            AnalysisKind::ExperienceRates => "Experience level vs hourly rates",
            AnalysisKind::SpecializationEarnings => "Earnings by specialization",
            AnalysisKind::PlatformPerformance => "Performance across platforms",
            AnalysisKind::Summary => "Comprehensive market summary",
        }
    }

    /// Run this analysis and return the report as a JSON value.
    pub fn run(&self, analyzer: &DataAnalyzer<'_>) -> Result<serde_json::Value> {
        let value = match self {
            AnalysisKind::CryptoPayment => serde_json::to_value(analyzer.crypto_payment())?,
            AnalysisKind::RegionalIncome => serde_json::to_value(analyzer.regional_income())?,
            AnalysisKind::ExpertProjects => serde_json::to_value(analyzer.expert_projects())?,
            AnalysisKind::ExperienceRates => serde_json::to_value(analyzer.experience_rates())?,
            AnalysisKind::SpecializationEarnings => {
                serde_json::to_value(analyzer.specialization_earnings())?
            }
            AnalysisKind::PlatformPerformance => {
                serde_json::to_value(analyzer.platform_performance())?
            }
            AnalysisKind::Summary => serde_json::to_value(analyzer.summary())?,
        };
        Ok(value)
    }
}

impl std::str::FromStr for AnalysisKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "crypto_payment" | "crypto" => Ok(AnalysisKind::CryptoPayment),
            "regional_income" | "regional" => Ok(AnalysisKind::RegionalIncome),
            "expert_projects" | "experts" => Ok(AnalysisKind::ExpertProjects),
            "experience_rates" | "experience" => Ok(AnalysisKind::ExperienceRates),
            "specialization_earnings" | "specialization" => {
                Ok(AnalysisKind::SpecializationEarnings)
            }
            "platform_performance" | "platforms" => Ok(AnalysisKind::PlatformPerformance),
            "summary" => Ok(AnalysisKind::Summary),
            _ => Err(format!(
                "Unknown analysis: {}. Use: crypto_payment, regional_income, expert_projects, \
                 experience_rates, specialization_earnings, platform_performance, or summary.",
                s
            )),
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisKind::CryptoPayment => write!(f, "crypto_payment"),
            AnalysisKind::RegionalIncome => write!(f, "regional_income"),
            AnalysisKind::ExpertProjects => write!(f, "expert_projects"),
            AnalysisKind::ExperienceRates => write!(f, "experience_rates"),
            AnalysisKind::SpecializationEarnings => write!(f, "specialization_earnings"),
            AnalysisKind::PlatformPerformance => write!(f, "platform_performance"),
            AnalysisKind::Summary => write!(f, "summary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in AnalysisKind::all() {
            let parsed: AnalysisKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!(
            "crypto".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::CryptoPayment
        );
        assert_eq!(
            "platform-performance".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::PlatformPerformance
        );
        assert!("unknown".parse::<AnalysisKind>().is_err());
    }
}
