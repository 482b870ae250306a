//! The analyses over freelancer earnings records.
//!
//! Every report mirrors the aggregates a market analyst would quote:
//! group means/medians, market shares as percentages, and leader boards.
//! All values are rounded to two decimal places.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, EarningsRecord, CRYPTO_PAYMENT, EXPERT_LEVEL};
use crate::stats::{round2, SampleStats};

/// Experience levels in progression order.
const EXPERIENCE_LEVELS: &[&str] = &["Beginner", "Intermediate", "Expert"];

/// Mean/median/count/std for one cohort of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortStats {
    pub mean: f64,
    pub median: f64,
    pub count: usize,
    pub std: f64,
}

impl CohortStats {
    fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut stats = SampleStats::collect(values);
        Self {
            mean: round2(stats.mean()),
            median: round2(stats.median()),
            count: stats.count(),
            std: round2(stats.std()),
        }
    }
}

/// Crypto vs non-crypto earnings comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoComparison {
    pub crypto_earnings: CohortStats,
    pub other_earnings: CohortStats,
    /// Relative mean difference in percent; absent when a cohort is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_difference_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_difference_percent: Option<f64>,
    pub crypto_higher: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoPaymentReport {
    pub crypto_vs_others: CryptoComparison,
    pub payment_method_breakdown: IndexMap<String, CohortStats>,
    pub summary: String,
}

/// Per-region earnings statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionStats {
    pub mean: f64,
    pub median: f64,
    pub count: usize,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentileSet {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionEarnings {
    pub region: String,
    pub average_earnings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketLeaders {
    pub highest_earning_region: RegionEarnings,
    pub lowest_earning_region: RegionEarnings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsRange {
    pub global_min: f64,
    pub global_max: f64,
    pub global_mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalIncomeReport {
    pub regional_statistics: IndexMap<String, RegionStats>,
    pub regional_percentiles: IndexMap<String, PercentileSet>,
    pub market_leaders: MarketLeaders,
    /// Share of records per region, in percent.
    pub market_share_by_region: IndexMap<String, f64>,
    pub earnings_range: EarningsRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertProjectCounts {
    pub total_experts: usize,
    pub experts_under_100_projects: usize,
    pub percentage_under_100: f64,
    pub experts_100_plus_projects: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsStats {
    pub mean: f64,
    pub median: f64,
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertPerformance {
    pub average_earnings: f64,
    pub average_hourly_rate: f64,
    pub average_success_rate: f64,
    pub average_client_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertInsights {
    pub expert_completion_summary: String,
    pub most_productive_experts: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertProjectsReport {
    pub expert_project_analysis: ExpertProjectCounts,
    /// Counts per completed-project range ("0-49", "50-99", "100-199", "200+").
    pub project_range_breakdown: IndexMap<String, usize>,
    pub experience_level_comparison: IndexMap<String, ProjectsStats>,
    pub expert_performance_metrics: ExpertPerformance,
    pub insights: ExpertInsights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceStats {
    pub hourly_rate_mean: f64,
    pub hourly_rate_median: f64,
    pub hourly_rate_std: f64,
    pub hourly_rate_min: f64,
    pub hourly_rate_max: f64,
    pub earnings_mean: f64,
    pub earnings_median: f64,
    pub success_rate_mean: f64,
    pub client_rating_mean: f64,
    pub freelancer_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateProgression {
    pub avg_hourly_rate: f64,
    pub avg_earnings: f64,
    pub freelancer_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPremium {
    pub expert_vs_beginner_rate: f64,
    pub expert_vs_intermediate_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRatesReport {
    pub experience_statistics: IndexMap<String, ExperienceStats>,
    pub rate_progression: IndexMap<String, RateProgression>,
    pub skill_premium: SkillPremium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub earnings_mean: f64,
    pub earnings_median: f64,
    pub earnings_std: f64,
    pub hourly_rate_mean: f64,
    pub hourly_rate_median: f64,
    pub success_rate_mean: f64,
    pub client_rating_mean: f64,
    pub freelancer_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEarnings {
    pub category: String,
    pub average_earnings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryLeaders {
    pub highest_paying_category: CategoryEarnings,
    pub lowest_paying_category: CategoryEarnings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecializationReport {
    pub category_statistics: IndexMap<String, CategoryStats>,
    pub market_leaders: CategoryLeaders,
    /// Record counts per category, most popular first.
    pub market_demand: IndexMap<String, usize>,
    pub market_share_percentage: IndexMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub earnings_mean: f64,
    pub earnings_median: f64,
    pub hourly_rate_mean: f64,
    pub hourly_rate_median: f64,
    pub success_rate_mean: f64,
    pub client_rating_mean: f64,
    /// Absent when the dataset carries no Rehire_Rate column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rehire_rate_mean: Option<f64>,
    pub freelancer_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRanking {
    pub by_earnings: IndexMap<String, f64>,
    pub by_success_rate: IndexMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformReport {
    pub platform_statistics: IndexMap<String, PlatformStats>,
    pub market_share: IndexMap<String, f64>,
    pub platform_ranking: PlatformRanking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub total_freelancers: usize,
    pub average_earnings: f64,
    pub median_earnings: f64,
    pub average_hourly_rate: f64,
    pub average_success_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDistribution {
    pub platforms: usize,
    pub job_categories: usize,
    pub regions: usize,
    pub payment_methods: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformers {
    pub highest_earner: f64,
    pub highest_hourly_rate: f64,
    pub most_projects_completed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub dataset_overview: DatasetOverview,
    pub market_distribution: MarketDistribution,
    pub top_performers: TopPerformers,
}

/// Analytical functions over a loaded dataset.
pub struct DataAnalyzer<'a> {
    records: &'a [EarningsRecord],
}

impl<'a> DataAnalyzer<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            records: dataset.records(),
        }
    }

    /// Analyzer over a raw record slice (used by tests and benchmarks).
    pub fn from_records(records: &'a [EarningsRecord]) -> Self {
        Self { records }
    }

    /// Earnings difference between crypto and other payment methods.
    pub fn crypto_payment(&self) -> CryptoPaymentReport {
        let crypto = CohortStats::from_values(
            self.records
                .iter()
                .filter(|r| r.payment_method == CRYPTO_PAYMENT)
                .map(|r| r.earnings_usd),
        );
        let other = CohortStats::from_values(
            self.records
                .iter()
                .filter(|r| r.payment_method != CRYPTO_PAYMENT)
                .map(|r| r.earnings_usd),
        );

        let mean_diff = relative_difference(crypto.mean, other.mean, crypto.count, other.count);
        let median_diff =
            relative_difference(crypto.median, other.median, crypto.count, other.count);

        let mut breakdown = IndexMap::new();
        for (method, group) in grouped(self.records, |r| r.payment_method.as_str()) {
            breakdown.insert(
                method.to_string(),
                CohortStats::from_values(group.iter().map(|r| r.earnings_usd)),
            );
        }

        let summary = match mean_diff {
            Some(diff) => format!(
                "Crypto payments {} by {:.1}% on average",
                if diff > 0.0 { "higher" } else { "lower" },
                diff.abs()
            ),
            None => "Not enough data to compare crypto and other payment methods".to_string(),
        };

        CryptoPaymentReport {
            crypto_vs_others: CryptoComparison {
                crypto_higher: crypto.mean > other.mean,
                crypto_earnings: crypto,
                other_earnings: other,
                mean_difference_percent: mean_diff,
                median_difference_percent: median_diff,
            },
            payment_method_breakdown: breakdown,
            summary,
        }
    }

    /// Income distribution by client region.
    pub fn regional_income(&self) -> RegionalIncomeReport {
        let total = self.records.len();
        let mut regional_statistics = IndexMap::new();
        let mut regional_percentiles = IndexMap::new();
        let mut mean_by_region: Vec<(String, f64)> = Vec::new();

        for (region, group) in grouped(self.records, |r| r.client_region.as_str()) {
            let mut stats = SampleStats::collect(group.iter().map(|r| r.earnings_usd));
            regional_statistics.insert(
                region.to_string(),
                RegionStats {
                    mean: round2(stats.mean()),
                    median: round2(stats.median()),
                    count: stats.count(),
                    std: round2(stats.std()),
                    min: round2(stats.min()),
                    max: round2(stats.max()),
                },
            );
            regional_percentiles.insert(
                region.to_string(),
                PercentileSet {
                    p25: round2(stats.percentile(25.0)),
                    p50: round2(stats.percentile(50.0)),
                    p75: round2(stats.percentile(75.0)),
                    p90: round2(stats.percentile(90.0)),
                },
            );
            mean_by_region.push((region.to_string(), round2(stats.mean())));
        }

        let highest = mean_by_region
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .cloned()
            .unwrap_or_default();
        let lowest = mean_by_region
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .cloned()
            .unwrap_or_default();

        let market_share_by_region =
            share_by_count(grouped(self.records, |r| r.client_region.as_str()), total);

        let global = SampleStats::collect(self.records.iter().map(|r| r.earnings_usd));

        RegionalIncomeReport {
            regional_statistics,
            regional_percentiles,
            market_leaders: MarketLeaders {
                highest_earning_region: RegionEarnings {
                    region: highest.0,
                    average_earnings: highest.1,
                },
                lowest_earning_region: RegionEarnings {
                    region: lowest.0,
                    average_earnings: lowest.1,
                },
            },
            market_share_by_region,
            earnings_range: EarningsRange {
                global_min: round2(global.min()),
                global_max: round2(global.max()),
                global_mean: round2(global.mean()),
            },
        }
    }

    /// Project completion patterns of expert-level freelancers.
    pub fn expert_projects(&self) -> ExpertProjectsReport {
        let experts: Vec<&EarningsRecord> = self
            .records
            .iter()
            .filter(|r| r.experience_level == EXPERT_LEVEL)
            .collect();

        let total_experts = experts.len();
        let under_100 = experts.iter().filter(|r| r.job_completed < 100).count();
        let over_200 = experts.iter().filter(|r| r.job_completed >= 200).count();
        let percentage_under_100 = if total_experts > 0 {
            round2(under_100 as f64 / total_experts as f64 * 100.0)
        } else {
            0.0
        };

        let mut ranges = IndexMap::new();
        ranges.insert(
            "0-49".to_string(),
            experts.iter().filter(|r| r.job_completed < 50).count(),
        );
        ranges.insert(
            "50-99".to_string(),
            experts
                .iter()
                .filter(|r| (50..100).contains(&r.job_completed))
                .count(),
        );
        ranges.insert(
            "100-199".to_string(),
            experts
                .iter()
                .filter(|r| (100..200).contains(&r.job_completed))
                .count(),
        );
        ranges.insert("200+".to_string(), over_200);

        let mut experience_level_comparison = IndexMap::new();
        for (level, group) in grouped(self.records, |r| r.experience_level.as_str()) {
            let mut stats = SampleStats::collect(group.iter().map(|r| f64::from(r.job_completed)));
            experience_level_comparison.insert(
                level.to_string(),
                ProjectsStats {
                    mean: round2(stats.mean()),
                    median: round2(stats.median()),
                    count: stats.count(),
                    min: round2(stats.min()),
                    max: round2(stats.max()),
                },
            );
        }

        let expert_performance_metrics = ExpertPerformance {
            average_earnings: round2(mean_of(experts.iter().map(|r| r.earnings_usd))),
            average_hourly_rate: round2(mean_of(experts.iter().map(|r| r.hourly_rate))),
            average_success_rate: round2(mean_of(experts.iter().map(|r| r.job_success_rate))),
            average_client_rating: round2(mean_of(experts.iter().map(|r| r.client_rating))),
        };

        ExpertProjectsReport {
            expert_project_analysis: ExpertProjectCounts {
                total_experts,
                experts_under_100_projects: under_100,
                percentage_under_100,
                experts_100_plus_projects: total_experts - under_100,
            },
            project_range_breakdown: ranges,
            experience_level_comparison,
            expert_performance_metrics,
            insights: ExpertInsights {
                expert_completion_summary: format!(
                    "{}% of experts have completed less than 100 projects",
                    percentage_under_100
                ),
                most_productive_experts: over_200,
            },
        }
    }

    /// Relationship between experience level and hourly rates.
    pub fn experience_rates(&self) -> ExperienceRatesReport {
        let mut experience_statistics = IndexMap::new();
        let mut rate_progression = IndexMap::new();

        for level in EXPERIENCE_LEVELS {
            let group: Vec<&EarningsRecord> = self
                .records
                .iter()
                .filter(|r| r.experience_level == *level)
                .collect();
            if group.is_empty() {
                continue;
            }

            let mut rates = SampleStats::collect(group.iter().map(|r| r.hourly_rate));
            let mut earnings = SampleStats::collect(group.iter().map(|r| r.earnings_usd));

            experience_statistics.insert(
                level.to_string(),
                ExperienceStats {
                    hourly_rate_mean: round2(rates.mean()),
                    hourly_rate_median: round2(rates.median()),
                    hourly_rate_std: round2(rates.std()),
                    hourly_rate_min: round2(rates.min()),
                    hourly_rate_max: round2(rates.max()),
                    earnings_mean: round2(earnings.mean()),
                    earnings_median: round2(earnings.median()),
                    success_rate_mean: round2(mean_of(group.iter().map(|r| r.job_success_rate))),
                    client_rating_mean: round2(mean_of(group.iter().map(|r| r.client_rating))),
                    freelancer_count: group.len(),
                },
            );
            rate_progression.insert(
                level.to_string(),
                RateProgression {
                    avg_hourly_rate: round2(rates.mean()),
                    avg_earnings: round2(earnings.mean()),
                    freelancer_count: group.len(),
                },
            );
        }

        let rate_of = |level: &str| {
            rate_progression
                .get(level)
                .map(|p: &RateProgression| p.avg_hourly_rate)
                .unwrap_or(0.0)
        };

        ExperienceRatesReport {
            skill_premium: SkillPremium {
                expert_vs_beginner_rate: round2(rate_of("Expert") - rate_of("Beginner")),
                expert_vs_intermediate_rate: round2(rate_of("Expert") - rate_of("Intermediate")),
            },
            experience_statistics,
            rate_progression,
        }
    }

    /// Earnings by job category.
    pub fn specialization_earnings(&self) -> SpecializationReport {
        let total = self.records.len();
        let mut category_statistics = IndexMap::new();
        let mut mean_by_category: Vec<(String, f64)> = Vec::new();

        for (category, group) in grouped(self.records, |r| r.job_category.as_str()) {
            let mut earnings = SampleStats::collect(group.iter().map(|r| r.earnings_usd));
            let mut rates = SampleStats::collect(group.iter().map(|r| r.hourly_rate));

            category_statistics.insert(
                category.to_string(),
                CategoryStats {
                    earnings_mean: round2(earnings.mean()),
                    earnings_median: round2(earnings.median()),
                    earnings_std: round2(earnings.std()),
                    hourly_rate_mean: round2(rates.mean()),
                    hourly_rate_median: round2(rates.median()),
                    success_rate_mean: round2(mean_of(group.iter().map(|r| r.job_success_rate))),
                    client_rating_mean: round2(mean_of(group.iter().map(|r| r.client_rating))),
                    freelancer_count: group.len(),
                },
            );
            mean_by_category.push((category.to_string(), round2(earnings.mean())));
        }

        let highest = mean_by_category
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .cloned()
            .unwrap_or_default();
        let lowest = mean_by_category
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .cloned()
            .unwrap_or_default();

        let groups = grouped(self.records, |r| r.job_category.as_str());
        let market_demand = demand_by_count(&groups);
        let market_share_percentage = share_by_count(groups, total);

        SpecializationReport {
            category_statistics,
            market_leaders: CategoryLeaders {
                highest_paying_category: CategoryEarnings {
                    category: highest.0,
                    average_earnings: highest.1,
                },
                lowest_paying_category: CategoryEarnings {
                    category: lowest.0,
                    average_earnings: lowest.1,
                },
            },
            market_demand,
            market_share_percentage,
        }
    }

    /// Performance metrics across platforms.
    pub fn platform_performance(&self) -> PlatformReport {
        let total = self.records.len();
        let mut platform_statistics = IndexMap::new();
        let mut by_earnings: Vec<(String, f64)> = Vec::new();
        let mut by_success: Vec<(String, f64)> = Vec::new();

        for (platform, group) in grouped(self.records, |r| r.platform.as_str()) {
            let mut earnings = SampleStats::collect(group.iter().map(|r| r.earnings_usd));
            let mut rates = SampleStats::collect(group.iter().map(|r| r.hourly_rate));
            let rehires: Vec<f64> = group.iter().filter_map(|r| r.rehire_rate).collect();

            let success_mean = round2(mean_of(group.iter().map(|r| r.job_success_rate)));
            platform_statistics.insert(
                platform.to_string(),
                PlatformStats {
                    earnings_mean: round2(earnings.mean()),
                    earnings_median: round2(earnings.median()),
                    hourly_rate_mean: round2(rates.mean()),
                    hourly_rate_median: round2(rates.median()),
                    success_rate_mean: success_mean,
                    client_rating_mean: round2(mean_of(group.iter().map(|r| r.client_rating))),
                    rehire_rate_mean: if rehires.is_empty() {
                        None
                    } else {
                        Some(round2(mean_of(rehires.iter().copied())))
                    },
                    freelancer_count: group.len(),
                },
            );
            by_earnings.push((platform.to_string(), round2(earnings.mean())));
            by_success.push((platform.to_string(), success_mean));
        }

        by_earnings.sort_by(|a, b| b.1.total_cmp(&a.1));
        by_success.sort_by(|a, b| b.1.total_cmp(&a.1));

        PlatformReport {
            platform_statistics,
            market_share: share_by_count(grouped(self.records, |r| r.platform.as_str()), total),
            platform_ranking: PlatformRanking {
                by_earnings: by_earnings.into_iter().collect(),
                by_success_rate: by_success.into_iter().collect(),
            },
        }
    }

    /// Comprehensive summary of the dataset.
    pub fn summary(&self) -> SummaryReport {
        let mut earnings = SampleStats::collect(self.records.iter().map(|r| r.earnings_usd));

        SummaryReport {
            dataset_overview: DatasetOverview {
                total_freelancers: self.records.len(),
                average_earnings: round2(earnings.mean()),
                median_earnings: round2(earnings.median()),
                average_hourly_rate: round2(mean_of(self.records.iter().map(|r| r.hourly_rate))),
                average_success_rate: round2(mean_of(
                    self.records.iter().map(|r| r.job_success_rate),
                )),
            },
            market_distribution: MarketDistribution {
                platforms: distinct_count(self.records, |r| r.platform.as_str()),
                job_categories: distinct_count(self.records, |r| r.job_category.as_str()),
                regions: distinct_count(self.records, |r| r.client_region.as_str()),
                payment_methods: distinct_count(self.records, |r| r.payment_method.as_str()),
            },
            top_performers: TopPerformers {
                highest_earner: round2(earnings.max()),
                highest_hourly_rate: round2(
                    self.records
                        .iter()
                        .map(|r| r.hourly_rate)
                        .fold(0.0, f64::max),
                ),
                most_projects_completed: self
                    .records
                    .iter()
                    .map(|r| r.job_completed)
                    .max()
                    .unwrap_or(0),
            },
        }
    }
}

/// Group records by a string key, keys sorted alphabetically.
fn grouped<'a>(
    records: &'a [EarningsRecord],
    key: impl Fn(&'a EarningsRecord) -> &'a str,
) -> IndexMap<&'a str, Vec<&'a EarningsRecord>> {
    let mut groups: IndexMap<&str, Vec<&EarningsRecord>> = IndexMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups.sort_unstable_keys();
    groups
}

/// Percent share of each group, largest first.
fn share_by_count(
    groups: IndexMap<&str, Vec<&EarningsRecord>>,
    total: usize,
) -> IndexMap<String, f64> {
    let mut shares: Vec<(String, usize)> = groups
        .into_iter()
        .map(|(key, group)| (key.to_string(), group.len()))
        .collect();
    shares.sort_by(|a, b| b.1.cmp(&a.1));
    shares
        .into_iter()
        .map(|(key, count)| {
            let share = if total > 0 {
                round2(count as f64 / total as f64 * 100.0)
            } else {
                0.0
            };
            (key, share)
        })
        .collect()
}

/// Record counts per group, largest first.
fn demand_by_count(groups: &IndexMap<&str, Vec<&EarningsRecord>>) -> IndexMap<String, usize> {
    let mut counts: Vec<(String, usize)> = groups
        .iter()
        .map(|(key, group)| (key.to_string(), group.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().collect()
}

fn mean_of(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn distinct_count<'a>(
    records: &'a [EarningsRecord],
    key: impl Fn(&'a EarningsRecord) -> &'a str,
) -> usize {
    records
        .iter()
        .map(key)
        .collect::<std::collections::HashSet<_>>()
        .len()
}

/// Relative difference of `a` vs `b` in percent; None when either cohort
/// is empty or the base is zero.
fn relative_difference(a: f64, b: f64, a_count: usize, b_count: usize) -> Option<f64> {
    if a_count == 0 || b_count == 0 || b == 0.0 {
        None
    } else {
        Some(round2((a - b) / b * 100.0))
    }
}
