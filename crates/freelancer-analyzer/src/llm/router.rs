//! Keyword routing of free-text questions to a named analysis.
//!
//! The keyword tables are bilingual (English and Russian) and matched as
//! substrings of the lowercased question, so inflected forms like
//! "криптовалюте" or "regions" still hit their stem. The first matching
//! rule wins; anything unmatched falls back to the comprehensive summary.

use crate::analysis::AnalysisKind;

const CRYPTO_KEYWORDS: &[&str] = &["crypto", "bitcoin", "payment", "крипто", "криптовалют", "оплат"];
const REGION_KEYWORDS: &[&str] = &["region", "country", "geograph", "регион", "распределя", "географ", "страна"];
const EXPERT_KEYWORDS: &[&str] = &["expert", "100", "project", "эксперт", "проект", "выполнил"];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "rate", "skill", "hourly", "опыт", "ставк", "навык", "часов"];
const SPECIALIZATION_KEYWORDS: &[&str] = &["specialization", "category", "специализац", "категор", "прибыльн"];
const PLATFORM_KEYWORDS: &[&str] = &["platform", "fiverr", "upwork", "freelancer", "платформ", "топтал"];

/// Rules in priority order; the first match decides.
const RULES: &[(&[&str], AnalysisKind)] = &[
    (CRYPTO_KEYWORDS, AnalysisKind::CryptoPayment),
    (REGION_KEYWORDS, AnalysisKind::RegionalIncome),
    (EXPERT_KEYWORDS, AnalysisKind::ExpertProjects),
    (EXPERIENCE_KEYWORDS, AnalysisKind::ExperienceRates),
    (SPECIALIZATION_KEYWORDS, AnalysisKind::SpecializationEarnings),
    (PLATFORM_KEYWORDS, AnalysisKind::PlatformPerformance),
];

/// Classify a question into the analysis most likely to answer it.
pub fn classify(question: &str) -> AnalysisKind {
    let lowered = question.to_lowercase();

    for (keywords, kind) in RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return *kind;
        }
    }

    AnalysisKind::Summary
}

/// Sample questions the system can answer, one per analysis.
pub fn sample_questions() -> &'static [&'static str] {
    &[
        "How much more do freelancers who accept cryptocurrency earn compared to other payment methods?",
        "How are freelancer earnings distributed across client regions?",
        "What percentage of freelancers who consider themselves experts have completed fewer than 100 projects?",
        "How does a freelancer's experience level relate to their hourly rate?",
        "Which freelancer specializations are the most profitable?",
        "On which platform do freelancers earn the most?",
        "Give me an overall summary of the freelance market",
    ]
}
