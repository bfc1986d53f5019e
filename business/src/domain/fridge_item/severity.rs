use super::expiry::ExpiryInfo;

/// Severity tiers, declared from least to most urgent so `Ord` ranks urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Fresh,
    Warning,
    Critical,
    /// Only produced when [`SeverityPolicy::expires_today_tier`] is set.
    ExpiresToday,
    Expired,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Fresh => write!(f, "fresh"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
            Severity::ExpiresToday => write!(f, "expires_today"),
            Severity::Expired => write!(f, "expired"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeverityError {
    #[error("severity.negative_threshold")]
    NegativeThreshold,
    #[error("severity.critical_above_warning")]
    CriticalAboveWarning,
}

/// Upper bounds (inclusive, in days) of the critical and warning tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityThresholds {
    critical_days: i64,
    warning_days: i64,
}

pub const EXPIRY_CRITICAL_DAYS: i64 = 3;
pub const EXPIRY_WARNING_DAYS: i64 = 7;
pub const USE_BY_CRITICAL_DAYS: i64 = 1;
pub const USE_BY_WARNING_DAYS: i64 = 3;

impl SeverityThresholds {
    pub fn new(critical_days: i64, warning_days: i64) -> Result<Self, SeverityError> {
        if critical_days < 0 || warning_days < 0 {
            return Err(SeverityError::NegativeThreshold);
        }
        if critical_days > warning_days {
            return Err(SeverityError::CriticalAboveWarning);
        }
        Ok(Self {
            critical_days,
            warning_days,
        })
    }

    pub fn expiry_default() -> Self {
        Self {
            critical_days: EXPIRY_CRITICAL_DAYS,
            warning_days: EXPIRY_WARNING_DAYS,
        }
    }

    pub fn use_by_default() -> Self {
        Self {
            critical_days: USE_BY_CRITICAL_DAYS,
            warning_days: USE_BY_WARNING_DAYS,
        }
    }

    pub fn critical_days(&self) -> i64 {
        self.critical_days
    }

    pub fn warning_days(&self) -> i64 {
        self.warning_days
    }
}

/// Named thresholds used to turn day counts into severity tiers.
///
/// Business rules:
/// - Negative days -> Expired
/// - 0 days -> ExpiresToday, only when `expires_today_tier` is set
/// - Up to `critical_days` -> Critical
/// - Up to `warning_days` -> Warning
/// - Anything later -> Fresh
///
/// The default is the canonical policy: expiry critical within 3 days and
/// warning within 7, use-by critical within 1 day and warning within 3,
/// with "expires today" folded into Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityPolicy {
    pub expiry: SeverityThresholds,
    pub use_by: SeverityThresholds,
    pub expires_today_tier: bool,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self {
            expiry: SeverityThresholds::expiry_default(),
            use_by: SeverityThresholds::use_by_default(),
            expires_today_tier: false,
        }
    }
}

/// Classification of both deadlines of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityAssessment {
    pub expiry: Severity,
    pub use_by: Option<Severity>,
}

impl SeverityAssessment {
    /// The most urgent of the two tiers.
    pub fn most_urgent(&self) -> Severity {
        match self.use_by {
            Some(use_by) => self.expiry.max(use_by),
            None => self.expiry,
        }
    }
}

impl SeverityPolicy {
    pub fn classify_expiry(&self, days_until_expiry: i64) -> Severity {
        self.classify(days_until_expiry, &self.expiry)
    }

    pub fn classify_use_by(&self, days_until_use_by: i64) -> Severity {
        self.classify(days_until_use_by, &self.use_by)
    }

    pub fn assess(&self, info: &ExpiryInfo) -> SeverityAssessment {
        SeverityAssessment {
            expiry: self.classify_expiry(info.days_until_expiry),
            use_by: info.days_until_use_by.map(|days| self.classify_use_by(days)),
        }
    }

    fn classify(&self, days: i64, thresholds: &SeverityThresholds) -> Severity {
        if days < 0 {
            return Severity::Expired;
        }
        if days == 0 && self.expires_today_tier {
            return Severity::ExpiresToday;
        }
        if days <= thresholds.critical_days {
            return Severity::Critical;
        }
        if days <= thresholds.warning_days {
            return Severity::Warning;
        }
        Severity::Fresh
    }
}
