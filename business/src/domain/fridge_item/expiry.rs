use chrono::{DateTime, Days, NaiveDate, TimeZone};

/// Day counts derived from an item's dates, relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryInfo {
    /// Zero means the item expires today, negative means it expired that many
    /// days ago.
    pub days_until_expiry: i64,
    /// `None` when the item is unopened, has no use-within duration, or has
    /// already expired.
    pub days_until_use_by: Option<i64>,
}

/// Derived use-by deadline: the opened date plus the use-within duration.
///
/// Returns `None` if either input is missing or the sum leaves chrono's
/// supported calendar range.
pub fn use_by_date(
    opened_date: Option<NaiveDate>,
    use_within_days: Option<u32>,
) -> Option<NaiveDate> {
    let opened = opened_date?;
    let days = use_within_days?;
    opened.checked_add_days(Days::new(u64::from(days)))
}

/// Computes the days remaining until expiry and until the use-by deadline.
///
/// Both counts are whole calendar days between `today` and the target date.
/// The use-by count is only reported for items that have not expired yet.
pub fn compute_expiry_info(
    today: NaiveDate,
    expiry_date: NaiveDate,
    opened_date: Option<NaiveDate>,
    use_within_days: Option<u32>,
) -> ExpiryInfo {
    let days_until_expiry = days_between(today, expiry_date);

    let days_until_use_by = if days_until_expiry < 0 {
        None
    } else {
        use_by_date(opened_date, use_within_days).map(|use_by| days_between(today, use_by))
    };

    ExpiryInfo {
        days_until_expiry,
        days_until_use_by,
    }
}

/// Same as [`compute_expiry_info`], taking a time-bearing instant.
///
/// The instant is reduced to its calendar date in its own time zone, so the
/// time of day never affects the result.
pub fn compute_expiry_info_at<Tz: TimeZone>(
    now: &DateTime<Tz>,
    expiry_date: NaiveDate,
    opened_date: Option<NaiveDate>,
    use_within_days: Option<u32>,
) -> ExpiryInfo {
    compute_expiry_info(now.date_naive(), expiry_date, opened_date, use_within_days)
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
