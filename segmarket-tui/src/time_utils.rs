use std::sync::OnceLock;
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

pub const DATE_NOT_AVAILABLE: &str = "Data não disponível";
pub const DATE_INVALID: &str = "Data inválida";

/// How far back the default date filter reaches.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

const NAIVE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
];
const DATE_ONLY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Resolve the local UTC offset while the process is still single-threaded.
///
/// `time` refuses to read the local offset once other threads exist, so this must run
/// before the tokio runtime is built. Later calls are no-ops.
pub fn init_local_offset() {
    let _ = LOCAL_OFFSET.set(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC));
}

fn local_offset() -> UtcOffset {
    *LOCAL_OFFSET
        .get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    dt.to_offset(local_offset())
}

fn to_local_primitive(dt: OffsetDateTime) -> PrimitiveDateTime {
    let local = to_local_time(dt);
    PrimitiveDateTime::new(local.date(), local.time())
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now_local() -> PrimitiveDateTime {
    let now = to_local_primitive(OffsetDateTime::now_utc());
    now.replace_nanosecond(0).unwrap_or(now)
}

/// Parse a timestamp the way the dashboard receives them.
///
/// The first space is treated as the date/time separator, so both
/// `2024-01-15 10:30:00` and `2024-01-15T10:30:00` are accepted. Values carrying an
/// offset are converted to local time; a bare date means UTC midnight.
pub fn parse_api_datetime(value: &str) -> Option<PrimitiveDateTime> {
    let normalized = value.trim().replacen(' ', "T", 1);
    if normalized.is_empty() {
        return None;
    }

    if let Ok(with_offset) = OffsetDateTime::parse(&normalized, &Rfc3339) {
        return Some(to_local_primitive(with_offset));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(&normalized, format).ok())
    {
        return Some(naive);
    }

    Date::parse(&normalized, DATE_ONLY_FORMAT)
        .ok()
        .map(|date| to_local_primitive(PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc()))
}

/// Human-readable pt-BR rendering, e.g. `15 de janeiro de 2024 às 10:30:00`.
///
/// Never fails: missing input yields [`DATE_NOT_AVAILABLE`], garbage yields [`DATE_INVALID`].
pub fn format_for_display(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return DATE_NOT_AVAILABLE.to_string();
    };

    match parse_api_datetime(value) {
        Some(dt) => format!(
            "{} de {} de {} às {:02}:{:02}:{:02}",
            dt.day(),
            month_name_pt(dt.month()),
            dt.year(),
            dt.hour(),
            dt.minute(),
            dt.second()
        ),
        None => DATE_INVALID.to_string(),
    }
}

/// `YYYY-MM-DD HH:MM:SS`, the format the events endpoint expects in its query.
pub fn format_for_api(dt: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        dt.year(),
        dt.month() as u8,
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

/// `YYYY-MM-DDTHH:MM`, the format of the date filter inputs.
pub fn format_for_input(dt: PrimitiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        dt.year(),
        dt.month() as u8,
        dt.day(),
        dt.hour(),
        dt.minute()
    )
}

/// Parse a date filter input. Seconds and a space separator are tolerated.
pub fn parse_input(value: &str) -> Option<PrimitiveDateTime> {
    let normalized = value.trim().replacen(' ', "T", 1);
    NAIVE_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(&normalized, format).ok())
}

/// The default filter window: the last [`DEFAULT_RANGE_DAYS`] days up to `now`.
pub fn default_date_range(now: PrimitiveDateTime) -> (PrimitiveDateTime, PrimitiveDateTime) {
    (now - Duration::days(DEFAULT_RANGE_DAYS), now)
}

fn month_name_pt(month: Month) -> &'static str {
    match month {
        Month::January => "janeiro",
        Month::February => "fevereiro",
        Month::March => "março",
        Month::April => "abril",
        Month::May => "maio",
        Month::June => "junho",
        Month::July => "julho",
        Month::August => "agosto",
        Month::September => "setembro",
        Month::October => "outubro",
        Month::November => "novembro",
        Month::December => "dezembro",
    }
}
