//! Pure derivations over the task list: day buckets, the Monday..Sunday
//! window, and Spanish date labels for the board header and columns.

use chrono::{Datelike, Days, NaiveDate};

use crate::types::Task;

const DAY_NAMES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const DAY_NAMES_SHORT: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Tasks scheduled on `date`, in their original collection order.
///
/// Grouping is a filter on calendar-day equality; the time-of-day component
/// never matters and the relative order is never changed.
pub fn tasks_for_date<'a>(tasks: &'a [Task], date: NaiveDate) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.day() == date).collect()
}

/// The 7 consecutive dates Monday..Sunday of the week containing `reference`.
pub fn week_window(reference: NaiveDate) -> [NaiveDate; 7] {
    let monday = reference - Days::new(u64::from(reference.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Days::new(i as u64))
}

/// Header date, e.g. "lunes 10 de junio"
pub fn long_date_es(date: NaiveDate) -> String {
    format!("{} {} de {}", day_name(date), date.day(), month_name(date))
}

/// Column label, e.g. "mié 12"
pub fn short_day_label(date: NaiveDate) -> String {
    format!(
        "{} {}",
        DAY_NAMES_SHORT[date.weekday().num_days_from_monday() as usize],
        date.day()
    )
}

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}
