use crate::error::{DashboardError, Result};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What a calendar entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Task,
    Reminder,
    Event,
}

/// A calendar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    /// Display time, e.g. "10:00 AM"
    pub time: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Events falling on `date`, in input order
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date == date).collect()
}

/// A calendar month, anchored on its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// `month` is 1-based
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(DashboardError::InvalidMonth { year, month })
    }

    /// The month a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        let first = date
            .checked_sub_days(Days::new(u64::from(date.day0())))
            .unwrap_or(date);
        Self { first }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Days of the month only
    pub fn days(&self) -> Vec<NaiveDate> {
        self.first
            .iter_days()
            .take_while(|day| self.contains(*day))
            .collect()
    }

    /// Whole Sunday-to-Saturday weeks covering the month
    ///
    /// The first week is padded back with days of the previous month and the
    /// last week forward with days of the next one.
    pub fn grid(&self) -> Vec<[NaiveDate; 7]> {
        let last = self.last_day();
        let lead = u64::from(self.first.weekday().num_days_from_sunday());
        let trail = 6 - u64::from(last.weekday().num_days_from_sunday());

        let start = self
            .first
            .checked_sub_days(Days::new(lead))
            .unwrap_or(self.first);
        let span = (lead + u64::from(last.day()) + trail) as usize;

        let days: Vec<NaiveDate> = start.iter_days().take(span).collect();
        days.chunks_exact(7)
            .map(|week| std::array::from_fn::<_, 7, _>(|weekday| week[weekday]))
            .collect()
    }

    /// Saturates at the last month chrono can represent
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Saturates at the first month chrono can represent
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

/// Month being viewed and the day picked in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    month: CalendarMonth,
    selected: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(month: CalendarMonth) -> Self {
        Self {
            month,
            selected: None,
        }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    /// Moves forward a month and clears the selection
    pub fn next_month(&mut self) {
        self.navigate(self.month.next());
    }

    /// Moves back a month and clears the selection
    pub fn prev_month(&mut self) {
        self.navigate(self.month.prev());
    }

    /// Events on the selected day; empty when nothing is selected
    pub fn selected_events<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        self.selected
            .map(|date| events_on(events, date))
            .unwrap_or_default()
    }

    fn navigate(&mut self, month: CalendarMonth) {
        debug!(from = %self.month, to = %month, "calendar month changed");
        self.month = month;
        self.selected = None;
    }
}
