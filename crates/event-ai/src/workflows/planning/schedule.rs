use chrono::{Duration, NaiveTime};
use serde::Serialize;

use super::domain::{VendorId, VendorProfile, VendorSelection};

/// Offset of an activity relative to the event start time.
#[derive(Debug, Clone, Copy)]
pub enum StartOffset {
    MinutesBefore(i64),
    AtStart,
    MinutesAfter(i64),
}

impl StartOffset {
    pub(crate) fn resolve(&self, start: NaiveTime) -> NaiveTime {
        match self {
            StartOffset::MinutesBefore(minutes) => {
                start.overflowing_sub_signed(Duration::minutes(*minutes)).0
            }
            StartOffset::AtStart => start,
            StartOffset::MinutesAfter(minutes) => {
                start.overflowing_add_signed(Duration::minutes(*minutes)).0
            }
        }
    }
}

/// Template for one schedule activity, optionally staffed by a vendor
/// category.
#[derive(Debug, Clone)]
pub struct ActivityTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub offset: StartOffset,
    pub duration_minutes: u32,
    pub vendor_category: Option<&'static str>,
}

/// Event-day run sheet derived from the event type.
#[derive(Debug)]
pub struct ScheduleBlueprint {
    activities: Vec<ActivityTemplate>,
    default_start: NaiveTime,
    duration_hours: f64,
}

impl ScheduleBlueprint {
    pub fn for_event(event_type: &str, attendees: u32) -> Self {
        let event_type = event_type.to_lowercase();

        if event_type.contains("wedding")
            || event_type.contains("mehndi")
            || event_type.contains("baraat")
        {
            return Self {
                activities: wedding_activities(),
                default_start: time(19, 0),
                duration_hours: 4.0,
            };
        }

        if event_type.contains("birthday") || event_type.contains("party") {
            return Self {
                activities: birthday_activities(),
                default_start: time(16, 0),
                duration_hours: 3.0,
            };
        }

        // Corporate and general events share one run sheet; big crowds get a
        // longer setup window.
        let setup_minutes = if attendees > 50 { 60 } else { 30 };
        Self {
            activities: general_activities(setup_minutes, 4.0),
            default_start: time(9, 0),
            duration_hours: 4.0,
        }
    }

    pub fn activities(&self) -> &[ActivityTemplate] {
        &self.activities
    }

    pub fn default_start(&self) -> NaiveTime {
        self.default_start
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Bind the templates to a concrete start time and the selected vendors.
    pub fn instantiate(
        &self,
        start: NaiveTime,
        selections: &[VendorSelection],
        vendors: &[VendorProfile],
    ) -> Vec<ScheduleItem> {
        self.activities
            .iter()
            .map(|template| ScheduleItem {
                key: template.key,
                time: template.offset.resolve(start),
                activity: template.name.to_string(),
                duration_minutes: template.duration_minutes,
                vendor_id: template
                    .vendor_category
                    .and_then(|category| find_selected_in_category(category, selections, vendors)),
            })
            .collect()
    }
}

/// A single resolved schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleItem {
    pub key: &'static str,
    pub time: NaiveTime,
    pub activity: String,
    pub duration_minutes: u32,
    pub vendor_id: Option<VendorId>,
}

impl ScheduleItem {
    /// Time-labeled line carried on the plan, e.g. "07:00 PM - Dinner Service".
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.time.format("%I:%M %p"), self.activity)
    }
}

fn find_selected_in_category(
    category: &str,
    selections: &[VendorSelection],
    vendors: &[VendorProfile],
) -> Option<VendorId> {
    selections
        .iter()
        .find(|selection| {
            vendors
                .iter()
                .any(|vendor| vendor.vendor_id == selection.vendor_id && vendor.in_category(category))
        })
        .map(|selection| selection.vendor_id.clone())
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn wedding_activities() -> Vec<ActivityTemplate> {
    vec![
        ActivityTemplate {
            key: "setup_decoration",
            name: "Venue Setup & Decoration",
            offset: StartOffset::MinutesBefore(120),
            duration_minutes: 120,
            vendor_category: Some("decoration"),
        },
        ActivityTemplate {
            key: "guest_arrival",
            name: "Guest Arrival & Photography",
            offset: StartOffset::AtStart,
            duration_minutes: 60,
            vendor_category: Some("photography"),
        },
        ActivityTemplate {
            key: "main_ceremony",
            name: "Event Begins - Main Ceremony",
            offset: StartOffset::MinutesAfter(60),
            duration_minutes: 180,
            vendor_category: None,
        },
        ActivityTemplate {
            key: "dinner_service",
            name: "Dinner Service",
            offset: StartOffset::MinutesAfter(120),
            duration_minutes: 90,
            vendor_category: Some("catering"),
        },
        ActivityTemplate {
            key: "conclusion",
            name: "Event Conclusion & Cleanup",
            offset: StartOffset::MinutesAfter(240),
            duration_minutes: 60,
            vendor_category: None,
        },
    ]
}

fn birthday_activities() -> Vec<ActivityTemplate> {
    vec![
        ActivityTemplate {
            key: "setup",
            name: "Venue Setup",
            offset: StartOffset::MinutesBefore(30),
            duration_minutes: 30,
            vendor_category: Some("decoration"),
        },
        ActivityTemplate {
            key: "guest_arrival",
            name: "Guest Arrival",
            offset: StartOffset::AtStart,
            duration_minutes: 30,
            vendor_category: None,
        },
        ActivityTemplate {
            key: "entertainment",
            name: "Activities & Entertainment",
            offset: StartOffset::MinutesAfter(30),
            duration_minutes: 90,
            vendor_category: Some("music"),
        },
        ActivityTemplate {
            key: "cake_and_food",
            name: "Cake & Food Service",
            offset: StartOffset::MinutesAfter(120),
            duration_minutes: 60,
            vendor_category: Some("catering"),
        },
    ]
}

fn general_activities(setup_minutes: u32, duration_hours: f64) -> Vec<ActivityTemplate> {
    let main_minutes = ((duration_hours * 60.0) as u32).saturating_sub(60);
    vec![
        ActivityTemplate {
            key: "setup_av",
            name: "Venue Setup & A/V Check",
            offset: StartOffset::MinutesBefore(setup_minutes as i64),
            duration_minutes: setup_minutes,
            vendor_category: None,
        },
        ActivityTemplate {
            key: "registration",
            name: "Guest Registration & Welcome",
            offset: StartOffset::AtStart,
            duration_minutes: 30,
            vendor_category: None,
        },
        ActivityTemplate {
            key: "main_session",
            name: "Main Event Activities",
            offset: StartOffset::MinutesAfter(30),
            duration_minutes: main_minutes,
            vendor_category: None,
        },
        ActivityTemplate {
            key: "networking",
            name: "Networking & Refreshments",
            offset: StartOffset::MinutesAfter((duration_hours * 60.0) as i64 - 30),
            duration_minutes: 30,
            vendor_category: Some("catering"),
        },
    ]
}

/// Recommended timing for an event type, used by the CLI demo output.
#[derive(Debug, Clone, Serialize)]
pub struct TimingAdvice {
    pub best_days: Vec<&'static str>,
    pub best_times: Vec<&'static str>,
    pub duration_hours: f64,
    pub notes: &'static str,
}

pub fn timing_advice(event_type: &str) -> TimingAdvice {
    let event_type = event_type.to_lowercase();

    if event_type.contains("mehndi") {
        return TimingAdvice {
            best_days: vec!["Thursday evening", "Friday evening"],
            best_times: vec!["6:00 PM - 11:00 PM"],
            duration_hours: 5.0,
            notes: "Evening events allow for decorative lighting effects",
        };
    }

    if event_type.contains("wedding") {
        return TimingAdvice {
            best_days: vec!["Friday evening", "Sunday afternoon"],
            best_times: vec![
                "7:00 PM - 11:00 PM (evening)",
                "12:00 PM - 4:00 PM (afternoon)",
            ],
            duration_hours: 4.0,
            notes: "Evening weddings are most popular in Pakistan",
        };
    }

    if event_type.contains("birthday") {
        return TimingAdvice {
            best_days: vec!["Saturday", "Sunday"],
            best_times: vec!["4:00 PM - 7:00 PM", "11:00 AM - 2:00 PM"],
            duration_hours: 3.0,
            notes: "Afternoon parties work well for families",
        };
    }

    if event_type.contains("corporate") {
        return TimingAdvice {
            best_days: vec!["Tuesday", "Wednesday", "Thursday"],
            best_times: vec!["9:00 AM - 5:00 PM", "2:00 PM - 6:00 PM (half-day)"],
            duration_hours: 4.0,
            notes: "Mid-week events typically have better attendance",
        };
    }

    TimingAdvice {
        best_days: vec!["Saturday"],
        best_times: vec!["10:00 AM - 4:00 PM"],
        duration_hours: 4.0,
        notes: "General recommendation - customize based on your needs",
    }
}
