//! Activity data model
//!
//! Read-only snapshot of the activity catalogue as served by
//! `GET /activities`. The snapshot is fetched once per load and never
//! mutated on the client.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chart::AvailabilityChart;
use crate::error::ClientResult;

/// Glyph used when the service sends no icon
pub const DEFAULT_ICON: &str = "🎯";

/// A schedulable offering with a capacity and a roster of signed-up emails
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Number of participants already signed up
    pub fn booked(&self) -> u32 {
        u32::try_from(self.participants.len()).unwrap_or(u32::MAX)
    }

    /// Free places, never negative even if the roster is over capacity
    pub fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.booked())
    }

    /// The activity's icon, or `fallback` when none (or an empty one) was sent
    pub fn icon_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.icon
            .as_deref()
            .filter(|icon| !icon.trim().is_empty())
            .unwrap_or(fallback)
    }

    /// Chart geometry for this activity's availability
    pub fn availability(&self) -> AvailabilityChart {
        AvailabilityChart::new(self.booked(), self.max_participants)
    }
}

/// One named activity
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityEntry {
    pub name: String,
    pub activity: Activity,
}

/// The activity catalogue, in the order the service listed it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Activities {
    entries: Vec<ActivityEntry>,
}

impl Activities {
    pub fn new(entries: Vec<ActivityEntry>) -> Self {
        Self { entries }
    }

    /// Parse the body of `GET /activities`
    pub fn from_json(body: &str) -> ClientResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Activity names in display order (the selector's option values)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.activity)
    }
}

impl IntoIterator for Activities {
    type Item = ActivityEntry;
    type IntoIter = std::vec::IntoIter<ActivityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// The service returns a JSON object keyed by name. A HashMap would lose the
// order the cards are meant to appear in, so walk the map by hand.
impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<ActivityEntry> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    // Later duplicates replace earlier ones, as a JSON object would
                    if let Some(existing) = entries.iter_mut().find(|e| e.name == name) {
                        existing.activity = activity;
                    } else {
                        entries.push(ActivityEntry { name, activity });
                    }
                }
                Ok(Activities { entries })
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}
