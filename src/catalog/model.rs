use std::ops::Deref;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub location: String,
    pub entry_fee: String,
    pub description: String,
    pub website: String,
    pub category: Category,
    pub region: Region,
    pub status: Status,
    pub event_type: EventType,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum Category {
    Music,
    #[default]
    Cultural,
    Food,
    Winter,
    Summer,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum Region {
    #[default]
    Ontario,
    Ottawa,
    Montreal,
    Quebec,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Confirmed,
    Tentative,
    #[default]
    Tba,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum EventType {
    #[default]
    Festival,
    DayTrip,
    Activity,
}

/// Lenient conversion from raw sheet text into one of the closed enumerations.
///
/// Anything that isn't the canonical spelling (after trimming) falls back to the
/// type's default. Rows are never rejected for a bad enum cell.
pub trait Coerce: FromStr + Default + Into<&'static str> + Copy {
    fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();

        match Self::from_str(trimmed) {
            Ok(value) => value,
            Err(_) => {
                let fallback = Self::default();

                if !trimmed.is_empty() {
                    debug!(
                        "Unrecognized value '{}', defaulting to '{}'",
                        trimmed,
                        Into::<&'static str>::into(fallback)
                    );
                }

                fallback
            }
        }
    }

    /// Every value, in declaration order
    fn all() -> Vec<Self>;
}

macro_rules! impl_coerce {
    ($($ty:ty),*) => {
        $(
            impl Coerce for $ty {
                fn all() -> Vec<Self> {
                    <$ty>::iter().collect()
                }
            }
        )*
    };
}

impl_coerce!(Category, Region, Status, EventType);

/// An ordered, immutable snapshot of events. Order is the source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    events: Vec<EventRecord>,
}

impl Catalog {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn find(&self, id: u32) -> Option<&EventRecord> {
        self.events.iter().find(|event| event.id == id)
    }
}

impl Deref for Catalog {
    type Target = [EventRecord];

    fn deref(&self) -> &Self::Target {
        &self.events
    }
}

impl From<Vec<EventRecord>> for Catalog {
    fn from(events: Vec<EventRecord>) -> Self {
        Self::new(events)
    }
}
