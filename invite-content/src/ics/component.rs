//! Narrow read-only view over parsed iCalendar components.
//!
//! Extraction code only needs to look properties up by name, read their
//! values and read their parameters. These traits expose exactly that, so
//! the parser's own types never leak past this module.

use icalendar::DatePerhapsTime;
use icalendar::parser::{Calendar, Component as ParsedComponent, Property};

use crate::ics::time::EventTime;

/// A single content line: `NAME;PARAM=VALUE:value`.
pub trait ComponentProperty {
    fn name(&self) -> &str;

    /// Property value as the parser returns it (TEXT already unescaped).
    fn value(&self) -> &str;

    /// Value of the first parameter called `name`, with surrounding quotes removed.
    fn parameter(&self, name: &str) -> Option<&str>;

    /// Decode a DATE or DATE-TIME value, honouring `VALUE=DATE` and `TZID`.
    fn event_time(&self) -> Option<EventTime>;
}

/// A component (VCALENDAR, VEVENT, ...) holding properties and sub-components.
///
/// Name lookups are ASCII case-insensitive.
pub trait Component {
    type Property: ComponentProperty;
    type Child: Component;

    fn name(&self) -> &str;

    fn all_properties(&self) -> &[Self::Property];

    fn children(&self) -> &[Self::Child];

    /// First property called `name`.
    fn property(&self, name: &str) -> Option<&Self::Property> {
        self.all_properties()
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Every property called `name`, in document order.
    fn properties<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'s Self::Property> {
        self.all_properties()
            .iter()
            .filter(move |p| p.name().eq_ignore_ascii_case(name))
    }

    fn property_value(&self, name: &str) -> Option<&str> {
        self.property(name).map(ComponentProperty::value)
    }

    /// First direct sub-component called `name`.
    fn first_child(&self, name: &str) -> Option<&Self::Child> {
        self.children()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl ComponentProperty for Property<'_> {
    fn name(&self) -> &str {
        self.name.as_ref()
    }

    fn value(&self) -> &str {
        self.val.as_ref()
    }

    fn parameter(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| AsRef::<str>::as_ref(&p.key).eq_ignore_ascii_case(name))
            .and_then(|p| p.val.as_ref())
            .map(|v| AsRef::<str>::as_ref(v).trim_matches('"'))
    }

    fn event_time(&self) -> Option<EventTime> {
        DatePerhapsTime::try_from(self).ok().map(EventTime::from)
    }
}

impl<'a> Component for ParsedComponent<'a> {
    type Property = Property<'a>;
    type Child = ParsedComponent<'a>;

    fn name(&self) -> &str {
        self.name.as_ref()
    }

    fn all_properties(&self) -> &[Property<'a>] {
        &self.properties
    }

    fn children(&self) -> &[ParsedComponent<'a>] {
        &self.components
    }
}

/// The parser unwraps the outer VCALENDAR, so its properties and
/// sub-components sit directly on [`Calendar`].
impl<'a> Component for Calendar<'a> {
    type Property = Property<'a>;
    type Child = ParsedComponent<'a>;

    fn name(&self) -> &str {
        "VCALENDAR"
    }

    fn all_properties(&self) -> &[Property<'a>] {
        &self.properties
    }

    fn children(&self) -> &[ParsedComponent<'a>] {
        &self.components
    }
}
