//! Structural reader turning an xCal document into an entity.
//!
//! A single forward pass over the cursor's tokens. Each element handler
//! enters an element, consumes its content and leaves it; unknown elements
//! are skipped in lenient mode and rejected in strict mode.

use super::cursor::XmlCursor;
use super::error::{ParseError, ParseResult};
use super::values::{
    invalid, parse_boolean, parse_date, parse_date_or_date_time, parse_date_time, parse_duration,
    parse_integer, parse_weekday, parse_weekday_num,
};
use crate::error::RfcError;
use crate::rfc::xcal::ReaderOptions;
use crate::rfc::xcal::core::{
    Attendee, CalendarUserType, Classification, ContactReference, CustomProperty, DateTime, Event,
    Frequency, Incidence, ParticipationStatus, RecurrenceRule, Role, Status, Todo, Weekday,
    WeekdayNum,
};
use crate::rfc::xcal::mailto::from_mailto;
use crate::rfc::xcal::names;

/// Position of the reader within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    /// Walking the envelope towards the component's property list.
    ExpectEntityStart,
    /// Inside the component's property list.
    ExpectField,
    /// Inside a repeated value (list parameter, multi-value property, recur).
    ExpectListItem,
    /// The entity has been read.
    Done,
    /// Reading stopped at an error.
    Failed,
}

/// Component types the reader can produce.
pub(crate) trait ReadComponent: Incidence + Default {
    /// Element name of the component (`vevent`, `vtodo`).
    const TAG: &'static str;

    /// Reads a property only this component type carries.
    ///
    /// Returns `false`, without consuming anything, for names it does not
    /// know.
    fn read_property(&mut self, name: &str, reader: &mut XcalReader<'_>) -> ParseResult<bool>;
}

impl ReadComponent for Event {
    const TAG: &'static str = names::VEVENT;

    fn read_property(&mut self, name: &str, reader: &mut XcalReader<'_>) -> ParseResult<bool> {
        match name {
            names::DTEND => {
                let end = reader.date_property()?;
                self.set_end(end).map_err(|e| reader.invalid_field(name, e))?;
            }
            names::DURATION => {
                let (_, _, text) = reader.property_value(&[names::DURATION])?;
                let duration = parse_duration(&text).map_err(|e| reader.cursor.error(e))?;
                self.set_duration(duration).map_err(|e| reader.invalid(e))?;
                reader.close()?;
            }
            names::TRANSP => {
                let (_, _, text) = reader.property_value(&[names::TEXT])?;
                let transparent = match text.as_str() {
                    names::TRANSPARENT => true,
                    names::OPAQUE => false,
                    other => {
                        return Err(reader
                            .cursor
                            .error(ParseError::unknown_token(names::TRANSP, other)));
                    }
                };
                self.set_transparent(transparent);
                reader.close()?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl ReadComponent for Todo {
    const TAG: &'static str = names::VTODO;

    fn read_property(&mut self, name: &str, reader: &mut XcalReader<'_>) -> ParseResult<bool> {
        match name {
            names::DUE => {
                let due = reader.date_property()?;
                self.set_due(due).map_err(|e| reader.invalid_field(name, e))?;
            }
            names::PERCENT_COMPLETE => {
                let percent = reader.integer_property()?;
                self.set_percent_complete(percent)
                    .map_err(|e| reader.invalid_field(name, e))?;
            }
            names::RELATED_TO => {
                let uid = reader.text_property()?;
                self.add_related_to(uid)
                    .map_err(|e| reader.invalid_field(name, e))?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Parameters found on a property, each already decoded.
#[derive(Debug, Default)]
struct Parameters {
    tzid: Option<String>,
    cn: Option<String>,
    dir: Option<String>,
    part_stat: Option<ParticipationStatus>,
    role: Option<Role>,
    rsvp: bool,
    cutype: Option<CalendarUserType>,
    delegated_to: Vec<String>,
    delegated_from: Vec<String>,
}

pub(crate) struct XcalReader<'a> {
    cursor: XmlCursor<'a>,
    strict: bool,
    state: ReadState,
}

impl<'a> XcalReader<'a> {
    pub(crate) fn new(doc: &'a str, options: ReaderOptions) -> Self {
        Self {
            cursor: XmlCursor::new(doc),
            strict: options.strict,
            state: ReadState::ExpectEntityStart,
        }
    }

    pub(crate) const fn state(&self) -> ReadState {
        self.state
    }

    /// Reads one entity of type `C`.
    ///
    /// A reader is single-use: once it reaches `Done` or `Failed`, further
    /// calls fail.
    pub(crate) fn read<C: ReadComponent>(&mut self) -> ParseResult<C> {
        if matches!(self.state, ReadState::Done | ReadState::Failed) {
            return Err(ParseError::xml("reader has already finished"));
        }

        match self.read_document::<C>() {
            Ok(entity) => {
                self.state = ReadState::Done;
                Ok(entity)
            }
            Err(err) => {
                tracing::debug!(error = %err, state = ?self.state(), "xCal read failed");
                self.state = ReadState::Failed;
                Err(err)
            }
        }
    }

    fn read_document<C: ReadComponent>(&mut self) -> ParseResult<C> {
        self.state = ReadState::ExpectEntityStart;

        let Some((root, namespace)) = self.cursor.next_child_ns()? else {
            return Err(ParseError::missing_element(names::ICALENDAR));
        };
        if root != names::ICALENDAR {
            return Err(self.cursor.error(ParseError::unexpected_element(&root)));
        }
        if namespace.as_deref() != Some(names::XCAL_NS) {
            let ns = namespace.unwrap_or_default();
            if self.strict {
                return Err(self.cursor.error(ParseError::unsupported_namespace(&ns)));
            }
            tracing::warn!(namespace = %ns, "Root element is not in the xCal namespace");
        }

        let mut entity = None;
        while let Some(name) = self.cursor.next_child()? {
            match name.as_str() {
                names::VCALENDAR if entity.is_none() => {
                    entity = Some(self.read_vcalendar::<C>()?);
                }
                names::VCALENDAR => {
                    return Err(self.cursor.error(ParseError::unexpected_element(&name)));
                }
                _ => self.unknown(&name)?,
            }
        }
        let entity = entity
            .ok_or_else(|| self.cursor.error(ParseError::missing_element(names::VCALENDAR)))?;
        self.cursor.leave()?;

        if let Some(name) = self.cursor.next_child()? {
            return Err(self.cursor.error(ParseError::unexpected_element(&name)));
        }

        Ok(entity)
    }

    fn read_vcalendar<C: ReadComponent>(&mut self) -> ParseResult<C> {
        let mut entity = None;
        while let Some(name) = self.cursor.next_child()? {
            match name.as_str() {
                names::PROPERTIES => self.read_calendar_properties()?,
                names::COMPONENTS if entity.is_none() => {
                    entity = Some(self.read_components::<C>()?);
                }
                _ => self.unknown(&name)?,
            }
        }
        let entity =
            entity.ok_or_else(|| self.cursor.error(ParseError::missing_element(C::TAG)))?;
        self.cursor.leave()?;
        Ok(entity)
    }

    fn read_calendar_properties(&mut self) -> ParseResult<()> {
        while let Some(name) = self.cursor.next_child()? {
            match name.as_str() {
                names::PRODID => {
                    let prodid = self.text_property()?;
                    tracing::debug!(prodid = %prodid, "Reading xCal document");
                }
                names::VERSION => {
                    let (_, _, version) = self.property_value(&[names::TEXT])?;
                    if version != names::ICAL_VERSION {
                        if self.strict {
                            return Err(self
                                .cursor
                                .error(ParseError::unsupported_version(&version)));
                        }
                        tracing::warn!(version = %version, "Unexpected iCalendar version");
                    }
                    self.close()?;
                }
                _ => self.unknown(&name)?,
            }
        }
        self.cursor.leave()
    }

    fn read_components<C: ReadComponent>(&mut self) -> ParseResult<C> {
        let mut entity = None;
        while let Some(name) = self.cursor.next_child()? {
            if name == C::TAG && entity.is_none() {
                entity = Some(self.read_component::<C>()?);
            } else if name == names::VEVENT || name == names::VTODO {
                return Err(self.cursor.error(ParseError::unexpected_element(&name)));
            } else {
                self.unknown(&name)?;
            }
        }
        let entity =
            entity.ok_or_else(|| self.cursor.error(ParseError::missing_element(C::TAG)))?;
        self.cursor.leave()?;
        Ok(entity)
    }

    fn read_component<C: ReadComponent>(&mut self) -> ParseResult<C> {
        let mut entity = C::default();
        let mut seen_properties = false;
        while let Some(name) = self.cursor.next_child()? {
            if name == names::PROPERTIES && !seen_properties {
                self.read_fields(&mut entity)?;
                seen_properties = true;
            } else {
                self.unknown(&name)?;
            }
        }
        self.cursor.leave()?;
        Ok(entity)
    }

    fn read_fields<C: ReadComponent>(&mut self, entity: &mut C) -> ParseResult<()> {
        self.state = ReadState::ExpectField;
        while let Some(name) = self.cursor.next_child()? {
            self.read_field(entity, &name)?;
            self.state = ReadState::ExpectField;
        }
        self.cursor.leave()
    }

    fn read_field<C: ReadComponent>(&mut self, entity: &mut C, name: &str) -> ParseResult<()> {
        match name {
            names::UID => {
                let uid = self.text_property()?;
                entity.set_uid(uid).map_err(|e| self.invalid_field(name, e))?;
            }
            names::CREATED => {
                let created = self.date_property()?;
                entity
                    .set_created(created)
                    .map_err(|e| self.invalid_field(name, e))?;
            }
            names::LAST_MODIFIED => {
                let modified = self.date_property()?;
                entity
                    .set_last_modified(modified)
                    .map_err(|e| self.invalid_field(name, e))?;
            }
            names::SEQUENCE => {
                let sequence = self.integer_property()?;
                entity.set_sequence(sequence);
            }
            names::CLASS => {
                let (_, _, token) = self.property_value(&[names::TEXT])?;
                let class = Classification::from_token(&token)
                    .ok_or_else(|| self.cursor.error(ParseError::unknown_token(name, &token)))?;
                entity.set_classification(class);
                self.close()?;
            }
            names::CATEGORIES => {
                let (_, values) = self.property_values(&[names::TEXT])?;
                for (_, category) in values {
                    entity.add_category(category).map_err(|e| self.invalid(e))?;
                }
                self.close()?;
            }
            names::DTSTART => {
                let start = self.date_property()?;
                entity
                    .set_start(start)
                    .map_err(|e| self.invalid_field(name, e))?;
            }
            names::RRULE => {
                let rule = self.recur_property()?;
                entity.set_recurrence_rule(rule);
            }
            names::RDATE => {
                for date in self.date_list_property()? {
                    entity.add_recurrence_date(date);
                }
            }
            names::EXDATE => {
                for date in self.date_list_property()? {
                    entity.add_exception_date(date);
                }
            }
            names::SUMMARY => {
                let summary = self.text_property()?;
                entity
                    .set_summary(summary)
                    .map_err(|e| self.invalid_field(name, e))?;
            }
            names::DESCRIPTION => {
                let description = self.text_property()?;
                entity
                    .set_description(description)
                    .map_err(|e| self.invalid_field(name, e))?;
            }
            names::LOCATION => {
                let location = self.text_property()?;
                entity
                    .set_location(location)
                    .map_err(|e| self.invalid_field(name, e))?;
            }
            names::URL => {
                let (_, _, url) = self.property_value(&[names::URI])?;
                entity.set_url(url).map_err(|e| self.invalid(e))?;
                self.close()?;
            }
            names::PRIORITY => {
                let priority = self.integer_property()?;
                entity
                    .set_priority(priority)
                    .map_err(|e| self.invalid_field(name, e))?;
            }
            names::STATUS => {
                let (_, _, token) = self.property_value(&[names::TEXT])?;
                let status = Status::from_token(&token)
                    .ok_or_else(|| self.cursor.error(ParseError::unknown_token(name, &token)))?;
                entity.set_status(status);
                self.close()?;
            }
            names::ORGANIZER => {
                let (params, _, address) = self.property_value(&[names::CAL_ADDRESS])?;
                let organizer = primary_contact(&address, params.cn, params.dir)
                    .map_err(|e| self.invalid(e))?;
                entity.set_organizer(organizer);
                self.close()?;
            }
            names::ATTENDEE => {
                let attendee = self.attendee_property()?;
                entity.add_attendee(attendee);
            }
            names::X_CUSTOM => {
                let property = self.custom_property()?;
                entity.add_custom_property(property);
            }
            _ => {
                if !entity.read_property(name, self)? {
                    self.unknown(name)?;
                }
            }
        }
        Ok(())
    }

    /// Maps a model validation failure to a parse error at the current path.
    pub(crate) fn invalid(&self, err: RfcError) -> ParseError {
        self.cursor.error(invalid(err))
    }

    /// Like [`Self::invalid`], for a property `name` that has already been
    /// left.
    pub(crate) fn invalid_field(&self, name: &str, err: RfcError) -> ParseError {
        invalid(err).at(format!("{}/{name}", self.cursor.path()))
    }

    /// Rejects (strict) or skips (lenient) the element just entered.
    fn unknown(&mut self, name: &str) -> ParseResult<()> {
        if self.strict {
            return Err(self.cursor.error(ParseError::unexpected_element(name)));
        }
        tracing::warn!(path = %self.cursor.path(), element = name, "Skipping unknown element");
        self.cursor.skip_current()
    }

    /// Handles whatever follows the value of a property and leaves it.
    fn close(&mut self) -> ParseResult<()> {
        while let Some(name) = self.cursor.next_child()? {
            self.unknown(&name)?;
        }
        self.cursor.leave()
    }

    /// Reads parameters and the first value of one of `kinds`, staying
    /// inside the property. Returns the parameters, the value type and the
    /// value text.
    fn property_value(
        &mut self,
        kinds: &[&str],
    ) -> ParseResult<(Parameters, String, String)> {
        let mut params = Parameters::default();
        while let Some(name) = self.cursor.next_child()? {
            if name == names::PARAMETERS {
                params = self.parameters()?;
            } else if kinds.contains(&name.as_str()) {
                let text = self.cursor.text()?;
                self.cursor.leave()?;
                return Ok((params, name, text));
            } else {
                self.unknown(&name)?;
            }
        }
        Err(self
            .cursor
            .error(ParseError::missing_element(&kinds.join("|"))))
    }

    /// Reads parameters and every value of one of `kinds`, staying inside
    /// the property.
    fn property_values(
        &mut self,
        kinds: &[&str],
    ) -> ParseResult<(Parameters, Vec<(String, String)>)> {
        let mut params = Parameters::default();
        let mut values = Vec::new();
        self.state = ReadState::ExpectListItem;
        while let Some(name) = self.cursor.next_child()? {
            if name == names::PARAMETERS {
                params = self.parameters()?;
            } else if kinds.contains(&name.as_str()) {
                let text = self.cursor.text()?;
                self.cursor.leave()?;
                values.push((name, text));
            } else {
                self.unknown(&name)?;
            }
        }
        if values.is_empty() {
            return Err(self
                .cursor
                .error(ParseError::missing_element(&kinds.join("|"))));
        }
        Ok((params, values))
    }

    fn text_property(&mut self) -> ParseResult<String> {
        let (_, _, text) = self.property_value(&[names::TEXT])?;
        self.close()?;
        Ok(text)
    }

    /// Reads an integer property into any integer type, range checked.
    fn integer_property<T: TryFrom<i64>>(&mut self) -> ParseResult<T> {
        let (_, _, text) = self.property_value(&[names::INTEGER])?;
        let value = int_value(&text).map_err(|e| self.cursor.error(e))?;
        self.close()?;
        Ok(value)
    }

    fn date_property(&mut self) -> ParseResult<DateTime> {
        let (params, kind, text) = self.property_value(&[names::DATE, names::DATE_TIME])?;
        let value = date_value(&kind, &text, params.tzid.as_deref())
            .map_err(|e| self.cursor.error(e))?;
        self.close()?;
        Ok(value)
    }

    /// One or more dates sharing the property's timezone.
    fn date_list_property(&mut self) -> ParseResult<Vec<DateTime>> {
        let (params, values) = self.property_values(&[names::DATE, names::DATE_TIME])?;
        let dates = values
            .iter()
            .map(|(kind, text)| date_value(kind, text, params.tzid.as_deref()))
            .collect::<ParseResult<Vec<_>>>()
            .map_err(|e| self.cursor.error(e))?;
        self.close()?;
        Ok(dates)
    }

    fn parameters(&mut self) -> ParseResult<Parameters> {
        let mut params = Parameters::default();
        while let Some(name) = self.cursor.next_child()? {
            match name.as_str() {
                names::TZID => params.tzid = Some(self.param_text(names::TEXT)?),
                names::CN => params.cn = Some(self.param_text(names::TEXT)?),
                names::DIR => params.dir = Some(self.param_text(names::URI)?),
                names::PARTSTAT => {
                    let token = self.param_value(names::TEXT)?;
                    params.part_stat =
                        Some(ParticipationStatus::from_token(&token).ok_or_else(|| {
                            self.cursor.error(ParseError::unknown_token(&name, &token))
                        })?);
                    self.close()?;
                }
                names::ROLE => {
                    let token = self.param_value(names::TEXT)?;
                    params.role = Some(Role::from_token(&token).ok_or_else(|| {
                        self.cursor.error(ParseError::unknown_token(&name, &token))
                    })?);
                    self.close()?;
                }
                names::RSVP => {
                    let text = self.param_value(names::BOOLEAN)?;
                    params.rsvp = parse_boolean(&text).map_err(|e| self.cursor.error(e))?;
                    self.close()?;
                }
                names::CUTYPE => {
                    let token = self.param_value(names::TEXT)?;
                    params.cutype = Some(CalendarUserType::from_token(&token).ok_or_else(|| {
                        self.cursor.error(ParseError::unknown_token(&name, &token))
                    })?);
                    self.close()?;
                }
                names::DELEGATED_TO => params.delegated_to = self.param_list(names::CAL_ADDRESS)?,
                names::DELEGATED_FROM => {
                    params.delegated_from = self.param_list(names::CAL_ADDRESS)?;
                }
                _ => self.unknown(&name)?,
            }
        }
        self.cursor.leave()?;
        Ok(params)
    }

    /// Reads the first `kind` value of a parameter, staying inside it.
    fn param_value(&mut self, kind: &str) -> ParseResult<String> {
        while let Some(name) = self.cursor.next_child()? {
            if name == kind {
                let text = self.cursor.text()?;
                self.cursor.leave()?;
                return Ok(text);
            }
            self.unknown(&name)?;
        }
        Err(self.cursor.error(ParseError::missing_element(kind)))
    }

    fn param_text(&mut self, kind: &str) -> ParseResult<String> {
        let text = self.param_value(kind)?;
        self.close()?;
        Ok(text)
    }

    fn param_list(&mut self, kind: &str) -> ParseResult<Vec<String>> {
        self.state = ReadState::ExpectListItem;
        let mut values = Vec::new();
        while let Some(name) = self.cursor.next_child()? {
            if name == kind {
                values.push(self.cursor.text()?);
                self.cursor.leave()?;
            } else {
                self.unknown(&name)?;
            }
        }
        self.cursor.leave()?;
        Ok(values)
    }

    fn attendee_property(&mut self) -> ParseResult<Attendee> {
        let (params, _, address) = self.property_value(&[names::CAL_ADDRESS])?;
        let contact =
            primary_contact(&address, params.cn, params.dir).map_err(|e| self.invalid(e))?;

        let mut attendee = Attendee::new(contact);
        attendee.set_part_stat(params.part_stat.unwrap_or_default());
        attendee.set_role(params.role.unwrap_or_default());
        attendee.set_rsvp(params.rsvp);
        attendee.set_cutype(params.cutype.unwrap_or_default());
        for address in &params.delegated_to {
            let delegate = delegation_contact(address).map_err(|e| self.invalid(e))?;
            attendee.add_delegated_to(delegate);
        }
        for address in &params.delegated_from {
            let delegator = delegation_contact(address).map_err(|e| self.invalid(e))?;
            attendee.add_delegated_from(delegator);
        }

        self.close()?;
        Ok(attendee)
    }

    fn custom_property(&mut self) -> ParseResult<CustomProperty> {
        let mut identifier = None;
        let mut value = None;
        while let Some(name) = self.cursor.next_child()? {
            match name.as_str() {
                names::IDENTIFIER if identifier.is_none() => {
                    identifier = Some(self.cursor.text()?);
                    self.cursor.leave()?;
                }
                names::VALUE if value.is_none() => {
                    value = Some(self.cursor.text()?);
                    self.cursor.leave()?;
                }
                _ => self.unknown(&name)?,
            }
        }
        let identifier = identifier
            .ok_or_else(|| self.cursor.error(ParseError::missing_element(names::IDENTIFIER)))?;
        let property = CustomProperty::new(identifier, value.unwrap_or_default())
            .map_err(|e| self.invalid(e))?;
        self.cursor.leave()?;
        Ok(property)
    }

    fn recur_property(&mut self) -> ParseResult<RecurrenceRule> {
        let mut rule = None;
        while let Some(name) = self.cursor.next_child()? {
            match name.as_str() {
                names::PARAMETERS => {
                    self.parameters()?;
                }
                names::RECUR if rule.is_none() => rule = Some(self.recur()?),
                _ => self.unknown(&name)?,
            }
        }
        let rule =
            rule.ok_or_else(|| self.cursor.error(ParseError::missing_element(names::RECUR)))?;
        self.cursor.leave()?;
        Ok(rule)
    }

    /// Reads a `<recur>` element and leaves it.
    fn recur(&mut self) -> ParseResult<RecurrenceRule> {
        self.state = ReadState::ExpectListItem;

        let mut parts = RecurParts::default();
        while let Some(name) = self.cursor.next_child()? {
            if !RecurParts::is_part(&name) {
                self.unknown(&name)?;
                continue;
            }
            let text = self.cursor.text()?;
            parts
                .apply(&name, &text)
                .map_err(|e| self.cursor.error(e))?;
            self.cursor.leave()?;
        }

        let Some(freq) = parts.freq else {
            return Err(self.cursor.error(ParseError::missing_element(names::FREQ)));
        };
        let rule = parts.build(freq).map_err(|e| self.invalid(e))?;
        self.cursor.leave()?;
        Ok(rule)
    }
}

/// Parts of a `<recur>` value collected before the rule is validated.
#[derive(Debug, Default)]
struct RecurParts {
    freq: Option<Frequency>,
    until: Option<DateTime>,
    count: Option<u32>,
    interval: Option<u32>,
    week_start: Option<Weekday>,
    by_second: Vec<i32>,
    by_minute: Vec<i32>,
    by_hour: Vec<i32>,
    by_day: Vec<WeekdayNum>,
    by_month_day: Vec<i32>,
    by_year_day: Vec<i32>,
    by_week_no: Vec<i32>,
    by_month: Vec<i32>,
}

impl RecurParts {
    fn is_part(name: &str) -> bool {
        matches!(
            name,
            names::FREQ
                | names::UNTIL
                | names::COUNT
                | names::INTERVAL
                | names::BYSECOND
                | names::BYMINUTE
                | names::BYHOUR
                | names::BYDAY
                | names::BYMONTHDAY
                | names::BYYEARDAY
                | names::BYWEEKNO
                | names::BYMONTH
                | names::WKST
        )
    }

    fn apply(&mut self, part: &str, text: &str) -> ParseResult<()> {
        match part {
            names::FREQ => {
                let freq = Frequency::from_token(text)
                    .ok_or_else(|| ParseError::unknown_token(part, text))?;
                self.freq = Some(freq);
            }
            names::UNTIL => self.until = Some(parse_date_or_date_time(text)?),
            names::COUNT => self.count = Some(int_value(text)?),
            names::INTERVAL => self.interval = Some(int_value(text)?),
            names::BYSECOND => self.by_second.push(int_value(text)?),
            names::BYMINUTE => self.by_minute.push(int_value(text)?),
            names::BYHOUR => self.by_hour.push(int_value(text)?),
            names::BYDAY => self.by_day.push(parse_weekday_num(text)?),
            names::BYMONTHDAY => self.by_month_day.push(int_value(text)?),
            names::BYYEARDAY => self.by_year_day.push(int_value(text)?),
            names::BYWEEKNO => self.by_week_no.push(int_value(text)?),
            names::BYMONTH => self.by_month.push(int_value(text)?),
            names::WKST => self.week_start = Some(parse_weekday(text)?),
            _ => return Err(ParseError::unexpected_element(part)),
        }
        Ok(())
    }

    /// Validates the collected parts into a rule.
    fn build(self, freq: Frequency) -> Result<RecurrenceRule, RfcError> {
        let mut rule = RecurrenceRule::new(freq);
        if let Some(until) = self.until {
            rule.set_until(until)?;
        }
        if let Some(count) = self.count {
            rule.set_count(count)?;
        }
        if let Some(interval) = self.interval {
            rule.set_interval(interval)?;
        }
        if let Some(week_start) = self.week_start {
            rule.set_week_start(week_start);
        }
        rule.set_by_second(&self.by_second)?;
        rule.set_by_minute(&self.by_minute)?;
        rule.set_by_hour(&self.by_hour)?;
        rule.set_by_day(&self.by_day);
        rule.set_by_month_day(&self.by_month_day)?;
        rule.set_by_year_day(&self.by_year_day)?;
        rule.set_by_week_no(&self.by_week_no)?;
        rule.set_by_month(&self.by_month)?;
        Ok(rule)
    }
}

#[expect(
    clippy::map_err_ignore,
    reason = "The conversion error carries nothing beyond the value itself"
)]
fn int_value<T: TryFrom<i64>>(text: &str) -> ParseResult<T> {
    let n = parse_integer(text)?;
    T::try_from(n).map_err(|_| ParseError::invalid_value(format!("{n} is out of range")))
}

fn date_value(kind: &str, text: &str, tzid: Option<&str>) -> ParseResult<DateTime> {
    if kind == names::DATE {
        if let Some(tz) = tzid {
            return Err(ParseError::invalid_value(format!(
                "all-day date {text} cannot carry timezone {tz:?}"
            )));
        }
        parse_date(text)
    } else {
        parse_date_time(text, tzid)
    }
}

/// The contact of an organizer or attendee: a `mailto:` address with the
/// name in `cn` and the directory entry in `dir`, or a bare directory URI.
fn primary_contact(
    address: &str,
    cn: Option<String>,
    dir: Option<String>,
) -> Result<ContactReference, RfcError> {
    match from_mailto(address) {
        Some((email, name)) => {
            let mut contact = ContactReference::new(email)?;
            if let Some(dir) = dir {
                contact = contact.with_uri(dir)?;
            }
            contact.with_name(cn.or(name).unwrap_or_default())
        }
        None => ContactReference::from_uri(address)?.with_name(cn.unwrap_or_default()),
    }
}

/// A delegation entry: `mailto:` with the name folded in, or a bare URI.
fn delegation_contact(address: &str) -> Result<ContactReference, RfcError> {
    match from_mailto(address) {
        Some((email, name)) => ContactReference::new(email)?.with_name(name.unwrap_or_default()),
        None => ContactReference::from_uri(address),
    }
}
