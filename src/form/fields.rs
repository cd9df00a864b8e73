use crate::booking::{BookingRequest, TimeSlot};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Input fields of the booking form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Date,
    Time,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Time => "time",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the user has entered so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl FormFields {
    /// Fields that still need a value. Only presence is checked.
    pub fn missing(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(Field::Name);
        }
        if self.phone.is_empty() {
            missing.push(Field::Phone);
        }
        if self.date.is_none() {
            missing.push(Field::Date);
        }
        if self.time.is_none() {
            missing.push(Field::Time);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn to_request(&self) -> Result<BookingRequest, ValidationError> {
        match (self.date, self.time) {
            (Some(date), Some(time)) if self.is_complete() => Ok(BookingRequest {
                name: self.name.clone(),
                phone: self.phone.clone(),
                date,
                time,
            }),
            _ => Err(ValidationError::MissingFields(self.missing())),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
