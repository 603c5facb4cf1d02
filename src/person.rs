//! The person listing: records, a repository seam and the JSON body served for it.
//!
//! There is no server here. [`render_persons`] produces the exact JSON array a
//! `GET /api/persons` handler would return for a given repository.

use crate::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
}

impl Address {
    pub fn new(street: &str, city: &str, state: &str, zip_code: u32) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code,
        }
    }
}

/// A person with a home and an optional work address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub phone_number: String,
    pub home_address: Address,
    pub work_address: Option<Address>,
}

/// Source of persons.
pub trait PersonRepository {
    fn find_all(&self) -> Vec<Person>;
}

/// A repository that always returns the same single, hard-coded person.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPersonRepository;

impl PersonRepository for StaticPersonRepository {
    fn find_all(&self) -> Vec<Person> {
        vec![Person {
            first_name: "John".into(),
            last_name: "Burbridge".into(),
            age: 51,
            email: "fake@emailaddress.com".into(),
            phone_number: "555-516-4620".into(),
            home_address: Address::new("1234 Elm Street", "Oakland", "CA", 94619),
            work_address: None,
        }]
    }
}

impl PersonRepository for Vec<Person> {
    fn find_all(&self) -> Vec<Person> {
        self.clone()
    }
}

/// Serializes every person in `repository` as a JSON array.
pub fn render_persons(repository: &dyn PersonRepository) -> Result<String> {
    let persons = repository.find_all();
    debug!("rendering {} persons", persons.len());
    Ok(serde_json::to_string(&persons)?)
}
