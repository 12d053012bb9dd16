//! In-memory driven port implementations for domain service tests.
//!
//! Each store keeps rows in a `Mutex<Vec<_>>`, assigns ids from 1 upwards
//! and mirrors the ordering guarantees of the Diesel adapters.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{
    CityRepository, PicnicRepository, RegistrationRepository, RepositoryError, UserRepository,
};
use crate::domain::{
    AgeRange, City, CityId, CityName, NewCity, NewPicnic, NewRegistration, NewUser, Picnic,
    PicnicId, PicnicListQuery, PicnicRegistration, RegistrationId, RetrySleeper, User, UserId,
};

fn next_id(len: usize) -> i32 {
    i32::try_from(len + 1).expect("test store fits in i32")
}

#[derive(Default)]
pub struct InMemoryCities {
    rows: Mutex<Vec<City>>,
    pub fail_with: Mutex<Option<RepositoryError>>,
}

impl InMemoryCities {
    pub fn rows(&self) -> Vec<City> {
        self.rows.lock().expect("cities mutex").clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match self.fail_with.lock().expect("failure mutex").clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CityRepository for InMemoryCities {
    async fn find_by_name(&self, name: &CityName) -> Result<Option<City>, RepositoryError> {
        self.check()?;
        Ok(self.rows().into_iter().find(|city| &city.name == name))
    }

    async fn insert_or_fetch(&self, city: &NewCity) -> Result<City, RepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().expect("cities mutex");
        if let Some(existing) = rows.iter().find(|row| row.name == city.name) {
            return Ok(existing.clone());
        }
        let stored = City {
            id: CityId::new(next_id(rows.len())),
            name: city.name.clone(),
            weather: city.weather.clone(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, name: Option<&CityName>) -> Result<Vec<City>, RepositoryError> {
        self.check()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|city| name.is_none_or(|wanted| &city.name == wanted))
            .collect())
    }

    async fn find_by_ids(&self, ids: &[CityId]) -> Result<Vec<City>, RepositoryError> {
        self.check()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|city| ids.contains(&city.id))
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    pub lookups: Mutex<usize>,
}

impl InMemoryUsers {
    pub fn rows(&self) -> Vec<User> {
        self.rows.lock().expect("users mutex").clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut rows = self.rows.lock().expect("users mutex");
        let stored = User {
            id: UserId::new(next_id(rows.len())),
            name: user.name.clone(),
            surname: user.surname.clone(),
            age: user.age,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, ages: AgeRange) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|user| ages.contains(user.age))
            .collect())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, RepositoryError> {
        *self.lookups.lock().expect("lookups mutex") += 1;
        Ok(self
            .rows()
            .into_iter()
            .filter(|user| ids.contains(&user.id))
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryPicnics {
    rows: Mutex<Vec<Picnic>>,
}

impl InMemoryPicnics {
    pub fn rows(&self) -> Vec<Picnic> {
        self.rows.lock().expect("picnics mutex").clone()
    }
}

#[async_trait]
impl PicnicRepository for InMemoryPicnics {
    async fn insert(&self, picnic: NewPicnic) -> Result<Picnic, RepositoryError> {
        let mut rows = self.rows.lock().expect("picnics mutex");
        let stored = Picnic {
            id: PicnicId::new(next_id(rows.len())),
            city_id: picnic.city_id,
            time: picnic.time,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, query: PicnicListQuery) -> Result<Vec<Picnic>, RepositoryError> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|picnic| query.at.is_none_or(|at| picnic.time == at))
            .filter(|picnic| query.not_before.is_none_or(|bound| picnic.time >= bound))
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryRegistrations {
    rows: Mutex<Vec<PicnicRegistration>>,
}

impl InMemoryRegistrations {
    pub fn rows(&self) -> Vec<PicnicRegistration> {
        self.rows.lock().expect("registrations mutex").clone()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrations {
    async fn insert(
        &self,
        registration: NewRegistration,
    ) -> Result<PicnicRegistration, RepositoryError> {
        let mut rows = self.rows.lock().expect("registrations mutex");
        let stored = PicnicRegistration {
            id: RegistrationId::new(next_id(rows.len())),
            user_id: registration.user_id,
            picnic_id: registration.picnic_id,
        };
        rows.push(stored);
        Ok(stored)
    }

    async fn list_for_picnics(
        &self,
        picnic_ids: &[PicnicId],
    ) -> Result<Vec<PicnicRegistration>, RepositoryError> {
        Ok(self
            .rows()
            .into_iter()
            .filter(|row| picnic_ids.contains(&row.picnic_id))
            .collect())
    }
}

/// Sleeper that records requested delays instead of waiting.
#[derive(Default)]
pub struct RecordingSleeper {
    pub delays: Mutex<Vec<Duration>>,
}

#[async_trait]
impl RetrySleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().expect("delays mutex").push(duration);
    }
}

/// Clock frozen at a fixed instant.
pub struct FixtureClock {
    pub utc_now: chrono::DateTime<chrono::Utc>,
}

impl mockable::Clock for FixtureClock {
    fn local(&self) -> chrono::DateTime<chrono::Local> {
        self.utc_now.with_timezone(&chrono::Local)
    }

    fn utc(&self) -> chrono::DateTime<chrono::Utc> {
        self.utc_now
    }
}
