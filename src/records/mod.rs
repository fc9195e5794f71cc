//! Appointment records and the clinic registry.

mod appointment;
mod clinic;
pub mod fixtures;
mod store;

pub use appointment::{AppointmentRecord, AppointmentStatus, Gender};
pub use clinic::{ALL_CLINICS, Clinic, ClinicSelection};
pub use store::{RecordStore, StoreError};
