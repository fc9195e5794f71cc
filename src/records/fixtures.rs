//! Built-in appointment list used when no data file is configured.

use super::{AppointmentRecord, AppointmentStatus, Clinic, Gender};

const DATE: &str = "22 Sep 2025";

/// Clinics offered by the clinic picker, in display order.
pub fn clinics() -> Vec<Clinic> {
	vec![
		Clinic::new("neurology", "Neurology", "🧠"),
		Clinic::new("ent", "Ear, Nose & Throat", "👂"),
		Clinic::new("emergency", "Accident & Emergency", "🚑"),
		Clinic::new("cardiology", "Cardiology", "❤️"),
		Clinic::new("orthopedics", "Orthopedics", "🦴"),
	]
}

/// The sample appointment list for the day.
pub fn appointments() -> Vec<AppointmentRecord> {
	use AppointmentStatus::*;
	use Gender::*;

	let emergency = ("Accident & Emergency", "🚑");
	let neurology = ("Neurology", "🧠");
	let ent = ("Ear, Nose & Throat", "👂");

	let rows = [
		(1, "Akpopodion Endurance", "HOSP29386756", Male, "21yrs", neurology, 120_000, "11:30 AM", Processing, true),
		(2, "Boluwatife Olusola", "HOSP87654321", Female, "30yrs", ent, 230_500, "05:30 PM", NotArrived, true),
		(3, "Arlie Mertz", "HOSP76354892", Female, "23days", neurology, 90_000, "03:45 PM", AwaitingVitals, true),
		(4, "Akuchi Amadi", "HOSP98765432", Female, "11mths", emergency, 100_000, "02:00 PM", NotArrived, true),
		(5, "Omolola Bakare", "HOSP12345789", Female, "26yrs", emergency, 180_000, "01:15 PM", AwaitingDoctor, true),
		(6, "Ayobami Musa", "HOSP34567890", Female, "11mths", emergency, 190_000, "12:45 PM", AdmittedToWard, true),
		(7, "Ngozi Okeke", "HOSP45678901", Female, "11mths", emergency, 200_000, "10:00 AM", TransferredToAe, true),
		(8, "Chinwe Azikiwe", "HOSP56789012", Female, "11mths", emergency, 210_000, "08:00 AM", SeenDoctor, false),
		(9, "Chinwe Azikiwe 2", "HOSP56789012", Female, "11mths", emergency, 210_000, "08:00 AM", SeenDoctor, false),
		(10, "Chinwe Azikiwe 3", "HOSP56789012", Female, "11mths", emergency, 210_000, "08:00 AM", SeenDoctor, false),
		(11, "Chinwe Azikiwe 4", "HOSP56789012", Female, "11mths", emergency, 210_000, "08:00 AM", SeenDoctor, false),
		(12, "Chinwe Azikiwe 5", "HOSP56789012", Female, "11mths", emergency, 210_000, "08:00 AM", SeenDoctor, false),
	];

	rows.into_iter()
		.map(
			|(id, name, patient_id, gender, age, (clinic, icon), balance, time, status, is_new)| {
				AppointmentRecord {
					id,
					patient_name: name.to_string(),
					patient_id: patient_id.to_string(),
					gender,
					age: age.to_string(),
					clinic: clinic.to_string(),
					clinic_icon: icon.to_string(),
					wallet_balance: balance,
					time: time.to_string(),
					date: DATE.to_string(),
					status,
					is_new,
				}
			},
		)
		.collect()
}
