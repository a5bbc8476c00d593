mod common;

use common::*;
use octofhir_clinic::*;

#[test]
fn test_patient_ids_start_at_one_without_gaps() {
    let mut registry = ClinicRegistry::new();
    let ids: Vec<PatientId> = (0..5)
        .map(|i| {
            registry
                .register_patient(PersonDetails::new(format!("P{i}"), 20, "Other", "-"), "Cold", None)
                .id
        })
        .collect();

    assert_eq!(ids, (1..=5).map(PatientId).collect::<Vec<_>>());
}

#[test]
fn test_doctor_ids_are_independent_of_patient_ids() {
    let mut registry = ClinicRegistry::new();
    for _ in 0..3 {
        registry.register_patient(john_doe(), "Flu", None);
    }

    assert_eq!(registry.register_doctor(dr_smith(), "Cardiology", true).id, DoctorId(1));
    assert_eq!(registry.register_doctor(dr_lee(), "Orthopedics", true).id, DoctorId(2));
}

#[test]
fn test_counters_are_per_registry() {
    let mut first = create_test_registry();
    let mut second = create_test_registry();

    let a = first
        .schedule_appointment(PatientId(1), DoctorId(1), date(2024, 6, 1), "09:30 AM")
        .unwrap()
        .id;
    let b = second
        .schedule_appointment(PatientId(1), DoctorId(1), date(2024, 6, 1), "09:30 AM")
        .unwrap()
        .id;

    assert_eq!(a, AppointmentId(1));
    assert_eq!(b, AppointmentId(1));
}

#[test]
fn test_schedule_appointment_scenario() {
    let mut registry = ClinicRegistry::new();
    let john = registry.register_patient(john_doe(), "Flu", None).id;
    let smith = registry.register_doctor(dr_smith(), "Cardiology", true).id;

    let appointment = registry
        .schedule_appointment(john, smith, date(2024, 6, 1), "09:30 AM")
        .unwrap()
        .clone();

    assert_eq!(appointment.id, AppointmentId(1));
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.patient_id, john);
    assert_eq!(appointment.doctor_id, smith);
    assert_eq!(appointment.time, "09:30 AM");

    let second = registry
        .schedule_appointment(john, smith, date(2024, 6, 2), "10:00 AM")
        .unwrap();
    assert_eq!(second.id, AppointmentId(2));
}

#[test]
fn test_unavailable_doctor_is_never_booked() {
    let mut registry = create_test_registry();
    let before = registry.list_appointments().len();

    let err = registry
        .schedule_appointment(PatientId(1), DoctorId(2), date(2024, 6, 1), "11:00 AM")
        .unwrap_err();

    assert!(matches!(err, ClinicError::DoctorUnavailable { doctor_id: 2 }));
    assert_eq!(err.category(), "precondition_failed");
    assert_eq!(registry.list_appointments().len(), before);
}

#[test]
fn test_double_booking_is_allowed() {
    let mut registry = create_test_registry();
    let when = date(2024, 6, 1);

    registry
        .schedule_appointment(PatientId(1), DoctorId(1), when, "09:30 AM")
        .unwrap();
    registry
        .schedule_appointment(PatientId(1), DoctorId(1), when, "09:30 AM")
        .unwrap();

    assert_eq!(registry.appointments_for_patient(PatientId(1)).count(), 2);
}

#[test]
fn test_appointments_for_patient() {
    let mut registry = create_test_registry();
    let jane = registry.register_patient(jane_roe(), "Fracture", None).id;

    registry
        .schedule_appointment(PatientId(1), DoctorId(1), date(2024, 6, 1), "09:00 AM")
        .unwrap();
    registry
        .schedule_appointment(jane, DoctorId(1), date(2024, 6, 1), "10:00 AM")
        .unwrap();
    registry
        .schedule_appointment(PatientId(1), DoctorId(1), date(2024, 6, 3), "09:00 AM")
        .unwrap();

    let johns: Vec<AppointmentId> = registry
        .appointments_for_patient(PatientId(1))
        .map(|a| a.id)
        .collect();
    assert_eq!(johns, vec![AppointmentId(1), AppointmentId(3)]);

    // Unknown patient and patient without appointments look the same here
    assert_eq!(registry.appointments_for_patient(PatientId(99)).count(), 0);
    let fresh = registry.register_patient(jane_roe(), "Checkup", None).id;
    assert_eq!(registry.appointments_for_patient(fresh).count(), 0);
    assert!(registry.patient(PatientId(99)).is_err());
}

#[test]
fn test_appointment_sees_later_discharge() {
    let mut registry = create_test_registry();
    let jane = registry
        .register_patient(jane_roe(), "Fracture", Some(date(2024, 5, 30)))
        .id;
    let appointment = registry
        .schedule_appointment(jane, DoctorId(1), date(2024, 6, 1), "09:00 AM")
        .unwrap()
        .clone();

    registry.discharge_patient(jane).unwrap();

    let summary = registry.appointment_summary(&appointment).unwrap();
    assert!(!summary.patient.is_admitted());
    assert_eq!(summary.doctor.name(), "Dr. Smith");
}

#[test]
fn test_bill_scenario() {
    let mut registry = create_test_registry();
    let today = date(2024, 6, 1);

    let bill_id = registry.generate_bill(PatientId(1), 150.0, today).unwrap().id;
    assert_eq!(bill_id, BillId(1000));
    assert!(!registry.bill(bill_id).unwrap().paid);

    assert_eq!(registry.mark_bill_paid(bill_id).unwrap(), PaymentOutcome::Paid);
    assert!(registry.bill(bill_id).unwrap().paid);

    assert_eq!(
        registry.mark_bill_paid(bill_id).unwrap(),
        PaymentOutcome::AlreadyPaid
    );
    assert!(registry.bill(bill_id).unwrap().paid);
}

#[test]
fn test_bill_ids_start_at_one_thousand() {
    let mut registry = create_test_registry();
    let ids: Vec<BillId> = (0..3)
        .map(|_| registry.generate_bill(PatientId(1), 10.0, date(2024, 6, 1)).unwrap().id)
        .collect();
    assert_eq!(ids, vec![BillId(1000), BillId(1001), BillId(1002)]);
}

#[test]
fn test_discharge_scenario() {
    let mut registry = ClinicRegistry::new();
    let jane = registry
        .register_patient(jane_roe(), "Fracture", Some(date(2024, 5, 30)))
        .id;
    assert!(registry.patient(jane).unwrap().is_admitted());
    assert_eq!(registry.admitted_patients().count(), 1);

    registry.discharge_patient(jane).unwrap();

    let patient = registry.patient(jane).unwrap();
    assert!(!patient.is_admitted());
    assert_eq!(patient.admission_date, None);
    assert_eq!(registry.admitted_patients().count(), 0);

    let err = registry.discharge_patient(jane).unwrap_err();
    assert!(matches!(err, ClinicError::PatientNotAdmitted { .. }));
}

#[test]
fn test_listings_keep_insertion_order() {
    let registry = create_test_registry();

    let names: Vec<&str> = registry.list_doctors().iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["Dr. Smith", "Dr. Lee"]);
    assert!(registry.list_bills().is_empty());
    assert!(ClinicRegistry::new().list_patients().is_empty());
}

#[test]
fn test_bill_summary_uses_patient_name() {
    let mut registry = create_test_registry();
    let bill = registry
        .generate_bill(PatientId(1), 150.0, date(2024, 6, 1))
        .unwrap()
        .clone();

    let summary = registry.bill_summary(&bill).unwrap();
    assert_eq!(
        summary.to_string(),
        "Bill ID: 1000, Patient: John Doe, Amount: $150.00, Date: 2024-06-01, Paid: No"
    );
}
