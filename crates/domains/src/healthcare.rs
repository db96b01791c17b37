//! Healthcare: hospitals, departments and monitored medical devices

use crate::synth::{location, reading, slug, timestamp};
use crate::DomainSeeder;
use shared::{Relationship, SeedBatch, TwinRecord};

const HOSPITALS: &[(&str, &str, usize, f64, f64)] = &[
    ("St. Mary's General", "Boston", 420, 42.34, -71.10),
    ("Lakeside Medical Center", "Chicago", 310, 41.89, -87.62),
];

/// (key, name, beds, device type, devices per department)
const DEPARTMENTS: &[(&str, &str, usize, &str, usize)] = &[
    ("icu", "Intensive Care Unit", 24, "Ventilator", 6),
    ("er", "Emergency", 40, "PatientMonitor", 8),
    ("radiology", "Radiology", 0, "MriScanner", 2),
    ("cardiology", "Cardiology", 32, "EcgMonitor", 4),
];

pub struct Healthcare;

impl DomainSeeder for Healthcare {
    fn name(&self) -> &'static str {
        "healthcare"
    }

    fn description(&self) -> &'static str {
        "Hospitals with departments and medical devices"
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new();
        let mut device_index = 0;

        for (name, city, beds, lat, lon) in HOSPITALS {
            let hospital_id = format!("hospital-{}", slug(name));
            batch.twin(
                TwinRecord::new(&hospital_id, "Hospital", *name)
                    .property("city", *city)
                    .property("beds", *beds)
                    .property("location", location(*lat, *lon))
                    .property("traumaLevel", if *beds > 400 { 1 } else { 2 }),
            );

            for (key, dept_name, dept_beds, device_type, devices) in DEPARTMENTS {
                let dept_id = format!("{hospital_id}-{key}");
                batch.twin(
                    TwinRecord::new(&dept_id, "Department", format!("{name} {dept_name}"))
                        .property("beds", *dept_beds)
                        .property("occupancyPct", reading(78.0, 15.0, device_index)),
                );
                batch.link(&hospital_id, "hasDepartment", &dept_id);

                for d in 1..=*devices {
                    device_index += 1;
                    let device_id = format!("{dept_id}-{}-{d:02}", slug(device_type));
                    let maintenance_due = device_index % 5 == 0;
                    batch.twin(
                        TwinRecord::new(&device_id, *device_type, format!("{device_type} {d:02}"))
                            .description(format!("{device_type} in {dept_name}"))
                            .property("serialNumber", format!("SN-{:06}", 100_000 + device_index * 37))
                            .property("uptimePct", reading(99.2, 0.7, device_index))
                            .property("maintenanceDue", maintenance_due)
                            .property("lastCalibrated", timestamp(-(device_index as i64) * 1440)),
                    );
                    batch.relationship(
                        Relationship::new(&dept_id, "hasDevice", &device_id)
                            .property("critical", *key == "icu"),
                    );
                }
            }
        }

        batch
    }
}
