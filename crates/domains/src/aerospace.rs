//! Aerospace: a communications constellation, its satellites and ground stations

use crate::synth::{date, location, reading, slug};
use crate::DomainSeeder;
use shared::{Properties, SeedBatch, TwinRecord};

const CONSTELLATION_ID: &str = "constellation-globalnet";
const SATELLITES: usize = 12;
const PLANES: usize = 3;

const GROUND_STATIONS: &[(&str, f64, f64)] = &[
    ("Svalbard", 78.23, 15.41),
    ("Kourou", 5.16, -52.65),
    ("Canberra", -35.40, 148.98),
    ("Fairbanks", 64.84, -147.72),
];

pub struct Aerospace;

pub fn satellite_id(n: usize) -> String {
    format!("sat-{n:04}")
}

impl DomainSeeder for Aerospace {
    fn name(&self) -> &'static str {
        "aerospace"
    }

    fn description(&self) -> &'static str {
        "Satellite constellation with ground stations"
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new();

        batch.twin(
            TwinRecord::new(CONSTELLATION_ID, "SatelliteConstellation", "GlobalNet")
                .description("Low earth orbit broadband constellation")
                .property("operator", "GlobalNet Communications")
                .property("orbitalPlanes", PLANES)
                .property("plannedSatellites", SATELLITES),
        );

        for n in 1..=SATELLITES {
            let id = satellite_id(n);
            let plane = (n - 1) % PLANES + 1;
            batch.twin(
                TwinRecord::new(&id, "CommunicationsSatellite", format!("GlobalNet-{n:04}"))
                    .property("orbitalPlane", plane)
                    .property("altitudeKm", reading(550.0, 5.0, n))
                    .property("inclinationDeg", 53.0 + plane as f64)
                    .property("launchDate", date((n as i64) * 14))
                    .property("batteryPct", reading(92.0, 6.0, n))
                    .property("status", if n % 7 == 0 { "degraded" } else { "operational" }),
            );
            batch.link(CONSTELLATION_ID, "hasSatellite", &id);
            // Neighbours in the same orbital plane
            if n > PLANES {
                batch.link(satellite_id(n - PLANES), "crossLink", &id);
            }
        }

        for (i, (name, lat, lon)) in GROUND_STATIONS.iter().enumerate() {
            let id = format!("gs-{}", slug(name));
            batch.twin(
                TwinRecord::new(&id, "GroundStation", format!("{name} Ground Station"))
                    .property("location", location(*lat, *lon))
                    .property("antennaCount", 2 + i)
                    .property("bands", vec!["Ka", "Ku"]),
            );
            for n in (1..=SATELLITES).filter(|n| n % GROUND_STATIONS.len() == i) {
                batch.relationship(
                    shared::Relationship::new(satellite_id(n), "communicatesWith", &id)
                        .with_properties(Properties::new().with("band", "Ka")),
                );
            }
        }

        batch
    }
}
