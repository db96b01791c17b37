//! Smart building: floors, rooms, sensors and HVAC, with an ontology
//!
//! Not a built-in namespace, so the seeder brings its own. The building is
//! fed by a substation from the energy domain, which must already exist in
//! the store for that edge to land.

use crate::energy;
use crate::synth::{reading, timestamp};
use crate::DomainSeeder;
use shared::{Ontology, Relationship, SeedBatch, TwinRecord};

pub const NAMESPACE: &str = "http://tesserai.io/ontology/smartbuilding#";
pub const BUILDING_ID: &str = "building-hq";

const FLOORS: usize = 3;
const ROOMS_PER_FLOOR: usize = 4;

/// (key, sensor class, unit, baseline, spread)
const SENSORS: &[(&str, &str, &str, f64, f64)] = &[
    ("temp", "TemperatureSensor", "degC", 21.5, 1.5),
    ("occupancy", "OccupancySensor", "people", 6.0, 6.0),
    ("co2", "Co2Sensor", "ppm", 650.0, 180.0),
];

pub struct SmartBuilding;

/// Twin ids this domain links to but does not create
pub fn external_references() -> Vec<String> {
    vec![energy::substation_id(1)]
}

pub fn ontology() -> Ontology {
    let mut ontology = Ontology::new("smartbuilding", "Smart Building", NAMESPACE)
        .class("Building", None, Some("A managed facility"))
        .class("Floor", None, None)
        .class("Room", None, Some("An enclosed space on a floor"))
        .class("Sensor", None, None)
        .class("HvacUnit", None, Some("Air handling unit serving rooms"));
    for (_, class, ..) in SENSORS {
        ontology = ontology.class(class, Some("Sensor"), None);
    }
    ontology
        .relation("hasFloor", "Building", "Floor")
        .relation("hasRoom", "Floor", "Room")
        .relation("hasSensor", "Room", "Sensor")
        .relation("serves", "HvacUnit", "Room")
        .relation("poweredBy", "Building", "Substation")
}

impl DomainSeeder for SmartBuilding {
    fn name(&self) -> &'static str {
        "smart_building"
    }

    fn description(&self) -> &'static str {
        "Office building with rooms, sensors, HVAC and an ontology"
    }

    fn namespace(&self) -> Option<&'static str> {
        Some(NAMESPACE)
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new().with_ontology(ontology());
        let mut sensor_index = 0;

        batch.twin(
            TwinRecord::new(BUILDING_ID, "Building", "Tesserai HQ")
                .description("Headquarters office building")
                .property("floors", FLOORS)
                .property("grossAreaM2", 8_400)
                .property("certification", "LEED Gold"),
        );
        batch.relationship(
            Relationship::new(BUILDING_ID, "poweredBy", energy::substation_id(1))
                .property("feeder", "F-12"),
        );

        for f in 1..=FLOORS {
            let floor_id = format!("{BUILDING_ID}-floor-{f}");
            batch.twin(TwinRecord::new(&floor_id, "Floor", format!("Floor {f}")).property("level", f));
            batch.link(BUILDING_ID, "hasFloor", &floor_id);

            let hvac_id = format!("{floor_id}-ahu");
            batch.twin(
                TwinRecord::new(&hvac_id, "HvacUnit", format!("AHU Floor {f}"))
                    .property("supplyAirTempC", reading(14.0, 1.0, f))
                    .property("fanSpeedPct", reading(65.0, 20.0, f)),
            );

            for r in 1..=ROOMS_PER_FLOOR {
                let room_id = format!("{floor_id}-room-{f}{r:02}");
                batch.twin(
                    TwinRecord::new(&room_id, "Room", format!("Room {f}{r:02}"))
                        .property("capacity", 4 * r)
                        .property("bookable", r != 1),
                );
                batch.link(&floor_id, "hasRoom", &room_id);
                batch.link(&hvac_id, "serves", &room_id);

                for (key, class, unit, baseline, spread) in SENSORS {
                    sensor_index += 1;
                    let sensor_id = format!("{room_id}-{key}");
                    batch.twin(
                        TwinRecord::new(&sensor_id, *class, format!("Room {f}{r:02} {key}"))
                            .property("unit", *unit)
                            .property("value", reading(*baseline, *spread, sensor_index).max(0.0))
                            .property("observedAt", timestamp(sensor_index as i64 * 5)),
                    );
                    batch.link(&room_id, "hasSensor", &sensor_id);
                }
            }
        }

        batch
    }
}
