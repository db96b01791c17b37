//! Manufacturing: a plant with production lines and machines

use crate::synth::{reading, stepped, timestamp};
use crate::DomainSeeder;
use shared::{Relationship, SeedBatch, TwinRecord};

const PLANT_ID: &str = "plant-detroit";
const LINES: &[&str] = &["Body Shop", "Paint Shop", "Final Assembly"];

/// Machine stations on every line, in flow order
const STATIONS: &[(&str, &str)] = &[
    ("cnc", "CncMachine"),
    ("robot", "IndustrialRobot"),
    ("conveyor", "Conveyor"),
    ("inspection", "VisionInspectionStation"),
];

pub struct Manufacturing;

impl DomainSeeder for Manufacturing {
    fn name(&self) -> &'static str {
        "manufacturing"
    }

    fn description(&self) -> &'static str {
        "Automotive plant with lines and machine stations"
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new();

        batch.twin(
            TwinRecord::new(PLANT_ID, "ManufacturingPlant", "Detroit Assembly Plant")
                .property("shifts", 3)
                .property("employees", 2150)
                .property("commissioned", "1998-06-01"),
        );

        for (l, line) in LINES.iter().enumerate() {
            let line_id = format!("{PLANT_ID}-line-{}", l + 1);
            batch.twin(
                TwinRecord::new(&line_id, "ProductionLine", *line)
                    .property("taktTimeSec", 55 + 5 * l)
                    .property("targetUnitsPerShift", 480 - 40 * l),
            );
            batch.link(PLANT_ID, "hasLine", &line_id);

            let mut previous: Option<String> = None;
            for (s, (key, machine_type)) in STATIONS.iter().enumerate() {
                let index = l * STATIONS.len() + s;
                let machine_id = format!("{line_id}-{key}");
                let availability = reading(0.93, 0.04, index);
                let performance = reading(0.90, 0.05, index + 1);
                let quality = reading(0.98, 0.01, index + 2);
                batch.twin(
                    TwinRecord::new(&machine_id, *machine_type, format!("{line} {key}"))
                        .property("availability", availability)
                        .property("performance", performance)
                        .property("quality", quality)
                        .property("oee", crate::synth::round2(availability * performance * quality))
                        .property("spindleTempC", stepped(38.0, 72.0, index, 6))
                        .property("lastMaintenance", timestamp(-(index as i64) * 720)),
                );
                batch.link(&line_id, "hasMachine", &machine_id);

                if let Some(prev) = previous.replace(machine_id.clone()) {
                    batch.relationship(
                        Relationship::new(prev, "feeds", &machine_id).property("bufferCapacity", 4 + s),
                    );
                }
            }
        }

        batch
    }
}
