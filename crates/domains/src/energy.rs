//! Energy: a regional grid, its substations and generation assets
//!
//! Substations and generators are linked in both directions: the generator
//! `powerSupply`s the substation and the substation `dependsOn` the
//! generator. Both edges are submitted explicitly.

use crate::synth::{location, reading, stepped};
use crate::DomainSeeder;
use shared::{Relationship, SeedBatch, TwinRecord};

pub const GRID_ID: &str = "grid-northeast";
pub const SUBSTATIONS: usize = 4;

/// (kind, twin type, nameplate MW)
const GENERATORS: &[(&str, &str, f64)] = &[
    ("solar", "SolarFarm", 120.0),
    ("wind", "WindFarm", 200.0),
    ("gas", "GasTurbine", 450.0),
];

pub struct Energy;

pub fn substation_id(n: usize) -> String {
    format!("substation-{n:02}")
}

impl DomainSeeder for Energy {
    fn name(&self) -> &'static str {
        "energy"
    }

    fn description(&self) -> &'static str {
        "Power grid with substations and generators"
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new();

        batch.twin(
            TwinRecord::new(GRID_ID, "PowerGrid", "Northeast Regional Grid")
                .property("nominalFrequencyHz", 60.0)
                .property("operator", "NE Grid Operator"),
        );

        for n in 1..=SUBSTATIONS {
            let sub_id = substation_id(n);
            batch.twin(
                TwinRecord::new(&sub_id, "Substation", format!("Substation {n:02}"))
                    .property("voltageKv", if n % 2 == 0 { 345 } else { 138 })
                    .property("loadMw", reading(180.0, 40.0, n))
                    .property("location", location(42.0 + n as f64 * 0.3, -72.5 + n as f64 * 0.4)),
            );
            batch.link(GRID_ID, "hasSubstation", &sub_id);
            if n > 1 {
                batch.link(substation_id(n - 1), "interconnects", &sub_id);
            }

            let (kind, twin_type, nameplate) = GENERATORS[(n - 1) % GENERATORS.len()];
            let gen_id = format!("generator-{kind}-{n:02}");
            let output = stepped(nameplate * 0.2, nameplate * 0.9, n, 5);
            batch.twin(
                TwinRecord::new(&gen_id, twin_type, format!("{twin_type} {n:02}"))
                    .property("nameplateMw", nameplate)
                    .property("outputMw", output)
                    .property("capacityFactor", crate::synth::round2(output / nameplate))
                    .property("renewable", kind != "gas"),
            );
            batch.relationship(
                Relationship::new(&gen_id, "powerSupply", &sub_id).property("capacityMw", nameplate),
            );
            batch.link(&sub_id, "dependsOn", &gen_id);
        }

        batch
    }
}
