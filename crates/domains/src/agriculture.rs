//! Agriculture: farms, fields, soil sensors and machinery

use crate::synth::{location, reading, slug, stepped, timestamp};
use crate::DomainSeeder;
use shared::{SeedBatch, TwinRecord};

const FARMS: &[(&str, &str, f64, f64)] = &[
    ("Green Valley", "Iowa", 41.88, -93.10),
    ("Sunrise Orchards", "Washington", 47.42, -120.31),
    ("Prairie Wind", "Kansas", 38.50, -98.77),
];

const CROPS: &[&str] = &["corn", "soybean", "wheat", "apple"];
const FIELDS_PER_FARM: usize = 4;

pub struct Agriculture;

impl DomainSeeder for Agriculture {
    fn name(&self) -> &'static str {
        "agriculture"
    }

    fn description(&self) -> &'static str {
        "Farms with fields, soil sensors and tractors"
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new();
        let mut sensor_index = 0;

        for (f, (name, state, lat, lon)) in FARMS.iter().enumerate() {
            let farm_id = format!("farm-{}", slug(name));
            batch.twin(
                TwinRecord::new(&farm_id, "Farm", *name)
                    .property("state", *state)
                    .property("location", location(*lat, *lon))
                    .property("areaHectares", stepped(120.0, 480.0, f, 2)),
            );

            let tractor_id = format!("{farm_id}-tractor");
            batch.twin(
                TwinRecord::new(&tractor_id, "Tractor", format!("{name} Tractor"))
                    .property("model", "AgriMax 7R")
                    .property("engineHours", 1200 + 340 * f)
                    .property("fuelPct", reading(70.0, 20.0, f)),
            );
            batch.link(&farm_id, "hasEquipment", &tractor_id);

            for k in 1..=FIELDS_PER_FARM {
                let field_id = format!("{farm_id}-field-{k}");
                let crop = CROPS[(f + k) % CROPS.len()];
                batch.twin(
                    TwinRecord::new(&field_id, "Field", format!("{name} Field {k}"))
                        .property("crop", crop)
                        .property("areaHectares", stepped(15.0, 60.0, k, FIELDS_PER_FARM))
                        .property("irrigated", k % 2 == 0)
                        .property("plantedOn", crate::synth::date(90 + (k as i64) * 3)),
                );
                batch.link(&farm_id, "hasField", &field_id);
                batch.link(&tractor_id, "operatesOn", &field_id);

                for depth in [10, 30] {
                    sensor_index += 1;
                    let sensor_id = format!("{field_id}-soil-{depth}cm");
                    batch.twin(
                        TwinRecord::new(&sensor_id, "SoilMoistureSensor", format!("Soil sensor {depth}cm"))
                            .property("depthCm", depth)
                            .property("moisturePct", reading(32.0, 8.0, sensor_index))
                            .property("temperatureC", reading(16.0, 4.0, sensor_index))
                            .property("lastReading", timestamp(sensor_index as i64 * 15)),
                    );
                    batch.link(&field_id, "hasSensor", &sensor_id);
                }
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let batch = Agriculture.build();
        let fields = batch.twins.iter().filter(|t| t.twin_type == "Field").count();
        let sensors = batch
            .twins
            .iter()
            .filter(|t| t.twin_type == "SoilMoistureSensor")
            .count();

        assert_eq!(fields, FARMS.len() * FIELDS_PER_FARM);
        assert_eq!(sensors, fields * 2);
    }

    #[test]
    fn test_field_ids_scoped_by_farm() {
        let batch = Agriculture.build();
        assert!(batch.twins.iter().any(|t| t.id == "farm-green-valley-field-1"));
        assert!(batch.twins.iter().any(|t| t.id == "farm-prairie-wind-field-4-soil-30cm"));
    }
}
