//! Logistics: warehouses, delivery vehicles and shipments in transit

use crate::synth::{location, reading, slug, timestamp};
use crate::DomainSeeder;
use shared::{Relationship, SeedBatch, TwinRecord};

const WAREHOUSES: &[(&str, f64, f64)] = &[
    ("Memphis Hub", 35.04, -89.98),
    ("Louisville Hub", 38.17, -85.74),
    ("Reno Depot", 39.53, -119.81),
];

const VEHICLES: usize = 6;
const SHIPMENTS: usize = 10;

pub struct Logistics;

impl DomainSeeder for Logistics {
    fn name(&self) -> &'static str {
        "logistics"
    }

    fn description(&self) -> &'static str {
        "Warehouses, delivery trucks and shipments"
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new();
        let warehouse_ids: Vec<String> = WAREHOUSES
            .iter()
            .map(|(name, ..)| format!("warehouse-{}", slug(name)))
            .collect();

        for (i, (name, lat, lon)) in WAREHOUSES.iter().enumerate() {
            batch.twin(
                TwinRecord::new(&warehouse_ids[i], "Warehouse", *name)
                    .property("location", location(*lat, *lon))
                    .property("dockDoors", 24 + 8 * i)
                    .property("utilizationPct", reading(71.0, 12.0, i)),
            );
        }

        for v in 1..=VEHICLES {
            let vehicle_id = format!("truck-{v:03}");
            let home = &warehouse_ids[v % warehouse_ids.len()];
            batch.twin(
                TwinRecord::new(&vehicle_id, "DeliveryTruck", format!("Truck {v:03}"))
                    .property("payloadKg", 12_000)
                    .property("fuelPct", reading(60.0, 30.0, v))
                    .property("odometerKm", 85_000 + 4_250 * v),
            );
            batch.link(&vehicle_id, "basedAt", home);
        }

        for s in 1..=SHIPMENTS {
            let shipment_id = format!("shipment-{s:05}");
            let origin = &warehouse_ids[s % warehouse_ids.len()];
            let destination = &warehouse_ids[(s + 1) % warehouse_ids.len()];
            let vehicle_id = format!("truck-{:03}", (s - 1) % VEHICLES + 1);
            batch.twin(
                TwinRecord::new(&shipment_id, "Shipment", format!("Shipment {s:05}"))
                    .property("weightKg", reading(850.0, 400.0, s))
                    .property("pallets", 1 + s % 6)
                    .property("status", if s % 4 == 0 { "delivered" } else { "in_transit" })
                    .property("dispatchedAt", timestamp(s as i64 * 95)),
            );
            batch.link(&shipment_id, "originatesFrom", origin);
            batch.link(&shipment_id, "destinedFor", destination);
            batch.relationship(
                Relationship::new(&shipment_id, "assignedTo", vehicle_id).property("sequence", s),
            );
        }

        batch
    }
}
