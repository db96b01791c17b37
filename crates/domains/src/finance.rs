//! Finance: institutions, portfolios and the instruments they hold

use crate::synth::{reading, round2, slug};
use crate::DomainSeeder;
use shared::{Relationship, SeedBatch, TwinRecord};

const INSTITUTIONS: &[(&str, &str)] = &[
    ("Harbor Trust Bank", "US"),
    ("Nordic Capital Partners", "SE"),
];

/// (ticker, name, type, sector, price)
const INSTRUMENTS: &[(&str, &str, &str, &str, f64)] = &[
    ("ACME", "Acme Industries", "Equity", "industrials", 142.10),
    ("GLBX", "Globex Energy", "Equity", "energy", 88.45),
    ("INIT", "Initech Software", "Equity", "technology", 311.70),
    ("UST10", "US Treasury 10Y", "Bond", "government", 97.25),
    ("EUCORP5", "EU Corporate 5Y", "Bond", "corporate", 101.80),
    ("GOLDX", "Gold Tracker", "Etf", "commodities", 54.30),
];

const PORTFOLIOS: &[&str] = &["Growth", "Income", "Balanced"];

pub struct Finance;

pub fn instrument_id(ticker: &str) -> String {
    format!("instrument-{}", ticker.to_ascii_lowercase())
}

impl DomainSeeder for Finance {
    fn name(&self) -> &'static str {
        "finance"
    }

    fn description(&self) -> &'static str {
        "Institutions, portfolios and held instruments"
    }

    fn build(&self) -> SeedBatch {
        let mut batch = SeedBatch::new();

        for (i, (ticker, name, kind, sector, price)) in INSTRUMENTS.iter().enumerate() {
            let mut record = TwinRecord::new(instrument_id(ticker), *kind, *name)
                .property("ticker", *ticker)
                .property("sector", *sector)
                .property("price", *price)
                .property("currency", "USD")
                .property("volatility30d", reading(0.22, 0.08, i));
            if *kind == "Bond" {
                record = record
                    .property("couponPct", round2(3.5 + i as f64 * 0.25))
                    .property("rating", if i % 2 == 0 { "AA" } else { "A" });
            }
            batch.twin(record);
        }

        let mut position = 0;
        for (n, (institution, country)) in INSTITUTIONS.iter().enumerate() {
            let institution_id = format!("institution-{}", slug(institution));
            batch.twin(
                TwinRecord::new(&institution_id, "FinancialInstitution", *institution)
                    .property("country", *country)
                    .property("tier1CapitalRatio", reading(14.0, 1.5, n)),
            );

            for (p, portfolio) in PORTFOLIOS.iter().enumerate() {
                let portfolio_id = format!("{institution_id}-{}", slug(portfolio));
                let holdings: Vec<_> = INSTRUMENTS
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (i + p + n) % 2 == 0)
                    .map(|(_, instrument)| instrument)
                    .collect();

                batch.twin(
                    TwinRecord::new(&portfolio_id, "Portfolio", format!("{institution} {portfolio}"))
                        .property("strategy", portfolio.to_ascii_lowercase())
                        .property("aumMillions", round2(250.0 + 175.0 * (p + n) as f64))
                        .property("holdingCount", holdings.len()),
                );
                batch.link(&institution_id, "manages", &portfolio_id);

                let weight = round2(1.0 / holdings.len().max(1) as f64);
                for (ticker, ..) in holdings {
                    position += 1;
                    batch.relationship(
                        Relationship::new(&portfolio_id, "holds", instrument_id(ticker))
                            .property("weight", weight)
                            .property("quantity", 100 * position),
                    );
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
    fn test_holdings_reference_known_instruments() {
        let batch = Finance.build();
        let ids = batch.twin_ids();

        for rel in batch.relationships.iter().filter(|r| r.relation == "holds") {
            assert!(ids.contains(rel.target.as_str()), "{} missing", rel.target);
        }
    }

    #[test]
    fn test_bonds_have_coupon() {
        let batch = Finance.build();
        for twin in batch.twins.iter().filter(|t| t.twin_type == "Bond") {
            assert!(twin.properties.get("couponPct").is_some());
        }
    }
}
