//! Shared fixtures for the scan-strategy tests: the `Jet` record type and
//! a deterministic five-row result set over the columns
//! `id,pilot_id,airport_id,name,color,uuid,identifier,cargo,manifest`.

#![allow(dead_code)]

use rowcast::stub::StubExecutor;
use rowcast::{column_cell, field_walk, table, Column, Record, ScanTargets, Value};

table! {
    pub struct Jets => "jets";
}

column_cell! {
    pub struct JetId(i64): column = "id", primary_key = true, table = Jets;
    pub struct JetPilotId(i64): column = "pilot_id", primary_key = false, table = Jets;
    pub struct JetAirportId(i64): column = "airport_id", primary_key = false, table = Jets;
    pub struct JetName(String): column = "name", primary_key = false, table = Jets;
    pub struct JetColor(Option<String>): column = "color", primary_key = false, table = Jets;
    pub struct JetUuid(String): column = "uuid", primary_key = false, table = Jets;
    pub struct JetIdentifier(String): column = "identifier", primary_key = false, table = Jets;
    pub struct JetCargo(Vec<u8>): column = "cargo", primary_key = false, table = Jets;
    pub struct JetManifest(Vec<u8>): column = "manifest", primary_key = false, table = Jets;
}

/// One row of the `jets` result set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Jet {
    pub id: JetId,
    pub pilot_id: JetPilotId,
    pub airport_id: JetAirportId,
    pub name: JetName,
    pub color: JetColor,
    pub uuid: JetUuid,
    pub identifier: JetIdentifier,
    pub cargo: JetCargo,
    pub manifest: JetManifest,
}

impl Record for Jet {
    fn column_names(&self) -> &'static str {
        "id,pilot_id,airport_id,name,color,uuid,identifier,cargo,manifest"
    }

    fn scan_targets(&mut self) -> ScanTargets<'_> {
        let Jet {
            id,
            pilot_id,
            airport_id,
            name,
            color,
            uuid,
            identifier,
            cargo,
            manifest,
        } = self;
        let mut targets = ScanTargets::new();
        targets.push(id.scan_target());
        targets.push(pilot_id.scan_target());
        targets.push(airport_id.scan_target());
        targets.push(name.scan_target());
        targets.push(color.scan_target());
        targets.push(uuid.scan_target());
        targets.push(identifier.scan_target());
        targets.push(cargo.scan_target());
        targets.push(manifest.scan_target());
        targets
    }
}

field_walk!(Jet {
    id,
    pilot_id,
    airport_id,
    name,
    color,
    uuid,
    identifier,
    cargo,
    manifest,
});

/// The color cycle used by [`jet_rows`]: every third jet has no color.
fn color_for(i: i64) -> Option<String> {
    match i % 3 {
        0 => None,
        1 => Some("black".to_string()),
        _ => Some("silver".to_string()),
    }
}

/// Five deterministic jet rows, in result-set column order.
pub fn jet_rows() -> Vec<Vec<Value>> {
    (1..=5)
        .map(|i: i64| {
            vec![
                Value::Int(i),
                Value::Int(10 + i),
                Value::Int(100 + i),
                Value::from(format!("jet-{i}")),
                Value::from(color_for(i)),
                Value::from(format!("c6f2e1d0-0000-0000-0000-00000000000{i}")),
                Value::from(format!("JX-{i:03}")),
                Value::Blob(vec![0x10, i as u8]),
                Value::Blob(vec![0x20, i as u8, i as u8]),
            ]
        })
        .collect()
}

/// A stub executor replaying the five-row jet result set.
pub fn jet_fleet() -> StubExecutor {
    StubExecutor::with_rows(jet_rows())
}
